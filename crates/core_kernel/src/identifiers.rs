//! Strongly-typed identifiers for domain entities
//!
//! Claim identifiers come from the FRA registers and are opaque strings such as
//! `FRA/MP/BTL/2024/001567`. Identifiers generated by this system (query
//! sessions) are newtype wrappers around UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(SessionId, "SES");

/// Register prefix used by FRA claim numbers
pub const FRA_PREFIX: &str = "FRA";

/// Identifier of a forest-rights claim
///
/// Immutable once created. Any non-blank string is accepted; identifiers that
/// follow the `FRA/<STATE>/<DISTRICT>/<YEAR>/<SEQ>` register format expose
/// their segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimId(String);

impl ClaimId {
    /// Creates a claim identifier, rejecting blank values
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::validation("Claim identifier must not be blank"));
        }
        if trimmed.len() != value.len() {
            return Ok(Self(trimmed.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier follows the FRA register format
    pub fn is_register_format(&self) -> bool {
        self.register_segments().is_some()
    }

    /// State code segment, e.g. `MP`
    pub fn state_code(&self) -> Option<&str> {
        self.register_segments().map(|s| s[1])
    }

    /// District code segment, e.g. `BTL`
    pub fn district_code(&self) -> Option<&str> {
        self.register_segments().map(|s| s[2])
    }

    /// Filing year segment
    pub fn year(&self) -> Option<i32> {
        self.register_segments().and_then(|s| s[3].parse().ok())
    }

    fn register_segments(&self) -> Option<[&str; 5]> {
        let mut parts = self.0.split('/');
        let segments = [
            parts.next()?,
            parts.next()?,
            parts.next()?,
            parts.next()?,
            parts.next()?,
        ];
        if parts.next().is_some() || segments[0] != FRA_PREFIX {
            return None;
        }
        let year_ok = segments[3].len() == 4 && segments[3].bytes().all(|b| b.is_ascii_digit());
        let seq_ok = !segments[4].is_empty() && segments[4].bytes().all(|b| b.is_ascii_digit());
        let codes_ok = !segments[1].is_empty() && !segments[2].is_empty();
        (year_ok && seq_ok && codes_ok).then_some(segments)
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClaimId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ClaimId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClaimId> for String {
    fn from(id: ClaimId) -> String {
        id.0
    }
}

impl AsRef<str> for ClaimId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new();
        assert!(id.to_string().starts_with("SES-"));
    }

    #[test]
    fn test_session_id_parsing() {
        let original = SessionId::new();
        let parsed: SessionId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_claim_id_trims_whitespace() {
        let id = ClaimId::new("  FRA/MP/BTL/2024/001567 ").unwrap();
        assert_eq!(id.as_str(), "FRA/MP/BTL/2024/001567");
    }
}
