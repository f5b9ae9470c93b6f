//! Sorting of the claims list

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicase::UniCase;

use core_kernel::CoreError;
use crate::claim::Claim;

/// Column the claims list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ClaimId,
    ClaimantName,
    Village,
    District,
    State,
    Category,
    Status,
    AreaAcres,
    ConfidenceScore,
    FilingDate,
    StatusDate,
}

impl SortField {
    pub const ALL: [SortField; 11] = [
        SortField::ClaimId,
        SortField::ClaimantName,
        SortField::Village,
        SortField::District,
        SortField::State,
        SortField::Category,
        SortField::Status,
        SortField::AreaAcres,
        SortField::ConfidenceScore,
        SortField::FilingDate,
        SortField::StatusDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::ClaimId => "claim_id",
            SortField::ClaimantName => "claimant_name",
            SortField::Village => "village",
            SortField::District => "district",
            SortField::State => "state",
            SortField::Category => "category",
            SortField::Status => "status",
            SortField::AreaAcres => "area_acres",
            SortField::ConfidenceScore => "confidence_score",
            SortField::FilingDate => "filing_date",
            SortField::StatusDate => "status_date",
        }
    }

    /// Compares two claims on this field, ascending
    ///
    /// Text compares with [`collate`]; quantities and dates numerically.
    /// Category and status compare by declaration order (the workflow order
    /// for status), not by the alphabetical order of their wire codes.
    pub fn compare(&self, a: &Claim, b: &Claim) -> Ordering {
        match self {
            SortField::ClaimId => collate(a.id.as_str(), b.id.as_str()),
            SortField::ClaimantName => collate(&a.claimant_name, &b.claimant_name),
            SortField::Village => collate(&a.village, &b.village),
            SortField::District => collate(&a.district, &b.district),
            SortField::State => collate(&a.state, &b.state),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Status => a.status.cmp(&b.status),
            SortField::AreaAcres => a.area_acres.cmp(&b.area_acres),
            SortField::ConfidenceScore => a.confidence_score.cmp(&b.confidence_score),
            SortField::FilingDate => a.filing_date.cmp(&b.filing_date),
            SortField::StatusDate => a.status_date.cmp(&b.status_date),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::validation(format!("Unknown sort field: {s}")))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orients an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column-header click: flips the direction of the active field, or
    /// switches to a new field in ascending order
    pub fn toggle(&mut self, field: SortField) {
        if field == self.field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

impl Default for SortState {
    /// Most recently filed first
    fn default() -> Self {
        Self {
            field: SortField::FilingDate,
            direction: SortDirection::Descending,
        }
    }
}

/// Locale-style string ordering
///
/// Compares case-folded text first. Strings equal up to case put lowercase
/// first, as browser `localeCompare` does.
pub fn collate(a: &str, b: &str) -> Ordering {
    UniCase::new(a)
        .cmp(&UniCase::new(b))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_ignores_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Banana", "apple"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
        assert_ne!(collate("Same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_collate_lowercase_before_uppercase_on_ties() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Geeta", "geeta"), Ordering::Greater);
        assert_eq!(collate("aB", "Ab"), Ordering::Less);
        assert_eq!(collate("Ab", "b"), Ordering::Less);
    }

    #[test]
    fn test_toggle_same_field_flips() {
        let mut state = SortState::new(SortField::Village, SortDirection::Ascending);
        state.toggle(SortField::Village);
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle(SortField::Village);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_field_resets_to_ascending() {
        let mut state = SortState::default();
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle(SortField::AreaAcres);
        assert_eq!(state, SortState::new(SortField::AreaAcres, SortDirection::Ascending));
    }

    #[test]
    fn test_field_from_str() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
        assert!("tribe".parse::<SortField>().is_err());
    }
}
