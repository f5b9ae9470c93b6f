//! Measured quantities with exact decimal arithmetic
//!
//! Claimed land area and OCR/verification confidence are stored as
//! `rust_decimal::Decimal` so that range filters and sorting behave exactly
//! (no NaN, total ordering, no binary rounding at the 0.90 tier boundary).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::error::CoreError;

/// Land area in acres, never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Acres(Decimal);

impl Acres {
    /// Zero acres
    pub const ZERO: Acres = Acres(Decimal::ZERO);

    /// Largest area a single claim may record
    pub const MAX: Acres = Acres(dec!(1000000));

    /// Creates an area, rejecting negative values and values above [`Acres::MAX`]
    pub fn new(value: Decimal) -> Result<Self, CoreError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CoreError::out_of_range("area_acres", value, ">= 0"));
        }
        if value > Self::MAX.0 {
            return Err(CoreError::out_of_range("area_acres", value, "<= 1000000"));
        }
        Ok(Self(value.normalize()))
    }

    /// Creates an area from a float, as found in JSON datasets
    pub fn from_f64(value: f64) -> Result<Self, CoreError> {
        let decimal = Decimal::try_from(value)
            .map_err(|_| CoreError::out_of_range("area_acres", value, "a finite number"))?;
        Self::new(decimal)
    }

    /// Returns the decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Converts to hectares (1 acre = 0.404686 ha), rounded to 4 places
    pub fn to_hectares(&self) -> Decimal {
        (self.0 * dec!(0.404686)).round_dp(4)
    }
}

impl TryFrom<Decimal> for Acres {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Acres> for Decimal {
    fn from(acres: Acres) -> Decimal {
        acres.0
    }
}

/// Saturates at `Decimal::MAX` rather than overflowing
impl Add for Acres {
    type Output = Acres;

    fn add(self, rhs: Acres) -> Acres {
        Acres(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Acres {
    fn sum<I: Iterator<Item = Acres>>(iter: I) -> Acres {
        iter.fold(Acres::ZERO, Add::add)
    }
}

impl fmt::Display for Acres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} acres", self.0)
    }
}

/// Confidence score in the closed interval [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Confidence(Decimal);

impl Confidence {
    pub const ZERO: Confidence = Confidence(Decimal::ZERO);
    pub const ONE: Confidence = Confidence(Decimal::ONE);

    /// Creates a confidence score, rejecting values outside [0, 1]
    pub fn new(value: Decimal) -> Result<Self, CoreError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(CoreError::out_of_range("confidence", value, "0..=1"));
        }
        Ok(Self(value.normalize()))
    }

    /// Creates a confidence score from a float
    pub fn from_f64(value: f64) -> Result<Self, CoreError> {
        let decimal = Decimal::try_from(value)
            .map_err(|_| CoreError::out_of_range("confidence", value, "a finite number"))?;
        Self::new(decimal)
    }

    /// Returns the decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Whole percentage, rounded half away from zero (0.945 -> 95)
    pub fn percent(&self) -> u8 {
        (self.0 * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .unwrap_or(100)
    }
}

impl TryFrom<Decimal> for Confidence {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for Decimal {
    fn from(confidence: Confidence) -> Decimal {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acres_rejects_negative() {
        assert!(Acres::new(dec!(-0.1)).is_err());
        assert!(Acres::new(dec!(0)).is_ok());
    }

    #[test]
    fn test_acres_upper_bound() {
        assert_eq!(Acres::new(dec!(1000000)).unwrap(), Acres::MAX);
        assert!(Acres::new(dec!(1000000.01)).is_err());
        assert!(Acres::new(Decimal::MAX).is_err());
    }

    #[test]
    fn test_acres_add_saturates() {
        let huge = Acres(Decimal::MAX);
        assert_eq!((huge + Acres::MAX).value(), Decimal::MAX);
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(Confidence::new(dec!(1.01)).is_err());
        assert!(Confidence::new(dec!(-0.01)).is_err());
        assert_eq!(Confidence::new(dec!(1)).unwrap(), Confidence::ONE);
    }

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(Confidence::new(dec!(0.945)).unwrap().percent(), 95);
        assert_eq!(Confidence::new(dec!(0.94)).unwrap().percent(), 94);
    }
}
