//! Filter criteria for the claims list

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Acres;
use crate::claim::{ClaimCategory, ClaimStatus};
use crate::document::QualityTier;

/// Lower bound of the default area range (the filter panel slider minimum)
pub const DEFAULT_AREA_MIN: Decimal = dec!(0);
/// Upper bound of the default area range (the filter panel slider maximum)
pub const DEFAULT_AREA_MAX: Decimal = dec!(100);

/// Inclusive area range in acres
///
/// An inverted range (`min > max`) is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl AreaRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, area: Acres) -> bool {
        let value = area.value();
        self.min <= value && value <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for AreaRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_AREA_MIN,
            max: DEFAULT_AREA_MAX,
        }
    }
}

/// Inclusive date range; a missing bound is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| from <= date) && self.to.map_or(true, |to| date <= to)
    }
}

/// Query input for the claims list
///
/// Blank text filters and `None` selections impose no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of claim id, claimant name or village
    pub search: String,
    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub category: Option<ClaimCategory>,
    pub status: Option<ClaimStatus>,
    pub area_range: AreaRange,
    /// Applied to the filing date
    pub date_range: DateRange,
    /// Applied to the aggregate confidence score
    pub quality: Option<QualityTier>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_village(mut self, village: impl Into<String>) -> Self {
        self.village = Some(village.into());
        self
    }

    pub fn with_category(mut self, category: ClaimCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_area_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.area_range = AreaRange::new(min, max);
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_range = DateRange::new(from, to);
        self
    }

    pub fn with_quality(mut self, quality: QualityTier) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Resets every field to its default
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Active text filter value, treating blank strings as unset
    pub(crate) fn active(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Number of active non-range filters, as shown on the filter panel badge
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.is_empty(),
            Self::active(&self.state).is_some(),
            Self::active(&self.district).is_some(),
            Self::active(&self.village).is_some(),
            self.category.is_some(),
            self.status.is_some(),
            self.quality.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// True when nothing but the default ranges constrain the result
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
