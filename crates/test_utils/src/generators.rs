//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims and filter criteria
//! that respect the domain invariants.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_claims::{
    Claim, ClaimCategory, ClaimStatus, FilterCriteria, QualityTier, SortDirection, SortField,
};

use crate::builders::TestClaimBuilder;
use crate::fixtures::date;

/// Small vocabularies so generated claims collide on filter values
pub const STATES: [&str; 3] = ["Madhya Pradesh", "Tripura", "Odisha"];
pub const DISTRICTS: [&str; 4] = ["Betul", "Seoni", "West Tripura", "Mayurbhanj"];
pub const VILLAGES: [&str; 5] = ["Khermai", "Bargaon", "Pipariya", "Amtali", "Koraput"];
pub const NAMES: [&str; 5] = ["Geeta", "Rameshwar", "Ajay", "Sunita", "Bijay"];

/// Strategy for claim categories
pub fn category_strategy() -> impl Strategy<Value = ClaimCategory> {
    proptest::sample::select(ClaimCategory::ALL.to_vec())
}

/// Strategy for claim statuses
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    proptest::sample::select(ClaimStatus::ALL.to_vec())
}

/// Strategy for quality tiers
pub fn quality_strategy() -> impl Strategy<Value = QualityTier> {
    proptest::sample::select(QualityTier::ALL.to_vec())
}

/// Strategy for sort fields
pub fn sort_field_strategy() -> impl Strategy<Value = SortField> {
    proptest::sample::select(SortField::ALL.to_vec())
}

/// Strategy for sort directions
pub fn sort_direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

/// Strategy for areas between 0 and 150 acres, two decimal places
pub fn area_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=15_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for confidence scores in [0, 1], two decimal places
pub fn confidence_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for dates within 2023-2024
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..730u64).prop_map(|days| date(2023, 1, 1) + Days::new(days))
}

/// Strategy for a single claim with the given identifier
pub fn claim_strategy(id: String) -> impl Strategy<Value = Claim> {
    (
        (0usize..NAMES.len(), 0usize..VILLAGES.len(), 0usize..DISTRICTS.len(), 0usize..STATES.len()),
        category_strategy(),
        status_strategy(),
        area_strategy(),
        confidence_strategy(),
        date_strategy(),
        0u64..200u64,
    )
        .prop_map(move |((name, village, district, state), category, status, area, confidence, filed, elapsed)| {
            TestClaimBuilder::new(id.clone())
                .claimant(NAMES[name])
                .village(VILLAGES[village])
                .district(DISTRICTS[district])
                .state(STATES[state])
                .category(category)
                .status(status)
                .area(area)
                .confidence(confidence)
                .filed_on(filed)
                .status_date(filed + Days::new(elapsed))
                .build()
        })
}

/// Strategy for up to `max` claims with unique identifiers
pub fn claims_strategy(max: usize) -> impl Strategy<Value = Vec<Claim>> {
    (0..=max).prop_flat_map(|len| {
        (0..len)
            .map(|i| claim_strategy(format!("FRA/MP/BTL/2024/{i:06}")))
            .collect::<Vec<_>>()
    })
}

/// Strategy for filter criteria drawing values from the generator vocabularies
pub fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(proptest::sample::select(vec!["", "a", "KHER", "2024/0000", "ee"])),
        prop::option::of(proptest::sample::select(STATES.to_vec())),
        prop::option::of(proptest::sample::select(DISTRICTS.to_vec())),
        prop::option::of(proptest::sample::select(VILLAGES.to_vec())),
        prop::option::of(category_strategy()),
        prop::option::of(status_strategy()),
        (area_strategy(), area_strategy()),
        prop::option::of(quality_strategy()),
    )
        .prop_map(|(search, state, district, village, category, status, (min, max), quality)| {
            FilterCriteria {
                search: search.unwrap_or_default().to_string(),
                state: state.map(str::to_string),
                district: district.map(str::to_string),
                village: village.map(str::to_string),
                category,
                status,
                area_range: domain_claims::AreaRange::new(min, max),
                date_range: Default::default(),
                quality,
            }
        })
}
