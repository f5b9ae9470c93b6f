//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for claim lists that give
//! more meaningful error messages than standard assertions.

use std::cmp::Ordering;

use domain_claims::{Claim, FilterCriteria, SortDirection, SortField};

/// Identifiers of `claims`, in order
pub fn claim_ids(claims: &[Claim]) -> Vec<String> {
    claims.iter().map(|c| c.id.as_str().to_string()).collect()
}

/// Asserts that `claims` carry exactly the `expected` identifiers, in order
pub fn assert_claim_ids(claims: &[Claim], expected: &[&str]) {
    let actual = claim_ids(claims);
    assert_eq!(
        actual, expected,
        "Claim order mismatch: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that adjacent claims are ordered by `field` in `direction`
///
/// # Panics
///
/// Panics at the first adjacent pair that is out of order.
pub fn assert_sorted_by(claims: &[Claim], field: SortField, direction: SortDirection) {
    for (i, pair) in claims.windows(2).enumerate() {
        let ordering = direction.apply(field.compare(&pair[0], &pair[1]));
        assert_ne!(
            ordering,
            Ordering::Greater,
            "Claims out of {} order by {} at positions {}..{}: {} then {}",
            match direction {
                SortDirection::Ascending => "ascending",
                SortDirection::Descending => "descending",
            },
            field,
            i,
            i + 1,
            pair[0].id,
            pair[1].id
        );
    }
}

/// Asserts that every claim in `claims` satisfies `criteria`
pub fn assert_all_match(claims: &[Claim], criteria: &FilterCriteria) {
    if let Some(stray) = claims.iter().find(|c| !criteria.matches(c)) {
        panic!("Claim {} does not satisfy {:?}", stray.id, criteria);
    }
}

/// Asserts that `subset` is a subset of `superset` by identifier
pub fn assert_subset(subset: &[Claim], superset: &[Claim]) {
    for claim in subset {
        assert!(
            superset.iter().any(|c| c.id == claim.id),
            "Claim {} is not present in the superset",
            claim.id
        );
    }
}

/// Asserts that two lists hold the same claims regardless of order
pub fn assert_same_claims(actual: &[Claim], expected: &[Claim]) {
    let mut a = claim_ids(actual);
    let mut e = claim_ids(expected);
    a.sort();
    e.sort();
    assert_eq!(a, e, "Claim sets differ");
}
