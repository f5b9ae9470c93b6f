//! Headline statistics for the claims header

use chrono::{Days, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;

use core_kernel::Acres;
use crate::claim::{Claim, ClaimStatus};

/// Counts shown above the claims table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimsSummary {
    /// Claims in the catalog
    pub total: usize,
    /// Claims passing the current filter
    pub showing: usize,
    pub selected: usize,
    /// Verified by the FRC or waiting at the SDLC
    pub pending_review: usize,
    /// Approved by the DLC within one day of `as_of`
    pub approved_recently: usize,
    /// Share of rejected claims, rounded to a whole percent
    pub rejection_rate_percent: u32,
    pub by_status: BTreeMap<ClaimStatus, usize>,
    pub total_area: Acres,
}

impl ClaimsSummary {
    pub fn compute(all: &[Claim], showing: usize, selected: usize, as_of: NaiveDate) -> Self {
        let since = as_of.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN);

        let mut by_status: BTreeMap<ClaimStatus, usize> =
            ClaimStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for claim in all {
            *by_status.entry(claim.status).or_default() += 1;
        }

        let rejected = by_status.get(&ClaimStatus::Rejected).copied().unwrap_or(0);

        Self {
            total: all.len(),
            showing,
            selected,
            pending_review: all.iter().filter(|c| c.is_pending_review()).count(),
            approved_recently: all
                .iter()
                .filter(|c| c.status == ClaimStatus::ApprovedByDlc && c.status_date >= since)
                .count(),
            rejection_rate_percent: rounded_percent(rejected, all.len()),
            by_status,
            total_area: all.iter().map(|c| c.area_acres).sum(),
        }
    }
}

fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_percent() {
        assert_eq!(rounded_percent(1, 5), 20);
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(1, 8), 13);
        assert_eq!(rounded_percent(0, 0), 0);
    }
}
