//! Claim workflow history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ClaimStatus;

/// One step of a claim's status history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub stage: ClaimStatus,
    pub date: NaiveDate,
    /// Officer or role responsible for the step
    pub officer: String,
}

impl TimelineEntry {
    pub fn new(stage: ClaimStatus, date: NaiveDate, officer: impl Into<String>) -> Self {
        Self {
            stage,
            date,
            officer: officer.into(),
        }
    }
}

/// Checks that a timeline is consistent with the claim's current status
///
/// Entries must move forward through the progression (stages may be skipped),
/// dates may not decrease, and no entry may lie past `status`. Only a rejected
/// claim may carry a `REJECTED` entry, and only as its last step.
pub fn validate_timeline(status: ClaimStatus, timeline: &[TimelineEntry]) -> Result<(), String> {
    for pair in timeline.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if !prev.stage.can_transition_to(next.stage) {
            return Err(format!("{} cannot follow {}", next.stage, prev.stage));
        }
        if next.date < prev.date {
            return Err(format!(
                "{} dated {} precedes {} dated {}",
                next.stage, next.date, prev.stage, prev.date
            ));
        }
    }

    let Some(last) = timeline.last() else {
        return Ok(());
    };

    match (status.stage(), last.stage.stage()) {
        (Some(current), Some(reached)) if reached > current => Err(format!(
            "entry {} is past current status {}",
            last.stage, status
        )),
        (Some(_), None) => Err(format!("entry {} on a claim that is {}", last.stage, status)),
        _ => Ok(()),
    }
}

/// Statuses a claim in `status` may move to next
pub fn next_statuses(status: ClaimStatus) -> Vec<ClaimStatus> {
    ClaimStatus::ALL
        .into_iter()
        .filter(|target| status.can_transition_to(*target))
        .collect()
}
