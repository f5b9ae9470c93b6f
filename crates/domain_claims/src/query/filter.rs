//! Filter predicates

use crate::claim::Claim;
use super::criteria::FilterCriteria;

impl FilterCriteria {
    /// True if the claim satisfies every active predicate
    pub fn matches(&self, claim: &Claim) -> bool {
        self.matches_search(claim)
            && exact(Self::active(&self.state), &claim.state)
            && exact(Self::active(&self.district), &claim.district)
            && exact(Self::active(&self.village), &claim.village)
            && self.category.map_or(true, |c| claim.category == c)
            && self.status.map_or(true, |s| claim.status == s)
            && self.area_range.contains(claim.area_acres)
            && self.date_range.contains(claim.filing_date)
            && self.quality.map_or(true, |q| claim.quality_tier() == q)
    }

    fn matches_search(&self, claim: &Claim) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [claim.id.as_str(), claim.claimant_name.as_str(), claim.village.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn exact(filter: Option<&str>, value: &str) -> bool {
    filter.map_or(true, |f| f == value)
}
