//! Multi-select state for bulk actions

use std::collections::BTreeSet;

use core_kernel::ClaimId;
use crate::claim::Claim;

/// Set of selected claim identifiers, iterated in identifier order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<ClaimId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every claim on the page; returns how many were newly selected
    pub fn select_all_on_page(&mut self, page: &[Claim]) -> usize {
        page.iter()
            .filter(|claim| self.ids.insert(claim.id.clone()))
            .count()
    }

    /// Clears the selection
    pub fn deselect_all(&mut self) {
        self.ids.clear();
    }

    /// Adds the id if absent, removes it if present; returns whether it is
    /// selected afterwards
    pub fn toggle(&mut self, id: &ClaimId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn insert(&mut self, id: ClaimId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: &ClaimId) -> bool {
        self.ids.contains(id)
    }

    /// Drops selections that are not in `visible`; returns how many were removed
    pub fn retain_visible(&mut self, visible: &[Claim]) -> usize {
        let before = self.ids.len();
        let keep: BTreeSet<&ClaimId> = visible.iter().map(|c| &c.id).collect();
        self.ids.retain(|id| keep.contains(id));
        before - self.ids.len()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClaimId> {
        self.ids.iter()
    }

    /// True when every claim on the page is selected (header checkbox state)
    pub fn covers(&self, page: &[Claim]) -> bool {
        !page.is_empty() && page.iter().all(|c| self.ids.contains(&c.id))
    }
}

impl FromIterator<ClaimId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ClaimId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
