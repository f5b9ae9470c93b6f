//! Per-user query state over the claim catalog

use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::debug;

use core_kernel::ClaimId;
use crate::claim::Claim;
use crate::error::ClaimError;
use super::criteria::FilterCriteria;
use super::pagination::{self, PageInfo, DEFAULT_PAGE_SIZE, FIRST_PAGE};
use super::selection::SelectionSet;
use super::sort::{SortField, SortState};
use super::ClaimsQueryEngine;

/// Owned query state for one claims-list user
///
/// The filtered and sorted list is cached and re-derived whenever the
/// criteria or the sort change. Selections are kept only for claims that
/// pass the current filter: changing the criteria prunes the rest.
#[derive(Debug, Clone)]
pub struct QuerySession {
    claims: Arc<[Claim]>,
    criteria: FilterCriteria,
    sort: SortState,
    page: NonZeroUsize,
    page_size: NonZeroUsize,
    selection: SelectionSet,
    visible: Vec<Claim>,
}

/// Snapshot of a session, as rendered by the claims table and header
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub claims: Vec<Claim>,
    pub page: PageInfo,
    pub sort: SortState,
    pub criteria: FilterCriteria,
    pub active_filters: usize,
    pub total_claims: usize,
    pub selected: Vec<ClaimId>,
}

impl QuerySession {
    pub fn new(claims: Arc<[Claim]>, page_size: NonZeroUsize) -> Self {
        let mut session = Self {
            claims,
            criteria: FilterCriteria::default(),
            sort: SortState::default(),
            page: FIRST_PAGE,
            page_size,
            selection: SelectionSet::new(),
            visible: Vec::new(),
        };
        session.rederive();
        session
    }

    /// Session with the default page size
    pub fn with_default_page_size(claims: Arc<[Claim]>) -> Self {
        Self::new(claims, DEFAULT_PAGE_SIZE)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the criteria, returning to the first page
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = FIRST_PAGE;
        self.rederive();
    }

    /// Edits the criteria in place, returning to the first page
    pub fn update_criteria<F>(&mut self, update: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        update(&mut self.criteria);
        self.page = FIRST_PAGE;
        self.rederive();
    }

    /// Resets every filter to its default
    pub fn clear_filters(&mut self) {
        self.update_criteria(FilterCriteria::clear);
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Column-header click semantics, see [`SortState::toggle`]
    pub fn sort_by(&mut self, field: SortField) {
        self.sort.toggle(field);
        self.rederive();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.rederive();
    }

    pub fn page(&self) -> NonZeroUsize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.visible.len(), self.page_size)
    }

    /// Moves to `page`, clamped to the available pages
    pub fn go_to_page(&mut self, page: usize) -> NonZeroUsize {
        let last = self.total_pages().max(1);
        let clamped = page.clamp(1, last);
        self.page = NonZeroUsize::new(clamped).unwrap_or(FIRST_PAGE);
        self.page
    }

    pub fn next_page(&mut self) -> NonZeroUsize {
        self.go_to_page(self.page.get().saturating_add(1))
    }

    pub fn previous_page(&mut self) -> NonZeroUsize {
        self.go_to_page(self.page.get() - 1)
    }

    /// Claims on the current page
    pub fn current_page(&self) -> &[Claim] {
        &self.visible[pagination::page_bounds(self.visible.len(), self.page, self.page_size)]
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.visible.len(), self.page, self.page_size)
    }

    /// All claims passing the filter, in sort order
    pub fn filtered_claims(&self) -> &[Claim] {
        &self.visible
    }

    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    /// Size of the unfiltered collection
    pub fn total_count(&self) -> usize {
        self.claims.len()
    }

    /// Selects every claim on the current page; returns how many were added
    pub fn select_all_on_page(&mut self) -> usize {
        let bounds = pagination::page_bounds(self.visible.len(), self.page, self.page_size);
        let added = self.selection.select_all_on_page(&self.visible[bounds]);
        debug!(added, selected = self.selection.len(), "Selected page");
        added
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    /// Toggles a claim that passes the current filter
    pub fn toggle_selection(&mut self, id: &ClaimId) -> Result<bool, ClaimError> {
        if !self.selection.contains(id) && !self.visible.iter().any(|c| &c.id == id) {
            return Err(ClaimError::ClaimNotFound(id.clone()));
        }
        Ok(self.selection.toggle(id))
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = &ClaimId> {
        self.selection.iter()
    }

    /// Selected claims, in current sort order
    pub fn selected_claims(&self) -> Vec<&Claim> {
        self.visible
            .iter()
            .filter(|c| self.selection.contains(&c.id))
            .collect()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            claims: self.current_page().to_vec(),
            page: self.page_info(),
            sort: self.sort,
            criteria: self.criteria.clone(),
            active_filters: self.criteria.active_filter_count(),
            total_claims: self.total_count(),
            selected: self.selection.iter().cloned().collect(),
        }
    }

    fn rederive(&mut self) {
        self.visible = ClaimsQueryEngine::derive(&self.claims, &self.criteria, self.sort);
        let pruned = self.selection.retain_visible(&self.visible);
        self.go_to_page(self.page.get());
        debug!(
            visible = self.visible.len(),
            total = self.claims.len(),
            pruned,
            sort = %self.sort.field,
            "Re-derived claims view"
        );
    }
}
