//! Claims Query Engine
//!
//! Derives the visible claims list from the full collection:
//!
//! ```text
//! FilterCriteria -> filter -> sort -> paginate -> page of claims
//! ```
//!
//! The engine functions are pure and never mutate their input. A
//! [`QuerySession`] owns the mutable query state (criteria, sort, page,
//! selection) for one user and caches the derived list.

pub mod criteria;
pub mod filter;
pub mod sort;
pub mod pagination;
pub mod selection;
pub mod session;

use std::num::NonZeroUsize;

use crate::claim::Claim;

pub use criteria::{AreaRange, DateRange, FilterCriteria};
pub use pagination::{PageInfo, DEFAULT_PAGE_SIZE, FIRST_PAGE};
pub use selection::SelectionSet;
pub use session::{QuerySession, SessionView};
pub use sort::{SortDirection, SortField, SortState};

/// Stateless filter/sort/paginate operations over claim slices
pub struct ClaimsQueryEngine;

impl ClaimsQueryEngine {
    /// Claims satisfying every active criterion, in input order
    pub fn filter(claims: &[Claim], criteria: &FilterCriteria) -> Vec<Claim> {
        claims.iter().filter(|c| criteria.matches(c)).cloned().collect()
    }

    /// Stable sort on a single field
    pub fn sort(claims: &[Claim], field: SortField, direction: SortDirection) -> Vec<Claim> {
        let mut sorted = claims.to_vec();
        sorted.sort_by(|a, b| direction.apply(field.compare(a, b)));
        sorted
    }

    /// The 1-based page, empty when past the end
    pub fn paginate(claims: &[Claim], page: NonZeroUsize, page_size: NonZeroUsize) -> Vec<Claim> {
        claims[pagination::page_bounds(claims.len(), page, page_size)].to_vec()
    }

    pub fn total_pages(claims: &[Claim], page_size: NonZeroUsize) -> usize {
        pagination::total_pages(claims.len(), page_size)
    }

    /// Filter then sort
    pub fn derive(claims: &[Claim], criteria: &FilterCriteria, sort: SortState) -> Vec<Claim> {
        let mut derived = Self::filter(claims, criteria);
        derived.sort_by(|a, b| sort.direction.apply(sort.field.compare(a, b)));
        derived
    }
}
