//! Forest Rights Claims Domain
//!
//! This crate models claims filed under the Forest Rights Act and the query
//! engine behind the claims list: filtering, sorting, pagination and
//! multi-select over a read-only claim catalog.
//!
//! # Claim Workflow
//!
//! ```text
//! Filed at Gram Sabha -> Verified by FRC -> Pending at SDLC -> Approved by DLC
//!                  (Rejected from any open stage)
//! ```

pub mod claim;
pub mod document;
pub mod workflow;
pub mod catalog;
pub mod ports;
pub mod query;
pub mod summary;
pub mod error;

pub use claim::{Claim, ClaimCategory, ClaimStatus};
pub use document::{Document, DocumentStatus, DocumentType, QualityTier};
pub use workflow::TimelineEntry;
pub use catalog::ClaimCatalog;
pub use ports::{ClaimSource, InMemorySource};
pub use query::{
    AreaRange, ClaimsQueryEngine, DateRange, FilterCriteria, PageInfo, QuerySession,
    SelectionSet, SessionView, SortDirection, SortField, SortState, DEFAULT_PAGE_SIZE,
};
pub use summary::ClaimsSummary;
pub use error::ClaimError;
