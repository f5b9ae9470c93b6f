//! Claim Dataset Infrastructure
//!
//! This crate is the ingestion boundary for claim reference data. Records
//! arrive as JSON in the shape of the field dataset, are validated and
//! converted into domain [`Claim`](domain_claims::Claim)s, and are handed to
//! the domain through the [`ClaimSource`](domain_claims::ClaimSource) port.
//!
//! # Sources
//!
//! - [`BundledDataset`]: the five-claim sample register compiled into the binary
//! - [`JsonFileSource`]: a JSON array of claim records on disk
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_claims::ClaimCatalog;
//! use infra_dataset::BundledDataset;
//!
//! let catalog = ClaimCatalog::load(&BundledDataset)?;
//! ```

pub mod error;
pub mod records;
pub mod sources;

pub use error::DatasetError;
pub use records::{parse_claims, ClaimRecord, DocumentRecord};
pub use sources::{BundledDataset, JsonFileSource};
