//! Claims Domain Ports
//!
//! The claims domain does not know where its reference data comes from. A
//! `ClaimSource` is the port a data-loading adapter implements; the
//! [`ClaimCatalog`](crate::catalog::ClaimCatalog) is built from it once at
//! startup.
//!
//! - **Bundled dataset**: the JSON dataset shipped with `infra_dataset`
//! - **File adapter**: a JSON dataset on disk
//! - **In-memory adapter**: a vector of claims, for tests and embedding

use crate::claim::Claim;
use crate::error::ClaimError;

/// A provider of claim records
pub trait ClaimSource: Send + Sync {
    /// Human-readable name used in logs and errors
    fn name(&self) -> &str;

    /// Loads every claim the source holds
    fn load_claims(&self) -> Result<Vec<Claim>, ClaimError>;
}

/// Source backed by an in-memory vector
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    claims: Vec<Claim>,
}

impl InMemorySource {
    pub fn new(claims: Vec<Claim>) -> Self {
        Self { claims }
    }
}

impl ClaimSource for InMemorySource {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn load_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.claims.clone())
    }
}
