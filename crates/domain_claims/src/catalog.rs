//! Validated, immutable claim collection

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use core_kernel::ClaimId;
use crate::claim::Claim;
use crate::error::ClaimError;
use crate::ports::ClaimSource;

/// The full set of claims known to the system
///
/// Every claim has passed [`Claim::validate`] and identifiers are unique.
/// The collection is shared cheaply with query sessions through
/// [`ClaimCatalog::shared`].
#[derive(Debug, Clone)]
pub struct ClaimCatalog {
    claims: Arc<[Claim]>,
    index: HashMap<ClaimId, usize>,
}

impl ClaimCatalog {
    /// Builds a catalog, validating every claim and rejecting duplicates
    pub fn new(claims: Vec<Claim>) -> Result<Self, ClaimError> {
        let mut index = HashMap::with_capacity(claims.len());
        for (position, claim) in claims.iter().enumerate() {
            claim.validate()?;
            if index.insert(claim.id.clone(), position).is_some() {
                return Err(ClaimError::DuplicateClaimId(claim.id.clone()));
            }
        }

        Ok(Self {
            claims: claims.into(),
            index,
        })
    }

    /// Loads and validates every claim from a source
    pub fn load(source: &dyn ClaimSource) -> Result<Self, ClaimError> {
        let claims = source.load_claims()?;
        let catalog = Self::new(claims)?;
        info!(source = source.name(), claims = catalog.len(), "Claim catalog loaded");
        Ok(catalog)
    }

    /// All claims in load order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Shared handle to the claims, for query sessions
    pub fn shared(&self) -> Arc<[Claim]> {
        Arc::clone(&self.claims)
    }

    /// Looks up a claim by identifier
    pub fn get(&self, id: &ClaimId) -> Option<&Claim> {
        self.index.get(id).map(|&i| &self.claims[i])
    }

    /// Looks up a claim, failing with `ClaimNotFound`
    pub fn require(&self, id: &ClaimId) -> Result<&Claim, ClaimError> {
        self.get(id).ok_or_else(|| ClaimError::ClaimNotFound(id.clone()))
    }

    pub fn contains(&self, id: &ClaimId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Distinct values of a text attribute, sorted, for filter drop-downs
    pub fn distinct<F>(&self, attribute: F) -> Vec<String>
    where
        F: Fn(&Claim) -> &str,
    {
        let mut values: Vec<String> = self.claims.iter().map(|c| attribute(c).to_string()).collect();
        values.sort();
        values.dedup();
        values
    }
}
