//! `ClaimSource` adapters backed by JSON datasets

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use domain_claims::{Claim, ClaimError, ClaimSource};

use crate::error::DatasetError;
use crate::records::parse_claims;

/// The sample register shipped with the crate
const BUNDLED_CLAIMS: &str = include_str!("../data/sample_claims.json");

/// Source reading the bundled sample register
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDataset;

impl BundledDataset {
    /// Raw JSON of the bundled dataset
    pub fn json() -> &'static str {
        BUNDLED_CLAIMS
    }

    pub fn claims(&self) -> Result<Vec<Claim>, DatasetError> {
        parse_claims(BUNDLED_CLAIMS)
    }
}

impl ClaimSource for BundledDataset {
    fn name(&self) -> &str {
        "bundled"
    }

    fn load_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        self.claims()
            .map_err(|err| ClaimError::source_failed(self.name(), err))
    }
}

/// Source reading a JSON array of claim records from disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and converts every record in the file
    pub fn claims(&self) -> Result<Vec<Claim>, DatasetError> {
        let json = fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;
        let claims = parse_claims(&json)?;
        info!(path = %self.path.display(), claims = claims.len(), "Read claim dataset");
        Ok(claims)
    }
}

impl ClaimSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        self.claims()
            .map_err(|err| ClaimError::source_failed(self.name(), err))
    }
}
