//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! forest rights claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims and dates, including the sample register
//! - `builders`: Builder patterns for test claim construction
//! - `assertions`: Custom assertion helpers for claim lists
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
