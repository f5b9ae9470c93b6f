//! Core Kernel - Foundational types shared by the claims crates
//!
//! This crate provides the fundamental building blocks used across all modules:
//! - Claim and session identifiers
//! - Measured quantities (acres, confidence scores) with exact decimal arithmetic
//! - Geographic coordinates
//! - The kernel error type

pub mod identifiers;
pub mod measures;
pub mod geo;
pub mod error;

pub use identifiers::{ClaimId, SessionId, FRA_PREFIX};
pub use measures::{Acres, Confidence};
pub use geo::Coordinates;
pub use error::CoreError;
