//! Request handlers

pub mod health;
pub mod claims;
pub mod sessions;
