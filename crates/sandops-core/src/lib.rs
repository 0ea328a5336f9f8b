//! # sandops-core
//!
//! Core crate for the Sandwich Ops platform. Contains configuration schemas
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other sandops crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
