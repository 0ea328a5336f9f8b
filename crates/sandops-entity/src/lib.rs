//! # sandops-entity
//!
//! Domain entity models for the Sandwich Ops platform: collection records,
//! the host and project directories, and the assembled report structures.

pub mod collection;
pub mod host;
pub mod project;
pub mod report;
