//! # sandops-service
//!
//! Business logic for the Sandwich Ops platform: the reporting pipeline
//! (window calculation, aggregation, classification, narrative, assembly,
//! CSV/PDF rendering) and the weekly submission monitor.

pub mod monitor;
pub mod report;
