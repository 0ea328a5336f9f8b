//! # sandops-database
//!
//! PostgreSQL access for the Sandwich Ops platform: connection pool
//! management, the migration runner, and read repositories over the
//! collection, host, and project tables.

pub mod connection;
pub mod migration;
pub mod repositories;
