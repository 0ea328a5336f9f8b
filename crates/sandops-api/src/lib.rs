//! # sandops-api
//!
//! HTTP API layer for the Sandwich Ops platform: application state, routes,
//! handlers, DTOs, middleware, and the `AppError` -> HTTP mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
