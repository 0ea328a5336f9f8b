//! Sandwich collection records.

pub mod model;

pub use model::SandwichCollection;
