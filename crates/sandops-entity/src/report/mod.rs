//! Assembled report structures.
//!
//! These are pure projections of the collection/host/project tables as of
//! generation time; none of them have identity or persistence.

pub mod location;
pub mod summary;
pub mod weekly;

pub use location::{LocationReport, LocationStatus, Trend};
pub use summary::CommunityReport;
pub use weekly::WeeklyReport;
