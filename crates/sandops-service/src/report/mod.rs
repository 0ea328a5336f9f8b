//! Report generation.
//!
//! One aggregation core ([`aggregate`]) feeds every report view: the weekly
//! impact report, the typed community report, and their CSV/PDF renderings.

pub mod aggregate;
pub mod classify;
mod fmt;
pub mod generator;
pub mod narrative;
pub mod pdf;
pub mod rows;
pub mod weekly;
pub mod window;

pub use generator::{ReportConfig, ReportFormat, ReportGenerator, ReportType};
pub use weekly::WeeklyReportService;
pub use window::WeekWindow;
