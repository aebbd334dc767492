//! Shared application service layer.
//!
//! Front ends (the CLI today) go through this crate for project loading,
//! report computation and caching, queries and exports.

pub mod error;
pub mod export;
pub mod project_service;
pub mod query;
pub mod report_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use export::{enclosures_csv, indicators_csv};
pub use project_service::{
    ProjectSummary, load_project, save_project, summarize_project, validate_project,
};
pub use query::{FacadeOrientation, classify_facades, enclosure_rows, lookup_materials};
pub use report_service::{
    ENGINE_VERSION, ReportOptions, ReportRequest, ReportResponse, compute_indicators,
    ensure_report, list_reports,
};
