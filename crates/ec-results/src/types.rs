//! Report data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ReportId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportManifest {
    pub report_id: ReportId,
    pub project_name: String,
    pub timestamp: String,
    pub enclosure_count: usize,
    pub engine_version: String,
}

impl ReportManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(
        report_id: ReportId,
        project_name: impl Into<String>,
        enclosure_count: usize,
        engine_version: impl Into<String>,
    ) -> Self {
        Self {
            report_id,
            project_name: project_name.into(),
            timestamp: Utc::now().to_rfc3339(),
            enclosure_count,
            engine_version: engine_version.into(),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}
