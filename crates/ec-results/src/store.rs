//! Report storage API.

use crate::types::ReportManifest;
use crate::{ResultsError, ResultsResult};
use ec_indicators::BuildingIndicatorSet;
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.json";
const INDICATORS_FILE: &str = "indicators.json";

#[derive(Clone)]
pub struct ReportStore {
    root_dir: PathBuf,
}

impl ReportStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store under `.ecbuild/reports` next to the project file.
    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "project path has no parent directory".to_string(),
            })?;
        let reports_dir = project_dir.join(".ecbuild").join("reports");
        Self::new(reports_dir)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn report_dir(&self, report_id: &str) -> PathBuf {
        self.root_dir.join(report_id)
    }

    pub fn has_report(&self, report_id: &str) -> bool {
        let dir = self.report_dir(report_id);
        dir.join(MANIFEST_FILE).exists() && dir.join(INDICATORS_FILE).exists()
    }

    pub fn save_report(
        &self,
        manifest: &ReportManifest,
        indicators: &BuildingIndicatorSet,
    ) -> ResultsResult<()> {
        let report_dir = self.report_dir(&manifest.report_id);
        fs::create_dir_all(&report_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(report_dir.join(MANIFEST_FILE), manifest_json)?;

        let indicators_json = serde_json::to_string_pretty(indicators)?;
        fs::write(report_dir.join(INDICATORS_FILE), indicators_json)?;

        Ok(())
    }

    pub fn load_manifest(&self, report_id: &str) -> ResultsResult<ReportManifest> {
        let path = self.report_dir(report_id).join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ResultsError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_indicators(&self, report_id: &str) -> ResultsResult<BuildingIndicatorSet> {
        let path = self.report_dir(report_id).join(INDICATORS_FILE);
        if !path.exists() {
            return Err(ResultsError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Reports of one project, newest first.
    pub fn list_reports(&self, project_name: &str) -> ResultsResult<Vec<ReportManifest>> {
        let mut reports = Vec::new();

        if !self.root_dir.exists() {
            return Ok(reports);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let report_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&report_id)
                    && manifest.project_name == project_name
                {
                    reports.push(manifest);
                }
            }
        }

        reports.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(reports)
    }

    pub fn delete_report(&self, report_id: &str) -> ResultsResult<()> {
        let report_dir = self.report_dir(report_id);
        if report_dir.exists() {
            fs::remove_dir_all(report_dir)?;
        }
        Ok(())
    }
}
