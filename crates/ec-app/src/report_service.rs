//! Indicator report computation and caching service.

use std::path::Path;

use ec_indicators::{BuildingIndicatorSet, EnclosureResult, aggregate_building};
use ec_project::Project;
use ec_results::{ReportManifest, ReportStore, compute_report_id};

use crate::error::AppResult;
use crate::project_service;

/// Version stamped into report ids; a new engine invalidates old reports.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for building reports.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub use_cache: bool,
    pub engine_version: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            engine_version: ENGINE_VERSION.to_string(),
        }
    }
}

/// Request to build (or fetch) a report for a project file.
pub struct ReportRequest<'a> {
    pub project_path: &'a Path,
    pub options: ReportOptions,
}

#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub report_id: String,
    pub manifest: ReportManifest,
    pub indicators: BuildingIndicatorSet,
    pub loaded_from_cache: bool,
}

/// Normalize the project's enclosures and aggregate them.
pub fn compute_indicators(project: &Project) -> (Vec<EnclosureResult>, BuildingIndicatorSet) {
    let enclosures = project.enclosure_results();
    for e in enclosures.iter().filter(|e| e.area() <= 0.0) {
        tracing::warn!(
            enclosure = %e.id,
            "enclosure has no floor area; it adds nothing to per-m² figures"
        );
    }
    let indicators = aggregate_building(&enclosures);
    (enclosures, indicators)
}

/// Return the cached report for identical input, or compute and store one.
pub fn ensure_report(request: &ReportRequest<'_>) -> AppResult<ReportResponse> {
    let project = project_service::load_project(request.project_path)?;
    project_service::validate_project(&project)?;

    let (enclosures, indicators) = compute_indicators(&project);
    let report_id = compute_report_id(&enclosures, &request.options.engine_version);
    let store = ReportStore::for_project(request.project_path)?;

    if request.options.use_cache && store.has_report(&report_id) {
        tracing::debug!(%report_id, "report cache hit");
        let manifest = store.load_manifest(&report_id)?;
        let indicators = store.load_indicators(&report_id)?;
        return Ok(ReportResponse {
            report_id,
            manifest,
            indicators,
            loaded_from_cache: true,
        });
    }

    tracing::debug!(%report_id, "report cache miss");
    let manifest = ReportManifest::new(
        report_id.clone(),
        project.name.clone(),
        enclosures.len(),
        request.options.engine_version.clone(),
    );
    store.save_report(&manifest, &indicators)?;
    tracing::info!(%report_id, enclosures = enclosures.len(), "report saved");

    Ok(ReportResponse {
        report_id,
        manifest,
        indicators,
        loaded_from_cache: false,
    })
}

/// Cached reports for the project at `project_path`, newest first.
pub fn list_reports(project_path: &Path) -> AppResult<Vec<ReportManifest>> {
    let project = project_service::load_project(project_path)?;
    let store = ReportStore::for_project(project_path)?;
    Ok(store.list_reports(&project.name)?)
}
