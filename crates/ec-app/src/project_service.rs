//! Project loading, saving, validation, and introspection.

use std::path::Path;

use ec_project::{EnclosureRecord, LATEST_VERSION, Project};

use crate::error::{AppError, AppResult};

/// Summary of a project for listing.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub name: String,
    pub enclosure_count: usize,
    pub total_area_m2: f64,
    pub facade_count: usize,
    pub material_count: usize,
    /// Enclosures with at least one empty numeric field
    pub incomplete_enclosures: usize,
}

enum FileKind {
    Yaml,
    Json,
}

fn file_kind(path: &Path) -> AppResult<FileKind> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("yaml") | Some("yml") => Ok(FileKind::Yaml),
        Some("json") => Ok(FileKind::Json),
        _ => Err(AppError::UnsupportedFile {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a project from YAML or JSON.
///
/// A JSON file holding a bare array is read as the backend's calculation
/// payload and wrapped in a project named after the file.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let kind = file_kind(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ProjectFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let project = match kind {
        FileKind::Yaml => ec_project::parse_yaml(&content)?,
        FileKind::Json if content.trim_start().starts_with('[') => {
            let enclosures = ec_project::parse_enclosure_records(&content)?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "backend".to_string());
            tracing::debug!(count = enclosures.len(), "loaded backend enclosure payload");
            from_records(name, enclosures)
        }
        FileKind::Json => ec_project::parse_json(&content)?,
    };

    Ok(project)
}

fn from_records(name: String, enclosures: Vec<EnclosureRecord>) -> Project {
    Project {
        version: LATEST_VERSION,
        name,
        enclosures,
        facades: Vec::new(),
        materials: Vec::new(),
    }
}

/// Save project, format chosen by extension.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    match file_kind(path)? {
        FileKind::Yaml => ec_project::save_yaml(path, project)?,
        FileKind::Json => ec_project::save_json(path, project)?,
    }
    Ok(())
}

/// Validate project structure. A project without enclosures is valid and
/// reports all-zero indicators.
pub fn validate_project(project: &Project) -> AppResult<()> {
    ec_project::validate_project(project)?;
    Ok(())
}

pub fn summarize_project(project: &Project) -> ProjectSummary {
    ProjectSummary {
        name: project.name.clone(),
        enclosure_count: project.enclosures.len(),
        total_area_m2: project
            .enclosure_results()
            .iter()
            .map(|e| e.surface_area)
            .sum(),
        facade_count: project.facades.len(),
        material_count: project.materials.len(),
        incomplete_enclosures: project
            .enclosures
            .iter()
            .filter(|e| e.missing_field_count() > 0)
            .count(),
    }
}
