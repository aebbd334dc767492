//! ec-project: project file format, backend records and validation.

pub mod lenient;
pub mod materials;
pub mod schema;
pub mod validate;

pub use materials::{MaterialCache, MaterialSource};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_project};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Material source error: {message}")]
    MaterialSource { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse and validate a YAML project document.
pub fn parse_yaml(content: &str) -> ProjectResult<Project> {
    let project: Project = serde_yaml::from_str(content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Parse and validate a JSON project document.
pub fn parse_json(content: &str) -> ProjectResult<Project> {
    let project: Project = serde_json::from_str(content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Parse the backend's calculation-result payload: a bare JSON array of
/// enclosure records.
pub fn parse_enclosure_records(content: &str) -> ProjectResult<Vec<EnclosureRecord>> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_enclosure_records(path: &std::path::Path) -> ProjectResult<Vec<EnclosureRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_enclosure_records(&content)
}
