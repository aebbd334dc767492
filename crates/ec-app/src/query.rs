//! Query helpers over a loaded project.

use ec_indicators::{AzimuthRange, EnclosureBreakdown, Orientation, enclosure_breakdown};
use ec_project::{MaterialCache, MaterialDef, Project};

use crate::error::{AppError, AppResult};

/// A facade together with its classified orientation.
#[derive(Debug, Clone)]
pub struct FacadeOrientation {
    pub facade_id: String,
    pub name: String,
    pub range: AzimuthRange,
    pub orientation: Orientation,
}

/// Classify every facade. The first malformed azimuth aborts the query so a
/// facade is never shown with a guessed orientation.
pub fn classify_facades(project: &Project) -> AppResult<Vec<FacadeOrientation>> {
    project
        .facades
        .iter()
        .map(|f| -> AppResult<FacadeOrientation> {
            let range: AzimuthRange = f.azimuth.parse().map_err(|e| {
                AppError::Parse(format!("facade '{}': {}", f.id, e))
            })?;
            Ok(FacadeOrientation {
                facade_id: f.id.clone(),
                name: f.name.clone(),
                range,
                orientation: range.classify(),
            })
        })
        .collect()
}

/// Per-enclosure absolute annual figures.
pub fn enclosure_rows(project: &Project) -> Vec<EnclosureBreakdown> {
    enclosure_breakdown(&project.enclosure_results())
}

/// Resolve material codes through `cache`, falling back to the project.
pub fn lookup_materials(
    project: &Project,
    cache: &mut MaterialCache,
    codes: &[String],
) -> AppResult<Vec<(String, Option<MaterialDef>)>> {
    if codes.is_empty() {
        return Err(AppError::InvalidInput(
            "at least one material code is required".to_string(),
        ));
    }

    let mut found = Vec::with_capacity(codes.len());
    for code in codes {
        let material = cache.get_or_fetch(code, project)?;
        found.push((code.clone(), material));
    }
    Ok(found)
}
