//! Project validation logic.

use crate::schema::Project;
use ec_indicators::{ParseError, parse_azimuth_range};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid azimuth for facade {facade_id}: {source}")]
    InvalidAzimuth {
        facade_id: String,
        #[source]
        source: ParseError,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Structural checks only. Missing or out-of-range enclosure numbers are
/// expected from the backend; normalization reads them as 0.
pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut enclosure_ids = HashSet::new();
    for enclosure in &project.enclosures {
        if !enclosure.id.is_empty() && !enclosure_ids.insert(&enclosure.id) {
            return Err(ValidationError::DuplicateId {
                id: enclosure.id.clone(),
                context: "enclosures".to_string(),
            });
        }
    }

    let mut facade_ids = HashSet::new();
    for facade in &project.facades {
        if !facade_ids.insert(&facade.id) {
            return Err(ValidationError::DuplicateId {
                id: facade.id.clone(),
                context: "facades".to_string(),
            });
        }
        parse_azimuth_range(&facade.azimuth).map_err(|source| {
            ValidationError::InvalidAzimuth {
                facade_id: facade.id.clone(),
                source,
            }
        })?;
    }

    let mut material_codes = HashSet::new();
    for material in &project.materials {
        if !material_codes.insert(&material.code) {
            return Err(ValidationError::DuplicateId {
                id: material.code.clone(),
                context: "materials".to_string(),
            });
        }
        if !(material.conductivity_w_mk.is_finite() && material.conductivity_w_mk > 0.0) {
            return Err(ValidationError::InvalidValue {
                field: format!("materials[{}].conductivity_w_mk", material.code),
                value: material.conductivity_w_mk.to_string(),
                reason: "must be positive".to_string(),
            });
        }
    }

    Ok(())
}
