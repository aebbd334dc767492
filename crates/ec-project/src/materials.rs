//! Material lookup with an explicit, caller-owned cache.
//!
//! Materials are resolved by code from some source (the project file, a
//! remote catalogue). The cache is a plain value the caller owns and passes
//! around, so tests and long-running sessions can reset it whenever needed.

use std::collections::HashMap;

use crate::ProjectResult;
use crate::schema::{MaterialDef, Project};

/// Anything that can resolve a material code.
pub trait MaterialSource {
    /// `Ok(None)` when the code is unknown to this source.
    fn fetch(&self, code: &str) -> ProjectResult<Option<MaterialDef>>;
}

impl MaterialSource for Project {
    fn fetch(&self, code: &str) -> ProjectResult<Option<MaterialDef>> {
        Ok(self.materials.iter().find(|m| m.code == code).cloned())
    }
}

impl<F> MaterialSource for F
where
    F: Fn(&str) -> ProjectResult<Option<MaterialDef>>,
{
    fn fetch(&self, code: &str) -> ProjectResult<Option<MaterialDef>> {
        self(code)
    }
}

/// Memoizing lookup keyed by material code. No eviction; unknown codes are
/// not remembered so a later fetch can still find them.
#[derive(Debug, Default, Clone)]
pub struct MaterialCache {
    entries: HashMap<String, MaterialDef>,
    hits: u64,
    misses: u64,
}

impl MaterialCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_fetch(
        &mut self,
        code: &str,
        source: &dyn MaterialSource,
    ) -> ProjectResult<Option<MaterialDef>> {
        if let Some(found) = self.entries.get(code) {
            self.hits += 1;
            return Ok(Some(found.clone()));
        }

        self.misses += 1;
        tracing::debug!(code, "material cache miss");
        let fetched = source.fetch(code)?;
        if let Some(material) = &fetched {
            self.entries.insert(code.to_string(), material.clone());
        }
        Ok(fetched)
    }

    /// Cached entry without touching the source.
    pub fn peek(&self, code: &str) -> Option<&MaterialDef> {
        self.entries.get(code)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectError;
    use std::cell::Cell;

    fn brick() -> MaterialDef {
        MaterialDef {
            code: "LAD-01".into(),
            name: "Ladrillo hecho a máquina".into(),
            conductivity_w_mk: 0.46,
            density_kg_m3: Some(1000.0),
            specific_heat_j_kgk: Some(840.0),
        }
    }

    #[test]
    fn fetches_each_code_once() {
        let calls = Cell::new(0);
        let source = |code: &str| -> ProjectResult<Option<MaterialDef>> {
            calls.set(calls.get() + 1);
            Ok((code == "LAD-01").then(brick))
        };

        let mut cache = MaterialCache::new();
        assert_eq!(cache.get_or_fetch("LAD-01", &source).unwrap(), Some(brick()));
        assert_eq!(cache.get_or_fetch("LAD-01", &source).unwrap(), Some(brick()));
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn unknown_codes_are_not_cached() {
        let calls = Cell::new(0);
        let source = |_: &str| -> ProjectResult<Option<MaterialDef>> {
            calls.set(calls.get() + 1);
            Ok(None)
        };

        let mut cache = MaterialCache::new();
        assert_eq!(cache.get_or_fetch("X", &source).unwrap(), None);
        assert_eq!(cache.get_or_fetch("X", &source).unwrap(), None);
        assert_eq!(calls.get(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_resets_between_cases() {
        let project = Project {
            version: 1,
            name: "p".into(),
            enclosures: vec![],
            facades: vec![],
            materials: vec![brick()],
        };
        let mut cache = MaterialCache::new();
        cache.get_or_fetch("LAD-01", &project).unwrap();
        assert!(cache.peek("LAD-01").is_some());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn source_errors_propagate() {
        let source = |_: &str| -> ProjectResult<Option<MaterialDef>> {
            Err(ProjectError::MaterialSource {
                message: "catalogue offline".into(),
            })
        };
        let mut cache = MaterialCache::new();
        let err = cache.get_or_fetch("LAD-01", &source).unwrap_err();
        assert!(err.to_string().contains("catalogue offline"));
    }
}
