//! Project schema definitions.

use ec_core::{ensure_non_negative, opt_or_zero};
use ec_indicators::EnclosureResult;
use serde::{Deserialize, Serialize};

use crate::lenient;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub enclosures: Vec<EnclosureRecord>,
    #[serde(default)]
    pub facades: Vec<FacadeDef>,
    #[serde(default)]
    pub materials: Vec<MaterialDef>,
}

impl Project {
    /// Normalized calculation inputs, one per enclosure record.
    pub fn enclosure_results(&self) -> Vec<EnclosureResult> {
        self.enclosures.iter().map(EnclosureRecord::normalize).collect()
    }
}

/// One enclosure row as the calculation backend returns it.
///
/// Field names follow the backend contract. Every numeric field may be
/// absent, null, a number or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnclosureRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "superficie",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub surface_area: Option<f64>,
    #[serde(
        rename = "demanda_calef",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub heating_demand: Option<f64>,
    #[serde(
        rename = "demanda_ref",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cooling_demand: Option<f64>,
    #[serde(
        rename = "demanda_ilum",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub lighting_demand: Option<f64>,
    #[serde(
        rename = "base_demanda_calef",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_heating_demand: Option<f64>,
    #[serde(
        rename = "base_demanda_ref",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_cooling_demand: Option<f64>,
    #[serde(
        rename = "base_demanda_ilum",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_lighting_demand: Option<f64>,
    #[serde(
        rename = "hrs_disconfort_total",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub disconfort_hours_total: Option<f64>,
    #[serde(
        rename = "co2_eq_total",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub co2_equivalent_total: Option<f64>,
    #[serde(
        rename = "base_co2eq_total",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_co2_equivalent_total: Option<f64>,
}

impl EnclosureRecord {
    /// Coerce-and-default: missing or non-finite fields become zero, and so
    /// does a negative floor area.
    pub fn normalize(&self) -> EnclosureResult {
        EnclosureResult {
            id: self.id.clone(),
            surface_area: self.floor_area(),
            heating_demand: opt_or_zero(self.heating_demand),
            cooling_demand: opt_or_zero(self.cooling_demand),
            lighting_demand: opt_or_zero(self.lighting_demand),
            base_heating_demand: opt_or_zero(self.base_heating_demand),
            base_cooling_demand: opt_or_zero(self.base_cooling_demand),
            base_lighting_demand: opt_or_zero(self.base_lighting_demand),
            disconfort_hours_total: opt_or_zero(self.disconfort_hours_total),
            co2_equivalent_total: opt_or_zero(self.co2_equivalent_total),
            base_co2_equivalent_total: opt_or_zero(self.base_co2_equivalent_total),
        }
    }

    fn floor_area(&self) -> f64 {
        let area = opt_or_zero(self.surface_area);
        ensure_non_negative(area, "superficie").unwrap_or_else(|e| {
            tracing::warn!(enclosure = %self.id, error = %e, "floor area read as 0");
            0.0
        })
    }

    /// Number of numeric fields the backend left empty.
    pub fn missing_field_count(&self) -> usize {
        [
            self.surface_area,
            self.heating_demand,
            self.cooling_demand,
            self.lighting_demand,
            self.base_heating_demand,
            self.base_cooling_demand,
            self.base_lighting_demand,
            self.disconfort_hours_total,
            self.co2_equivalent_total,
            self.base_co2_equivalent_total,
        ]
        .iter()
        .filter(|v| v.is_none())
        .count()
    }
}

/// A facade with its regulation azimuth range, e.g. `"-67,5° ≤ Az < -45°"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacadeDef {
    pub id: String,
    pub name: String,
    pub azimuth: String,
}

/// Construction material, looked up by code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialDef {
    pub code: String,
    pub name: String,
    pub conductivity_w_mk: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_kg_m3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_heat_j_kgk: Option<f64>,
}
