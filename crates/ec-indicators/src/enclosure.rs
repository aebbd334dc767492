//! Enclosure-level calculation results.

use ec_core::{Energy, annual_energy, finite_or_zero, m2};
use serde::{Deserialize, Serialize};

/// One enclosure (room) of a calculation run.
///
/// Demands are per floor area (kWh/m²·yr); CO2 figures are absolute
/// (kg CO2-eq/yr). Non-finite values count as zero when aggregated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnclosureResult {
    pub id: String,
    /// Floor area in m²
    pub surface_area: f64,
    pub heating_demand: f64,
    pub cooling_demand: f64,
    pub lighting_demand: f64,
    pub base_heating_demand: f64,
    pub base_cooling_demand: f64,
    pub base_lighting_demand: f64,
    /// Hours per year outside the comfort band
    pub disconfort_hours_total: f64,
    pub co2_equivalent_total: f64,
    pub base_co2_equivalent_total: f64,
}

impl EnclosureResult {
    /// Floor area with non-finite values coerced to zero.
    pub fn area(&self) -> f64 {
        finite_or_zero(self.surface_area)
    }

    /// Absolute annual energy of a per-m² intensity over this enclosure.
    pub fn annual(&self, intensity: f64) -> f64 {
        finite_or_zero(intensity) * self.area()
    }

    pub fn annual_energy(&self, intensity: f64) -> Energy {
        annual_energy(finite_or_zero(intensity), m2(self.area()))
    }
}

/// Absolute annual energy per category for a single enclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosureBreakdown {
    pub id: String,
    pub surface_area: f64,
    pub heating_annual: f64,
    pub cooling_annual: f64,
    pub lighting_annual: f64,
    pub disconfort_hours: f64,
    pub co2_equivalent: f64,
}

impl EnclosureBreakdown {
    pub fn total_annual(&self) -> f64 {
        self.heating_annual + self.cooling_annual + self.lighting_annual
    }
}

/// Per-enclosure table rows, in input order.
pub fn enclosure_breakdown(enclosures: &[EnclosureResult]) -> Vec<EnclosureBreakdown> {
    enclosures
        .iter()
        .map(|e| EnclosureBreakdown {
            id: e.id.clone(),
            surface_area: e.area(),
            heating_annual: e.annual(e.heating_demand),
            cooling_annual: e.annual(e.cooling_demand),
            lighting_annual: e.annual(e.lighting_demand),
            disconfort_hours: finite_or_zero(e.disconfort_hours_total),
            co2_equivalent: finite_or_zero(e.co2_equivalent_total),
        })
        .collect()
}
