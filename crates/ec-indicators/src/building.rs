//! Whole-building indicator roll-up.

use ec_core::{Mass, finite_or_zero, kg};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryIndicator, aggregate_category, percent_vs_baseline};
use crate::enclosure::EnclosureResult;

/// CO2-equivalent totals, kg CO2-eq/yr.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Summary {
    pub total: f64,
    pub baseline_total: f64,
    pub comparison_to_baseline: String,
}

impl Co2Summary {
    pub fn total_mass(&self) -> Mass {
        kg(self.total)
    }

    pub fn baseline_mass(&self) -> Mass {
        kg(self.baseline_total)
    }
}

/// Full derived report for one project calculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingIndicatorSet {
    pub heating: CategoryIndicator,
    pub cooling: CategoryIndicator,
    pub lighting: CategoryIndicator,
    /// Heating + cooling + lighting
    pub combined: CategoryIndicator,
    pub total_area: f64,
    pub enclosure_count: usize,
    pub disconfort_hours_total: f64,
    pub co2: Co2Summary,
}

impl BuildingIndicatorSet {
    pub fn category(&self, category: Category) -> &CategoryIndicator {
        match category {
            Category::Heating => &self.heating,
            Category::Cooling => &self.cooling,
            Category::Lighting => &self.lighting,
        }
    }
}

pub fn aggregate_building(enclosures: &[EnclosureResult]) -> BuildingIndicatorSet {
    let heating = Category::Heating.aggregate(enclosures);
    let cooling = Category::Cooling.aggregate(enclosures);
    let lighting = Category::Lighting.aggregate(enclosures);
    let combined = aggregate_category(
        enclosures,
        |e| {
            Category::ALL
                .iter()
                .map(|c| finite_or_zero(c.actual(e)))
                .sum::<f64>()
        },
        |e| {
            Category::ALL
                .iter()
                .map(|c| finite_or_zero(c.baseline(e)))
                .sum::<f64>()
        },
    );

    let mut total_area = 0.0;
    let mut disconfort_hours_total = 0.0;
    let mut co2_total = 0.0;
    let mut co2_baseline = 0.0;
    for e in enclosures {
        total_area += e.area();
        disconfort_hours_total += finite_or_zero(e.disconfort_hours_total);
        co2_total += finite_or_zero(e.co2_equivalent_total);
        co2_baseline += finite_or_zero(e.base_co2_equivalent_total);
    }

    BuildingIndicatorSet {
        heating,
        cooling,
        lighting,
        combined,
        total_area,
        enclosure_count: enclosures.len(),
        disconfort_hours_total,
        co2: Co2Summary {
            total: co2_total,
            baseline_total: co2_baseline,
            comparison_to_baseline: percent_vs_baseline(co2_total, co2_baseline),
        },
    }
}
