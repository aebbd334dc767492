//! Area-weighted aggregation of one energy-use category.

use ec_core::{Energy, finite_or_zero, kwh, round_to, safe_div};
use serde::{Deserialize, Serialize};

use crate::enclosure::EnclosureResult;

/// Energy-use category reported per building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Heating,
    Cooling,
    Lighting,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Heating, Category::Cooling, Category::Lighting];

    pub fn label(self) -> &'static str {
        match self {
            Self::Heating => "Calefacción",
            Self::Cooling => "Refrigeración",
            Self::Lighting => "Iluminación",
        }
    }

    /// As-designed demand, kWh/m²·yr.
    pub fn actual(self, e: &EnclosureResult) -> f64 {
        match self {
            Self::Heating => e.heating_demand,
            Self::Cooling => e.cooling_demand,
            Self::Lighting => e.lighting_demand,
        }
    }

    /// Base-case demand, kWh/m²·yr.
    pub fn baseline(self, e: &EnclosureResult) -> f64 {
        match self {
            Self::Heating => e.base_heating_demand,
            Self::Cooling => e.base_cooling_demand,
            Self::Lighting => e.base_lighting_demand,
        }
    }

    pub fn aggregate(self, enclosures: &[EnclosureResult]) -> CategoryIndicator {
        aggregate_category(enclosures, |e| self.actual(e), |e| self.baseline(e))
    }
}

/// Building-wide figures for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryIndicator {
    /// Area-weighted mean demand, kWh/m²·yr
    pub per_area_annual: f64,
    /// Σ demand·area, kWh/yr
    pub annual_total: f64,
    /// Σ base demand·area, kWh/yr
    pub baseline_annual_total: f64,
    /// Reduction against the base case, e.g. `"3.8%"`
    pub percent_vs_baseline: String,
}

impl Default for CategoryIndicator {
    fn default() -> Self {
        Self::from_totals(0.0, 0.0, 0.0)
    }
}

impl CategoryIndicator {
    pub fn from_totals(annual_total: f64, baseline_annual_total: f64, total_area: f64) -> Self {
        Self {
            per_area_annual: safe_div(annual_total, total_area),
            annual_total,
            baseline_annual_total,
            percent_vs_baseline: percent_vs_baseline(annual_total, baseline_annual_total),
        }
    }

    pub fn annual_energy(&self) -> Energy {
        kwh(self.annual_total)
    }

    pub fn baseline_energy(&self) -> Energy {
        kwh(self.baseline_annual_total)
    }

    /// Unrounded reduction in percent, `None` when there is no baseline.
    pub fn reduction_pct(&self) -> Option<f64> {
        reduction_vs_baseline(self.annual_total, self.baseline_annual_total)
    }
}

/// Aggregate one category given selectors for the as-designed and base-case
/// per-m² demand. Missing data never fails; it only skews totals.
pub fn aggregate_category<A, B>(
    enclosures: &[EnclosureResult],
    actual: A,
    base: B,
) -> CategoryIndicator
where
    A: Fn(&EnclosureResult) -> f64,
    B: Fn(&EnclosureResult) -> f64,
{
    let mut annual_total = 0.0;
    let mut baseline_annual_total = 0.0;
    let mut total_area = 0.0;

    for e in enclosures {
        let area = e.area();
        annual_total += finite_or_zero(actual(e)) * area;
        baseline_annual_total += finite_or_zero(base(e)) * area;
        total_area += area;
    }

    CategoryIndicator::from_totals(annual_total, baseline_annual_total, total_area)
}

/// `(1 - actual / baseline) * 100`, or `None` without a usable baseline.
pub fn reduction_vs_baseline(actual_total: f64, baseline_total: f64) -> Option<f64> {
    if baseline_total == 0.0 || !baseline_total.is_finite() {
        return None;
    }
    let pct = (1.0 - actual_total / baseline_total) * 100.0;
    pct.is_finite().then_some(pct)
}

/// Percent reduction with one decimal and a trailing `%`.
///
/// A zero baseline yields `"0%"`, the same string the reports show for
/// "no meaningful comparison".
pub fn percent_vs_baseline(actual_total: f64, baseline_total: f64) -> String {
    match reduction_vs_baseline(actual_total, baseline_total) {
        Some(pct) => {
            // rounding can overflow near f64::MAX
            let rounded = Some(round_to(pct, 1)).filter(|r| r.is_finite()).unwrap_or(pct);
            // avoid "-0.0%"
            let rounded = if rounded == 0.0 { 0.0 } else { rounded };
            format!("{rounded:.1}%")
        }
        None => "0%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(area: f64, heat: f64, base_heat: f64) -> EnclosureResult {
        EnclosureResult {
            id: format!("r{area}"),
            surface_area: area,
            heating_demand: heat,
            base_heating_demand: base_heat,
            ..Default::default()
        }
    }

    #[test]
    fn two_rooms_weighted_by_area() {
        let rooms = [room(50.0, 10.0, 12.0), room(100.0, 20.0, 20.0)];
        let ind = Category::Heating.aggregate(&rooms);

        assert_eq!(ind.annual_total, 2500.0);
        assert_eq!(ind.baseline_annual_total, 2600.0);
        assert!((ind.per_area_annual - 16.666_666).abs() < 1e-4);
        assert_eq!(ind.percent_vs_baseline, "3.8%");
    }

    #[test]
    fn empty_input_is_all_zero() {
        let ind = aggregate_category(&[], |e| e.heating_demand, |e| e.base_heating_demand);
        assert_eq!(ind.per_area_annual, 0.0);
        assert_eq!(ind.annual_total, 0.0);
        assert_eq!(ind.percent_vs_baseline, "0%");
        assert_eq!(ind, CategoryIndicator::default());
    }

    #[test]
    fn zero_area_gives_zero_per_area() {
        let ind = Category::Heating.aggregate(&[room(0.0, 35.0, 40.0)]);
        assert_eq!(ind.per_area_annual, 0.0);
        assert!(ind.per_area_annual.is_finite());
    }

    #[test]
    fn zero_baseline_is_zero_percent() {
        let ind = Category::Heating.aggregate(&[room(20.0, 5.0, 0.0)]);
        assert!(ind.annual_total > 0.0);
        assert_eq!(ind.percent_vs_baseline, "0%");
        assert_eq!(ind.reduction_pct(), None);
    }

    #[test]
    fn worse_than_baseline_is_negative() {
        let ind = Category::Heating.aggregate(&[room(10.0, 15.0, 10.0)]);
        assert_eq!(ind.percent_vs_baseline, "-50.0%");
    }

    #[test]
    fn equal_to_baseline_prints_positive_zero() {
        assert_eq!(percent_vs_baseline(100.0, 100.0), "0.0%");
        assert_eq!(percent_vs_baseline(100.01, 100.0), "0.0%");
    }

    #[test]
    fn non_finite_fields_are_ignored() {
        let rooms = [
            room(f64::NAN, 10.0, 10.0),
            room(10.0, f64::INFINITY, 8.0),
            room(10.0, 4.0, 8.0),
        ];
        let ind = Category::Heating.aggregate(&rooms);
        assert_eq!(ind.annual_total, 40.0);
        assert_eq!(ind.baseline_annual_total, 160.0);
        assert_eq!(ind.per_area_annual, 2.0);
        assert_eq!(ind.percent_vs_baseline, "75.0%");
    }

    #[test]
    fn categories_select_their_fields() {
        let e = EnclosureResult {
            cooling_demand: 3.0,
            base_lighting_demand: 9.0,
            ..Default::default()
        };
        assert_eq!(Category::Cooling.actual(&e), 3.0);
        assert_eq!(Category::Lighting.baseline(&e), 9.0);
        assert_eq!(Category::Heating.actual(&e), 0.0);
    }
}
