// ec-core/src/units.rs

use uom::si::f64::{Area as UomArea, Energy as UomEnergy, Mass as UomMass};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Energy = UomEnergy;
pub type Mass = UomMass;

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn kwh(v: f64) -> Energy {
    use uom::si::energy::kilowatt_hour;
    Energy::new::<kilowatt_hour>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn as_kwh(e: Energy) -> f64 {
    use uom::si::energy::kilowatt_hour;
    e.get::<kilowatt_hour>()
}

#[inline]
pub fn as_m2(a: Area) -> f64 {
    use uom::si::area::square_meter;
    a.get::<square_meter>()
}

#[inline]
pub fn as_kg(m: Mass) -> f64 {
    use uom::si::mass::kilogram;
    m.get::<kilogram>()
}

/// Absolute annual energy of a per-area intensity (kWh/m²·yr) over a floor area.
#[inline]
pub fn annual_energy(intensity_kwh_per_m2: f64, area: Area) -> Energy {
    kwh(intensity_kwh_per_m2 * as_m2(area))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _a = m2(50.0);
        let _e = kwh(1_200.0);
        let _m = kg(3.5);
    }

    #[test]
    fn accessors_return_constructed_values() {
        assert!((as_kwh(kwh(12.5)) - 12.5).abs() < 1e-9);
        assert!((as_m2(m2(80.0)) - 80.0).abs() < 1e-9);
        assert!((as_kg(kg(7.0)) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn annual_energy_scales_by_area() {
        let e = annual_energy(10.0, m2(50.0));
        assert!((as_kwh(e) - 500.0).abs() < 1e-6);
    }
}
