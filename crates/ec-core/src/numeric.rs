use crate::{EcError, EcResult};

/// Floating point type used for every demand, area and angle
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> EcResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EcError::NonFinite { what, value: v })
    }
}

pub fn ensure_non_negative(v: Real, what: &'static str) -> EcResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        Err(EcError::Negative { what, value: v })
    } else {
        Ok(v)
    }
}

/// Lenient coercion: missing or non-finite values count as zero.
#[inline]
pub fn finite_or_zero(v: Real) -> Real {
    if v.is_finite() { v } else { 0.0 }
}

/// Same as [`finite_or_zero`] for optional inputs.
#[inline]
pub fn opt_or_zero(v: Option<Real>) -> Real {
    v.map(finite_or_zero).unwrap_or(0.0)
}

/// Guarded division: a zero or non-finite denominator yields 0, never NaN/inf.
#[inline]
pub fn safe_div(num: Real, den: Real) -> Real {
    if den == 0.0 || !den.is_finite() {
        return 0.0;
    }
    finite_or_zero(num / den)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(v: Real, decimals: u32) -> Real {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: Real) -> Real {
    let n = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if n >= 360.0 { 0.0 } else { n }
}
