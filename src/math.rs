//! Float helpers routed through `num_traits::Float` so the geometry builds
//! without `std` (the `libm` backend supplies the transcendental functions).

use num_traits::Float;

#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    Float::sqrt(x)
}

/// Round half away from zero.
#[inline]
pub(crate) fn round(x: f64) -> f64 {
    Float::round(x)
}

#[inline]
pub(crate) fn floor(x: f64) -> f64 {
    Float::floor(x)
}

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    Float::abs(x)
}

#[inline]
pub(crate) fn log10(x: f64) -> f64 {
    Float::log10(x)
}

#[inline]
pub(crate) fn powi(x: f64, n: i32) -> f64 {
    Float::powi(x, n)
}

/// `sqrt(3)`, the ratio between row separation and apothem of a regular hexagon.
pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;
