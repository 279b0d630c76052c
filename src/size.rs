//! # Size normalization
//!
//! Upstream catalogs express object sizes inconsistently: a single diameter
//! (NGC, Barnard, Sharpless), a major/minor axis pair (LBN), one or two radii
//! (VdB), or an area in square degrees (LDN). The canonical table stores a
//! single diameter in arcminutes; the helpers here collapse every published
//! form onto it.
//!
//! When several linear measurements are available the policy is to take the
//! **largest** axis, never the mean, so that sizes stay comparable with the
//! majority of catalogs which report a single dimension.

use crate::constants::{ArcMin, SQ_ARCMIN_PER_SQ_DEG};

/// Default diameter for van den Bergh objects without a measured radius.
pub const VDB_DEFAULT_DIAMETER: ArcMin = 2.0;

/// Keep only finite, strictly positive measurements.
fn largest(values: &[Option<f64>]) -> Option<f64> {
    values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .reduce(f64::max)
}

/// Diameter from one or more radius measurements in arcminutes.
///
/// Returns `2 × max(radii)`, or `None` when no usable measurement is present.
/// The caller decides whether to substitute a catalog-level default.
pub fn diameter_from_radii(radii: &[Option<ArcMin>]) -> Option<ArcMin> {
    largest(radii).map(|r| 2.0 * r)
}

/// Diameter from one or more axis (diameter) measurements in arcminutes.
///
/// Returns the largest axis, or `None` when no usable measurement is present.
pub fn diameter_from_axes(axes: &[Option<ArcMin>]) -> Option<ArcMin> {
    largest(axes)
}

/// Diameter in arcminutes of the circular disc covering `area` square degrees.
///
/// The area is converted to square arcminutes and inverted through
/// `diameter = 2·sqrt(area / π)`. Non-positive or non-finite areas yield `None`.
pub fn diameter_from_area_deg2(area: f64) -> Option<ArcMin> {
    if !area.is_finite() || area <= 0.0 {
        return None;
    }
    let area_arcmin = area * SQ_ARCMIN_PER_SQ_DEG;
    Some(2.0 * (area_arcmin / std::f64::consts::PI).sqrt())
}
