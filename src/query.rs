//! # Spatial query engine
//!
//! Pure functional queries over an immutable [`MergedCatalog`]. Two modes:
//!
//! - **Radius search** — great-circle angular separation from the center,
//!   computed with the haversine formula, which stays numerically stable
//!   near the poles and at small separations (unlike a chord-length or
//!   flat-plane approximation). Approximates an eyepiece field.
//! - **Rectangular field-of-view search** — a camera-sensor footprint:
//!   the RA half-width is scaled by `cos(dec)` to account for meridian
//!   convergence. This is deliberately a different metric from the radius
//!   mode and the two must not be conflated.
//!
//! In both modes Δra is normalized into `[-180, 180]` first, so objects on
//! the far side of the 0°/360° boundary are measured across it rather than
//! the long way around. Queries are linear scans, O(n) per query, which is
//! adequate at catalog scale (tens of thousands of rows).

use crate::catalog::DsoObject;
use crate::constants::{Degree, RADEG};
use crate::merge::MergedCatalog;

/// Normalize an RA difference into `[-180, 180]` degrees.
///
/// A naive subtraction across the 0°/360° boundary yields a spurious large
/// delta (e.g. 359.3° instead of −0.7°).
fn delta_ra_deg(ra: Degree, ra0: Degree) -> Degree {
    let mut delta = (ra - ra0) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta
}

/// Great-circle angular separation between two sky positions, in degrees.
///
/// Haversine formula:
/// `a = sin²(Δdec/2) + cos(dec1)·cos(dec2)·sin²(Δra/2)`, `sep = 2·asin(√a)`.
pub fn angular_separation_deg(
    ra1: Degree,
    dec1: Degree,
    ra2: Degree,
    dec2: Degree,
) -> Degree {
    let delta_ra = delta_ra_deg(ra2, ra1) * RADEG;
    let delta_dec = (dec2 - dec1) * RADEG;

    let a = (delta_dec / 2.0).sin().powi(2)
        + (dec1 * RADEG).cos() * (dec2 * RADEG).cos() * (delta_ra / 2.0).sin().powi(2);

    2.0 * a.sqrt().min(1.0).asin() / RADEG
}

/// Return all objects within `radius_deg` of `(ra, dec)` by great-circle
/// separation.
pub fn query_radius(
    catalog: &MergedCatalog,
    ra: Degree,
    dec: Degree,
    radius_deg: Degree,
) -> Vec<DsoObject> {
    catalog
        .iter()
        .filter(|obj| angular_separation_deg(ra, dec, obj.ra, obj.dec) <= radius_deg)
        .cloned()
        .collect()
}

/// Return all objects inside a rectangular field of view centered on
/// `(ra, dec)` with the given angular `width` and `height` in degrees.
///
/// Membership test: `|Δra| · cos(dec_obj) ≤ width/2` and
/// `|Δdec| ≤ height/2`.
pub fn query_fov(
    catalog: &MergedCatalog,
    ra: Degree,
    dec: Degree,
    width_deg: Degree,
    height_deg: Degree,
) -> Vec<DsoObject> {
    catalog
        .iter()
        .filter(|obj| {
            let ra_offset = delta_ra_deg(obj.ra, ra).abs() * (obj.dec * RADEG).cos();
            let dec_offset = (obj.dec - dec).abs();
            ra_offset <= width_deg / 2.0 && dec_offset <= height_deg / 2.0
        })
        .cloned()
        .collect()
}
