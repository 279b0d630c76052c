//! # Epoch precession to J2000
//!
//! Upstream deep-sky catalogs publish equatorial coordinates at three different
//! equinoxes: J2000 (modern compilations), B1950 (LBN) and B1900 (Sharpless).
//! This module rotates unit sky-vectors from the mean equator and equinox of a
//! historical Besselian epoch to the FK5 J2000 frame, using the IAU 1976
//! precession model.
//!
//! The full FK4→FK5 transformation additionally removes the E-terms of
//! aberration and applies an equinox correction; both are sub-arcsecond
//! effects, far below the 0.01° accuracy needed at catalog scale, and are
//! intentionally left out.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Degree, Radian, DPI, RADEG, T1900, T1950, T2000, MJD};

/// Equinox of a published catalog position.
///
/// Determines whether precession is required before a coordinate enters the
/// canonical table. [`Epoch::J2000`] positions pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Epoch {
    J2000,
    B1950,
    B1900,
}

impl Epoch {
    /// Modified Julian Date (TT) of the equinox.
    pub fn mjd(&self) -> MJD {
        match self {
            Epoch::J2000 => T2000,
            Epoch::B1950 => T1950,
            Epoch::B1900 => T1900,
        }
    }
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians (positive = direct/trigonometric sense).
/// * `k`: axis index, `0` → X, `1` → Y, `2` → Z.
///
/// Returns
/// -------
/// * An orthonormal matrix `R` such that the rotated vector is `x' = R · x`.
///
/// Panics
/// ------
/// * If `k > 2`.
fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Compute the precession matrix from the mean equator and equinox of a given epoch to J2000.
///
/// IAU 1976 model (Astronomical Almanac 1987, section B18). The transformation
/// is composed of three rotations, around Z by `−ζ`, around Y by `θ`, around Z
/// by `−z`, where the angles are polynomials in Julian centuries
/// `T = (tjm - T2000) / 36525`:
///
/// ```text
/// ζ(T) = (0.6406161 + 0.0000839·T + 0.0000050·T²) · T  [deg]
/// θ(T) = (0.5567530 - 0.0001185·T - 0.0000116·T²) · T  [deg]
/// z(T) = (0.6406161 + 0.0003041·T + 0.0000051·T²) · T  [deg]
/// ```
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date (TT) of the target mean equinox.
///
/// Returns
/// -------
/// * The matrix `P` such that `x_J2000 = P · x_mean(tjm)`, the direction used
///   for catalog ingestion. Its transpose maps J2000 vectors to the mean
///   equator and equinox of date.
fn prec(tjm: MJD) -> Matrix3<f64> {
    let zed = 0.6406161 * RADEG;
    let zd = 0.6406161 * RADEG;
    let thd = 0.5567530 * RADEG;

    let zedd = 0.0000839 * RADEG;
    let zdd = 0.0003041 * RADEG;
    let thdd = -0.0001185 * RADEG;

    let zeddd = 0.0000050 * RADEG;
    let zddd = 0.0000051 * RADEG;
    let thddd = -0.0000116 * RADEG;

    let t = (tjm - T2000) / 36525.0;

    let zeta = ((zeddd * t + zedd) * t + zed) * t;
    let z = ((zddd * t + zdd) * t + zd) * t;
    let theta = ((thddd * t + thdd) * t + thd) * t;

    let r1 = rotmt(-zeta, 2);
    let r2 = rotmt(theta, 1);
    let r3 = rotmt(-z, 2);

    (r1 * r2) * r3
}

/// Convert an RA/Dec pair in degrees to a unit vector in the same equatorial frame.
fn radec_to_unit_vector(ra: Degree, dec: Degree) -> Vector3<f64> {
    let (ra_rad, dec_rad) = (ra * RADEG, dec * RADEG);
    Vector3::new(
        dec_rad.cos() * ra_rad.cos(),
        dec_rad.cos() * ra_rad.sin(),
        dec_rad.sin(),
    )
}

/// Convert a 3D Cartesian position vector to right ascension and declination in degrees.
///
/// RA is reduced into `[0, 360)` using `atan2` to preserve the quadrant.
/// A zero-norm input yields `(0, 0)`.
fn unit_vector_to_radec(position: Vector3<f64>) -> (Degree, Degree) {
    let norm = position.norm();
    if norm == 0. {
        return (0.0, 0.0);
    }

    let dec = (position.z / norm).asin();
    let ra = position.y.atan2(position.x);
    let ra = if ra < 0.0 { ra + DPI } else { ra };
    (ra / RADEG, dec / RADEG)
}

/// Precess an equatorial position from a declared epoch to J2000.
///
/// Arguments
/// ---------
/// * `ra`: right ascension in degrees at `epoch`.
/// * `dec`: declination in degrees at `epoch`.
/// * `epoch`: equinox of the input position.
///
/// Returns
/// -------
/// * `(ra_j2000, dec_j2000)` in degrees, RA in `[0, 360)`. A J2000 input is
///   returned unchanged (identity transform).
pub fn precess_to_j2000(ra: Degree, dec: Degree, epoch: Epoch) -> (Degree, Degree) {
    if epoch == Epoch::J2000 {
        return (ra, dec);
    }

    unit_vector_to_radec(prec(epoch.mjd()) * radec_to_unit_vector(ra, dec))
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_prec_orthonormal() {
        let p = prec(T1950);
        let prod = p * p.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod[(i, j)], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_j2000_identity() {
        let (ra, dec) = precess_to_j2000(10.68458, 41.26917, Epoch::J2000);
        assert_eq!(ra, 10.68458);
        assert_eq!(dec, 41.26917);
    }

    #[test]
    fn test_b1950_to_j2000_m31() {
        // M31: B1950 00h40m00s +41°00' is the textbook pair of
        // J2000 00h42m44.3s +41°16'09".
        let (ra, dec) = precess_to_j2000(10.0, 41.0, Epoch::B1950);
        assert_relative_eq!(ra, 10.6846, epsilon = 0.01);
        assert_relative_eq!(dec, 41.2692, epsilon = 0.01);
    }

    #[test]
    fn test_b1900_to_j2000_equator() {
        // A century of general precession shifts an equatorial position by
        // roughly ζ + z ≈ 1.28° in RA and θ ≈ 0.56° in Dec at RA 0.
        let (ra, dec) = precess_to_j2000(0.0, 0.0, Epoch::B1900);
        assert_relative_eq!(ra, 1.281, epsilon = 0.01);
        assert_relative_eq!(dec, 0.557, epsilon = 0.01);
    }

    #[test]
    fn test_precession_preserves_ra_range() {
        // A position just east of the equinox precessed backwards-published
        // coordinates must still land in [0, 360).
        let (ra, dec) = precess_to_j2000(359.9, -0.2, Epoch::B1950);
        assert!((0.0..360.0).contains(&ra));
        assert!((-90.0..=90.0).contains(&dec));
    }

    #[test]
    fn test_round_trip_through_matrix() {
        let rot = prec(T1900);
        let v = radec_to_unit_vector(123.456, -54.321);
        let (ra, dec) = unit_vector_to_radec(rot.transpose() * (rot * v));
        assert_relative_eq!(ra, 123.456, epsilon = 1e-9);
        assert_relative_eq!(dec, -54.321, epsilon = 1e-9);
    }
}
