//! # Constants and type definitions for Deepsky
//!
//! This module centralizes the **angular constants**, **epoch definitions**, and **common type
//! definitions** used throughout the `deepsky` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, degrees ↔ arcminutes)
//! - Reference epochs expressed as Modified Julian Dates (TT)
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including coordinate parsing,
//! epoch precession, and the spatial query engine.

// -------------------------------------------------------------------------------------------------
// Angular constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Hours of right ascension → degrees
pub const DEG_PER_HOUR: f64 = 15.0;

/// Square arcminutes per square degree
pub const SQ_ARCMIN_PER_SQ_DEG: f64 = 3600.0;

// -------------------------------------------------------------------------------------------------
// Reference epochs
// -------------------------------------------------------------------------------------------------

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// MJD epoch of B1950.0 (Besselian year 1950.0)
pub const T1950: f64 = 33281.92345905;

/// MJD epoch of B1900.0 (Besselian year 1900.0)
pub const T1900: f64 = 15019.81352;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcminutes
pub type ArcMin = f64;
/// Angle in radians
pub type Radian = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
