//! # Per-catalog validation
//!
//! Range and completeness checks over one catalog's canonical records. Every
//! check is reported independently and none of them aborts the pipeline: the
//! merger decides what to do with the violations (out-of-range coordinates
//! keep a record out of the merged table, everything else is advisory).

use itertools::Itertools;

use crate::catalog::{Catalog, DsoObject};
use crate::constants::Degree;

/// Advisory expected record count for one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStatus {
    pub catalog: Catalog,
    pub expected: usize,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    RaOutOfRange { name: String, ra: Degree },
    DecOutOfRange { name: String, dec: Degree },
    NonPositiveDiameter { name: String, diameter: f64 },
    PrefixMismatch { name: String, catalog: Catalog },
    CountMismatch { expected: usize, actual: usize },
    DuplicateName { name: String, count: usize },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::RaOutOfRange { name, ra } => {
                write!(f, "{name}: ra {ra} outside [0, 360)")
            }
            Violation::DecOutOfRange { name, dec } => {
                write!(f, "{name}: dec {dec} outside [-90, 90]")
            }
            Violation::NonPositiveDiameter { name, diameter } => {
                write!(f, "{name}: non-positive diameter {diameter}")
            }
            Violation::PrefixMismatch { name, catalog } => {
                write!(f, "{name}: does not start with {} prefix", catalog.prefix())
            }
            Violation::CountMismatch { expected, actual } => {
                write!(f, "expected {expected} records, found {actual}")
            }
            Violation::DuplicateName { name, count } => {
                write!(f, "{name} appears {count} times")
            }
        }
    }
}

/// Outcome of validating one catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub catalog: Catalog,
    pub record_count: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when every check passed.
    pub fn all_passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run all per-record and per-catalog checks over one catalog's records.
///
/// Checks, each independently reported:
/// - `0 ≤ ra < 360` and `-90 ≤ dec ≤ 90` for every record
/// - `diameter > 0` when present
/// - every name begins with its declared catalog prefix
/// - expected-vs-actual record count when a [`CatalogStatus`] is supplied
/// - duplicate names within the catalog
pub fn validate_catalog(
    catalog: Catalog,
    objects: &[DsoObject],
    status: Option<&CatalogStatus>,
) -> ValidationReport {
    let mut violations = Vec::new();

    for obj in objects {
        if !(0.0..360.0).contains(&obj.ra) {
            violations.push(Violation::RaOutOfRange {
                name: obj.name.clone(),
                ra: obj.ra,
            });
        }
        if !(-90.0..=90.0).contains(&obj.dec) {
            violations.push(Violation::DecOutOfRange {
                name: obj.name.clone(),
                dec: obj.dec,
            });
        }
        if let Some(diameter) = obj.diameter {
            if diameter <= 0.0 {
                violations.push(Violation::NonPositiveDiameter {
                    name: obj.name.clone(),
                    diameter,
                });
            }
        }
        if !obj.name.starts_with(catalog.prefix()) {
            violations.push(Violation::PrefixMismatch {
                name: obj.name.clone(),
                catalog,
            });
        }
    }

    if let Some(status) = status {
        if status.expected != objects.len() {
            violations.push(Violation::CountMismatch {
                expected: status.expected,
                actual: objects.len(),
            });
        }
    }

    violations.extend(
        objects
            .iter()
            .map(|obj| obj.name.as_str())
            .counts()
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .sorted()
            .map(|(name, count)| Violation::DuplicateName {
                name: name.to_string(),
                count,
            }),
    );

    ValidationReport {
        catalog,
        record_count: objects.len(),
        violations,
    }
}
