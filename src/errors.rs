use thiserror::Error;

use crate::catalog::source::SourceFormat;

/// Errors produced while normalizing and merging deep-sky catalogs.
///
/// Row-scoped variants (`InvalidRa`, `InvalidDec`, `InvalidSize`, `MissingField`,
/// `InvalidDesignation`) never abort a whole catalog: the offending row is logged
/// and skipped. `CoordinateOutOfRange` is record-scoped and keeps the record out
/// of the merged table. `UnresolvedAlias` is alias-scoped. Only `EmptySource`
/// propagates out of the build pipeline, since a zero-row source indicates a
/// collaborator-level misconfiguration rather than a data-quality issue.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeepskyError {
    #[error("Invalid right ascension string: {0:?}")]
    InvalidRa(String),

    #[error("Invalid declination string: {0:?}")]
    InvalidDec(String),

    #[error("Invalid size value: {0:?}")]
    InvalidSize(String),

    #[error("Row is missing required field at index {index} ({expected})")]
    MissingField { index: usize, expected: &'static str },

    #[error("Invalid object designation: {0:?}")]
    InvalidDesignation(String),

    #[error("Coordinates out of range for {name}: ra={ra}, dec={dec}")]
    CoordinateOutOfRange { name: String, ra: f64, dec: f64 },

    #[error("Could not resolve alias {0} against the NGC/IC tables")]
    UnresolvedAlias(String),

    #[error("Source {0} contains no rows")]
    EmptySource(SourceFormat),
}
