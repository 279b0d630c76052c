//! # Per-catalog record builders
//!
//! One builder variant per source table, all conforming to the same contract:
//! a raw row already tokenized into fields goes in, zero or one
//! [`DsoObject`] comes out. Each variant composes the coordinate parser,
//! the epoch converter and the size normalizer, then formats the canonical
//! name per the catalog's convention.
//!
//! ## Partial-failure policy
//!
//! A malformed row never aborts its catalog: [`build_source`] logs the error
//! and skips the row. Only a source with **zero rows** is a hard failure,
//! since that indicates collaborator-level misconfiguration (a missing or
//! truncated download) rather than a data-quality issue.
//!
//! ## Row layouts
//!
//! The field layouts mirror the upstream VizieR/NGC2000 extracts:
//!
//! | format      | fields                                                          | epoch  |
//! |-------------|-----------------------------------------------------------------|--------|
//! | `Ngc2000`   | designation, RA `HH MM.M`, Dec `±DD MM`, diameter (arcmin)      | J2000  |
//! | `Messier`   | designation, common name, NGC name, RA, Dec, diameter (arcmin)  | J2000  |
//! | `Abell`     | number, RA `HH MM.M`, Dec `±DD MM`, count, richness             | J2000  |
//! | `Barnard`   | number, RA, Dec, diameter (arcmin)                              | as published |
//! | `Ldn`       | number, RA, Dec, area (deg²), opacity                           | J2000  |
//! | `Lbn`       | seq, RA, Dec, diam1 (arcmin), diam2 (arcmin)                    | B1950  |
//! | `Sharpless` | number, RA, Dec, diameter (arcmin)                              | B1900  |
//! | `Vdb`       | number, RA (deg), Dec (deg), blue radius, red radius (arcmin)   | J2000  |
//!
//! An `Ngc2000` row yields an NGC or an IC record depending on whether its
//! designation starts with `I`. Caldwell records are never built from rows;
//! they are derived from the NGC/IC tables by [`super::caldwell`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::{designation_number, Catalog, DsoObject};
use crate::constants::ArcMin;
use crate::conversion::parse_coordinates;
use crate::errors::DeepskyError;
use crate::ref_system::{precess_to_j2000, Epoch};
use crate::size::{
    diameter_from_area_deg2, diameter_from_axes, diameter_from_radii, VDB_DEFAULT_DIAMETER,
};

/// Tagged source-table format, one variant per upstream extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    Ngc2000,
    Messier,
    Abell,
    Barnard,
    Ldn,
    Lbn,
    Sharpless,
    Vdb,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One raw source table handed over by the (excluded) I/O collaborators.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    pub format: SourceFormat,
    /// Rows already tokenized into fields; the builder owns field semantics.
    pub rows: Vec<Vec<String>>,
    /// Advisory expected record count, checked by the validator when present.
    pub expected: Option<usize>,
}

impl CatalogSource {
    pub fn new(format: SourceFormat, rows: Vec<Vec<String>>) -> Self {
        Self {
            format,
            rows,
            expected: None,
        }
    }

    pub fn with_expected(mut self, expected: usize) -> Self {
        self.expected = Some(expected);
        self
    }
}

fn field<'a>(fields: &'a [String], index: usize, expected: &'static str) -> Result<&'a str, DeepskyError> {
    fields
        .get(index)
        .map(|s| s.trim())
        .ok_or(DeepskyError::MissingField { index, expected })
}

/// Optional field: absent index or blank text both mean "not published".
fn optional_field(fields: &[String], index: usize) -> Option<&str> {
    fields
        .get(index)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Parse an optional arcminute measurement, rejecting non-numeric text.
fn optional_arcmin(fields: &[String], index: usize) -> Result<Option<ArcMin>, DeepskyError> {
    match optional_field(fields, index) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| DeepskyError::InvalidSize(raw.to_string())),
    }
}

impl SourceFormat {
    /// Catalog this source primarily populates.
    ///
    /// `Ngc2000` counts as NGC: the IC rows it also carries are a split-off
    /// minority with no advisory count of their own.
    pub fn primary_catalog(&self) -> Catalog {
        match self {
            SourceFormat::Ngc2000 => Catalog::Ngc,
            SourceFormat::Messier => Catalog::Messier,
            SourceFormat::Abell => Catalog::Abell,
            SourceFormat::Barnard => Catalog::Barnard,
            SourceFormat::Ldn => Catalog::Ldn,
            SourceFormat::Lbn => Catalog::Lbn,
            SourceFormat::Sharpless => Catalog::Sharpless,
            SourceFormat::Vdb => Catalog::Vdb,
        }
    }

    /// Equinox of the coordinates published by this source.
    ///
    /// Barnard's 1875-equinox positions are carried through untransformed,
    /// matching the upstream aggregation.
    fn epoch(&self) -> Epoch {
        match self {
            SourceFormat::Lbn => Epoch::B1950,
            SourceFormat::Sharpless => Epoch::B1900,
            _ => Epoch::J2000,
        }
    }

    /// Build zero or one canonical record from a tokenized row.
    ///
    /// Returns the parse failure for the caller to log; the row is then
    /// skipped without affecting the rest of the catalog.
    pub fn build_row(&self, fields: &[String]) -> Result<DsoObject, DeepskyError> {
        let (catalog, number, ra_raw, dec_raw) = match self {
            SourceFormat::Ngc2000 => {
                let designation = field(fields, 0, "designation")?;
                let catalog = if designation.starts_with('I') {
                    Catalog::Ic
                } else {
                    Catalog::Ngc
                };
                (
                    catalog,
                    designation_number(designation)?,
                    field(fields, 1, "ra")?,
                    field(fields, 2, "dec")?,
                )
            }
            SourceFormat::Messier => (
                Catalog::Messier,
                designation_number(field(fields, 0, "designation")?)?,
                field(fields, 3, "ra")?,
                field(fields, 4, "dec")?,
            ),
            SourceFormat::Abell => (
                Catalog::Abell,
                designation_number(field(fields, 0, "number")?)?,
                field(fields, 1, "ra")?,
                field(fields, 2, "dec")?,
            ),
            SourceFormat::Barnard => (
                Catalog::Barnard,
                designation_number(field(fields, 0, "number")?)?,
                field(fields, 1, "ra")?,
                field(fields, 2, "dec")?,
            ),
            SourceFormat::Ldn => (
                Catalog::Ldn,
                designation_number(field(fields, 0, "number")?)?,
                field(fields, 1, "ra")?,
                field(fields, 2, "dec")?,
            ),
            SourceFormat::Lbn => (
                Catalog::Lbn,
                designation_number(field(fields, 0, "seq")?)?,
                field(fields, 1, "ra")?,
                field(fields, 2, "dec")?,
            ),
            SourceFormat::Sharpless => (
                Catalog::Sharpless,
                designation_number(field(fields, 0, "number")?)?,
                field(fields, 1, "ra")?,
                field(fields, 2, "dec")?,
            ),
            SourceFormat::Vdb => (
                Catalog::Vdb,
                designation_number(field(fields, 0, "number")?)?,
                field(fields, 1, "ra")?,
                field(fields, 2, "dec")?,
            ),
        };

        let (ra, dec) = parse_coordinates(ra_raw, dec_raw)?;
        let (ra, dec) = precess_to_j2000(ra, dec, self.epoch());

        let diameter = self.diameter(fields)?;

        Ok(DsoObject {
            name: catalog.format_name(number),
            catalog,
            ra,
            dec,
            diameter,
        })
    }

    /// Size normalization per source, see the module table.
    fn diameter(&self, fields: &[String]) -> Result<Option<ArcMin>, DeepskyError> {
        match self {
            SourceFormat::Ngc2000 | SourceFormat::Barnard | SourceFormat::Sharpless => {
                Ok(optional_arcmin(fields, 3)?.filter(|d| *d > 0.0))
            }
            SourceFormat::Messier => Ok(optional_arcmin(fields, 5)?.filter(|d| *d > 0.0)),
            // Abell clusters have no standard diameter measurement.
            SourceFormat::Abell => Ok(None),
            SourceFormat::Ldn => match optional_field(fields, 3) {
                None => Ok(None),
                Some(raw) => {
                    let area: f64 = raw
                        .parse()
                        .map_err(|_| DeepskyError::InvalidSize(raw.to_string()))?;
                    Ok(diameter_from_area_deg2(area))
                }
            },
            SourceFormat::Lbn => Ok(diameter_from_axes(&[
                optional_arcmin(fields, 3)?,
                optional_arcmin(fields, 4)?,
            ])),
            SourceFormat::Vdb => Ok(diameter_from_radii(&[
                optional_arcmin(fields, 3)?,
                optional_arcmin(fields, 4)?,
            ])
            .or(Some(VDB_DEFAULT_DIAMETER))),
        }
    }
}

/// Build every row of a source, skipping and logging malformed rows.
///
/// Returns the built records together with the number of rows skipped.
/// A source with no rows at all is surfaced as [`DeepskyError::EmptySource`].
pub fn build_source(source: &CatalogSource) -> Result<(Vec<DsoObject>, usize), DeepskyError> {
    if source.rows.is_empty() {
        return Err(DeepskyError::EmptySource(source.format));
    }

    let mut objects = Vec::with_capacity(source.rows.len());
    let mut skipped = 0usize;

    for (line, row) in source.rows.iter().enumerate() {
        match source.format.build_row(row) {
            Ok(object) => objects.push(object),
            Err(err) => {
                warn!("{} row {}: {err}, row skipped", source.format, line + 1);
                skipped += 1;
            }
        }
    }

    debug!(
        "{}: built {} records, skipped {}",
        source.format,
        objects.len(),
        skipped
    );

    Ok((objects, skipped))
}
