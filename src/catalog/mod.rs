//! # Catalog data model
//!
//! The canonical object type shared by every pipeline stage, plus the
//! catalog-identifier enum and its naming conventions.
//!
//! Every source catalog formats designations differently (`NGC 7000`,
//! `Sh2 12`, bare sequence numbers); the canonical table uses one
//! catalog-prefixed, zero-padded spelling per catalog so that names are
//! unique designators within their catalog (`NGC7000` → `NGC7000`,
//! `Sh2 12` → `Sh2-012`, `31` → `M031`).

pub mod caldwell;
pub mod source;

use serde::{Deserialize, Serialize};

use crate::constants::{ArcMin, Degree};
use crate::errors::DeepskyError;

/// Identifier of one of the ten supported deep-sky catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Catalog {
    Messier,
    #[serde(rename = "NGC")]
    Ngc,
    #[serde(rename = "IC")]
    Ic,
    Abell,
    Barnard,
    #[serde(rename = "LDN")]
    Ldn,
    #[serde(rename = "LBN")]
    Lbn,
    Sharpless,
    #[serde(rename = "VdB")]
    Vdb,
    Caldwell,
}

impl Catalog {
    /// Designation prefix used in canonical names.
    pub fn prefix(&self) -> &'static str {
        match self {
            Catalog::Messier => "M",
            Catalog::Ngc => "NGC",
            Catalog::Ic => "IC",
            Catalog::Abell => "Abell",
            Catalog::Barnard => "B",
            Catalog::Ldn => "LDN",
            Catalog::Lbn => "LBN",
            Catalog::Sharpless => "Sh2-",
            Catalog::Vdb => "VdB",
            Catalog::Caldwell => "C",
        }
    }

    /// Zero-pad width of the numeric suffix, fixed per catalog.
    pub fn pad_width(&self) -> usize {
        match self {
            Catalog::Messier | Catalog::Barnard | Catalog::Sharpless | Catalog::Caldwell => 3,
            Catalog::Ngc
            | Catalog::Ic
            | Catalog::Abell
            | Catalog::Ldn
            | Catalog::Lbn
            | Catalog::Vdb => 4,
        }
    }

    /// Format a catalog number as a canonical designation, e.g. `NGC0007`.
    pub fn format_name(&self, number: u32) -> String {
        format!("{}{:0width$}", self.prefix(), number, width = self.pad_width())
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Catalog::Messier => "Messier",
            Catalog::Ngc => "NGC",
            Catalog::Ic => "IC",
            Catalog::Abell => "Abell",
            Catalog::Barnard => "Barnard",
            Catalog::Ldn => "LDN",
            Catalog::Lbn => "LBN",
            Catalog::Sharpless => "Sharpless",
            Catalog::Vdb => "VdB",
            Catalog::Caldwell => "Caldwell",
        };
        write!(f, "{label}")
    }
}

/// One canonical deep-sky object.
///
/// Coordinates are always J2000 decimal degrees, `ra` in `[0, 360)` and `dec`
/// in `[-90, 90]`. The optional diameter is in arcminutes and strictly
/// positive when present. Records are built once by the source builders (or
/// the Caldwell resolver) and never mutated after entering the merged table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DsoObject {
    pub name: String,
    pub catalog: Catalog,
    pub ra: Degree,
    pub dec: Degree,
    pub diameter: Option<ArcMin>,
}

impl DsoObject {
    /// Whether both coordinates lie in their canonical domains.
    pub fn coordinates_in_range(&self) -> bool {
        (0.0..360.0).contains(&self.ra) && (-90.0..=90.0).contains(&self.dec)
    }
}

/// Extract the numeric part of a raw designation such as `"M31"`, `"I 123"`
/// or `" 7000"`.
pub(crate) fn designation_number(raw: &str) -> Result<u32, DeepskyError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(DeepskyError::InvalidDesignation(raw.to_string()));
    }
    digits
        .parse()
        .map_err(|_| DeepskyError::InvalidDesignation(raw.to_string()))
}

#[cfg(test)]
mod catalog_test {
    use super::*;

    #[test]
    fn test_format_name() {
        assert_eq!(Catalog::Ngc.format_name(7), "NGC0007");
        assert_eq!(Catalog::Ic.format_name(342), "IC0342");
        assert_eq!(Catalog::Messier.format_name(31), "M031");
        assert_eq!(Catalog::Sharpless.format_name(12), "Sh2-012");
        assert_eq!(Catalog::Caldwell.format_name(14), "C014");
        assert_eq!(Catalog::Vdb.format_name(1), "VdB0001");
        assert_eq!(Catalog::Abell.format_name(426), "Abell0426");
    }

    #[test]
    fn test_designation_number() {
        assert_eq!(designation_number("M31").unwrap(), 31);
        assert_eq!(designation_number("I 123").unwrap(), 123);
        assert_eq!(designation_number(" 7000").unwrap(), 7000);
        assert!(designation_number("??").is_err());
    }

    #[test]
    fn test_coordinates_in_range() {
        let mut obj = DsoObject {
            name: "M031".into(),
            catalog: Catalog::Messier,
            ra: 10.68458,
            dec: 41.26917,
            diameter: Some(178.0),
        };
        assert!(obj.coordinates_in_range());

        obj.ra = 360.0;
        assert!(!obj.coordinates_in_range());

        obj.ra = 0.0;
        obj.dec = -90.5;
        assert!(!obj.coordinates_in_range());
    }
}
