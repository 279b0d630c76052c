//! # Deepsky: deep-sky catalog normalization, merge, and spatial search
//!
//! This crate ingests heterogeneous deep-space-object catalogs (Messier,
//! NGC/IC, Abell, Barnard, LDN, LBN, Sharpless, VdB, Caldwell) published in
//! inconsistent formats: sexagesimal or decimal coordinates, mixed
//! B1900/B1950/J2000 equinoxes, sizes given as radius, axes, area, or not at
//! all. It produces one canonical, query-able object table.
//!
//! ## Pipeline
//!
//! Raw tokenized rows flow strictly left to right:
//!
//! 1. [`catalog::source`]: per-catalog record builders (coordinate parsing,
//!    epoch precession, size normalization, canonical naming)
//! 2. [`catalog::caldwell`]: cross-catalog alias resolution for the derived
//!    Caldwell catalog
//! 3. [`validate`]: per-catalog range and completeness checks, all advisory
//! 4. [`merge`]: union into one immutable [`MergedCatalog`]
//! 5. [`query`]: radius (great-circle) and rectangular field-of-view
//!    searches, the terminal consumer exposed to a serving layer
//!
//! File and network access live entirely outside this crate; collaborators
//! hand already-read rows to [`merge::build_catalog`] and receive the merged
//! table plus validation reports back. The table is immutable after
//! construction, so concurrent readers need no locking; a reload builds a
//! new table and swaps the reference.

pub mod catalog;
pub mod constants;
mod conversion;
pub mod errors;
pub mod merge;
pub mod query;
mod ref_system;
pub mod size;
pub mod validate;

pub use catalog::source::{CatalogSource, SourceFormat};
pub use catalog::{Catalog, DsoObject};
pub use conversion::{parse_coordinates, parse_dec_to_deg, parse_ra_to_deg};
pub use errors::DeepskyError;
pub use merge::{build_catalog, MergedCatalog};
pub use query::{angular_separation_deg, query_fov, query_radius};
pub use ref_system::{precess_to_j2000, Epoch};
pub use validate::{CatalogStatus, ValidationReport, Violation};
