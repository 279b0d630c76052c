//! # Catalog merge pipeline
//!
//! Unions the validated per-catalog record sets into one flat
//! [`MergedCatalog`] and exposes the build entry point consumed by the
//! service layer. No cross-catalog deduplication of identical sky positions
//! is attempted: two entries from different catalogs describing the same
//! physical object coexist, mirroring the published catalogs. Duplicate
//! names across the merged set are reported as a diagnostic only.
//!
//! The merged table is built once and treated as read-only thereafter;
//! concurrent queries need no locking. A reload must build a fresh
//! [`MergedCatalog`] and swap the reference, never mutate a live table.

use log::{debug, warn};

use crate::catalog::caldwell::resolve_caldwell;
use crate::catalog::source::{build_source, CatalogSource};
use crate::catalog::{Catalog, DsoObject};
use crate::errors::DeepskyError;
use crate::validate::{validate_catalog, CatalogStatus, ValidationReport};

/// The canonical, query-able object table.
///
/// An ordered, immutable sequence of every accepted [`DsoObject`]; insertion
/// order is irrelevant to queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedCatalog {
    objects: Vec<DsoObject>,
}

impl MergedCatalog {
    /// Union validated per-catalog record sets, dropping records whose
    /// coordinates fall outside the canonical RA/Dec domains.
    ///
    /// The drop is record-scoped: an out-of-range coordinate invalidates that
    /// single record, never its catalog or the run.
    pub fn from_catalogs<I>(catalogs: I) -> Self
    where
        I: IntoIterator<Item = Vec<DsoObject>>,
    {
        let mut objects = Vec::new();
        for set in catalogs {
            for obj in set {
                if obj.coordinates_in_range() {
                    objects.push(obj);
                } else {
                    let err = DeepskyError::CoordinateOutOfRange {
                        name: obj.name,
                        ra: obj.ra,
                        dec: obj.dec,
                    };
                    warn!("{err}, record dropped");
                }
            }
        }
        MergedCatalog { objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[DsoObject] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DsoObject> {
        self.objects.iter()
    }

    /// Names appearing more than once across the merged set, with their
    /// multiplicities. Diagnostic only; duplicates are permitted to exist.
    pub fn duplicate_names(&self) -> Vec<(String, usize)> {
        use itertools::Itertools;
        self.objects
            .iter()
            .map(|obj| obj.name.as_str())
            .counts()
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .sorted()
            .map(|(name, count)| (name.to_string(), count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a MergedCatalog {
    type Item = &'a DsoObject;
    type IntoIter = std::slice::Iter<'a, DsoObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

/// Bucket built records by their catalog identifier.
fn partition_by_catalog(objects: Vec<DsoObject>) -> Vec<(Catalog, Vec<DsoObject>)> {
    let mut buckets: Vec<(Catalog, Vec<DsoObject>)> = Vec::new();
    for obj in objects {
        match buckets.iter_mut().find(|(catalog, _)| *catalog == obj.catalog) {
            Some((_, bucket)) => bucket.push(obj),
            None => buckets.push((obj.catalog, vec![obj])),
        }
    }
    buckets
}

/// Build the canonical table from raw catalog sources.
///
/// Pipeline: build each source (skip-and-log bad rows) → derive the Caldwell
/// catalog from the built NGC/IC tables → validate every catalog → merge,
/// dropping only records with out-of-range coordinates.
///
/// Returns the merged table together with one [`ValidationReport`] per
/// catalog. The only hard failure is a structurally empty source
/// ([`DeepskyError::EmptySource`]); every other problem is reported and
/// contained.
pub fn build_catalog(
    sources: &[CatalogSource],
) -> Result<(MergedCatalog, Vec<ValidationReport>), DeepskyError> {
    let mut buckets: Vec<(Catalog, Vec<DsoObject>)> = Vec::new();
    let mut statuses: Vec<CatalogStatus> = Vec::new();

    for source in sources {
        let (objects, _skipped) = build_source(source)?;
        if let Some(expected) = source.expected {
            statuses.push(CatalogStatus {
                catalog: source.format.primary_catalog(),
                expected,
            });
        }
        for (catalog, set) in partition_by_catalog(objects) {
            match buckets.iter_mut().find(|(existing, _)| *existing == catalog) {
                Some((_, bucket)) => bucket.extend(set),
                None => buckets.push((catalog, set)),
            }
        }
    }

    let empty = Vec::new();
    let ngc = buckets
        .iter()
        .find(|(catalog, _)| *catalog == Catalog::Ngc)
        .map_or(&empty, |(_, set)| set);
    let ic = buckets
        .iter()
        .find(|(catalog, _)| *catalog == Catalog::Ic)
        .map_or(&empty, |(_, set)| set);

    let (caldwell, unresolved) = resolve_caldwell(ngc, ic);
    if !unresolved.is_empty() {
        debug!("{} Caldwell aliases left unresolved", unresolved.len());
    }
    if !caldwell.is_empty() {
        buckets.push((Catalog::Caldwell, caldwell));
    }

    let reports = buckets
        .iter()
        .map(|(catalog, set)| {
            let status = statuses.iter().find(|s| s.catalog == *catalog);
            validate_catalog(*catalog, set, status)
        })
        .collect();

    let merged = MergedCatalog::from_catalogs(buckets.into_iter().map(|(_, set)| set));
    debug!("merged catalog holds {} objects", merged.len());

    Ok((merged, reports))
}
