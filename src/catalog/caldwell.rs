//! # Caldwell identity resolution
//!
//! The Caldwell catalog publishes no coordinates of its own: each of its 109
//! entries aliases an NGC or IC object. The mapping below is pure data,
//! embedded as a constant table. Two designation oddities need handling:
//!
//! - `/`-joined pairs (`NGC 869/884`, the Double Cluster): the **first**
//!   member supplies position and diameter.
//! - `-`-joined numeric ranges (`NGC 2237-9`, abbreviating 2237..=2239):
//!   the **start** of the range supplies the data.
//!
//! IC lookups try both the `IC`- and `I`-prefixed zero-padded spellings,
//! since upstream catalogs are genuinely inconsistent about which one the
//! NGC2000 extract uses. When several rows match the same number, the first
//! match in table order wins; deterministic, if arbitrary.

use log::warn;

use crate::catalog::{Catalog, DsoObject};
use crate::errors::DeepskyError;

/// Caldwell number → NGC/IC designator, C1 through C109.
pub(crate) const CALDWELL_ALIASES: [(u32, &str); 109] = [
    (1, "IC 1613"),
    (2, "NGC 40"),
    (3, "NGC 4236"),
    (4, "NGC 7023"),
    (5, "IC 342"),
    (6, "NGC 6543"),
    (7, "NGC 2403"),
    (8, "NGC 559"),
    (9, "NGC 7331"),
    (10, "NGC 663"),
    (11, "NGC 7635"),
    (12, "NGC 6946"),
    (13, "NGC 457"),
    (14, "NGC 869/884"),
    (15, "NGC 6826"),
    (16, "NGC 7243"),
    (17, "NGC 147"),
    (18, "NGC 185"),
    (19, "IC 5146"),
    (20, "NGC 7000"),
    (21, "NGC 4449"),
    (22, "NGC 7662"),
    (23, "NGC 891"),
    (24, "NGC 1275"),
    (25, "NGC 2419"),
    (26, "NGC 4244"),
    (27, "NGC 6888"),
    (28, "NGC 752"),
    (29, "NGC 5005"),
    (30, "NGC 7331"),
    (31, "IC 405"),
    (32, "NGC 4631"),
    (33, "NGC 6992/5"),
    (34, "NGC 6960"),
    (35, "NGC 4889"),
    (36, "NGC 4559"),
    (37, "NGC 6885"),
    (38, "NGC 4565"),
    (39, "NGC 2392"),
    (40, "NGC 3626"),
    (41, "NGC 3242"),
    (42, "NGC 7006"),
    (43, "NGC 7814"),
    (44, "NGC 7479"),
    (45, "NGC 5248"),
    (46, "NGC 2261"),
    (47, "NGC 6934"),
    (48, "NGC 2775"),
    (49, "NGC 2237-9"),
    (50, "NGC 2244"),
    (51, "IC 1613"),
    (52, "NGC 4697"),
    (53, "NGC 3115"),
    (54, "NGC 2506"),
    (55, "NGC 7009"),
    (56, "NGC 246"),
    (57, "NGC 6822"),
    (58, "NGC 2360"),
    (59, "NGC 3242"),
    (60, "NGC 4038"),
    (61, "NGC 4039"),
    (62, "NGC 247"),
    (63, "NGC 7293"),
    (64, "NGC 2613"),
    (65, "NGC 253"),
    (66, "NGC 5694"),
    (67, "NGC 1097"),
    (68, "NGC 6729"),
    (69, "NGC 6302"),
    (70, "NGC 300"),
    (71, "NGC 2477"),
    (72, "NGC 55"),
    (73, "NGC 1851"),
    (74, "NGC 3132"),
    (75, "NGC 6124"),
    (76, "NGC 6231"),
    (77, "NGC 5128"),
    (78, "NGC 6541"),
    (79, "NGC 3201"),
    (80, "NGC 5139"),
    (81, "NGC 6352"),
    (82, "NGC 6193"),
    (83, "NGC 4945"),
    (84, "NGC 5286"),
    (85, "IC 2391"),
    (86, "NGC 6397"),
    (87, "NGC 1261"),
    (88, "NGC 5823"),
    (89, "NGC 6087"),
    (90, "NGC 2867"),
    (91, "NGC 3532"),
    (92, "NGC 3372"),
    (93, "NGC 6752"),
    (94, "NGC 4755"),
    (95, "NGC 6025"),
    (96, "NGC 2516"),
    (97, "NGC 3766"),
    (98, "NGC 4609"),
    (99, "NGC 5011"),
    (100, "IC 2944"),
    (101, "NGC 6744"),
    (102, "IC 2602"),
    (103, "NGC 2070"),
    (104, "NGC 362"),
    (105, "NGC 4833"),
    (106, "NGC 104"),
    (107, "NGC 6101"),
    (108, "NGC 4372"),
    (109, "NGC 3195"),
];

/// Reduce an alias to the single NGC/IC designator supplying the data.
///
/// `NGC 869/884` → `NGC 869`; `NGC 2237-9` → `NGC 2237` (lower end of the
/// range). Plain designators pass through unchanged.
fn primary_designator(alias: &str) -> String {
    if let Some((first, _)) = alias.split_once('/') {
        return first.trim().to_string();
    }
    if let Some((start, _suffix)) = alias.trim_start_matches("NGC ").split_once('-') {
        // 2237-9 abbreviates the range 2237..=2239; the start supplies the data
        return format!("NGC {}", start.trim());
    }
    alias.trim().to_string()
}

/// Find the source record for a primary designator in the built NGC/IC tables.
///
/// IC numbers are looked up under both the `IC`- and `I`-prefixed spellings.
/// The first match in table order wins.
fn lookup<'a>(
    primary: &str,
    ngc: &'a [DsoObject],
    ic: &'a [DsoObject],
) -> Result<&'a DsoObject, DeepskyError> {
    let unresolved = || DeepskyError::UnresolvedAlias(primary.to_string());

    if let Some(raw) = primary.strip_prefix("NGC") {
        let number: u32 = raw.trim().parse().map_err(|_| unresolved())?;
        let name = Catalog::Ngc.format_name(number);
        ngc.iter().find(|obj| obj.name == name).ok_or_else(unresolved)
    } else if let Some(raw) = primary.strip_prefix("IC") {
        let number: u32 = raw.trim().parse().map_err(|_| unresolved())?;
        let padded = Catalog::Ic.format_name(number);
        let alternate = format!("I{:04}", number);
        ic.iter()
            .find(|obj| obj.name == padded || obj.name == alternate)
            .ok_or_else(unresolved)
    } else {
        Err(unresolved())
    }
}

/// Derive the Caldwell catalog from the built NGC and IC tables.
///
/// Each resolved alias emits a new record carrying the Caldwell name and the
/// position/diameter copied verbatim from its source object. Unresolved
/// aliases are reported and skipped; a missing alias never fails the run.
pub fn resolve_caldwell(
    ngc: &[DsoObject],
    ic: &[DsoObject],
) -> (Vec<DsoObject>, Vec<DeepskyError>) {
    let mut objects = Vec::with_capacity(CALDWELL_ALIASES.len());
    let mut failures = Vec::new();

    for (number, alias) in CALDWELL_ALIASES {
        let primary = primary_designator(alias);
        match lookup(&primary, ngc, ic) {
            Ok(source) => objects.push(DsoObject {
                name: Catalog::Caldwell.format_name(number),
                catalog: Catalog::Caldwell,
                ra: source.ra,
                dec: source.dec,
                diameter: source.diameter,
            }),
            Err(err) => {
                warn!("C{number} ({alias}): {err}");
                failures.push(err);
            }
        }
    }

    (objects, failures)
}
