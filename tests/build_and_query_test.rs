use approx::assert_relative_eq;

use deepsky::{
    build_catalog, query_fov, query_radius, Catalog, CatalogSource, SourceFormat,
};

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn sample_sources() -> Vec<CatalogSource> {
    vec![
        CatalogSource::new(
            SourceFormat::Ngc2000,
            rows(&[
                &[" 224", "00 42.7", "+41 16", "178.0"],
                &[" 7000", "20 58.8", "+44 20", "120.0"],
                &[" 869", "02 19.0", "+57 09", "30.0"],
                &["I 342", "03 46.8", "+68 06", "17.8"],
                &["bad row", "??", "??", ""],
            ]),
        ),
        CatalogSource::new(
            SourceFormat::Messier,
            rows(&[
                &[
                    "M31",
                    "Andromeda Galaxy",
                    "NGC 224",
                    "00:42:44.30",
                    "+41:16:09.0",
                    "178.0",
                ],
                &[
                    "M42",
                    "Orion Nebula",
                    "NGC 1976",
                    "05:35:17.30",
                    "-05:23:28.0",
                    "85.0",
                ],
            ]),
        )
        .with_expected(2),
        CatalogSource::new(
            SourceFormat::Vdb,
            rows(&[&["1", "8.3029", "59.6364", "", ""]]),
        ),
        CatalogSource::new(
            SourceFormat::Ldn,
            rows(&[&["1", "16 28 48", "-16 12", "0.5", "5"]]),
        ),
    ]
}

#[test]
fn test_build_catalog_end_to_end() {
    let (merged, reports) = build_catalog(&sample_sources()).unwrap();

    // 3 NGC + 1 IC + 2 Messier + 1 VdB + 1 LDN, plus the Caldwell entries
    // derivable from NGC 7000 (C20), NGC 869 (C14) and IC 342 (C5). The bad
    // NGC row is skipped without failing its catalog.
    assert_eq!(merged.len(), 11);

    let m31 = merged.iter().find(|obj| obj.name == "M031").unwrap();
    assert_eq!(m31.catalog, Catalog::Messier);
    assert_relative_eq!(m31.ra, 10.684583333333334, epsilon = 1e-6);
    assert_relative_eq!(m31.dec, 41.269166666666667, epsilon = 1e-6);
    assert_eq!(m31.diameter, Some(178.0));

    // C14 (NGC 869/884) resolves through the first member of the pair.
    let ngc869 = merged.iter().find(|obj| obj.name == "NGC0869").unwrap();
    let c14 = merged.iter().find(|obj| obj.name == "C014").unwrap();
    assert_eq!(c14.catalog, Catalog::Caldwell);
    assert_eq!(c14.ra, ngc869.ra);
    assert_eq!(c14.dec, ngc869.dec);
    assert_eq!(c14.diameter, ngc869.diameter);

    // VdB without measured radii falls back to the 2 arcmin default.
    let vdb1 = merged.iter().find(|obj| obj.name == "VdB0001").unwrap();
    assert_eq!(vdb1.diameter, Some(2.0));

    // Every populated catalog gets a report and nothing in this set violates.
    assert_eq!(reports.len(), 6);
    assert!(reports.iter().all(|report| report.all_passed()));
}

#[test]
fn test_query_radius_m31_scenario() {
    let (merged, _) = build_catalog(&sample_sources()).unwrap();

    let hits = query_radius(&merged, 10.68, 41.27, 1.0);
    assert_eq!(hits.len(), 2);
    let mut names: Vec<&str> = hits.iter().map(|obj| obj.name.as_str()).collect();
    names.sort();
    // NGC 224 is M31 itself; the two records coexist by design.
    assert_eq!(names, vec!["M031", "NGC0224"]);
}

#[test]
fn test_query_fov_matches_sensor_footprint() {
    let (merged, _) = build_catalog(&sample_sources()).unwrap();

    // A 3°×3° field centered between NGC 7000's published position.
    let hits = query_fov(&merged, 314.7, 44.3, 3.0, 3.0);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().any(|obj| obj.name == "NGC7000"));
    assert!(hits.iter().any(|obj| obj.name == "C020"));
}

#[test]
fn test_queries_share_one_immutable_table() {
    let (merged, _) = build_catalog(&sample_sources()).unwrap();

    let before: Vec<String> = merged.iter().map(|obj| obj.name.clone()).collect();
    let _ = query_radius(&merged, 0.0, 0.0, 90.0);
    let _ = query_fov(&merged, 180.0, 0.0, 10.0, 10.0);
    let after: Vec<String> = merged.iter().map(|obj| obj.name.clone()).collect();
    assert_eq!(before, after);
}
