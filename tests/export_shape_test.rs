//! Checks the serialized shape of canonical records: downstream consumers
//! read the merged table as CSV with a fixed `name,catalog,ra,dec,diameter`
//! column layout and the renamed catalog labels (`NGC`, not `Ngc`).

use deepsky::{Catalog, DsoObject};

#[test]
fn test_csv_row_shape() {
    let objects = vec![
        DsoObject {
            name: "M031".into(),
            catalog: Catalog::Messier,
            ra: 10.68458,
            dec: 41.26917,
            diameter: Some(178.0),
        },
        DsoObject {
            name: "Abell0426".into(),
            catalog: Catalog::Abell,
            ra: 49.94625,
            dec: 41.51306,
            diameter: None,
        },
        DsoObject {
            name: "VdB0001".into(),
            catalog: Catalog::Vdb,
            ra: 8.3029,
            dec: 59.6364,
            diameter: Some(2.0),
        },
    ];

    let mut writer = csv::Writer::from_writer(vec![]);
    for obj in &objects {
        writer.serialize(obj).unwrap();
    }
    let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    let mut lines = out.lines();
    assert_eq!(lines.next().unwrap(), "name,catalog,ra,dec,diameter");
    assert_eq!(
        lines.next().unwrap(),
        "M031,Messier,10.68458,41.26917,178.0"
    );
    // missing diameter serializes as an empty trailing field
    assert_eq!(lines.next().unwrap(), "Abell0426,Abell,49.94625,41.51306,");
    assert_eq!(lines.next().unwrap(), "VdB0001,VdB,8.3029,59.6364,2.0");
}

#[test]
fn test_csv_round_trip() {
    let original = DsoObject {
        name: "Sh2-012".into(),
        catalog: Catalog::Sharpless,
        ra: 261.0,
        dec: -23.5,
        diameter: Some(40.0),
    };

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.serialize(&original).unwrap();
    let data = writer.into_inner().unwrap();

    let mut reader = csv::Reader::from_reader(data.as_slice());
    let restored: DsoObject = reader.deserialize().next().unwrap().unwrap();
    assert_eq!(restored, original);
}
