//! Tests for mce-model types.

use chrono::NaiveDate;
use serde_json::json;

use mce_model::{
    Author, DetailRow, DetailType, DetailValue, Location, ModelError, RecordId, Resolved, Unit,
    Variable, split_column_names,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

#[test]
fn inline_author_omits_label_and_id() {
    let author = Resolved::Inline(Author {
        first_name: "X".to_string(),
        last_name: "Y".to_string(),
        affiliation: "Z".to_string(),
        organisation_name: "Org".to_string(),
    });
    let value = serde_json::to_value(&author).unwrap();
    assert_eq!(
        value,
        json!({
            "first_name": "X",
            "last_name": "Y",
            "affiliation": "Z",
            "organisation_name": "Org"
        })
    );
}

#[test]
fn inline_variable_nests_unit_reference() {
    let variable = Resolved::Inline(Variable {
        name: "soil moisture".to_string(),
        symbol: "theta".to_string(),
        column_names: vec!["sm_10".to_string(), "sm_30".to_string()],
        unit: Resolved::reference(12),
    });
    let value = serde_json::to_value(&variable).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "soil moisture",
            "symbol": "theta",
            "column_names": ["sm_10", "sm_30"],
            "unit": { "id": 12 }
        })
    );
}

#[test]
fn inline_unit_keeps_empty_si() {
    let unit = Resolved::Inline(Unit {
        name: "millimeter".to_string(),
        symbol: "mm".to_string(),
        si: String::new(),
    });
    assert_eq!(
        serde_json::to_value(&unit).unwrap(),
        json!({ "name": "millimeter", "symbol": "mm", "si": "" })
    );
}

#[test]
fn record_ids_accept_numbers_and_strings() {
    let ids: Vec<RecordId> = serde_json::from_value(json!([1, "cc-by"])).unwrap();
    assert_eq!(ids, vec![RecordId::Int(1), RecordId::from("cc-by")]);
    assert_eq!(ids[0].to_string(), "1");
}

#[test]
fn location_formats_full_precision() {
    let location = Location::new(8.415447, 49.010113).unwrap();
    assert_eq!(location.to_ewkt(), "SRID=4326;POINT (8.415447 49.010113)");
    assert_eq!(
        serde_json::to_value(location).unwrap(),
        json!("SRID=4326;POINT (8.415447 49.010113)")
    );
}

#[test]
fn location_keeps_decimal_point_for_integral_values() {
    let location = Location::new(-8.0, 0.0).unwrap();
    assert_eq!(location.to_ewkt(), "SRID=4326;POINT (-8.0 0.0)");
}

#[test]
fn location_small_coordinates_stay_positional() {
    let location = Location::new(0.00005, 49.010113).unwrap();
    assert_eq!(location.to_ewkt(), "SRID=4326;POINT (0.00005 49.010113)");
    let location = Location::new(-1.5e-7, 1e-10).unwrap();
    assert_eq!(
        location.to_ewkt(),
        "SRID=4326;POINT (-0.00000015 0.0000000001)"
    );
}

#[test]
fn location_rejects_out_of_range() {
    let err = Location::new(181.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        ModelError::CoordinateOutOfRange {
            axis: "longitude",
            ..
        }
    ));
    assert!(Location::new(0.0, -90.5).is_err());
    assert!(Location::new(f64::NAN, 0.0).is_err());
}

#[test]
fn default_location_is_karlsruhe() {
    assert_eq!(
        Location::default().to_ewkt(),
        "SRID=4326;POINT (8.415447 49.010113)"
    );
}

#[test]
fn detail_values_coerce_by_type() {
    assert_eq!(
        DetailValue::parse(DetailType::Float, "3.5").unwrap(),
        DetailValue::Float(3.5)
    );
    assert_eq!(
        DetailValue::parse(DetailType::Integer, " 12 ").unwrap(),
        DetailValue::Integer(12)
    );
    assert_eq!(
        DetailValue::parse(DetailType::Date, "2023-11-02").unwrap(),
        DetailValue::Date(NaiveDate::from_ymd_opt(2023, 11, 2).unwrap())
    );
    assert_eq!(
        DetailValue::parse(DetailType::Boolean, "Yes").unwrap(),
        DetailValue::Boolean(true)
    );
    assert_eq!(
        DetailValue::parse(DetailType::String, " X1").unwrap(),
        DetailValue::String(" X1".to_string())
    );
}

#[test]
fn detail_value_rejects_bad_input() {
    let err = DetailValue::parse(DetailType::Integer, "3.5").unwrap_err();
    assert!(matches!(
        err,
        ModelError::InvalidDetailValue {
            kind: DetailType::Integer,
            ..
        }
    ));
    assert!(DetailValue::parse(DetailType::Float, "inf").is_err());
    assert!(DetailValue::parse(DetailType::Date, "17.05.2024").is_err());
    assert!(DetailValue::parse(DetailType::Boolean, "maybe").is_err());
}

#[test]
fn switching_type_resets_to_default() {
    let previous = DetailValue::Float(3.5);
    assert_eq!(
        DetailValue::reset_for(DetailType::Integer, &previous, today()),
        DetailValue::Integer(42)
    );
    assert_eq!(
        DetailValue::reset_for(DetailType::Boolean, &previous, today()),
        DetailValue::Boolean(false)
    );
    assert_eq!(
        DetailValue::reset_for(DetailType::Date, &previous, today()),
        DetailValue::Date(today())
    );
    assert_eq!(
        DetailValue::reset_for(DetailType::Float, &DetailValue::Integer(7), today()),
        DetailValue::Float(42.5)
    );
}

#[test]
fn switching_to_string_keeps_text() {
    let previous = DetailValue::Float(3.5);
    assert_eq!(
        DetailValue::reset_for(DetailType::String, &previous, today()),
        DetailValue::String("3.5".to_string())
    );
}

#[test]
fn switching_small_float_to_string_stays_positional() {
    assert_eq!(
        DetailValue::reset_for(DetailType::String, &DetailValue::Float(0.00005), today()),
        DetailValue::String("0.00005".to_string())
    );
    assert_eq!(
        DetailValue::reset_for(DetailType::String, &DetailValue::Float(2.0), today()),
        DetailValue::String("2.0".to_string())
    );
}

#[test]
fn switching_to_same_type_keeps_value() {
    let previous = DetailValue::Integer(7);
    assert_eq!(
        DetailValue::reset_for(DetailType::Integer, &previous, today()),
        previous
    );
}

#[test]
fn detail_rows_serialize_key_and_value() {
    let rows = vec![
        DetailRow::new("depth", DetailValue::Float(3.5)),
        DetailRow::new("site", DetailValue::String("X1".to_string())),
        DetailRow::new("sampled", DetailValue::Date(today())),
    ];
    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([
            { "key": "depth", "value": 3.5 },
            { "key": "site", "value": "X1" },
            { "key": "sampled", "value": "2024-05-17" }
        ])
    );
}

#[test]
fn empty_column_input_yields_no_columns() {
    assert!(split_column_names("").is_empty());
    assert_eq!(split_column_names("sm_10,,sm_30 "), vec!["sm_10", "sm_30"]);
}

#[test]
fn detail_type_parses_case_insensitive() {
    assert_eq!("Float".parse::<DetailType>().unwrap(), DetailType::Float);
    assert!("decimal".parse::<DetailType>().is_err());
}
