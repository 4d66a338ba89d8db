//! Tests for entry projections.

use mce_model::{DetailRow, DetailValue, EntryRecord, LicenseRef, Location, RecordId, Resolved};
use mce_output::{
    OutputFormat, PythonSnippetOptions, generate_python_snippet, render, to_json_compact,
    to_json_pretty,
};

fn test_record() -> EntryRecord {
    EntryRecord {
        title: "Stream gauge".to_string(),
        abstract_text: String::new(),
        external_id: String::new(),
        location: Location::default(),
        embargo: false,
        license: LicenseRef {
            id: Some(RecordId::Int(2)),
        },
        keywords: vec!["kw-air".to_string()],
        author: Resolved::reference(1),
        coauthors: vec![],
        variable: Resolved::reference(4),
        details: vec![DetailRow::new("depth", DetailValue::Float(3.5))],
    }
}

#[test]
fn python_snippet() {
    let snippet = generate_python_snippet(&test_record(), &PythonSnippetOptions::default())
        .expect("generate snippet");
    insta::assert_snapshot!(snippet);
}

#[test]
fn compact_json_keeps_field_order() {
    let json = to_json_compact(&test_record()).unwrap();
    assert_eq!(
        json,
        r#"{"title":"Stream gauge","abstract":"","external_id":"","location":"SRID=4326;POINT (8.415447 49.010113)","embargo":false,"license":{"id":2},"keywords":["kw-air"],"author":{"id":1},"variable":{"id":4},"details":[{"key":"depth","value":3.5}]}"#
    );
}

#[test]
fn pretty_json_parses_back() {
    let text = to_json_pretty(&test_record()).unwrap();
    assert!(text.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["author"], serde_json::json!({ "id": 1 }));
    assert!(value.get("coauthors").is_none());
}

#[test]
fn projections_are_idempotent() {
    let record = test_record();
    let options = PythonSnippetOptions::default();
    for format in [OutputFormat::Json, OutputFormat::Python] {
        let first = render(&record, format, &options).unwrap();
        let second = render(&record, format, &options).unwrap();
        let third = render(&record, format, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}

#[test]
fn python_snippet_embeds_escaped_json_verbatim() {
    let mut record = test_record();
    record.title = r#"say "hi" \ bye"#.to_string();
    let snippet = render(&record, OutputFormat::Python, &PythonSnippetOptions::default()).unwrap();
    assert!(snippet.contains(r#"json.loads(r"""{"title":"say \"hi\" \\ bye","#));
    assert!(snippet.contains(&to_json_compact(&record).unwrap()));
}

#[test]
fn python_snippet_quotes_connection() {
    let options = PythonSnippetOptions {
        connection: Some("postgresql://user@localhost/metacatalog".to_string()),
    };
    let snippet = generate_python_snippet(&test_record(), &options).unwrap();
    assert!(snippet.contains(
        r#"session = api.connect_database("postgresql://user@localhost/metacatalog")"#
    ));
    assert_eq!(
        render(&test_record(), OutputFormat::Python, &options).unwrap(),
        snippet
    );
    assert_eq!(
        render(&test_record(), OutputFormat::Json, &options).unwrap(),
        to_json_pretty(&test_record()).unwrap()
    );
}

#[test]
fn output_format_parses() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("py".parse::<OutputFormat>().unwrap(), OutputFormat::Python);
    assert!("yaml".parse::<OutputFormat>().is_err());
}
