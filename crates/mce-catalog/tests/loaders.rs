use std::fs;
use std::path::PathBuf;

use mce_catalog::{CatalogError, ReferenceData, load_default_catalog, resolve_catalog_path};
use mce_model::RecordId;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "mce-catalog-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn loads_bundled_catalog() {
    let catalog = load_default_catalog().expect("load bundled catalog");
    assert!(!catalog.authors().is_empty());
    assert!(!catalog.units().is_empty());
    assert!(!catalog.variables().is_empty());
    assert!(!catalog.licenses().is_empty());
    assert!(!catalog.keywords().is_empty());
    assert_eq!(catalog.authors()[0].id, RecordId::Int(1));
}

#[test]
fn missing_keys_are_empty() {
    let catalog = ReferenceData::parse(r#"{ "author": [{ "id": 1, "label": "A B" }] }"#)
        .expect("parse partial catalog");
    assert_eq!(catalog.authors().len(), 1);
    assert!(catalog.units().is_empty());
    assert!(catalog.variables().is_empty());
    assert!(catalog.licenses().is_empty());
    assert!(catalog.keywords().is_empty());
    assert!(!catalog.is_empty());
    assert!(ReferenceData::parse("{}").unwrap().is_empty());
}

#[test]
fn keywords_keep_file_order() {
    let catalog = ReferenceData::parse(
        r#"{ "keywords": { "z": "Zeta", "a": "Alpha", "m": "Mu" } }"#,
    )
    .unwrap();
    let keys: Vec<&str> = catalog.keywords().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    assert_eq!(catalog.keyword_label("a"), Some("Alpha"));
    assert_eq!(catalog.keyword_label("b"), None);
}

#[test]
fn extra_entry_fields_are_ignored() {
    let catalog = ReferenceData::parse(
        r#"{ "unit": [{ "id": 3, "label": "meter [m]", "name": "meter", "si": "m" }],
             "license": [{ "id": "cc-by", "label": "CC BY 4.0", "link": "https://example.org" }] }"#,
    )
    .unwrap();
    assert_eq!(catalog.units()[0].label, "meter [m]");
    assert_eq!(
        catalog.license_label(&RecordId::from("cc-by")),
        Some("CC BY 4.0")
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = unique_temp_dir("missing");
    let err = ReferenceData::load(&dir.join("BASE_DATA.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = unique_temp_dir("malformed");
    let path = dir.join("BASE_DATA.json");
    fs::write(&path, r#"{ "author": [{ "label": "no id" }] }"#).unwrap();
    let err = ReferenceData::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
    assert!(err.to_string().contains("BASE_DATA.json"));
}

#[test]
fn loads_catalog_from_file() {
    let dir = unique_temp_dir("file");
    let path = dir.join("catalog.json");
    fs::write(
        &path,
        r#"{ "variable": [{ "id": 1, "label": "air temperature [Ta]" }] }"#,
    )
    .unwrap();
    let catalog = ReferenceData::load(&path).expect("load catalog");
    assert_eq!(catalog.variables().len(), 1);
}

#[test]
fn explicit_catalog_path_wins() {
    let explicit = PathBuf::from("/tmp/elsewhere.json");
    assert_eq!(resolve_catalog_path(Some(&explicit)), explicit);
}
