// restage-core/tests/config_integration_tests.rs
use std::io::Write;

use tempfile::NamedTempFile;

use restage_core::{Manifest, RestageError};

#[test]
fn test_load_from_file() {
    let json = r#"[
        {
            "path": "conf/server.properties",
            "description": "server endpoint settings",
            "encoding": "utf8",
            "change": [
                {
                    "find": "endpoint=[[tochange]]/api",
                    "description": "per-stage endpoint host",
                    "changeto": {
                        "dev": "http://localhost:8080",
                        "prod": "https://api.example.com"
                    }
                }
            ]
        },
        {
            "path": "conf/legacy.ini",
            "encoding": "euckr",
            "change": []
        }
    ]"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let manifest = Manifest::load_from_file(file.path()).unwrap();
    assert_eq!(manifest.entries.len(), 2);
    assert_eq!(manifest.entries[0].path, "conf/server.properties");
    assert_eq!(manifest.entries[0].change.len(), 1);
    assert_eq!(
        manifest.entries[0].change[0].changeto["prod"],
        "https://api.example.com"
    );
    // optional fields default when omitted
    assert!(manifest.entries[1].description.is_empty());
    assert!(manifest.entries[1].change.is_empty());
}

#[test]
fn test_missing_manifest_is_a_read_error() {
    let err = Manifest::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, RestageError::ConfigRead(..)));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[ { \"path\": \"a.txt\", ").unwrap();

    let err = Manifest::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, RestageError::ConfigParse(..)));
}

#[test]
fn test_entry_missing_required_field_is_a_parse_error() {
    // "encoding" is required; "description"/"change" are not
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"[ { "path": "a.txt" } ]"#).unwrap();

    let err = Manifest::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, RestageError::ConfigParse(..)));
}

#[test]
fn test_unknown_encoding_parses_but_does_not_resolve() {
    // unknown identifiers survive parsing; they fail later, when the entry
    // is processed, so earlier entries' rewrites are preserved
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"[ { "path": "a.txt", "encoding": "shift-jis" } ]"#)
        .unwrap();

    let manifest = Manifest::load_from_file(file.path()).unwrap();
    assert_eq!(manifest.entries[0].encoding, "shift-jis");
    assert!(restage_core::transcoder_for(&manifest.entries[0].encoding).is_none());
}
