//! Tests for the Sarica error handling system.

use sarica_core::errors::error_code;
use sarica_core::errors::*;

#[test]
fn every_error_has_a_code() {
    let storage = StorageError::Sqlite {
        message: "disk I/O error".into(),
    };
    assert_eq!(storage.error_code(), error_code::STORAGE_ERROR);

    let mismatch = StorageError::SchemaMismatch {
        found: 7,
        expected: 1,
    };
    assert_eq!(mismatch.error_code(), error_code::SCHEMA_MISMATCH);

    let essence = EssenceError::UnknownCategory {
        name: "Wizard".into(),
    };
    assert_eq!(essence.error_code(), error_code::UNKNOWN_CATEGORY);

    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn from_conversions_keep_the_inner_code() {
    let err: SaricaError = StorageError::SchemaMismatch {
        found: 2,
        expected: 1,
    }
    .into();
    assert!(matches!(err, SaricaError::Storage(StorageError::SchemaMismatch { .. })));
    assert_eq!(err.error_code(), error_code::SCHEMA_MISMATCH);

    let err: SaricaError = EssenceError::UnknownCategory { name: "x".into() }.into();
    assert_eq!(err.error_code(), error_code::UNKNOWN_CATEGORY);
}

#[test]
fn fatal_classification() {
    assert!(StorageError::SchemaMismatch {
        found: 2,
        expected: 1
    }
    .is_fatal());
    assert!(!StorageError::Sqlite {
        message: "busy".into()
    }
    .is_fatal());
}

#[test]
fn coded_string_format() {
    let err = EssenceError::UnknownCategory {
        name: "Wizard".into(),
    };
    assert_eq!(err.coded_string(), "[UNKNOWN_CATEGORY] unknown category: Wizard");
}
