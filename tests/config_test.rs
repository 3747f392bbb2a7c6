// ==========================================
// RunParameters integration tests
// ==========================================
// Verifies JSON loading, field defaults and validation rules.
// ==========================================

use std::io::Write;
use stock_rebalancer::config::{ParameterError, RunParameters};
use stock_rebalancer::domain::types::TransferMode;
use tempfile::NamedTempFile;

fn write_json(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

#[test]
fn test_load_full_parameter_file() {
    let file = write_json(
        r#"{
            "min_days_out": 10.0,
            "target_days_in": 21.0,
            "min_movement_qty": 6,
            "include_pending_orders": true,
            "transfer_mode": "STORE_TO_STORE",
            "origin_stores": ["S01", "S02"],
            "destination_stores": ["S09"]
        }"#,
    );

    let params = RunParameters::from_json_file(file.path()).expect("load should succeed");

    assert_eq!(params.min_days_out, 10.0);
    assert_eq!(params.target_days_in, 21.0);
    assert_eq!(params.min_movement_qty, 6);
    assert!(params.include_pending_orders);
    assert_eq!(params.transfer_mode, TransferMode::StoreToStore);
    assert_eq!(params.origin_stores, vec!["S01", "S02"]);
    assert_eq!(params.destination_stores, vec!["S09"]);
}

#[test]
fn test_omitted_fields_take_defaults() {
    let file = write_json("{}");

    let params = RunParameters::from_json_file(file.path()).expect("load should succeed");

    assert_eq!(params.min_days_out, 7.0, "default outbound floor is 7 days");
    assert_eq!(params.target_days_in, 14.0, "default inbound target is 14 days");
    assert_eq!(params.min_movement_qty, 1);
    assert!(!params.include_pending_orders);
    assert_eq!(params.transfer_mode, TransferMode::AllToAll);
    assert!(params.origin_stores.is_empty());
    assert!(params.destination_stores.is_empty());
}

#[test]
fn test_missing_file_rejected() {
    let err = RunParameters::from_json_file("no_such_params.json").unwrap_err();
    assert!(matches!(err, ParameterError::FileNotFound(_)));
}

#[test]
fn test_malformed_json_rejected() {
    let file = write_json("{ not json");
    let err = RunParameters::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ParameterError::JsonParseError(_)));
}

#[test]
fn test_negative_days_rejected() {
    let file = write_json(r#"{ "min_days_out": -1.0 }"#);
    let err = RunParameters::from_json_file(file.path()).unwrap_err();

    match err {
        ParameterError::NegativeNumber { field, value } => {
            assert_eq!(field, "min_days_out");
            assert_eq!(value, -1.0);
        }
        other => panic!("expected NegativeNumber, got {:?}", other),
    }
}

#[test]
fn test_non_finite_days_rejected() {
    // JSON cannot carry NaN, so exercise validate() directly
    let params = RunParameters {
        target_days_in: f64::NAN,
        ..RunParameters::default()
    };

    let err = params.validate().unwrap_err();
    assert!(matches!(
        err,
        ParameterError::NonFiniteNumber {
            field: "target_days_in",
            ..
        }
    ));
}

#[test]
fn test_negative_movement_threshold_rejected() {
    let file = write_json(r#"{ "min_movement_qty": -3 }"#);
    let err = RunParameters::from_json_file(file.path()).unwrap_err();

    assert!(matches!(
        err,
        ParameterError::NegativeNumber {
            field: "min_movement_qty",
            ..
        }
    ));
}

#[test]
fn test_store_to_store_requires_both_store_sets() {
    let no_origins = write_json(
        r#"{
            "transfer_mode": "STORE_TO_STORE",
            "destination_stores": ["S09"]
        }"#,
    );
    let err = RunParameters::from_json_file(no_origins.path()).unwrap_err();
    assert!(matches!(err, ParameterError::EmptyStoreSet { role: "origin" }));

    let no_destinations = write_json(
        r#"{
            "transfer_mode": "STORE_TO_STORE",
            "origin_stores": ["S01"]
        }"#,
    );
    let err = RunParameters::from_json_file(no_destinations.path()).unwrap_err();
    assert!(matches!(
        err,
        ParameterError::EmptyStoreSet { role: "destination" }
    ));
}

#[test]
fn test_all_to_all_ignores_store_lists() {
    // lists may be present but have no effect in ALL_TO_ALL mode
    let params = RunParameters {
        origin_stores: vec!["S01".to_string()],
        destination_stores: vec!["S02".to_string()],
        ..RunParameters::default()
    };

    params.validate().expect("lists are not an error in ALL_TO_ALL");
    assert!(params.is_eligible_origin("S99"));
    assert!(params.is_eligible_destination("S99"));
}

#[test]
fn test_store_to_store_eligibility() {
    let params = RunParameters {
        transfer_mode: TransferMode::StoreToStore,
        origin_stores: vec!["S01".to_string()],
        destination_stores: vec!["S02".to_string()],
        ..RunParameters::default()
    };

    assert!(params.is_eligible_origin("S01"));
    assert!(!params.is_eligible_origin("S02"));
    assert!(params.is_eligible_destination("S02"));
    assert!(!params.is_eligible_destination("S01"));
}

#[test]
fn test_zero_day_windows_are_valid() {
    let params = RunParameters {
        min_days_out: 0.0,
        target_days_in: 0.0,
        min_movement_qty: 0,
        ..RunParameters::default()
    };

    params.validate().expect("zeros are within range");
}
