use pretty_assertions::assert_eq;
use quakefeed_core::EventRecord;
use quakefeed_engine::{decode_feed, DecodeError};

#[test]
fn well_formed_feed_decodes_all_features_in_order() {
    let body = r#"{
        "type": "FeatureCollection",
        "features": [
            {"properties": {"mag": 6.1, "place": "10km N of Test", "time": 1000, "url": "http://x/1"}},
            {"properties": {"mag": 4.5, "place": "Fiji region", "time": 2000, "url": "http://x/2"}},
            {"properties": {"mag": 2.2, "place": "3km SW of Elsewhere", "time": 3000, "url": "http://x/3"}}
        ]
    }"#;

    let records = decode_feed(body).expect("decode ok");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].location, "10km N of Test");
    assert_eq!(records[1].location, "Fiji region");
    assert_eq!(records[2].location, "3km SW of Elsewhere");
    assert_eq!(records[1].magnitude, 4.5);
    assert_eq!(records[2].occurred_at_ms, 3000);
}

#[test]
fn spec_example_feed_yields_one_full_record() {
    let body =
        r#"{"features":[{"properties":{"mag":6.1,"place":"10km N of Test","time":1000,"url":"http://x"}}]}"#;

    let records = decode_feed(body).expect("decode ok");

    assert_eq!(
        records,
        vec![EventRecord {
            magnitude: 6.1,
            location: "10km N of Test".to_string(),
            occurred_at_ms: 1000,
            detail_url: Some("http://x".to_string()),
        }]
    );
}

#[test]
fn missing_mag_defaults_to_zero() {
    let body = r#"{"features":[{"properties":{"place":"Somewhere","time":5,"url":"http://x"}}]}"#;

    let records = decode_feed(body).expect("decode ok");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].magnitude, 0.0);
    assert_eq!(records[0].location, "Somewhere");
    assert_eq!(records[0].occurred_at_ms, 5);
}

#[test]
fn non_numeric_mag_defaults_to_zero() {
    let body = r#"{"features":[{"properties":{"mag":"strong","place":"Somewhere"}}]}"#;

    let records = decode_feed(body).expect("decode ok");

    assert_eq!(records[0].magnitude, 0.0);
}

#[test]
fn missing_optional_fields_fall_back_per_field() {
    let body = r#"{"features":[{"properties":{}}]}"#;

    let records = decode_feed(body).expect("decode ok");

    assert_eq!(
        records,
        vec![EventRecord {
            magnitude: 0.0,
            location: String::new(),
            occurred_at_ms: 0,
            detail_url: None,
        }]
    );
}

#[test]
fn feature_without_properties_is_skipped() {
    let body = r#"{"features":[
        {"geometry": {}},
        {"properties": {"mag": 3.3, "place": "Kept", "time": 1, "url": "http://x"}},
        {"properties": "not an object"}
    ]}"#;

    let records = decode_feed(body).expect("decode ok");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].location, "Kept");
}

#[test]
fn empty_body_is_a_typed_error() {
    assert_eq!(decode_feed(""), Err(DecodeError::EmptyResponse));
    assert_eq!(decode_feed("   \n"), Err(DecodeError::EmptyResponse));
}

#[test]
fn missing_features_array_is_malformed_root() {
    let err = decode_feed(r#"{"metadata": {}}"#).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedRoot(_)));

    let err = decode_feed(r#"{"features": "nope"}"#).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedRoot(_)));
}

#[test]
fn json_syntax_error_is_malformed_root() {
    let err = decode_feed("{not json").unwrap_err();
    assert!(matches!(err, DecodeError::MalformedRoot(_)));
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{
        "metadata": {"count": 1},
        "features": [
            {"id": "ev1", "geometry": {"type": "Point"},
             "properties": {"mag": 5.0, "place": "P", "time": 9, "url": "http://x", "tsunami": 0}}
        ],
        "bbox": [1, 2, 3]
    }"#;

    let records = decode_feed(body).expect("decode ok");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].magnitude, 5.0);
}
