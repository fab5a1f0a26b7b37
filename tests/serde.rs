#![cfg(feature = "serde")]

use trackwire::track::{self, Encoded, TrackRecord};

/// The version 0 scenario: title "A", author "B", length 60000, source "yt".
const TEXT: &str = "AAAAAAAAAUEAAUIAAAAAAADqYAADaWQxAAAAAAJ5dA==";

#[test]
fn record_to_json() {
    let record = track::decode_with_requester(TEXT, Some(42)).unwrap();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "trackId": TEXT,
            "title": "A",
            "author": "B",
            "length": 60000,
            "identifier": "id1",
            "isStream": false,
            "uri": null,
            "thumbnail": null,
            "isrc": null,
            "source": "yt",
            "position": 0,
            "requester": 42,
        })
    );
}

#[test]
fn record_from_json() {
    let record = track::decode(TEXT).unwrap();
    let json = serde_json::to_string(&record).unwrap();

    let read: TrackRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(read, record);
}

#[test]
fn raw_track_id_becomes_base64() {
    let bytes = track::encode(&track::decode(TEXT).unwrap(), track::Version::V0).unwrap();
    let record = track::decode(bytes.clone()).unwrap();
    assert_eq!(record.track_id, Encoded::Bytes(bytes));

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(&format!("\"trackId\":\"{TEXT}\"")));

    let read: TrackRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(read.track_id, Encoded::Base64(TEXT.to_string()));
    assert_eq!(read.title, record.title);
}
