use trackwire::{
    track::{self, EncodeError, Encoded, TrackRecord, Version},
    wire::WriteError,
};

fn record() -> TrackRecord {
    TrackRecord {
        track_id: Encoded::Bytes(Vec::new()),
        title: "Teardrop".to_string(),
        author: "Massive Attack".to_string(),
        length: 330_000,
        identifier: "u7K72X4eo_s".to_string(),
        is_stream: false,
        uri: Some("https://www.youtube.com/watch?v=u7K72X4eo_s".to_string()),
        thumbnail: None,
        isrc: None,
        source: "youtube".to_string(),
        position: 0,
        requester: None,
    }
}

/// Decode, replacing the payload with the original record's for comparison.
fn round_trip(record: &TrackRecord, version: Version) -> TrackRecord {
    let bytes = track::encode(record, version).unwrap();
    assert_eq!(bytes[4], u8::from(version));

    let mut decoded = track::decode(bytes).unwrap();
    decoded.track_id = record.track_id.clone();
    decoded
}

#[test]
fn round_trip_v0() {
    let record = TrackRecord {
        thumbnail: Some("https://i.ytimg.com/vi/u7K72X4eo_s/hqdefault.jpg".to_string()),
        ..record()
    };
    assert_eq!(round_trip(&record, Version::V0), record);
}

#[test]
fn round_trip_v2() {
    let record = TrackRecord {
        is_stream: true,
        length: u64::MAX,
        uri: None,
        ..record()
    };
    assert_eq!(round_trip(&record, Version::V2), record);
}

#[test]
fn round_trip_v3() {
    let record = TrackRecord {
        title: "Jóga".to_string(),
        author: "Björk".to_string(),
        length: (1 << 53) + 1,
        thumbnail: Some("https://i.scdn.co/image/ab67616d".to_string()),
        isrc: Some("GBAAN9700123".to_string()),
        ..record()
    };
    assert_eq!(round_trip(&record, Version::V3), record);
}

#[test]
fn caller_fields_are_not_encoded() {
    let record = TrackRecord {
        position: 12_000,
        requester: Some(42),
        ..record()
    };

    let decoded = round_trip(&record, Version::LATEST);
    assert_eq!(decoded.position, 0);
    assert_eq!(decoded.requester, None);
}

#[test]
fn encode_matches_fixtures() {
    for (path, version) in [
        ("fixtures/v0-video.b64", Version::V0),
        ("fixtures/v3-song.b64", Version::V3),
    ] {
        let text = std::fs::read_to_string(path).unwrap();
        let record = track::decode(text.trim()).unwrap();

        assert_eq!(track::encode_base64(&record, version).unwrap(), text.trim());
    }
}

#[test]
fn unrepresentable_thumbnail() {
    let record = TrackRecord {
        thumbnail: Some("https://example.com/art.png".to_string()),
        ..record()
    };

    let err = track::encode(&record, Version::V2).unwrap_err();
    assert_eq!(
        err,
        EncodeError::Unrepresentable {
            field: "thumbnail",
            version: Version::V2
        }
    );
}

#[test]
fn unrepresentable_isrc() {
    let record = TrackRecord {
        isrc: Some("GBAAN9700123".to_string()),
        ..record()
    };

    for version in [Version::V0, Version::V2] {
        let err = track::encode(&record, version).unwrap_err();
        assert_eq!(
            err,
            EncodeError::Unrepresentable {
                field: "isrc",
                version
            }
        );
    }
}

#[test]
fn text_too_long() {
    let record = TrackRecord {
        title: "a".repeat(70_000),
        ..record()
    };

    let err = track::encode(&record, Version::V3).unwrap_err();
    assert_eq!(err, EncodeError::Write(WriteError::TextTooLong(70_000)));
}

#[test]
fn longest_text() {
    let record = TrackRecord {
        title: "a".repeat(u16::MAX as usize),
        ..record()
    };
    assert_eq!(round_trip(&record, Version::V3), record);
}

#[test]
fn version_conversions() {
    assert_eq!(Version::try_from(0u8), Ok(Version::V0));
    assert_eq!(Version::try_from(2u8), Ok(Version::V2));
    assert_eq!(Version::try_from(3u8), Ok(Version::V3));
    assert!(Version::try_from(1u8).is_err());
    assert!(Version::try_from(255u8).is_err());
    assert_eq!(Version::LATEST.to_string(), "3");
}
