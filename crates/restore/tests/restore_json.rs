//! End-to-end restore scenarios with real encoders.
//!
//! Exercises the resolver against the JSON encoder and a legacy big-endian
//! integer encoder, including a full migrate path: decode the old bytes with
//! the resolved converter, re-encode with the new encoder.

use stratum_codec::{CodecError, ConfigSnapshot, Encoder, JsonEncoder, Verdict};
use stratum_restore::{resolve, PriorEncoder, Resolution, RestoreError};

/// A legacy fixed-width big-endian u64 encoding, the "old format" in these
/// scenarios. Cannot read anything but its own format and supplies no
/// converter for foreign snapshots.
struct BigEndianU64;

const BE_FORMAT_ID: &str = "be-u64";

impl Encoder<u64> for BigEndianU64 {
    fn encode(&self, value: &u64) -> Result<Vec<u8>, CodecError> {
        Ok(value.to_be_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<u64, CodecError> {
        let arr: [u8; 8] = bytes
            .try_into()
            .map_err(|_| CodecError::decode(BE_FORMAT_ID, "expected exactly 8 bytes"))?;
        Ok(u64::from_be_bytes(arr))
    }

    fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot::new(BE_FORMAT_ID, 1, serde_json::Value::Null)
    }

    fn confront(&self, prior: &ConfigSnapshot) -> Verdict<u64> {
        if prior.format_id == BE_FORMAT_ID {
            Verdict::compatible()
        } else {
            Verdict::requires_migration_no_converter()
        }
    }
}

#[test]
fn unchanged_format_restores_without_migration() {
    let new_enc = JsonEncoder::<u64>::new();
    let stored_snapshot = JsonEncoder::<u64>::new().snapshot();

    let resolution = resolve(
        PriorEncoder::Real(Box::new(JsonEncoder::<u64>::new())),
        Some(&stored_snapshot),
        &new_enc,
    )
    .unwrap();

    assert!(resolution.is_compatible());
}

#[test]
fn legacy_data_without_snapshot_is_assumed_compatible() {
    // Data written before snapshots were recorded at all.
    let new_enc = JsonEncoder::<u64>::new();
    let resolution = resolve(PriorEncoder::Absent, None, &new_enc).unwrap();
    assert!(resolution.is_compatible());
}

#[test]
fn format_change_migrates_through_the_prior_encoder() {
    // Written as big-endian u64, restoring with the JSON encoder.
    let old_enc = BigEndianU64;
    let stored_value: u64 = 0xDEAD_BEEF;
    let stored_bytes = old_enc.encode(&stored_value).unwrap();
    let stored_snapshot = old_enc.snapshot();

    let new_enc = JsonEncoder::<u64>::new();
    let resolution = resolve(
        PriorEncoder::Real(Box::new(BigEndianU64)),
        Some(&stored_snapshot),
        &new_enc,
    )
    .unwrap();

    let Resolution::Migrate { converter } = resolution else {
        panic!("format change must require migration");
    };

    // The migrate path: converter reads the old bytes, the new encoder
    // rewrites them.
    let value = converter.decode(&stored_bytes).unwrap();
    assert_eq!(value, stored_value);
    let rewritten = new_enc.encode(&value).unwrap();
    assert_eq!(new_enc.decode(&rewritten).unwrap(), stored_value);
}

#[test]
fn format_change_without_any_reader_fails_terminally() {
    // Old encoder implementation is gone, survived only as a placeholder,
    // and the JSON encoder cannot read foreign bytes.
    let stored_snapshot = BigEndianU64.snapshot();
    let new_enc = JsonEncoder::<u64>::new();

    let err = resolve(PriorEncoder::Placeholder, Some(&stored_snapshot), &new_enc).unwrap_err();

    assert!(matches!(
        err,
        RestoreError::MigrationUnavailable { ref format_id } if format_id == BE_FORMAT_ID
    ));
}
