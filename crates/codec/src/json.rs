use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::encoder::{Encoder, Verdict};
use crate::error::CodecError;
use crate::snapshot::ConfigSnapshot;

/// Format id recorded in JSON encoder snapshots.
pub const JSON_FORMAT_ID: &str = "json";

/// Snapshot layout version for the JSON encoder family.
pub const JSON_SNAPSHOT_VERSION: u32 = 1;

/// A self-describing JSON encoder for any serde-capable type.
///
/// Because the wire form is self-describing, any snapshot written by the
/// `json` family is readable by any later `json` encoder: `confront` reports
/// compatible on a `format_id` match regardless of snapshot version. A
/// snapshot from a foreign format requires migration, and the JSON encoder
/// cannot supply a converter for bytes it did not write.
pub struct JsonEncoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonEncoder<T> {
    pub fn new() -> Self {
        JsonEncoder {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Encoder<T> for JsonEncoder<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::encode(JSON_FORMAT_ID, e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::decode(JSON_FORMAT_ID, e.to_string()))
    }

    fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot::new(
            JSON_FORMAT_ID,
            JSON_SNAPSHOT_VERSION,
            serde_json::Value::Null,
        )
    }

    fn confront(&self, prior: &ConfigSnapshot) -> Verdict<T> {
        if prior.format_id == JSON_FORMAT_ID {
            Verdict::compatible()
        } else {
            Verdict::requires_migration_no_converter()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_and_decodes_a_value() {
        let enc = JsonEncoder::<Vec<String>>::new();
        let value = vec!["a".to_string(), "b".to_string()];
        let bytes = enc.encode(&value).unwrap();
        assert_eq!(enc.decode(&bytes).unwrap(), value);
    }

    #[test]
    fn decode_rejects_garbage() {
        let enc = JsonEncoder::<u64>::new();
        let err = enc.decode(b"not json at all").unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
    }

    #[test]
    fn confront_own_snapshot_is_compatible() {
        let enc = JsonEncoder::<u64>::new();
        assert!(enc.confront(&enc.snapshot()).is_compatible());
    }

    #[test]
    fn confront_older_json_snapshot_is_compatible() {
        // Self-describing wire form: version skew within the family is fine.
        let enc = JsonEncoder::<u64>::new();
        let old = ConfigSnapshot::new(JSON_FORMAT_ID, 0, serde_json::Value::Null);
        assert!(enc.confront(&old).is_compatible());
    }

    #[test]
    fn confront_foreign_format_requires_migration_without_converter() {
        let enc = JsonEncoder::<u64>::new();
        let foreign = ConfigSnapshot::new("cbor", 3, serde_json::Value::Null);
        match enc.confront(&foreign) {
            Verdict::RequiresMigration { converter } => assert!(converter.is_none()),
            Verdict::Compatible => panic!("foreign format must not be compatible"),
        }
    }
}
