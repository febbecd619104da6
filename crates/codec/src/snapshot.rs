use serde::{Deserialize, Serialize};

/// A persisted description of how values were encoded at write time.
///
/// Produced by [`Encoder::snapshot`](crate::Encoder::snapshot) when state is
/// written, durably stored alongside the data by the caller, and handed back
/// at restore time so the current encoder can judge whether it still reads
/// the old bytes. Opaque to the restore layer: only the writing format's
/// encoder family interprets `config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// Identity of the encoder family that wrote the data (e.g. `"json"`).
    pub format_id: String,
    /// Version of the snapshot layout for that family.
    pub version: u32,
    /// Family-specific configuration payload.
    pub config: serde_json::Value,
}

impl ConfigSnapshot {
    pub fn new(format_id: impl Into<String>, version: u32, config: serde_json::Value) -> Self {
        ConfigSnapshot {
            format_id: format_id.into(),
            version,
            config,
        }
    }
}
