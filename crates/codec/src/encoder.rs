use crate::error::CodecError;
use crate::snapshot::ConfigSnapshot;

/// The encoder capability for Stratum state values.
///
/// An `Encoder<T>` serializes and deserializes values of a fixed type `T`,
/// describes its own configuration as a [`ConfigSnapshot`], and can be
/// confronted with a previously persisted snapshot to self-judge whether it
/// still reads bytes written under that configuration.
///
/// ## Snapshot semantics
///
/// `snapshot()` must fully describe the encoding: two encoders producing
/// equal snapshots must accept each other's bytes. Callers persist the
/// snapshot next to the data at write time and pass it back at restore time.
///
/// ## Confrontation
///
/// `confront(prior)` is the encoder's own compatibility judgment against a
/// prior snapshot. It must be a pure read of the encoder's configuration:
/// no I/O, no mutation. An encoder confronted with its own current snapshot
/// must report [`Verdict::Compatible`].
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync` so encoders can be shared across
/// the restore pipeline's worker threads. The restore layer never mutates
/// an encoder; integrators must not mutate one concurrently with a
/// `confront` call.
pub trait Encoder<T>: Send + Sync {
    /// Serialize a value into bytes.
    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Deserialize a value from bytes previously produced by a compatible
    /// encoder.
    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError>;

    /// Describe this encoder's current configuration.
    fn snapshot(&self) -> ConfigSnapshot;

    /// Judge whether this encoder reads data written under `prior`.
    fn confront(&self, prior: &ConfigSnapshot) -> Verdict<T>;
}

/// An encoder's self-judgment after confronting a prior snapshot.
pub enum Verdict<T> {
    /// The encoder reads the old bytes directly; no action needed.
    Compatible,
    /// The encoder cannot read the old bytes. It may supply a converter
    /// encoder able to decode them, or carry no converter at all.
    RequiresMigration {
        converter: Option<Box<dyn Encoder<T>>>,
    },
}

impl<T> Verdict<T> {
    /// A compatible verdict.
    pub fn compatible() -> Self {
        Verdict::Compatible
    }

    /// A migration verdict carrying a converter able to decode the old bytes.
    pub fn requires_migration(converter: Box<dyn Encoder<T>>) -> Self {
        Verdict::RequiresMigration {
            converter: Some(converter),
        }
    }

    /// A migration verdict with no converter. The encoder knows the old
    /// bytes are unreadable but cannot itself supply a reader for them.
    pub fn requires_migration_no_converter() -> Self {
        Verdict::RequiresMigration { converter: None }
    }

    pub fn is_compatible(&self) -> bool {
        matches!(self, Verdict::Compatible)
    }
}

impl<T> std::fmt::Debug for Verdict<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Compatible => write!(f, "Compatible"),
            Verdict::RequiresMigration { converter } => f
                .debug_struct("RequiresMigration")
                .field("converter", &converter.as_ref().map(|c| c.snapshot()))
                .finish(),
        }
    }
}
