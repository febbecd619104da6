use stratum_codec::{ConfigSnapshot, Encoder, Verdict};

use crate::error::RestoreError;

/// The encoder that wrote the data being restored, as far as the restore
/// pipeline could recover it.
///
/// A prior encoder can be fully usable (`Real`), recovered only as a
/// non-functional slot-filler that must never decode real data
/// (`Placeholder`), or missing entirely (`Absent`). Only a `Real` prior
/// encoder is ever used as a migration converter.
pub enum PriorEncoder<T> {
    /// A usable encoder instance that wrote the stored bytes. Guaranteed to
    /// read data it itself wrote, so it takes priority as the converter.
    Real(Box<dyn Encoder<T>>),
    /// A stand-in occupying the encoder slot without decode capability
    /// (e.g. the original encoder's implementation could not be loaded).
    Placeholder,
    /// No prior encoder was recovered at all.
    Absent,
}

impl<T> PriorEncoder<T> {
    /// True only for a usable prior encoder.
    pub fn is_real(&self) -> bool {
        matches!(self, PriorEncoder::Real(_))
    }
}

impl<T> std::fmt::Debug for PriorEncoder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorEncoder::Real(enc) => f.debug_tuple("Real").field(&enc.snapshot()).finish(),
            PriorEncoder::Placeholder => write!(f, "Placeholder"),
            PriorEncoder::Absent => write!(f, "Absent"),
        }
    }
}

/// The authoritative outcome of compatibility resolution.
///
/// Unlike [`Verdict`], a migration resolution always carries a converter:
/// the "migration required but nothing can read the old data" case is
/// [`RestoreError::MigrationUnavailable`], never a converter-less value.
pub enum Resolution<T> {
    /// The new encoder reads the stored bytes directly; restore proceeds
    /// with no conversion.
    Compatible,
    /// The stored bytes must be decoded with `converter` and re-encoded
    /// with the new encoder.
    Migrate { converter: Box<dyn Encoder<T>> },
}

impl<T> Resolution<T> {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Resolution::Compatible)
    }
}

impl<T> std::fmt::Debug for Resolution<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Compatible => write!(f, "Compatible"),
            Resolution::Migrate { converter } => f
                .debug_struct("Migrate")
                .field("converter", &converter.snapshot())
                .finish(),
        }
    }
}

/// Resolve the final compatibility outcome for one stateful field, combining
/// the prior encoder, the prior encoder's configuration snapshot, and the
/// new encoder.
///
/// The outcome is determined in fixed priority order:
///
/// 1. No configuration snapshot of the prior encoder exists: assume the new
///    encoder is compatible. Without a record of the old encoding there is
///    no basis to claim incompatibility; this is a deliberate optimistic
///    policy, not a proof.
/// 2. Confront the snapshot with the new encoder.
/// 3. If the new encoder reports compatible, that is the result.
/// 4. If migration is required and a real (non-placeholder) prior encoder
///    exists, use it as the converter. It overrides any converter the
///    verdict carried, because it is guaranteed to read data it wrote.
/// 5. Otherwise, if the verdict carried a converter, use that.
/// 6. Otherwise migration is required but cannot be performed: return
///    [`RestoreError::MigrationUnavailable`].
///
/// Pure apart from the single delegated `confront` call: no I/O, no
/// retries, safe to invoke concurrently for different fields.
pub fn resolve<T>(
    prior: PriorEncoder<T>,
    prior_snapshot: Option<&ConfigSnapshot>,
    new_encoder: &dyn Encoder<T>,
) -> Result<Resolution<T>, RestoreError> {
    let Some(snapshot) = prior_snapshot else {
        return Ok(Resolution::Compatible);
    };

    match new_encoder.confront(snapshot) {
        Verdict::Compatible => Ok(Resolution::Compatible),
        Verdict::RequiresMigration { converter } => {
            if let PriorEncoder::Real(prior_encoder) = prior {
                return Ok(Resolution::Migrate {
                    converter: prior_encoder,
                });
            }
            match converter {
                Some(converter) => Ok(Resolution::Migrate { converter }),
                None => Err(RestoreError::MigrationUnavailable {
                    format_id: snapshot.format_id.clone(),
                }),
            }
        }
    }
}
