//! stratum-restore: encoding-compatibility resolution for state restore.
//!
//! When previously persisted state is restored, the encoding used to write
//! it may have evolved since. This crate implements the decision procedure
//! that combines the prior encoder (if still usable), the prior encoder's
//! persisted [`ConfigSnapshot`](stratum_codec::ConfigSnapshot), and the new
//! encoder's own compatibility judgment into one authoritative outcome:
//! restore directly, migrate through a converter, or fail because nothing
//! can read the old data.
//!
//! The single entry point is [`resolve`]. It performs no I/O and no data
//! conversion; the actual decode/re-encode of migrated state is the
//! caller's job, using the converter a [`Resolution::Migrate`] carries.

mod error;
mod resolve;

pub use error::RestoreError;
pub use resolve::{resolve, PriorEncoder, Resolution};
