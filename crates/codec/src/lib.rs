//! stratum-codec: encoder capability contract for Stratum state encodings.
//!
//! An [`Encoder`] serializes and deserializes values of a fixed type,
//! describes its configuration as a persistable [`ConfigSnapshot`], and can
//! be confronted with a previously stored snapshot to self-judge whether it
//! still reads bytes written under that configuration (a [`Verdict`]).
//!
//! # Public API
//!
//! Key types are re-exported at the crate root:
//!
//! - [`Encoder`] -- the capability trait
//! - [`Verdict`] -- compatible / requires-migration self-judgment
//! - [`ConfigSnapshot`] -- persisted encoding description
//! - [`CodecError`] -- encode/decode failures
//! - [`JsonEncoder`] -- self-describing serde_json implementation
//!
//! The [`conformance`] module provides a test suite any `Encoder`
//! implementation can run against itself.

mod encoder;
mod error;
mod json;
mod snapshot;

pub mod conformance;

pub use encoder::{Encoder, Verdict};
pub use error::CodecError;
pub use json::{JsonEncoder, JSON_FORMAT_ID, JSON_SNAPSHOT_VERSION};
pub use snapshot::ConfigSnapshot;
