//! Conformance test suite for [`Encoder`] implementations.
//!
//! This module provides an implementation-agnostic test suite that any
//! `Encoder` can run to verify its contract obligations. The suite covers:
//!
//! - **Round-trip**: decode(encode(v)) == v, across fresh encoder instances
//! - **Snapshot**: snapshots are stable, equal across instances, and
//!   survive serde persistence unchanged
//! - **Confrontation**: an encoder confronted with its own snapshot reports
//!   compatible, and confrontation leaves the encoder usable
//!
//! # Usage
//!
//! Encoder crates call [`run_conformance_suite`] with a factory function
//! that creates a fresh encoder for each test, plus sample values:
//!
//! ```
//! use stratum_codec::conformance::run_conformance_suite;
//! use stratum_codec::JsonEncoder;
//!
//! let report = run_conformance_suite(|| JsonEncoder::<u64>::new(), &[0, 7, u64::MAX]);
//! assert!(report.failed == 0, "{report}");
//! ```

mod confront;
mod roundtrip;
mod snapshot;

use std::fmt;

use crate::encoder::Encoder;

/// Result of a single conformance test.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test category (e.g. "roundtrip", "snapshot", "confront").
    pub category: String,
    /// Test name (e.g. "decode_returns_encoded_value").
    pub name: String,
    /// Whether the test passed.
    pub passed: bool,
    /// Error message if the test failed.
    pub message: Option<String>,
}

impl TestResult {
    fn from_result(category: &str, name: &str, result: Result<(), String>) -> Self {
        let (passed, message) = match result {
            Ok(()) => (true, None),
            Err(msg) => (false, Some(msg)),
        };
        Self {
            category: category.to_string(),
            name: name.to_string(),
            passed,
            message,
        }
    }
}

/// Aggregated report from a full conformance suite run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Encoder conformance: {}/{} passed ({} failed)",
            self.passed, self.total, self.failed
        )?;
        for r in &self.results {
            if !r.passed {
                writeln!(
                    f,
                    "  FAIL [{}/{}]: {}",
                    r.category,
                    r.name,
                    r.message.as_deref().unwrap_or("(no message)")
                )?;
            }
        }
        Ok(())
    }
}

/// Run the full conformance suite against an encoder implementation.
///
/// The `factory` function is called once per test to create a fresh encoder,
/// ensuring test isolation. `samples` should cover the interesting values of
/// `T` (boundaries, empties, typical payloads).
pub fn run_conformance_suite<T, E, F>(factory: F, samples: &[T]) -> ConformanceReport
where
    T: PartialEq + fmt::Debug,
    E: Encoder<T>,
    F: Fn() -> E,
{
    let mut results = Vec::new();

    results.extend(roundtrip::run_roundtrip_tests(&factory, samples));
    results.extend(snapshot::run_snapshot_tests(&factory));
    results.extend(confront::run_confront_tests(&factory, samples));

    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    ConformanceReport {
        results,
        passed,
        failed: total - passed,
        total,
    }
}
