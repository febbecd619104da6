use std::fmt;

use super::TestResult;
use crate::encoder::Encoder;

pub(super) fn run_confront_tests<T, E, F>(factory: &F, samples: &[T]) -> Vec<TestResult>
where
    T: PartialEq + fmt::Debug,
    E: Encoder<T>,
    F: Fn() -> E,
{
    vec![
        TestResult::from_result(
            "confront",
            "own_snapshot_is_compatible",
            own_snapshot_is_compatible(factory),
        ),
        TestResult::from_result(
            "confront",
            "sibling_snapshot_is_compatible",
            sibling_snapshot_is_compatible(factory),
        ),
        TestResult::from_result(
            "confront",
            "confront_leaves_encoder_usable",
            confront_leaves_encoder_usable(factory, samples),
        ),
    ]
}

fn own_snapshot_is_compatible<T, E, F>(factory: &F) -> Result<(), String>
where
    E: Encoder<T>,
    F: Fn() -> E,
{
    let enc = factory();
    let verdict = enc.confront(&enc.snapshot());
    if !verdict.is_compatible() {
        return Err("encoder reports its own current snapshot as incompatible".to_string());
    }
    Ok(())
}

fn sibling_snapshot_is_compatible<T, E, F>(factory: &F) -> Result<(), String>
where
    E: Encoder<T>,
    F: Fn() -> E,
{
    // A snapshot written by an equally-configured instance must be readable.
    let writer = factory();
    let reader = factory();
    let verdict = reader.confront(&writer.snapshot());
    if !verdict.is_compatible() {
        return Err("encoder rejects a snapshot from an equally-configured instance".to_string());
    }
    Ok(())
}

fn confront_leaves_encoder_usable<T, E, F>(factory: &F, samples: &[T]) -> Result<(), String>
where
    T: PartialEq + fmt::Debug,
    E: Encoder<T>,
    F: Fn() -> E,
{
    let enc = factory();
    let _ = enc.confront(&enc.snapshot());
    let Some(sample) = samples.first() else {
        return Ok(());
    };
    let bytes = enc
        .encode(sample)
        .map_err(|e| format!("encode after confront failed: {}", e))?;
    let back = enc
        .decode(&bytes)
        .map_err(|e| format!("decode after confront failed: {}", e))?;
    if &back != sample {
        return Err(format!(
            "round-trip after confront mismatch: {:?} != {:?}",
            back, sample
        ));
    }
    Ok(())
}
