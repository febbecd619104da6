use std::fmt;

use super::TestResult;
use crate::encoder::Encoder;

pub(super) fn run_roundtrip_tests<T, E, F>(factory: &F, samples: &[T]) -> Vec<TestResult>
where
    T: PartialEq + fmt::Debug,
    E: Encoder<T>,
    F: Fn() -> E,
{
    vec![
        TestResult::from_result(
            "roundtrip",
            "decode_returns_encoded_value",
            decode_returns_encoded_value(factory, samples),
        ),
        TestResult::from_result(
            "roundtrip",
            "fresh_instance_decodes_anothers_output",
            fresh_instance_decodes_anothers_output(factory, samples),
        ),
        TestResult::from_result(
            "roundtrip",
            "encode_does_not_consume_the_encoder",
            encode_does_not_consume_the_encoder(factory, samples),
        ),
    ]
}

fn decode_returns_encoded_value<T, E, F>(factory: &F, samples: &[T]) -> Result<(), String>
where
    T: PartialEq + fmt::Debug,
    E: Encoder<T>,
    F: Fn() -> E,
{
    let enc = factory();
    for sample in samples {
        let bytes = enc
            .encode(sample)
            .map_err(|e| format!("encode failed for {:?}: {}", sample, e))?;
        let back = enc
            .decode(&bytes)
            .map_err(|e| format!("decode failed for {:?}: {}", sample, e))?;
        if &back != sample {
            return Err(format!("round-trip mismatch: {:?} != {:?}", back, sample));
        }
    }
    Ok(())
}

fn fresh_instance_decodes_anothers_output<T, E, F>(factory: &F, samples: &[T]) -> Result<(), String>
where
    T: PartialEq + fmt::Debug,
    E: Encoder<T>,
    F: Fn() -> E,
{
    // Two instances from the same factory share a configuration, so bytes
    // written by one must be readable by the other.
    let writer = factory();
    let reader = factory();
    for sample in samples {
        let bytes = writer
            .encode(sample)
            .map_err(|e| format!("encode failed for {:?}: {}", sample, e))?;
        let back = reader
            .decode(&bytes)
            .map_err(|e| format!("fresh instance failed to decode {:?}: {}", sample, e))?;
        if &back != sample {
            return Err(format!(
                "cross-instance mismatch: {:?} != {:?}",
                back, sample
            ));
        }
    }
    Ok(())
}

fn encode_does_not_consume_the_encoder<T, E, F>(factory: &F, samples: &[T]) -> Result<(), String>
where
    T: PartialEq + fmt::Debug,
    E: Encoder<T>,
    F: Fn() -> E,
{
    let enc = factory();
    let Some(sample) = samples.first() else {
        return Ok(());
    };
    let first = enc
        .encode(sample)
        .map_err(|e| format!("first encode failed: {}", e))?;
    let second = enc
        .encode(sample)
        .map_err(|e| format!("second encode failed: {}", e))?;
    let back = enc
        .decode(&second)
        .map_err(|e| format!("decode after repeated encode failed: {}", e))?;
    if &back != sample {
        return Err(format!("repeated-encode mismatch: {:?} != {:?}", back, sample));
    }
    let _ = first;
    Ok(())
}
