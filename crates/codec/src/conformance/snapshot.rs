use super::TestResult;
use crate::encoder::Encoder;
use crate::snapshot::ConfigSnapshot;

pub(super) fn run_snapshot_tests<T, E, F>(factory: &F) -> Vec<TestResult>
where
    E: Encoder<T>,
    F: Fn() -> E,
{
    vec![
        TestResult::from_result(
            "snapshot",
            "snapshot_is_stable_across_calls",
            snapshot_is_stable_across_calls(factory),
        ),
        TestResult::from_result(
            "snapshot",
            "snapshot_equal_across_instances",
            snapshot_equal_across_instances(factory),
        ),
        TestResult::from_result(
            "snapshot",
            "snapshot_survives_persistence",
            snapshot_survives_persistence(factory),
        ),
        TestResult::from_result(
            "snapshot",
            "snapshot_has_nonempty_format_id",
            snapshot_has_nonempty_format_id(factory),
        ),
    ]
}

fn snapshot_is_stable_across_calls<T, E, F>(factory: &F) -> Result<(), String>
where
    E: Encoder<T>,
    F: Fn() -> E,
{
    let enc = factory();
    let first = enc.snapshot();
    let second = enc.snapshot();
    if first != second {
        return Err(format!("snapshot changed between calls: {:?} != {:?}", first, second));
    }
    Ok(())
}

fn snapshot_equal_across_instances<T, E, F>(factory: &F) -> Result<(), String>
where
    E: Encoder<T>,
    F: Fn() -> E,
{
    let a = factory().snapshot();
    let b = factory().snapshot();
    if a != b {
        return Err(format!(
            "equally-configured instances disagree on snapshot: {:?} != {:?}",
            a, b
        ));
    }
    Ok(())
}

fn snapshot_survives_persistence<T, E, F>(factory: &F) -> Result<(), String>
where
    E: Encoder<T>,
    F: Fn() -> E,
{
    // The snapshot is durably stored by callers; it must come back intact.
    let original = factory().snapshot();
    let stored =
        serde_json::to_string(&original).map_err(|e| format!("snapshot serialize failed: {}", e))?;
    let restored: ConfigSnapshot =
        serde_json::from_str(&stored).map_err(|e| format!("snapshot deserialize failed: {}", e))?;
    if restored != original {
        return Err(format!(
            "snapshot mutated by persistence: {:?} != {:?}",
            restored, original
        ));
    }
    Ok(())
}

fn snapshot_has_nonempty_format_id<T, E, F>(factory: &F) -> Result<(), String>
where
    E: Encoder<T>,
    F: Fn() -> E,
{
    let snap = factory().snapshot();
    if snap.format_id.is_empty() {
        return Err("snapshot format_id is empty".to_string());
    }
    Ok(())
}
