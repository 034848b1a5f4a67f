//! Behavioural tests for the deep-merge engine.
//!
//! The two [`MergeSemantics`] agree on mapping targets and diverge on null
//! and sequence targets: `Mappings` overwrites them, `ObjectLike` recurses
//! into them. `ObjectLike` also spreads string sources into per-character
//! index keys.

use anyhow::{Result, ensure};
use datakit::{DataError, MergeSemantics, deep_merge, deep_merge_with, merge_typed};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[rstest]
#[case::into_empty(json!({}), json!({"a": 1, "b": {"c": 2}}), json!({"a": 1, "b": {"c": 2}}))]
#[case::nested_union(
    json!({"a": 1, "b": {"c": 2}}),
    json!({"b": {"d": 3}}),
    json!({"a": 1, "b": {"c": 2, "d": 3}})
)]
#[case::scalar_source_keeps_mapping(json!({"a": {"x": 1}}), json!({"a": 5}), json!({"a": {"x": 1}}))]
#[case::source_wins_on_scalars(json!({"a": 1, "b": "old"}), json!({"b": "new"}), json!({"a": 1, "b": "new"}))]
#[case::mapping_replaces_scalar(json!({"a": 1}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
fn merges_follow_source_wins_rules(
    #[case] mut target: Value,
    #[case] source: Value,
    #[case] expected: Value,
) -> Result<()> {
    for semantics in [MergeSemantics::Mappings, MergeSemantics::ObjectLike] {
        let mut scratch = target.clone();
        deep_merge_with(&mut scratch, Some(&source), semantics)?;
        ensure!(scratch == expected, "{semantics:?}: got {scratch}");
    }
    deep_merge(&mut target, Some(&source))?;
    ensure!(target == expected, "default: got {target}");
    Ok(())
}

#[rstest]
#[case(json!({"a": 1, "b": {"c": 2}}))]
#[case(json!({}))]
#[case(json!(42))]
fn missing_source_leaves_target_unchanged(#[case] mut target: Value) -> Result<()> {
    let snapshot = target.clone();
    let merged = deep_merge(&mut target, None)?;
    ensure!(*merged == snapshot, "target changed to {merged}");
    Ok(())
}

#[test]
fn every_source_key_lands_in_target() -> Result<()> {
    let source = json!({"x": [1, 2], "y": null, "z": {"deep": true}});
    let mut target = json!({"w": 0, "x": "replaced"});
    deep_merge(&mut target, Some(&source))?;
    let Value::Object(map) = &target else {
        anyhow::bail!("target is no longer a mapping: {target}");
    };
    for key in ["w", "x", "y", "z"] {
        ensure!(map.contains_key(key), "missing key {key}");
    }
    ensure!(map.get("x") == Some(&json!([1, 2])));
    Ok(())
}

#[rstest]
#[case::null_target(
    json!({"slot": null}),
    json!({"slot": {"k": 1}}),
    json!({"slot": {"k": 1}})
)]
#[case::sequence_target(
    json!({"slot": [1, 2, 3]}),
    json!({"slot": [9]}),
    json!({"slot": [9]})
)]
fn mappings_semantics_overwrite_null_and_sequences(
    #[case] mut target: Value,
    #[case] source: Value,
    #[case] expected: Value,
) -> Result<()> {
    deep_merge_with(&mut target, Some(&source), MergeSemantics::Mappings)?;
    ensure!(target == expected, "got {target}");
    Ok(())
}

#[test]
fn object_like_semantics_merge_sequences_by_index() -> Result<()> {
    let mut target = json!({"slot": [1, 2, 3]});
    deep_merge_with(&mut target, Some(&json!({"slot": [9]})), MergeSemantics::ObjectLike)?;
    ensure!(target == json!({"slot": [9, 2, 3]}), "got {target}");
    Ok(())
}

#[test]
fn object_like_semantics_recurse_into_nested_sequence_items() -> Result<()> {
    let mut target = json!({"items": [{"id": 1, "on": false}]});
    let source = json!({"items": [{"on": true}, {"id": 2}]});
    deep_merge_with(&mut target, Some(&source), MergeSemantics::ObjectLike)?;
    ensure!(
        target == json!({"items": [{"id": 1, "on": true}, {"id": 2}]}),
        "got {target}"
    );
    Ok(())
}

#[test]
fn object_like_semantics_reject_keys_into_null() {
    let mut target = json!({"slot": null});
    let result = deep_merge_with(
        &mut target,
        Some(&json!({"slot": {"k": 1}})),
        MergeSemantics::ObjectLike,
    );
    assert!(
        matches!(&result, Err(DataError::Merge { path, found: "null" }) if path == "slot"),
        "unexpected result {result:?}"
    );
}

#[test]
fn object_like_null_target_keeps_null_for_scalar_source() -> Result<()> {
    let mut target = json!({"slot": null});
    deep_merge_with(&mut target, Some(&json!({"slot": 7})), MergeSemantics::ObjectLike)?;
    ensure!(target == json!({"slot": null}), "got {target}");
    Ok(())
}

#[rstest]
#[case::into_mapping(json!({"a": {"x": 1}}), json!({"a": {"x": 1, "0": "h", "1": "i"}}))]
#[case::into_sequence(json!({"a": ["q"]}), json!({"a": ["h", "i"]}))]
fn object_like_semantics_spread_strings_by_character(
    #[case] mut target: Value,
    #[case] expected: Value,
) -> Result<()> {
    deep_merge_with(&mut target, Some(&json!({"a": "hi"})), MergeSemantics::ObjectLike)?;
    ensure!(target == expected, "got {target}");
    Ok(())
}

#[test]
fn mappings_semantics_ignore_string_sources_for_mappings() -> Result<()> {
    let mut target = json!({"a": {"x": 1}});
    deep_merge(&mut target, Some(&json!({"a": "hi"})))?;
    ensure!(target == json!({"a": {"x": 1}}), "got {target}");
    Ok(())
}

#[test]
fn object_like_string_source_into_null_is_an_error() {
    let mut target = json!({"a": null});
    let result = deep_merge_with(&mut target, Some(&json!({"a": "hi"})), MergeSemantics::ObjectLike);
    assert!(
        matches!(&result, Err(DataError::Merge { found: "null", .. })),
        "unexpected result {result:?}"
    );
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
struct Limits {
    #[serde(skip_serializing_if = "Option::is_none")]
    cpu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<u32>,
    tags: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
struct Service {
    name: String,
    limits: Limits,
    owner: Option<String>,
}

#[test]
fn typed_merge_keeps_unset_optional_fields() -> Result<()> {
    let mut base = Service {
        name: "api".to_owned(),
        limits: Limits {
            cpu: Some(2),
            memory: Some(512),
            tags: vec!["blue".to_owned()],
        },
        owner: Some("ops".to_owned()),
    };
    let patch = Service {
        name: "api".to_owned(),
        limits: Limits {
            cpu: None,
            memory: Some(1024),
            tags: vec!["green".to_owned()],
        },
        owner: Some("ops".to_owned()),
    };
    merge_typed(&mut base, Some(&patch))?;
    ensure!(base.limits.cpu == Some(2));
    ensure!(base.limits.memory == Some(1024));
    ensure!(base.limits.tags == ["green"]);
    Ok(())
}

#[test]
fn typed_merge_overwrites_with_serialised_none() -> Result<()> {
    let mut base = Service {
        owner: Some("ops".to_owned()),
        ..Service::default()
    };
    let patch = Service::default();
    merge_typed(&mut base, Some(&patch))?;
    ensure!(base.owner.is_none(), "owner should be cleared, got {:?}", base.owner);
    Ok(())
}

#[test]
fn typed_merge_without_source_is_identity() -> Result<()> {
    let mut base = Service {
        name: "solo".to_owned(),
        ..Service::default()
    };
    let snapshot = base.clone();
    merge_typed(&mut base, None)?;
    ensure!(base == snapshot);
    Ok(())
}
