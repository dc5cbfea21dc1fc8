//! End-to-end tree pipelines and generated-input properties.

use keel_json::{JsonError, Node, engine};
use proptest::prelude::*;

#[test]
fn parse_navigate_update_serialize_pipeline() {
    let updated = engine::parse(r#"{"user":{"name":"alice"},"tags":["a"]}"#)
        .flat_map(|doc| doc.update_path("user.city", "berlin"))
        .map(|doc| doc.prune())
        .unwrap();

    assert_eq!(updated.get_text("user.name"), Some("alice".to_string()));
    assert_eq!(updated.get_text("user.city"), Some("berlin".to_string()));

    let text = engine::serialize(&updated).unwrap();
    let back = engine::parse(&text).unwrap();
    assert_eq!(back, updated);
}

#[test]
fn failures_short_circuit_through_the_pipeline() {
    let out = engine::parse("{broken")
        .flat_map(|doc| doc.update_path("a.b", 1))
        .map(|doc| doc.prune());
    assert!(matches!(out.unwrap_err(), JsonError::Parse { .. }));
}

#[test]
fn recover_supplies_a_fallback_document() {
    let doc = engine::parse("not json").recover(|_| Node::object_empty());
    assert_eq!(doc.unwrap(), Node::object_empty());
}

#[test]
fn merge_chain_applies_overlays_left_to_right() {
    let base = engine::parse(r#"{"log":{"level":"info","format":"text"}}"#).unwrap();
    let env = engine::parse(r#"{"log":{"level":"debug"}}"#).unwrap();
    let cli = engine::parse(r#"{"log":{"format":"json"}}"#).unwrap();

    let effective = base.merge(&env).merge(&cli);
    assert_eq!(effective.get_text("log.level"), Some("debug".to_string()));
    assert_eq!(effective.get_text("log.format"), Some("json".to_string()));
}

// ---------------------------------------------------------------------------
// Generated-input properties
// ---------------------------------------------------------------------------

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::boolean),
        any::<i64>().prop_map(Node::integer),
        "[a-z]{0,6}".prop_map(Node::text),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Node::array),
            proptest::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(Node::object),
        ]
    })
}

proptest! {
    #[test]
    fn prune_is_idempotent(node in arb_node()) {
        let once = node.prune();
        prop_assert_eq!(once.prune(), once);
    }

    #[test]
    fn merge_with_empty_overlay_is_identity_on_objects(node in arb_node()) {
        prop_assume!(node.is_object());
        prop_assert_eq!(node.merge(&Node::object_empty()), node);
    }

    #[test]
    fn merge_result_keys_are_a_union(a in arb_node(), b in arb_node()) {
        prop_assume!(a.is_object() && b.is_object());
        let merged = a.merge(&b);
        let merged_obj = merged.as_object().unwrap();
        for key in a.as_object().unwrap().keys() {
            prop_assert!(merged_obj.contains_key(key));
        }
        for key in b.as_object().unwrap().keys() {
            prop_assert!(merged_obj.contains_key(key));
        }
    }

    #[test]
    fn parse_serialize_round_trips_pruned_trees(node in arb_node()) {
        // Pruning first removes the null fields that serialization would
        // drop, so the round trip is exact.
        let pruned = node.prune();
        let text = engine::serialize(&pruned).unwrap();
        prop_assert_eq!(engine::parse(&text).unwrap(), pruned);
    }

    #[test]
    fn get_text_never_panics(node in arb_node(), path in "[a-z0-9.]{0,12}") {
        let _ = node.get_text(&path);
    }
}
