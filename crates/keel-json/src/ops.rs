//! Persistent tree editing: deep merge, pruning, path updates.
//!
//! Every operation here takes its inputs by reference and returns a fresh
//! tree; no input is ever aliased or mutated in place.

use indexmap::IndexMap;

use crate::error::{JsonError, JsonOutcome};
use crate::node::Node;
use crate::path::{PathSegment, split_path};

impl Node {
    /// Deep-merge `overlay` into this tree.
    ///
    /// When both sides are objects the key sets are unioned; a key present
    /// on both sides merges recursively when both values are objects and
    /// is otherwise taken from the overlay. Arrays are replaced wholesale,
    /// never concatenated. When either side is not an object the overlay
    /// replaces the base entirely.
    #[must_use]
    pub fn merge(&self, overlay: &Node) -> Node {
        let (Node::Object(base), Node::Object(over)) = (self, overlay) else {
            return overlay.clone();
        };

        let mut out = base.clone();
        for (key, over_value) in over {
            match (out.get(key), over_value) {
                (Some(Node::Object(_)), Node::Object(_)) => {
                    let merged = out[key].merge(over_value);
                    out.insert(key.clone(), merged);
                }
                _ => {
                    out.insert(key.clone(), over_value.clone());
                }
            }
        }
        Node::Object(out)
    }

    /// Recursively drop empty content, children first.
    ///
    /// Removed from containers: null markers, empty text, empty arrays,
    /// empty objects. A container that becomes empty only after its
    /// children are pruned is itself dropped from its parent, so the
    /// operation is idempotent. Scalars at the root pass through.
    #[must_use]
    pub fn prune(&self) -> Node {
        match self {
            Node::Object(map) => {
                let mut out = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    let pruned = value.prune();
                    if !pruned.is_prunable() {
                        out.insert(key.clone(), pruned);
                    }
                }
                Node::Object(out)
            }
            Node::Array(items) => Node::Array(
                items
                    .iter()
                    .map(Node::prune)
                    .filter(|item| !item.is_prunable())
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }

    /// `true` for content that pruning drops from its parent.
    fn is_prunable(&self) -> bool {
        match self {
            Node::Null => true,
            Node::Text(t) => t.is_empty(),
            Node::Array(items) => items.is_empty(),
            Node::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Set `value` at a dot path, returning the updated tree.
    ///
    /// Missing intermediate steps are created as empty objects. An
    /// existing intermediate of the wrong shape fails: an index segment
    /// needs an array (and an in-bounds element), a key segment needs an
    /// object. The final segment is always written as an object key, so
    /// the parent of the write must be an object.
    pub fn update_path(&self, path: &str, value: impl Into<Node>) -> JsonOutcome<Node> {
        let segments = split_path(path);
        set_at(self, &segments, value.into()).into()
    }

    /// Iterate the elements of an array node.
    ///
    /// Restartable and finite; a non-array yields an empty sequence
    /// rather than an error.
    pub fn elements(&self) -> std::slice::Iter<'_, Node> {
        self.as_array().map(<[Node]>::iter).unwrap_or_default()
    }
}

fn set_at(current: &Node, segments: &[PathSegment], value: Node) -> Result<Node, JsonError> {
    let (segment, rest) = match segments {
        [] => return Err(JsonError::navigation("set", current.kind(), "")),
        [segment, rest @ ..] => (segment, rest),
    };

    // Terminal step: the raw segment is always written as an object key,
    // digits included.
    if rest.is_empty() {
        let Node::Object(map) = current else {
            return Err(JsonError::navigation(
                "set property",
                current.kind(),
                segment_text(segment),
            ));
        };
        let mut out = map.clone();
        out.insert(segment_text(segment), value);
        return Ok(Node::Object(out));
    }

    match segment {
        PathSegment::Index(index) => {
            let Node::Array(items) = current else {
                return Err(JsonError::navigation(
                    "index",
                    current.kind(),
                    segment_text(segment),
                ));
            };
            let child = items.get(*index).ok_or_else(|| {
                JsonError::navigation("index", current.kind(), segment_text(segment))
            })?;
            let updated = set_at(child, rest, value)?;
            let mut out = items.clone();
            out[*index] = updated;
            Ok(Node::Array(out))
        }
        PathSegment::Key(key) => {
            let Node::Object(map) = current else {
                return Err(JsonError::navigation(
                    "access property",
                    current.kind(),
                    key.clone(),
                ));
            };
            // Missing intermediate: create an empty object to descend into.
            let child = map.get(key).cloned().unwrap_or_else(Node::object_empty);
            let updated = set_at(&child, rest, value)?;
            let mut out = map.clone();
            out.insert(key.clone(), updated);
            Ok(Node::Object(out))
        }
    }
}

fn segment_text(segment: &PathSegment) -> String {
    match segment {
        PathSegment::Key(key) => key.clone(),
        PathSegment::Index(index) => index.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn node(json: &str) -> Node {
        Node::from_str(json).unwrap()
    }

    #[test]
    fn test_merge_recurses_on_objects() {
        let base = node(r#"{"a":1,"b":{"x":1,"y":2}}"#);
        let overlay = node(r#"{"b":{"y":9,"z":3}}"#);
        let merged = base.merge(&overlay);
        assert_eq!(merged, node(r#"{"a":1,"b":{"x":1,"y":9,"z":3}}"#));
        // Inputs untouched.
        assert_eq!(base, node(r#"{"a":1,"b":{"x":1,"y":2}}"#));
    }

    #[test]
    fn test_merge_replaces_arrays_wholesale() {
        let base = node(r#"{"tags":["x","y"]}"#);
        let overlay = node(r#"{"tags":["z"]}"#);
        let merged = base.merge(&overlay);
        assert_eq!(merged, node(r#"{"tags":["z"]}"#));
        assert_eq!(merged.get_key("tags").unwrap().as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_merge_overlay_wins_on_scalar_conflict() {
        let merged = node(r#"{"a":1,"b":2}"#).merge(&node(r#"{"b":"two"}"#));
        assert_eq!(merged, node(r#"{"a":1,"b":"two"}"#));
    }

    #[test]
    fn test_merge_non_object_side_replaces() {
        assert_eq!(node(r#"{"a":1}"#).merge(&node("[1,2]")), node("[1,2]"));
        assert_eq!(node("5").merge(&node(r#"{"a":1}"#)), node(r#"{"a":1}"#));
    }

    #[test]
    fn test_prune_drops_empty_content() {
        let pruned = node(r#"{"a":"x","b":null,"c":"","d":[],"e":{}}"#).prune();
        assert_eq!(pruned, node(r#"{"a":"x"}"#));
    }

    #[test]
    fn test_prune_is_bottom_up() {
        // "b" only becomes empty after its own children are pruned, and is
        // then dropped as well.
        let pruned = node(r#"{"a":1,"b":{"c":null,"d":{"e":""}}}"#).prune();
        assert_eq!(pruned, node(r#"{"a":1}"#));
    }

    #[test]
    fn test_prune_cleans_arrays() {
        let pruned = node(r#"{"items":[1,null,"",{},"x"]}"#).prune();
        assert_eq!(pruned, node(r#"{"items":[1,"x"]}"#));
    }

    #[test]
    fn test_prune_idempotent() {
        let doc = node(r#"{"a":{"b":[null,{"c":""}]},"d":1}"#);
        let once = doc.prune();
        assert_eq!(once.prune(), once);
    }

    #[test]
    fn test_prune_scalar_root_passes_through() {
        assert_eq!(node("5").prune(), node("5"));
        assert_eq!(Node::Null.prune(), Node::Null);
    }

    #[test]
    fn test_update_path_creates_intermediates() {
        let doc = node(r#"{"a":1}"#);
        let updated = doc.update_path("b.c", 5).unwrap();
        assert_eq!(updated.get_text("b.c"), Some("5".to_string()));
        assert_eq!(updated.get_text("a"), Some("1".to_string()));
        // Persistent: the original is unchanged.
        assert_eq!(doc, node(r#"{"a":1}"#));
    }

    #[test]
    fn test_update_path_overwrites() {
        let updated = node(r#"{"a":{"b":1}}"#).update_path("a.b", "two").unwrap();
        assert_eq!(updated, node(r#"{"a":{"b":"two"}}"#));
    }

    #[test]
    fn test_update_path_through_array_index() {
        let updated = node(r#"{"users":[{"name":"alice"}]}"#)
            .update_path("users.0.name", "carol")
            .unwrap();
        assert_eq!(updated.get_text("users.0.name"), Some("carol".to_string()));
    }

    #[test]
    fn test_update_path_type_mismatches_fail() {
        // Index segment over an object.
        let out = node(r#"{"a":{"b":1}}"#).update_path("a.0.c", 1);
        assert!(matches!(out.unwrap_err(), JsonError::Navigation { .. }));

        // Key segment over an array.
        let out = node(r#"{"a":[1,2]}"#).update_path("a.b.c", 1);
        assert!(matches!(out.unwrap_err(), JsonError::Navigation { .. }));

        // Terminal write into an array is unsupported.
        let out = node(r#"{"a":[1,2]}"#).update_path("a.0", 9);
        assert!(matches!(out.unwrap_err(), JsonError::Navigation { .. }));

        // Out-of-bounds intermediate index.
        let out = node(r#"{"a":[{"b":1}]}"#).update_path("a.3.b", 2);
        assert!(matches!(out.unwrap_err(), JsonError::Navigation { .. }));
    }

    #[test]
    fn test_elements_iterates_arrays_only() {
        let doc = node(r#"{"items":[1,2,3]}"#);
        let items = doc.get_key("items").unwrap();
        let collected: Vec<i64> = items.elements().filter_map(Node::as_integer).collect();
        assert_eq!(collected, vec![1, 2, 3]);

        // Restartable.
        assert_eq!(items.elements().count(), 3);
        assert_eq!(items.elements().count(), 3);

        // Non-array yields an empty sequence, not an error.
        assert_eq!(doc.elements().count(), 0);
        assert_eq!(Node::integer(1).elements().count(), 0);
    }
}
