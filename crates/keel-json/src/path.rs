//! Safe navigation: dot paths and JSON pointers.
//!
//! Two distinct syntaxes address into a tree:
//!
//! - *dot paths* (`users.0.name`): segments split on `.`, an all-digit
//!   segment addresses an array index, anything else an object key;
//! - *pointers* (`/users/0/name`): absolute `/`-delimited addressing with
//!   the standard `~0`/`~1` escapes.
//!
//! Both are total: a miss of any kind yields absence, never an error.

use crate::node::Node;

/// One step of a dot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key access.
    Key(String),
    /// Array index access (the segment was all digits).
    Index(usize),
}

impl PathSegment {
    /// Classify a raw segment: all-digit text is an index, anything else
    /// (including text with a leading sign or an overflowing number) a key.
    fn classify(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = raw.parse::<usize>() {
                return Self::Index(index);
            }
        }
        Self::Key(raw.to_string())
    }
}

/// Split a dot path into classified segments.
#[must_use]
pub fn split_path(path: &str) -> Vec<PathSegment> {
    path.split('.').map(PathSegment::classify).collect()
}

impl Node {
    /// Walk a dot path and render the scalar at its end as text.
    ///
    /// Returns `None` when any step lands on null or absence, when an
    /// index segment is applied to a non-array or falls out of bounds,
    /// or when the final node is not a non-null scalar. Never fails.
    #[must_use]
    pub fn get_text(&self, path: &str) -> Option<String> {
        let mut current = self;
        for segment in split_path(path) {
            if current.is_null() {
                return None;
            }
            current = match segment {
                PathSegment::Index(index) => current.get_index(index)?,
                PathSegment::Key(key) => current.get_key(&key)?,
            };
        }
        current.scalar_text()
    }

    /// Resolve an absolute `/`-delimited pointer.
    ///
    /// The empty pointer addresses the whole tree. A pointer that does not
    /// start with `/`, or that misses at any step, resolves to `None`.
    #[must_use]
    pub fn pointer_get(&self, pointer: &str) -> Option<&Node> {
        if pointer.is_empty() {
            return Some(self);
        }
        if !pointer.starts_with('/') {
            return None;
        }

        let mut current = self;
        for token in pointer.split('/').skip(1) {
            let token = token.replace("~1", "/").replace("~0", "~");
            current = match current {
                Node::Object(map) => map.get(&token)?,
                Node::Array(items) => items.get(token.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn doc() -> Node {
        Node::from_str(
            r#"{
                "users": [
                    {"name": "alice", "age": 30},
                    {"name": "bob", "address": {"city": "berlin"}}
                ],
                "count": 2,
                "active": true,
                "missing": null
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_split_path_classifies_segments() {
        assert_eq!(
            split_path("users.0.name"),
            vec![
                PathSegment::Key("users".to_string()),
                PathSegment::Index(0),
                PathSegment::Key("name".to_string()),
            ]
        );
        // A leading sign is not a digit; the segment stays a key.
        assert_eq!(split_path("-1"), vec![PathSegment::Key("-1".to_string())]);
    }

    #[test]
    fn test_get_text_walks_objects_and_arrays() {
        let doc = doc();
        assert_eq!(doc.get_text("users.0.name"), Some("alice".to_string()));
        assert_eq!(doc.get_text("users.1.address.city"), Some("berlin".to_string()));
        assert_eq!(doc.get_text("count"), Some("2".to_string()));
        assert_eq!(doc.get_text("active"), Some("true".to_string()));
    }

    #[test]
    fn test_get_text_absent_cases() {
        let doc = doc();
        // Missing key.
        assert_eq!(doc.get_text("nope"), None);
        // Null leaf.
        assert_eq!(doc.get_text("missing"), None);
        // Path through a null.
        assert_eq!(doc.get_text("missing.deeper"), None);
        // Index out of bounds.
        assert_eq!(doc.get_text("users.9.name"), None);
        // Numeric segment on a non-array.
        assert_eq!(doc.get_text("count.0"), None);
        // Container leaf is not a scalar.
        assert_eq!(doc.get_text("users"), None);
        assert_eq!(doc.get_text("users.0"), None);
    }

    #[test]
    fn test_pointer_get() {
        let doc = doc();
        assert_eq!(
            doc.pointer_get("/users/0/name"),
            Some(&Node::text("alice"))
        );
        assert_eq!(doc.pointer_get("/count"), Some(&Node::integer(2)));
        assert_eq!(doc.pointer_get(""), Some(&doc));
        assert_eq!(doc.pointer_get("/nope"), None);
        assert_eq!(doc.pointer_get("/users/9"), None);
        // Relative syntax is rejected outright.
        assert_eq!(doc.pointer_get("users/0"), None);
    }

    #[test]
    fn test_pointer_escapes() {
        let node = Node::object([
            ("a/b".to_string(), Node::integer(1)),
            ("a~b".to_string(), Node::integer(2)),
        ]);
        assert_eq!(node.pointer_get("/a~1b"), Some(&Node::integer(1)));
        assert_eq!(node.pointer_get("/a~0b"), Some(&Node::integer(2)));
    }
}
