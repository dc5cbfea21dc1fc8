//! Parse, serialize, and convert through a swappable backend.
//!
//! The backend trait works at the `serde_json::Value` interchange level so
//! that implementations stay object-safe; generic conversion is layered on
//! top of it here. One backend is active process-wide at a time, held in
//! an atomic slot: swapping it is the sole piece of shared mutable state
//! in the crate, and a concurrent reader always observes either the old
//! or the new backend in its entirety.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{JsonError, JsonOutcome};
use crate::node::Node;

// ============================================================================
// BACKEND TRAIT
// ============================================================================

/// A JSON text codec the engine can be pointed at.
pub trait JsonBackend: Send + Sync {
    /// Backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Parse JSON text into the interchange value.
    fn parse(&self, text: &str) -> Result<serde_json::Value, JsonError>;

    /// Render the interchange value as pretty-printed JSON text.
    fn serialize_pretty(&self, value: &serde_json::Value) -> Result<String, JsonError>;
}

/// The default backend, backed by serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeBackend;

impl JsonBackend for SerdeBackend {
    fn name(&self) -> &'static str {
        "serde_json"
    }

    fn parse(&self, text: &str) -> Result<serde_json::Value, JsonError> {
        serde_json::from_str(text).map_err(JsonError::parse)
    }

    fn serialize_pretty(&self, value: &serde_json::Value) -> Result<String, JsonError> {
        serde_json::to_string_pretty(value).map_err(JsonError::serialize)
    }
}

// ============================================================================
// ACTIVE BACKEND SLOT
// ============================================================================

static ACTIVE: LazyLock<ArcSwap<Box<dyn JsonBackend>>> =
    LazyLock::new(|| ArcSwap::from_pointee(Box::new(SerdeBackend) as Box<dyn JsonBackend>));

/// Replace the process-wide backend for the remainder of the process
/// lifetime. The swap is atomic and immediately visible.
pub fn set_backend(backend: Box<dyn JsonBackend>) {
    tracing::debug!(backend = backend.name(), "json backend replaced");
    ACTIVE.store(Arc::new(backend));
}

fn backend() -> Arc<Box<dyn JsonBackend>> {
    ACTIVE.load_full()
}

// ============================================================================
// FACADE OPERATIONS
// ============================================================================

/// Parse JSON text into a [`Node`] tree.
///
/// Blank input and malformed syntax both fail; the underlying parser
/// diagnostic is carried in the error message.
pub fn parse(text: &str) -> JsonOutcome<Node> {
    if text.trim().is_empty() {
        return JsonOutcome::err(JsonError::EmptyInput);
    }
    backend().parse(text).map(Node::from).into()
}

/// Serialize any value as pretty-printed JSON text.
///
/// Object fields whose value is null are omitted, recursively; null
/// *elements* of arrays are kept, since dropping them would shift
/// positions.
pub fn serialize<T: Serialize>(value: &T) -> JsonOutcome<String> {
    let interchange = match serde_json::to_value(value) {
        Ok(v) => strip_null_fields(v),
        Err(e) => return JsonOutcome::err(JsonError::serialize(e)),
    };
    backend().serialize_pretty(&interchange).into()
}

/// Deserialize JSON text directly into a typed value.
pub fn from_json<T: DeserializeOwned>(text: &str) -> JsonOutcome<T> {
    parse(text).flat_map(|node| convert(&node))
}

/// Convert any serializable value into a navigable [`Node`] tree without
/// a textual round trip.
pub fn to_node<T: Serialize>(value: &T) -> JsonOutcome<Node> {
    serde_json::to_value(value)
        .map(Node::from)
        .map_err(JsonError::conversion)
        .into()
}

/// Shape-to-shape coercion through the tree: any serializable source into
/// any deserializable target (map to typed struct, struct to map, ...).
pub fn convert<S, T>(from: &S) -> JsonOutcome<T>
where
    S: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let out = serde_json::to_value(from)
        .and_then(serde_json::from_value)
        .map_err(JsonError::conversion);
    out.into()
}

/// Deep-merge two serializable values as trees. See [`Node::merge`] for
/// the precedence rules.
pub fn merge<B, O>(base: &B, overlay: &O) -> JsonOutcome<Node>
where
    B: Serialize,
    O: Serialize,
{
    to_node(base).zip(to_node(overlay), |base, overlay| base.merge(&overlay))
}

/// Drop object fields that hold null, at every depth.
fn strip_null_fields(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_null_fields(v)))
                .collect(),
        ),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(strip_null_fields).collect())
        }
        scalar => scalar,
    }
}
