//! JSON tree engine built on the [`keel_outcome`] algebra.
//!
//! The central type is [`Node`], a recursive document tree
//! (object / array / scalar). On top of it this crate provides:
//!
//! - parse / pretty-serialize through a swappable [`JsonBackend`]
//!   (see [`engine`]),
//! - shape-to-shape coercion routed through the tree
//!   ([`engine::convert`]),
//! - safe dot-path navigation ([`Node::get_text`]) and JSON-pointer
//!   lookup ([`Node::pointer_get`]),
//! - persistent tree editing: [`Node::update_path`], [`Node::merge`],
//!   [`Node::prune`].
//!
//! Every fallible operation returns [`Outcome`] rather than panicking or
//! raising; navigation reads return `Option` and never fail.

pub mod engine;
pub mod error;
pub mod node;
pub mod ops;
pub mod path;

pub use engine::{JsonBackend, SerdeBackend, set_backend};
pub use error::{JsonError, JsonOutcome};
pub use node::{Node, NodeKind};

pub use keel_outcome::Outcome;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{JsonError, JsonOutcome, Node, NodeKind, Outcome};
}
