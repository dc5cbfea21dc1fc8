//! Railway-oriented success/failure algebra.
//!
//! [`Outcome<E, V>`] is a two-case value: [`Outcome::Success`] carrying a
//! value or [`Outcome::Failure`] carrying an error. Unlike ad-hoc error
//! checks, every fallible step in a pipeline returns an `Outcome` and the
//! combinator set ([`map`](Outcome::map), [`flat_map`](Outcome::flat_map),
//! [`recover`](Outcome::recover), [`fold`](Outcome::fold), ...) threads
//! failure forward without explicit branching.
//!
//! ```
//! use keel_outcome::Outcome;
//!
//! let n: Outcome<String, i32> = Outcome::ok(2)
//!     .map(|v| v * 10)
//!     .ensure(|v| *v > 0, "must be positive".to_string());
//! assert_eq!(n.get_or_else(0), 20);
//! ```

pub mod future;
pub mod outcome;

pub use outcome::Outcome;

/// Prelude for common imports
pub mod prelude {
    pub use crate::Outcome;
}
