//! The [`Outcome`] enum and its combinator set.

use core::fmt;

/// A value that is either a success carrying `V` or a failure carrying `E`.
///
/// All combinators consume `self` and return a fresh `Outcome`; an
/// `Outcome` is never mutated after construction. Failure short-circuits
/// every value-side combinator, success short-circuits every error-side
/// one.
///
/// The error slot always holds a real `E`: a `Failure` cannot be built
/// without an error value, so "failed with nothing" is unrepresentable.
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<E, V> {
    /// The success case.
    Success(V),
    /// The failure case.
    Failure(E),
}

use Outcome::{Failure, Success};

impl<E, V> Outcome<E, V> {
    // ==================== Constructors ====================

    /// Create a successful outcome.
    #[inline]
    pub fn ok(value: V) -> Self {
        Success(value)
    }

    /// Create a failed outcome.
    #[inline]
    pub fn err(error: E) -> Self {
        Failure(error)
    }

    /// Run a fallible closure and wrap whatever it produced.
    ///
    /// The closure's error payload becomes the failure value unchanged;
    /// use [`Outcome::of_mapped`] to translate it into a domain error.
    pub fn of<F>(f: F) -> Outcome<E, V>
    where
        F: FnOnce() -> Result<V, E>,
    {
        match f() {
            Ok(v) => Success(v),
            Err(e) => Failure(e),
        }
    }

    /// Run a fallible closure, mapping its error into the domain type.
    pub fn of_mapped<F, X, M>(f: F, mapper: M) -> Outcome<E, V>
    where
        F: FnOnce() -> Result<V, X>,
        M: FnOnce(X) -> E,
    {
        match f() {
            Ok(v) => Success(v),
            Err(x) => Failure(mapper(x)),
        }
    }

    /// Collect an iterator of outcomes into an outcome of values.
    ///
    /// Short-circuits on the first failure in iteration order; later
    /// failures are never inspected.
    pub fn sequence<I>(outcomes: I) -> Outcome<E, Vec<V>>
    where
        I: IntoIterator<Item = Outcome<E, V>>,
    {
        let iter = outcomes.into_iter();
        let mut values = Vec::with_capacity(iter.size_hint().0);
        for outcome in iter {
            match outcome {
                Success(v) => values.push(v),
                Failure(e) => return Failure(e),
            }
        }
        Success(values)
    }

    // ==================== Queries ====================

    /// `true` if this is a success.
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Success(_))
    }

    /// `true` if this is a failure.
    #[inline]
    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// `true` if this success holds a value equal to `value`.
    ///
    /// Always `false` for a failure.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        match self {
            Success(v) => v == value,
            Failure(_) => false,
        }
    }

    /// `true` if this failure holds an error equal to `error`.
    ///
    /// Always `false` for a success.
    #[must_use]
    pub fn contains_err(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Success(_) => false,
            Failure(e) => e == error,
        }
    }

    // ==================== Validation ====================

    /// Fail with `error_if_false` when the predicate rejects the value.
    ///
    /// A failure passes through untouched; it is already failed.
    pub fn ensure<P>(self, predicate: P, error_if_false: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Success(v) if predicate(&v) => Success(v),
            Success(_) => Failure(error_if_false),
            failure => failure,
        }
    }

    /// Alias for [`Outcome::ensure`].
    pub fn filter<P>(self, predicate: P, error_if_false: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        self.ensure(predicate, error_if_false)
    }

    /// Fail with `error_if_true` when the predicate accepts the value.
    pub fn filter_not<P>(self, predicate: P, error_if_true: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Success(v) if predicate(&v) => Failure(error_if_true),
            other => other,
        }
    }

    // ==================== Transformations ====================

    /// Transform the success value, passing a failure through.
    pub fn map<U, F>(self, mapper: F) -> Outcome<E, U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Success(v) => Success(mapper(v)),
            Failure(e) => Failure(e),
        }
    }

    /// Monadic bind: chain a step that can itself fail.
    ///
    /// Associative: `o.flat_map(f).flat_map(g)` is `o.flat_map(|v|
    /// f(v).flat_map(g))`.
    pub fn flat_map<U, F>(self, mapper: F) -> Outcome<E, U>
    where
        F: FnOnce(V) -> Outcome<E, U>,
    {
        match self {
            Success(v) => mapper(v),
            Failure(e) => Failure(e),
        }
    }

    /// Transform the error, passing a success through.
    pub fn map_err<F2, F>(self, mapper: F) -> Outcome<F2, V>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(mapper(e)),
        }
    }

    /// Transform whichever case is present; exactly one mapper runs.
    pub fn bimap<F2, U, Fe, Fv>(self, error_mapper: Fe, value_mapper: Fv) -> Outcome<F2, U>
    where
        Fe: FnOnce(E) -> F2,
        Fv: FnOnce(V) -> U,
    {
        match self {
            Success(v) => Success(value_mapper(v)),
            Failure(e) => Failure(error_mapper(e)),
        }
    }

    /// Combine two outcomes with a binary function.
    ///
    /// The first failure encountered wins: `self` is checked before
    /// `other`.
    pub fn zip<U, R, F>(self, other: Outcome<E, U>, combiner: F) -> Outcome<E, R>
    where
        F: FnOnce(V, U) -> R,
    {
        match (self, other) {
            (Success(v), Success(u)) => Success(combiner(v, u)),
            (Failure(e), _) => Failure(e),
            (_, Failure(e)) => Failure(e),
        }
    }

    // ==================== Side effects ====================

    /// Observe the success value; the outcome is returned unchanged.
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Success(v) = &self {
            f(v);
        }
        self
    }

    /// Observe the error; the outcome is returned unchanged.
    pub fn peek_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(e) = &self {
            f(e);
        }
        self
    }

    /// Run exactly one of the two observers, then return the outcome.
    pub fn tap<Fv, Fe>(self, on_success: Fv, on_failure: Fe) -> Self
    where
        Fv: FnOnce(&V),
        Fe: FnOnce(&E),
    {
        match &self {
            Success(v) => on_success(v),
            Failure(e) => on_failure(e),
        }
        self
    }

    /// Terminal side effect on success; the outcome is consumed.
    pub fn if_ok<F>(self, f: F)
    where
        F: FnOnce(V),
    {
        if let Success(v) = self {
            f(v);
        }
    }

    /// Terminal side effect on failure; the outcome is consumed.
    pub fn if_err<F>(self, f: F)
    where
        F: FnOnce(E),
    {
        if let Failure(e) = self {
            f(e);
        }
    }

    // ==================== Recovery ====================

    /// Turn a failure into a success by computing a substitute value.
    pub fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Success(v) => Success(v),
            Failure(e) => Success(recovery(e)),
        }
    }

    /// On failure, replace this outcome with a lazily-supplied alternative.
    pub fn or<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Success(v) => Success(v),
            Failure(_) => alternative(),
        }
    }

    /// On failure, replace this outcome with an already-built alternative.
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Success(v) => Success(v),
            Failure(_) => alternative,
        }
    }

    // ==================== Terminal operations ====================

    /// Collapse both cases into a single result type.
    ///
    /// Exactly one of the two functions runs.
    pub fn fold<R, Fe, Fv>(self, on_failure: Fe, on_success: Fv) -> R
    where
        Fe: FnOnce(E) -> R,
        Fv: FnOnce(V) -> R,
    {
        match self {
            Success(v) => on_success(v),
            Failure(e) => on_failure(e),
        }
    }

    /// The success value, or `default` on failure.
    pub fn get_or_else(self, default: V) -> V {
        match self {
            Success(v) => v,
            Failure(_) => default,
        }
    }

    /// The success value, or a lazily-computed default on failure.
    pub fn get_or_else_with<F>(self, default: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Success(v) => v,
            Failure(_) => default(),
        }
    }

    /// The error, or `default` on success.
    pub fn get_err_or_else(self, default: E) -> E {
        match self {
            Success(_) => default,
            Failure(e) => e,
        }
    }

    /// The error, or a lazily-computed default on success.
    pub fn get_err_or_else_with<F>(self, default: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Success(_) => default(),
            Failure(e) => e,
        }
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure. Reserved for tests and program
    /// boundaries; library code propagates instead.
    pub fn unwrap(self) -> V
    where
        E: fmt::Debug,
    {
        match self {
            Success(v) => v,
            Failure(e) => panic!("called `Outcome::unwrap()` on a `Failure`: {e:?}"),
        }
    }

    /// The error.
    ///
    /// # Panics
    ///
    /// Panics when called on a success. Mainly useful in tests.
    pub fn unwrap_err(self) -> E
    where
        V: fmt::Debug,
    {
        match self {
            Success(v) => panic!("called `Outcome::unwrap_err()` on a `Success`: {v:?}"),
            Failure(e) => e,
        }
    }

    /// The success value as an `Option`, discarding the error.
    #[must_use]
    pub fn to_option(self) -> Option<V> {
        match self {
            Success(v) => Some(v),
            Failure(_) => None,
        }
    }

    /// The error as an `Option`, discarding the value.
    #[must_use]
    pub fn to_err_option(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(e) => Some(e),
        }
    }

    /// Convert into a standard [`Result`].
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Success(v) => Ok(v),
            Failure(e) => Err(e),
        }
    }

    /// Borrow both slots: `Outcome<&E, &V>`.
    pub fn as_ref(&self) -> Outcome<&E, &V> {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(e),
        }
    }
}

impl<E, V> Outcome<E, Outcome<E, V>> {
    /// Collapse one level of nesting.
    pub fn flatten(self) -> Outcome<E, V> {
        self.flat_map(|inner| inner)
    }
}

// ==================== Interop ====================

impl<E, V> From<Result<V, E>> for Outcome<E, V> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(v) => Success(v),
            Err(e) => Failure(e),
        }
    }
}

impl<E, V> From<Outcome<E, V>> for Result<V, E> {
    fn from(outcome: Outcome<E, V>) -> Self {
        outcome.into_result()
    }
}

impl<E: fmt::Display, V: fmt::Display> fmt::Display for Outcome<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(v) => write!(f, "Success({v})"),
            Failure(e) => write!(f, "Failure({e})"),
        }
    }
}
