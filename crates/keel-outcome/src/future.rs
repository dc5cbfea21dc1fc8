//! Bridge between [`Outcome`] and asynchronous computations.
//!
//! The bridge never blocks: [`Outcome::from_future`] attaches itself as a
//! continuation of the underlying future, and each conversion resolves
//! exactly once.

use core::future::{self, Future, Ready};

use crate::Outcome;

impl<E, V> Outcome<E, V> {
    /// Await a fallible future, mapping its rejection into the domain error.
    pub async fn from_future<F, X, M>(future: F, error_mapper: M) -> Self
    where
        F: Future<Output = Result<V, X>>,
        M: FnOnce(X) -> E,
    {
        match future.await {
            Ok(v) => Self::Success(v),
            Err(x) => Self::Failure(error_mapper(x)),
        }
    }

    /// Convert this outcome into an already-resolved future.
    ///
    /// A failure resolves to `Err` carrying the original error payload.
    pub fn into_future(self) -> Ready<Result<V, E>> {
        future::ready(self.into_result())
    }
}

#[cfg(test)]
mod tests {
    use crate::Outcome;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_from_future_success() {
        let fut = async { Ok::<_, std::num::ParseIntError>("21".parse::<i32>()?) };
        let out: Outcome<String, i32> = Outcome::from_future(fut, |e| e.to_string()).await;
        assert_eq!(out, Outcome::ok(21));
    }

    #[tokio::test]
    async fn test_from_future_maps_rejection() {
        let fut = async { "nope".parse::<i32>() };
        let out: Outcome<String, i32> = Outcome::from_future(fut, |e| format!("parse: {e}")).await;
        assert!(out.is_err());
        assert!(out.unwrap_err().starts_with("parse:"));
    }

    #[tokio::test]
    async fn test_from_future_does_not_resolve_early() {
        // The mapper only runs once the future itself has resolved.
        let fut = async {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            Err::<i32, _>("late failure")
        };
        let out: Outcome<String, i32> = Outcome::from_future(fut, String::from).await;
        assert_eq!(out, Outcome::err("late failure".to_string()));
    }

    #[tokio::test]
    async fn test_into_future() {
        let ok: Outcome<String, i32> = Outcome::ok(5);
        assert_eq!(ok.into_future().await, Ok(5));

        let err: Outcome<String, i32> = Outcome::err("boom".to_string());
        assert_eq!(err.into_future().await, Err("boom".to_string()));
    }
}
