//! Lazily fetched model attributes.
//!
//! Responsibilities:
//! - Hold a model's attribute set once it has been fetched.
//! - Guarantee a single fetch per load, even with concurrent callers.
//!
//! Does NOT handle:
//! - Expiry. Cached attributes live until [`Lazy::invalidate`] is called.
//!
//! Invariants:
//! - A failed fetch leaves the cell empty; the next access retries.
//! - A populated cell never fetches.

use std::future::Future;

use tokio::sync::OnceCell;

use crate::error::Result;

/// A cell holding a value fetched on first access.
#[derive(Debug)]
pub struct Lazy<T> {
    cell: OnceCell<T>,
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Lazy<T> {
    /// An empty cell; the first access fetches.
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// A cell already holding `value`, e.g. attributes that arrived in a listing.
    pub fn loaded(value: T) -> Self {
        Self {
            cell: OnceCell::new_with(Some(value)),
        }
    }

    /// Return the cached value, running `fetch` if there is none yet.
    ///
    /// Concurrent callers wait on the same fetch.
    pub async fn get_or_try_load<F, Fut>(&self, fetch: F) -> Result<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.cell.get_or_try_init(fetch).await
    }

    /// The cached value, without fetching.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Drop the cached value so the next access fetches again.
    pub fn invalidate(&mut self) -> Option<T> {
        self.cell.take()
    }
}

/// A model whose attributes are fetched on demand.
pub trait LazyModel {
    type Data: Send + Sync;

    /// Fetch the attributes from the server.
    fn fetch_data(&self) -> impl Future<Output = Result<Self::Data>> + Send;

    /// The cell caching [`Self::Data`].
    fn lazy(&self) -> &Lazy<Self::Data>;

    /// Attributes, fetching them on first access.
    fn load(&self) -> impl Future<Output = Result<&Self::Data>> + Send
    where
        Self: Sync,
    {
        async move { self.lazy().get_or_try_load(|| self.fetch_data()).await }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_fetches_once() {
        let lazy = Lazy::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = lazy
                .get_or_try_load(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(42)
                })
                .await
                .unwrap();
            assert_eq!(*value, 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cell_empty() {
        let lazy: Lazy<u32> = Lazy::new();
        let err = lazy
            .get_or_try_load(|| async { Err(ClientError::InvalidResponse("boom".to_string())) })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
        assert!(!lazy.is_loaded());

        let value = lazy.get_or_try_load(|| async { Ok(7) }).await.unwrap();
        assert_eq!(*value, 7);
    }

    #[tokio::test]
    async fn test_loaded_never_fetches() {
        let lazy = Lazy::loaded("cached");
        let calls = AtomicUsize::new(0);
        let value = lazy
            .get_or_try_load(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("fresh")
            })
            .await
            .unwrap();
        assert_eq!(*value, "cached");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let mut lazy = Lazy::loaded(1);
        assert_eq!(lazy.invalidate(), Some(1));
        assert!(lazy.get().is_none());
        let value = lazy.get_or_try_load(|| async { Ok(2) }).await.unwrap();
        assert_eq!(*value, 2);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let lazy = Arc::new(Lazy::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let lazy = Arc::clone(&lazy);
                let calls = Arc::clone(&calls);
                tokio::spawn(async move {
                    *lazy
                        .get_or_try_load(|| async {
                            calls.fetch_add(1, Ordering::SeqCst);
                            tokio::task::yield_now().await;
                            Ok(99)
                        })
                        .await
                        .unwrap()
                })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap(), 99);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
