//! Resilient collection fetching with fallback substitution
//!
//! A collection fetch never surfaces an error: a failed or empty live fetch
//! degrades to a caller-supplied fallback dataset, so a consumer always holds
//! a renderable page. A [`ResilientCollection`] additionally guards against
//! the stale-response race on overlapping refreshes with a monotonic request
//! sequence: a response older than the latest dispatched request is dropped.

use std::future::Future;
use std::sync::{
    Arc, RwLock,
    atomic::{AtomicU64, Ordering},
};

use tracing::{debug, warn};

use eventhub_api::CollectionPage;

use crate::error::Result;

/// An immutable bundled dataset served when the live source is unavailable
///
/// Constructed once at startup; never mutated afterwards.
#[derive(Clone, Debug)]
pub struct FallbackDataset<T> {
    items: Arc<[T]>,
}

impl<T: Clone> FallbackDataset<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// A dataset with no records; a degraded fetch then yields an empty page
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Materialize the dataset as a collection page
    pub fn to_page(&self) -> CollectionPage<T> {
        CollectionPage::new(self.items.to_vec())
    }
}

/// Fetch a collection, substituting the fallback on failure or empty result
///
/// The live result is returned verbatim when it holds at least one record.
/// An empty result, a decode failure, a timeout, or a network error all
/// degrade to the fallback; the error is logged, never returned.
pub async fn fetch_collection<T, F, Fut>(
    source: &str,
    fetch: F,
    fallback: &FallbackDataset<T>,
) -> CollectionPage<T>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    match fetch().await {
        Ok(items) if !items.is_empty() => {
            debug!("{}: fetched {} live records", source, items.len());
            CollectionPage::new(items)
        }
        Ok(_) => {
            warn!(
                "{}: live endpoint returned no records, serving {} fallback records",
                source,
                fallback.len()
            );
            fallback.to_page()
        }
        Err(e) => {
            warn!(
                "{}: fetch failed ({}), serving {} fallback records",
                source,
                e,
                fallback.len()
            );
            fallback.to_page()
        }
    }
}

/// Fetch two independent collections concurrently
///
/// Each side degrades to its own fallback independently; no completion
/// ordering between the two is assumed.
pub async fn fetch_pair<A, B, FA, FutA, FB, FutB>(
    primary_source: &str,
    primary_fetch: FA,
    primary_fallback: &FallbackDataset<A>,
    secondary_source: &str,
    secondary_fetch: FB,
    secondary_fallback: &FallbackDataset<B>,
) -> (CollectionPage<A>, CollectionPage<B>)
where
    A: Clone,
    B: Clone,
    FA: FnOnce() -> FutA,
    FutA: Future<Output = Result<Vec<A>>>,
    FB: FnOnce() -> FutB,
    FutB: Future<Output = Result<Vec<B>>>,
{
    futures::join!(
        fetch_collection(primary_source, primary_fetch, primary_fallback),
        fetch_collection(secondary_source, secondary_fetch, secondary_fallback),
    )
}

/// A collection that is always populated
///
/// Starts out holding the fallback page, so a consumer never renders an
/// empty or loading state. [`ResilientCollection::refresh`] replaces the held
/// page with a fresh fetch result; the previous page stays visible while the
/// fetch is in flight. Overlapping refreshes resolve to the latest dispatched
/// request: stale responses are discarded, not installed.
pub struct ResilientCollection<T> {
    source: String,
    fallback: FallbackDataset<T>,
    current: RwLock<CollectionPage<T>>,
    seq: AtomicU64,
}

impl<T: Clone> ResilientCollection<T> {
    pub fn new(source: &str, fallback: FallbackDataset<T>) -> Self {
        let current = RwLock::new(fallback.to_page());
        Self {
            source: source.to_string(),
            fallback,
            current,
            seq: AtomicU64::new(0),
        }
    }

    /// The page currently held; populated from the moment of construction
    pub fn current(&self) -> CollectionPage<T> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of refreshes dispatched so far
    pub fn refresh_count(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }

    /// Run a fetch and install its result, unless a newer refresh was
    /// dispatched while this one was in flight
    ///
    /// Returns the page held after resolution (the fresh result, or the
    /// newer one that superseded it).
    pub async fn refresh<F, Fut>(&self, fetch: F) -> CollectionPage<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let page = fetch_collection(&self.source, fetch, &self.fallback).await;

        // Staleness check and install share one lock acquisition: a response
        // older than the latest dispatched request must never replace a page
        // a newer refresh already installed.
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        if self.seq.load(Ordering::SeqCst) == ticket {
            *guard = page.clone();
            page
        } else {
            debug!(
                "{}: discarding stale response for request #{}",
                self.source, ticket
            );
            guard.clone()
        }
    }
}
