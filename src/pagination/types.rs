//! Pagination types and traits
//!
//! Defines the core pagination abstractions shared by the cursor and merged paginators.

use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Canonical number of items the chronicle API returns per page
pub const PAGE_SIZE: usize = 20;

/// Opaque continuation token handed back to a [`PageFetcher`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cursor {
    /// Numeric identifier of the last item seen
    Id(u64),
    /// String token of the last item seen
    Token(String),
}

impl Default for Cursor {
    /// `Id(0)` means "start of history"
    fn default() -> Self {
        Self::Id(0)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Id(id) => write!(f, "{id}"),
            Cursor::Token(token) => f.write_str(token),
        }
    }
}

impl From<u64> for Cursor {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

/// An item that carries the cursor for the page after it
pub trait CursorItem {
    /// Cursor value of this item, `None` if the item is malformed
    fn cursor(&self) -> Option<Cursor>;
}

/// Fetches one page of items starting at a cursor
///
/// Returning fewer items than the paginator's page size signals the end of data.
#[async_trait]
pub trait PageFetcher<T: Send>: Send + Sync {
    /// Fetch the page that follows `cursor`
    async fn fetch_page(&self, cursor: &Cursor) -> Result<Vec<T>>;
}

#[async_trait]
impl<T, F, Fut> PageFetcher<T> for F
where
    T: Send + 'static,
    F: Fn(Cursor) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
{
    async fn fetch_page(&self, cursor: &Cursor) -> Result<Vec<T>> {
        (self)(cursor.clone()).await
    }
}

/// Lazy, pull-based sequence of items backed by paged requests
///
/// A paginator has a single owner: `next` takes `&mut self`, so concurrent pulls on one
/// instance are ruled out by the borrow checker. Exhaustion is terminal; there is no reset,
/// build a new paginator to start over.
#[async_trait]
pub trait Paginator: Send {
    /// Item yielded by the paginator
    type Item: Send;

    /// Yield the next item, or `None` once the sequence is exhausted
    async fn next(&mut self) -> Result<Option<Self::Item>>;

    /// Whether the paginator will yield nothing more
    fn is_exhausted(&self) -> bool;

    /// Drain every remaining item, continuing from the current position
    async fn flatten(&mut self) -> Result<Vec<Self::Item>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }
}

#[async_trait]
impl<P> Paginator for Box<P>
where
    P: Paginator + ?Sized,
{
    type Item = P::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        (**self).next().await
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

/// Adapt a paginator into a `Stream` of items
pub fn into_stream<P>(paginator: P) -> impl Stream<Item = Result<P::Item>>
where
    P: Paginator,
{
    stream::try_unfold(paginator, |mut paginator| async move {
        let item = paginator.next().await?;
        Ok::<_, Error>(item.map(|item| (item, paginator)))
    })
}

/// Direction used when merging several sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Largest key first (newest first for timestamps)
    #[default]
    Descending,
    /// Smallest key first
    Ascending,
}

impl SortOrder {
    /// Whether `candidate` strictly beats `current` in this order
    pub fn prefers<K: Ord>(self, candidate: &K, current: &K) -> bool {
        match self {
            SortOrder::Descending => candidate > current,
            SortOrder::Ascending => candidate < current,
        }
    }
}
