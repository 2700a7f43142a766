//! K-way merge of several paginators into one ordered sequence
//!
//! Each source keeps a single lookahead item. On every pull the empty lookaheads are
//! refilled (concurrently, one request per source at most) and the best item by key wins.

use super::types::{Paginator, SortOrder};
use crate::error::Result;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::fmt;
use tracing::trace;

/// Boxed source paginator
pub type BoxedPaginator<T> = Box<dyn Paginator<Item = T>>;

struct Source<T> {
    paginator: BoxedPaginator<T>,
    lookahead: Option<T>,
    exhausted: bool,
}

impl<T: Send + 'static> Source<T> {
    fn needs_fill(&self) -> bool {
        self.lookahead.is_none() && !self.exhausted
    }

    async fn fill(&mut self) -> Result<()> {
        match self.paginator.next().await? {
            Some(item) => self.lookahead = Some(item),
            None => self.exhausted = true,
        }
        Ok(())
    }
}

/// Paginator presenting several sources as one sequence ordered by a key
///
/// Sources must each already be ordered consistently with the merge direction.
/// Items with equal keys come out in source registration order.
pub struct MergedPaginator<T, K> {
    sources: Vec<Source<T>>,
    key: Box<dyn Fn(&T) -> K + Send + Sync>,
    order: SortOrder,
    limit: Option<usize>,
    fetched: usize,
    exhausted: bool,
}

impl<T, K> MergedPaginator<T, K>
where
    T: Send + 'static,
    K: Ord + 'static,
{
    /// Merge `sources` by the key `key`, largest first
    pub fn new<F>(sources: Vec<BoxedPaginator<T>>, key: F) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let sources = sources
            .into_iter()
            .map(|paginator| Source {
                paginator,
                lookahead: None,
                exhausted: false,
            })
            .collect();

        Self {
            sources,
            key: Box::new(key),
            order: SortOrder::default(),
            limit: None,
            fetched: 0,
            exhausted: false,
        }
    }

    /// Set the merge direction
    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Yield at most `limit` items in total
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Number of items yielded so far
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.fetched >= limit)
    }

    /// Index of the source whose lookahead comes next, first registered on ties
    fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, K)> = None;
        for (index, source) in self.sources.iter().enumerate() {
            let Some(item) = &source.lookahead else {
                continue;
            };
            let key = (self.key)(item);
            match &best {
                Some((_, best_key)) if !self.order.prefers(&key, best_key) => {}
                _ => best = Some((index, key)),
            }
        }
        best.map(|(index, _)| index)
    }
}

#[async_trait]
impl<T, K> Paginator for MergedPaginator<T, K>
where
    T: Send + 'static,
    K: Ord + 'static,
{
    type Item = T;

    async fn next(&mut self) -> Result<Option<T>> {
        if self.exhausted || self.limit_reached() {
            return Ok(None);
        }

        {
            let pending: Vec<_> = self
                .sources
                .iter_mut()
                .filter(|source| source.needs_fill())
                .map(|source| source.fill())
                .collect();
            if !pending.is_empty() {
                trace!(sources = pending.len(), "Refilling lookahead");
            }
            try_join_all(pending).await?;
        }

        let Some(index) = self.select() else {
            self.exhausted = true;
            return Ok(None);
        };

        let item = self.sources[index].lookahead.take();
        if item.is_some() {
            self.fetched += 1;
        }
        Ok(item)
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
            || self.limit_reached()
            || self
                .sources
                .iter()
                .all(|source| source.exhausted && source.lookahead.is_none())
    }
}

impl<T, K> fmt::Debug for MergedPaginator<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergedPaginator")
            .field("sources", &self.sources.len())
            .field("order", &self.order)
            .field("limit", &self.limit)
            .field("fetched", &self.fetched)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
