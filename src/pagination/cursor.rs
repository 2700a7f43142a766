//! Cursor-driven pagination over a single source
//!
//! Walks a [`PageFetcher`] page by page, advancing the cursor from the last item of
//! each page until a short or empty page arrives or the limit is reached.

use super::types::{Cursor, CursorItem, PageFetcher, Paginator, PAGE_SIZE};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Paginator over one cursor-paged source
///
/// Common pattern in the chronicle API:
/// - `?end_id=0` for the newest page
/// - `?end_id=<id of the last item>` for the page after it
pub struct CursorPaginator<T, F> {
    fetcher: F,
    cursor: Cursor,
    page_size: usize,
    limit: Option<usize>,
    fetched: usize,
    buffer: VecDeque<T>,
    /// No further fetches will be issued
    done: bool,
    _item: PhantomData<fn() -> T>,
}

impl<T, F> CursorPaginator<T, F>
where
    T: CursorItem + fmt::Debug + Send + 'static,
    F: PageFetcher<T>,
{
    /// Create a paginator starting at the beginning of history
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cursor: Cursor::default(),
            page_size: PAGE_SIZE,
            limit: None,
            fetched: 0,
            buffer: VecDeque::new(),
            done: false,
            _item: PhantomData,
        }
    }

    /// Start from this cursor instead of the beginning
    #[must_use]
    pub fn with_end_id(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// Yield at most `limit` items
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Page length below which a page is treated as the last one
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Cursor that the next fetch will use
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Number of items yielded so far
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    fn remaining(&self) -> Option<usize> {
        self.limit.map(|limit| limit.saturating_sub(self.fetched))
    }

    fn limit_reached(&self) -> bool {
        self.remaining() == Some(0)
    }

    async fn refill(&mut self) -> Result<()> {
        if self.done {
            return Ok(());
        }

        let mut page = self.fetcher.fetch_page(&self.cursor).await?;
        debug!(
            cursor = %self.cursor,
            items = page.len(),
            "Fetched page"
        );

        let Some(last) = page.last() else {
            self.done = true;
            return Ok(());
        };
        self.cursor = last
            .cursor()
            .ok_or_else(|| Error::missing_cursor(format!("{last:?}")))?;

        if page.len() < self.page_size {
            self.done = true;
        }

        if let Some(remaining) = self.remaining() {
            page.truncate(remaining);
        }
        self.buffer.extend(page);
        Ok(())
    }
}

#[async_trait]
impl<T, F> Paginator for CursorPaginator<T, F>
where
    T: CursorItem + fmt::Debug + Send + 'static,
    F: PageFetcher<T>,
{
    type Item = T;

    async fn next(&mut self) -> Result<Option<T>> {
        if self.limit_reached() {
            self.buffer.clear();
            self.done = true;
            return Ok(None);
        }

        if self.buffer.is_empty() {
            self.refill().await?;
        }

        let item = self.buffer.pop_front();
        if item.is_some() {
            self.fetched += 1;
        }
        Ok(item)
    }

    fn is_exhausted(&self) -> bool {
        self.limit_reached() || (self.done && self.buffer.is_empty())
    }
}

impl<T, F> fmt::Debug for CursorPaginator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorPaginator")
            .field("cursor", &self.cursor)
            .field("page_size", &self.page_size)
            .field("limit", &self.limit)
            .field("fetched", &self.fetched)
            .field("buffered", &self.buffer.len())
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
