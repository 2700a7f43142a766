//! Pagination module
//!
//! Supports: Cursor (single source), Merged (k-way merge of several sources)
//!
//! # Overview
//!
//! History endpoints return fixed-size pages ordered newest first and take the id of
//! the last item seen as the cursor for the next page. [`CursorPaginator`] walks one
//! such source; [`MergedPaginator`] interleaves several of them into one sequence
//! ordered by a caller-supplied key. Both implement [`Paginator`], a lazy pull-based
//! sequence that can also be drained with `flatten` or adapted into a `Stream`.

mod cursor;
mod merged;
mod types;

pub use cursor::CursorPaginator;
pub use merged::{BoxedPaginator, MergedPaginator};
pub use types::{
    into_stream, Cursor, CursorItem, PageFetcher, Paginator, SortOrder, PAGE_SIZE,
};
