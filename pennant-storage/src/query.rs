//! Composable query options.
//!
//! A [`QueryOption`] mutates a [`QueryParams`] value. Stores accept a slice
//! of options and replay them, left to right, over a zero-valued
//! `QueryParams` to find out which page the caller asked for.
//!
//! ```
//! use pennant_storage::{QueryParams, with_limit, with_offset};
//!
//! let params = QueryParams::from_options(&[with_offset(40), with_limit(20)]);
//! assert_eq!(params, QueryParams { offset: 40, limit: 20 });
//! ```

use serde::{Deserialize, Serialize};

/// Pagination state consumed by `list_*` store calls.
///
/// A `limit` of zero means the caller did not bound the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Number of entities to skip.
    pub offset: u64,

    /// Maximum number of entities to return.
    pub limit: u64,
}

/// A single mutation applied while building [`QueryParams`].
pub type QueryOption = Box<dyn Fn(&mut QueryParams) + Send + Sync>;

impl QueryParams {
    /// Build params by applying `opts` in order to the zero value.
    pub fn from_options(opts: &[QueryOption]) -> Self {
        let mut params = Self::default();
        params.apply(opts);
        params
    }

    /// Apply `opts` in order; later options win on the same field.
    pub fn apply(&mut self, opts: &[QueryOption]) {
        for opt in opts {
            opt(self);
        }
    }

    /// Whether a page size was set.
    pub fn is_bounded(&self) -> bool {
        self.limit > 0
    }

    /// Slice `items` down to the requested page.
    pub fn page<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.page_iter(items.iter()).cloned().collect()
    }

    /// Skip and take over `iter` without collecting it first.
    pub fn page_iter<I: Iterator>(&self, iter: I) -> std::iter::Take<std::iter::Skip<I>> {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = if self.is_bounded() {
            usize::try_from(self.limit).unwrap_or(usize::MAX)
        } else {
            usize::MAX
        };

        iter.skip(start).take(take)
    }
}

/// Option setting the offset.
pub fn with_offset(offset: u64) -> QueryOption {
    Box::new(move |p: &mut QueryParams| p.offset = offset)
}

/// Option setting the limit.
pub fn with_limit(limit: u64) -> QueryOption {
    Box::new(move |p: &mut QueryParams| p.limit = limit)
}
