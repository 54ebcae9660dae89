//! Pagination normalization.
//!
//! List requests carry raw, untrusted `offset` and `limit` values. Before
//! anything reaches a store they are folded into a bounded [`Pagination`]:
//!
//! - a negative offset becomes `0`
//! - a limit of zero or less becomes [`DEFAULT_LIMIT`]
//! - a limit above [`MAX_LIMIT`] is clamped to [`MAX_LIMIT`]
//!
//! Normalization never fails.
//!
//! # Examples
//!
//! ```
//! use pennant_server::pagination::*;
//! use pennant_storage::QueryParams;
//!
//! let opts = paginate(-5, 500);
//! assert_eq!(QueryParams::from_options(&opts), QueryParams { offset: 0, limit: 50 });
//! ```

use pennant_storage::{QueryOption, QueryParams, with_limit, with_offset};
use serde::{Deserialize, Serialize};

/// Page size used when the caller asks for none.
pub const DEFAULT_LIMIT: u64 = 20;

/// Largest page size a caller can get.
pub const MAX_LIMIT: u64 = 50;

/// A normalized page request.
///
/// Invariant: `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Pagination {
    /// Normalize raw caller input.
    pub fn new(offset: i32, limit: i32) -> Self {
        let offset = u64::try_from(offset).unwrap_or(0);

        let limit = match u64::try_from(limit) {
            Ok(0) | Err(_) => DEFAULT_LIMIT,
            Ok(limit) if limit > MAX_LIMIT => MAX_LIMIT,
            Ok(limit) => limit,
        };

        Self { offset, limit }
    }

    /// Store-facing options: one for the offset, one for the limit.
    pub fn options(&self) -> Vec<QueryOption> {
        vec![with_offset(self.offset), with_limit(self.limit)]
    }

    /// The params the options build.
    pub fn params(&self) -> QueryParams {
        QueryParams {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Normalize `offset`/`limit` straight into query options.
pub fn paginate(offset: i32, limit: i32) -> Vec<QueryOption> {
    Pagination::new(offset, limit).options()
}
