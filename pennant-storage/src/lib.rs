//! Storage layer for Pennant
//!
//! This crate provides:
//! - The flag and variant entities and their request/response envelopes
//! - Composable query options for paging `list_*` calls
//! - The [`FlagStore`] / [`VariantStore`] capability traits any backend implements
//! - [`MemoryStore`], an in-process backend that can be seeded from a document
//!
//! # Quick Start
//!
//! ```
//! use pennant_storage::*;
//!
//! # tokio_test::block_on(async {
//! let store = MemoryStore::new();
//!
//! store
//!     .create_flag(&CreateFlagRequest {
//!         key: "new-ui".to_string(),
//!         name: "New UI".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let page = store.list_flags(&[with_offset(0), with_limit(10)]).await?;
//! assert_eq!(page.len(), 1);
//! # Ok::<(), StoreError>(())
//! # }).unwrap();
//! ```

pub mod error;
pub mod memory;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;

pub use error::*;
pub use memory::*;
pub use model::*;
pub use query::*;
pub use seed::*;
pub use store::*;
