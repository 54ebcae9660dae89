//! Pennant request facade
//!
//! Exposes get/list/create/update/delete for flags and variants over any
//! [`Store`](pennant_storage::Store) implementation.
//!
//! # Features
//!
//! - **Bounded pagination** - raw `offset`/`limit` input is normalized (default 20, max 50)
//! - **Counted lists** - list responses carry the store's total count
//! - **Pass-through errors** - store errors reach the caller unchanged
//! - **Layered configuration** - defaults, TOML/JSON file, `PENNANT_*` environment
//! - **Structured logging** - `tracing` events, subscriber set up from configuration
//!
//! # Quick Start
//!
//! ```
//! use pennant_server::*;
//! use pennant_storage::*;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let server = Server::new(Arc::new(MemoryStore::new()));
//!
//! server
//!     .create_flag(&CreateFlagRequest {
//!         key: "new-ui".to_string(),
//!         name: "New UI".to_string(),
//!         enabled: true,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // A limit of 1000 is clamped to 50
//! let list = server
//!     .list_flags(&ListFlagRequest { offset: 0, limit: 1000 })
//!     .await?;
//! assert_eq!(list.total_count, 1);
//! assert_eq!(list.flags.len(), 1);
//! # Ok::<(), StoreError>(())
//! # }).unwrap();
//! ```
//!
//! # From configuration
//!
//! ```no_run
//! use pennant_server::*;
//! use std::path::Path;
//!
//! # fn example() -> pennant_server::Result<()> {
//! let config = ServerConfig::load(Some(Path::new("pennant.toml")))?;
//! telemetry::init(&config.log)?;
//! let server = Server::from_config(&config)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod flag;
pub mod pagination;
mod server;
pub mod telemetry;
mod variant;

pub use config::{FileFormat, LogFormat, LogSettings, ServerConfig, StoreSettings};
pub use error::{ConfigError, Result};
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, Pagination, paginate};
pub use server::Server;
