//! The request facade.

use pennant_storage::{MemoryStore, Store};
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::{Result, ServerConfig};

/// Handles flag and variant requests against an injected [`Store`].
///
/// The server holds no mutable state of its own, so a single instance (or
/// cheap clones of it) can serve any number of concurrent callers. Every
/// store error is returned to the caller unchanged.
///
/// # Examples
///
/// ```
/// use pennant_server::Server;
/// use pennant_storage::{GetFlagRequest, MemoryStore};
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let server = Server::new(Arc::new(MemoryStore::new()));
/// let err = server
///     .get_flag(&GetFlagRequest { key: "missing".to_string() })
///     .await
///     .unwrap_err();
/// assert!(err.is_not_found());
/// # });
/// ```
#[derive(Clone)]
pub struct Server {
    pub(crate) store: Arc<dyn Store>,
}

impl Server {
    /// Create a server backed by `store`.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Build a server over a [`MemoryStore`], seeded if configured.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let store = match config.store.load_seed()? {
            Some(seed) => MemoryStore::from_seed(&seed)?,
            None => MemoryStore::new(),
        };

        info!(seeded = config.store.seed.is_some(), "Server initialized");
        Ok(Self::new(Arc::new(store)))
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }
}

impl fmt::Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Server").finish_non_exhaustive()
    }
}
