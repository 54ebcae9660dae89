// Pennant - feature flag and variant management
//
// This library ties together the storage contracts and the request facade.
// Bring your own store, or start from the in-memory one.

// Re-export the facade
pub use pennant_server::*;

// Re-export member crates
pub use pennant_server;
pub use pennant_storage;

// Re-export commonly used dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json;
pub use tokio;

/// Prelude for common imports
///
/// ```
/// use pennant::prelude::*;
///
/// # tokio_test::block_on(async {
/// let server = Server::new(Arc::new(MemoryStore::new()));
/// let list = server
///     .list_flags(&ListFlagRequest { offset: -1, limit: 0 })
///     .await
///     .unwrap();
/// assert!(list.flags.is_empty());
/// assert_eq!(Pagination::new(-1, 0).limit, DEFAULT_LIMIT);
/// # });
/// ```
pub mod prelude {
    pub use pennant_server::{
        ConfigError, DEFAULT_LIMIT, MAX_LIMIT, Pagination, Server, ServerConfig, paginate,
        telemetry,
    };
    pub use pennant_storage::{
        CreateFlagRequest, CreateVariantRequest, DeleteFlagRequest, DeleteVariantRequest, Empty,
        Flag, FlagList, FlagStore, GetFlagRequest, GetVariantRequest, ListFlagRequest,
        ListVariantRequest, MemoryStore, QueryOption, QueryParams, Seed, Store, StoreError,
        UpdateFlagRequest, UpdateVariantRequest, Variant, VariantList, VariantStore, with_limit,
        with_offset,
    };

    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
