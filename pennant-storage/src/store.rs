//! Store traits.
//!
//! Any backend (relational, remote, in-process) plugs into the facade by
//! implementing [`FlagStore`] and [`VariantStore`]; the blanket [`Store`]
//! impl then makes it usable as `Arc<dyn Store>`.

use async_trait::async_trait;

use crate::{
    CreateFlagRequest, CreateVariantRequest, DeleteFlagRequest, DeleteVariantRequest, Flag,
    QueryOption, Result, UpdateFlagRequest, UpdateVariantRequest, Variant,
};

/// Flag persistence.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Fetch a flag. Fails with `NotFound` if no flag has `key`.
    async fn get_flag(&self, key: &str) -> Result<Flag>;

    /// Return at most `limit` flags starting at `offset`.
    ///
    /// Order is chosen by the store but must be stable across calls.
    /// An empty page is not an error.
    async fn list_flags(&self, opts: &[QueryOption]) -> Result<Vec<Flag>>;

    /// Total number of flags matching `opts`.
    ///
    /// Offset and limit are ignored; only filtering options narrow the count.
    async fn count_flags(&self, opts: &[QueryOption]) -> Result<u64>;

    /// Fails with `AlreadyExists` or `InvalidArgument`.
    async fn create_flag(&self, req: &CreateFlagRequest) -> Result<Flag>;

    /// Fails with `NotFound` if the flag does not exist.
    async fn update_flag(&self, req: &UpdateFlagRequest) -> Result<Flag>;

    /// Fails with `NotFound` if the flag does not exist.
    async fn delete_flag(&self, req: &DeleteFlagRequest) -> Result<()>;
}

/// Variant persistence. Variants are always addressed through their flag.
#[async_trait]
pub trait VariantStore: Send + Sync {
    async fn get_variant(&self, flag_key: &str, id: &str) -> Result<Variant>;

    async fn list_variants(&self, flag_key: &str, opts: &[QueryOption]) -> Result<Vec<Variant>>;

    /// Variants of `flag_key` matching `opts`, ignoring offset and limit.
    async fn count_variants(&self, flag_key: &str, opts: &[QueryOption]) -> Result<u64>;

    /// Fails with `NotFound` if the parent flag is missing.
    async fn create_variant(&self, req: &CreateVariantRequest) -> Result<Variant>;

    async fn update_variant(&self, req: &UpdateVariantRequest) -> Result<Variant>;

    async fn delete_variant(&self, req: &DeleteVariantRequest) -> Result<()>;
}

/// The full capability set the facade depends on.
pub trait Store: FlagStore + VariantStore {}

impl<T: FlagStore + VariantStore> Store for T {}
