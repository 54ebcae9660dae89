//! In-process store backend.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
    CreateFlagRequest, CreateVariantRequest, DeleteFlagRequest, DeleteVariantRequest, Flag,
    FlagStore, QueryOption, QueryParams, Result, Seed, StoreError, UpdateFlagRequest,
    UpdateVariantRequest, Variant, VariantStore,
};

/// A [`Store`](crate::Store) kept entirely in memory.
///
/// Flags are listed in key order and variants in creation order. Writers
/// are serialized by a single lock. Deleting a flag deletes its variants,
/// and deleting anything that does not exist fails with `NotFound`.
///
/// Cloning is cheap; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    flags: BTreeMap<String, Flag>,
    variants: Vec<Variant>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from `seed`.
    ///
    /// The seed goes through the same validation as `create_*` calls, so a
    /// duplicate key or a malformed attachment rejects the whole seed.
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        let mut state = State::default();

        for flag in &seed.flags {
            state.insert_flag(&flag.to_request())?;
            for variant in &flag.variants {
                state.insert_variant(&variant.to_request(&flag.key))?;
            }
        }

        info!(
            flags = seed.flags.len(),
            variants = seed.variant_count(),
            "Seeded memory store"
        );

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }
}

impl State {
    fn flag(&self, key: &str) -> Result<&Flag> {
        self.flags
            .get(key)
            .ok_or_else(|| StoreError::flag_not_found(key))
    }

    fn variant_index(&self, flag_key: &str, id: &str) -> Result<usize> {
        self.variants
            .iter()
            .position(|v| v.flag_key == flag_key && v.id == id)
            .ok_or_else(|| StoreError::variant_not_found(flag_key, id))
    }

    fn variant_key_taken(&self, flag_key: &str, key: &str, except_id: Option<&str>) -> bool {
        self.variants.iter().any(|v| {
            v.flag_key == flag_key && v.key == key && Some(v.id.as_str()) != except_id
        })
    }

    fn insert_flag(&mut self, req: &CreateFlagRequest) -> Result<Flag> {
        validate_flag_fields(&req.key, &req.name)?;

        if self.flags.contains_key(&req.key) {
            return Err(StoreError::AlreadyExists(format!("flag \"{}\"", req.key)));
        }

        let now = Utc::now();
        let flag = Flag {
            key: req.key.clone(),
            name: req.name.clone(),
            description: req.description.clone(),
            enabled: req.enabled,
            created_at: now,
            updated_at: now,
        };

        self.flags.insert(flag.key.clone(), flag.clone());
        Ok(flag)
    }

    fn insert_variant(&mut self, req: &CreateVariantRequest) -> Result<Variant> {
        validate_variant_fields(&req.flag_key, &req.key, &req.attachment)?;
        self.flag(&req.flag_key)?;

        if self.variant_key_taken(&req.flag_key, &req.key, None) {
            return Err(StoreError::AlreadyExists(format!(
                "variant \"{}\" of flag \"{}\"",
                req.key, req.flag_key
            )));
        }

        let now = Utc::now();
        let variant = Variant {
            id: uuid::Uuid::new_v4().to_string(),
            flag_key: req.flag_key.clone(),
            key: req.key.clone(),
            name: req.name.clone(),
            description: req.description.clone(),
            attachment: req.attachment.clone(),
            created_at: now,
            updated_at: now,
        };

        self.variants.push(variant.clone());
        Ok(variant)
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidArgument(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn validate_flag_fields(key: &str, name: &str) -> Result<()> {
    require("key", key)?;
    require("name", name)
}

fn validate_variant_fields(flag_key: &str, key: &str, attachment: &str) -> Result<()> {
    require("flag_key", flag_key)?;
    require("key", key)?;

    if !attachment.is_empty() {
        serde_json::from_str::<serde_json::Value>(attachment).map_err(|e| {
            StoreError::InvalidArgument(format!("attachment must be valid JSON: {}", e))
        })?;
    }

    Ok(())
}

fn to_count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

#[async_trait]
impl FlagStore for MemoryStore {
    async fn get_flag(&self, key: &str) -> Result<Flag> {
        let state = self.state.read().await;
        state.flag(key).cloned()
    }

    async fn list_flags(&self, opts: &[QueryOption]) -> Result<Vec<Flag>> {
        let params = QueryParams::from_options(opts);
        let state = self.state.read().await;

        Ok(params.page_iter(state.flags.values()).cloned().collect())
    }

    async fn count_flags(&self, _opts: &[QueryOption]) -> Result<u64> {
        let state = self.state.read().await;
        Ok(to_count(state.flags.len()))
    }

    async fn create_flag(&self, req: &CreateFlagRequest) -> Result<Flag> {
        let mut state = self.state.write().await;
        let flag = state.insert_flag(req)?;

        debug!(key = %flag.key, "Created flag");
        Ok(flag)
    }

    async fn update_flag(&self, req: &UpdateFlagRequest) -> Result<Flag> {
        validate_flag_fields(&req.key, &req.name)?;

        let mut state = self.state.write().await;
        let flag = state
            .flags
            .get_mut(&req.key)
            .ok_or_else(|| StoreError::flag_not_found(&req.key))?;

        flag.name = req.name.clone();
        flag.description = req.description.clone();
        flag.enabled = req.enabled;
        flag.updated_at = Utc::now();

        debug!(key = %flag.key, "Updated flag");
        Ok(flag.clone())
    }

    async fn delete_flag(&self, req: &DeleteFlagRequest) -> Result<()> {
        let mut state = self.state.write().await;

        if state.flags.remove(&req.key).is_none() {
            return Err(StoreError::flag_not_found(&req.key));
        }

        let before = state.variants.len();
        state.variants.retain(|v| v.flag_key != req.key);

        debug!(
            key = %req.key,
            variants = before - state.variants.len(),
            "Deleted flag"
        );
        Ok(())
    }
}

#[async_trait]
impl VariantStore for MemoryStore {
    async fn get_variant(&self, flag_key: &str, id: &str) -> Result<Variant> {
        let state = self.state.read().await;
        let idx = state.variant_index(flag_key, id)?;
        Ok(state.variants[idx].clone())
    }

    async fn list_variants(&self, flag_key: &str, opts: &[QueryOption]) -> Result<Vec<Variant>> {
        let params = QueryParams::from_options(opts);
        let state = self.state.read().await;
        state.flag(flag_key)?;

        let variants = state.variants.iter().filter(|v| v.flag_key == flag_key);
        Ok(params.page_iter(variants).cloned().collect())
    }

    async fn count_variants(&self, flag_key: &str, _opts: &[QueryOption]) -> Result<u64> {
        let state = self.state.read().await;
        state.flag(flag_key)?;

        let count = state
            .variants
            .iter()
            .filter(|v| v.flag_key == flag_key)
            .count();
        Ok(to_count(count))
    }

    async fn create_variant(&self, req: &CreateVariantRequest) -> Result<Variant> {
        let mut state = self.state.write().await;
        let variant = state.insert_variant(req)?;

        debug!(flag_key = %variant.flag_key, id = %variant.id, "Created variant");
        Ok(variant)
    }

    async fn update_variant(&self, req: &UpdateVariantRequest) -> Result<Variant> {
        validate_variant_fields(&req.flag_key, &req.key, &req.attachment)?;

        let mut state = self.state.write().await;
        let idx = state.variant_index(&req.flag_key, &req.id)?;

        if state.variant_key_taken(&req.flag_key, &req.key, Some(&req.id)) {
            return Err(StoreError::AlreadyExists(format!(
                "variant \"{}\" of flag \"{}\"",
                req.key, req.flag_key
            )));
        }

        let variant = &mut state.variants[idx];
        variant.key = req.key.clone();
        variant.name = req.name.clone();
        variant.description = req.description.clone();
        variant.attachment = req.attachment.clone();
        variant.updated_at = Utc::now();

        debug!(flag_key = %variant.flag_key, id = %variant.id, "Updated variant");
        Ok(variant.clone())
    }

    async fn delete_variant(&self, req: &DeleteVariantRequest) -> Result<()> {
        let mut state = self.state.write().await;
        let idx = state.variant_index(&req.flag_key, &req.id)?;
        state.variants.remove(idx);

        debug!(flag_key = %req.flag_key, id = %req.id, "Deleted variant");
        Ok(())
    }
}
