// Recording store double shared by the facade tests

#![allow(dead_code)]

use async_trait::async_trait;
use pennant_storage::*;
use std::sync::{Arc, Mutex};

type Failure = Arc<dyn Fn() -> StoreError + Send + Sync>;

/// Store that records every call and answers from canned data.
///
/// Creates and updates echo the request back (variants get id `"1"` on
/// create), mirroring what a real backend would return.
#[derive(Clone, Default)]
pub struct RecordingStore {
    calls: Arc<Mutex<Vec<String>>>,
    list_params: Arc<Mutex<Vec<QueryParams>>>,
    count_params: Arc<Mutex<Vec<QueryParams>>>,
    flags: Vec<Flag>,
    variants: Vec<Variant>,
    count: u64,
    failure: Option<Failure>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(mut self, flags: Vec<Flag>) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.variants = variants;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    /// Make every call fail with the error `f` builds.
    pub fn failing<F>(mut self, f: F) -> Self
    where
        F: Fn() -> StoreError + Send + Sync + 'static,
    {
        self.failure = Some(Arc::new(f));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.calls().iter().any(|c| c == method)
    }

    /// Params seen by `list_*` calls, in call order.
    pub fn list_params(&self) -> Vec<QueryParams> {
        self.list_params.lock().unwrap().clone()
    }

    /// Params seen by `count_*` calls, in call order.
    pub fn count_params(&self) -> Vec<QueryParams> {
        self.count_params.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<()> {
        self.calls.lock().unwrap().push(call.into());
        match &self.failure {
            Some(f) => Err(f()),
            None => Ok(()),
        }
    }

    fn record_list(&self, call: &str, opts: &[QueryOption]) -> Result<()> {
        self.list_params
            .lock()
            .unwrap()
            .push(QueryParams::from_options(opts));
        self.record(call)
    }

    fn record_count(&self, call: &str, opts: &[QueryOption]) -> Result<()> {
        self.count_params
            .lock()
            .unwrap()
            .push(QueryParams::from_options(opts));
        self.record(call)
    }
}

#[async_trait]
impl FlagStore for RecordingStore {
    async fn get_flag(&self, key: &str) -> Result<Flag> {
        self.record("get_flag")?;
        self.flags
            .iter()
            .find(|f| f.key == key)
            .cloned()
            .ok_or_else(|| StoreError::flag_not_found(key))
    }

    async fn list_flags(&self, opts: &[QueryOption]) -> Result<Vec<Flag>> {
        self.record_list("list_flags", opts)?;
        Ok(self.flags.clone())
    }

    async fn count_flags(&self, opts: &[QueryOption]) -> Result<u64> {
        self.record_count("count_flags", opts)?;
        Ok(self.count)
    }

    async fn create_flag(&self, req: &CreateFlagRequest) -> Result<Flag> {
        self.record("create_flag")?;
        Ok(Flag {
            key: req.key.clone(),
            name: req.name.clone(),
            description: req.description.clone(),
            enabled: req.enabled,
            ..Default::default()
        })
    }

    async fn update_flag(&self, req: &UpdateFlagRequest) -> Result<Flag> {
        self.record("update_flag")?;
        Ok(Flag {
            key: req.key.clone(),
            name: req.name.clone(),
            description: req.description.clone(),
            enabled: req.enabled,
            ..Default::default()
        })
    }

    async fn delete_flag(&self, _req: &DeleteFlagRequest) -> Result<()> {
        self.record("delete_flag")
    }
}

#[async_trait]
impl VariantStore for RecordingStore {
    async fn get_variant(&self, flag_key: &str, id: &str) -> Result<Variant> {
        self.record("get_variant")?;
        self.variants
            .iter()
            .find(|v| v.flag_key == flag_key && v.id == id)
            .cloned()
            .ok_or_else(|| StoreError::variant_not_found(flag_key, id))
    }

    async fn list_variants(&self, flag_key: &str, opts: &[QueryOption]) -> Result<Vec<Variant>> {
        self.record_list("list_variants", opts)?;
        Ok(self
            .variants
            .iter()
            .filter(|v| v.flag_key == flag_key)
            .cloned()
            .collect())
    }

    async fn count_variants(&self, _flag_key: &str, opts: &[QueryOption]) -> Result<u64> {
        self.record_count("count_variants", opts)?;
        Ok(self.count)
    }

    async fn create_variant(&self, req: &CreateVariantRequest) -> Result<Variant> {
        self.record("create_variant")?;
        Ok(Variant {
            id: "1".to_string(),
            flag_key: req.flag_key.clone(),
            key: req.key.clone(),
            name: req.name.clone(),
            description: req.description.clone(),
            attachment: req.attachment.clone(),
            ..Default::default()
        })
    }

    async fn update_variant(&self, req: &UpdateVariantRequest) -> Result<Variant> {
        self.record("update_variant")?;
        Ok(Variant {
            id: req.id.clone(),
            flag_key: req.flag_key.clone(),
            key: req.key.clone(),
            name: req.name.clone(),
            description: req.description.clone(),
            attachment: req.attachment.clone(),
            ..Default::default()
        })
    }

    async fn delete_variant(&self, _req: &DeleteVariantRequest) -> Result<()> {
        self.record("delete_variant")
    }
}

pub fn flag(key: &str) -> Flag {
    Flag {
        key: key.to_string(),
        ..Default::default()
    }
}
