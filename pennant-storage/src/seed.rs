//! Seed documents for pre-populating a store.
//!
//! A seed is plain `serde` data, so it can be read from any format the
//! caller has a deserializer for:
//!
//! ```toml
//! [[flags]]
//! key = "new-checkout"
//! name = "New checkout"
//! enabled = true
//!
//! [[flags.variants]]
//! key = "blue"
//! attachment = '{"color": "#00f"}'
//! ```

use serde::{Deserialize, Serialize};

use crate::{CreateFlagRequest, CreateVariantRequest};

/// Flags (with their variants) to load into a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub flags: Vec<SeedFlag>,
}

/// One seeded flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFlag {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub variants: Vec<SeedVariant>,
}

/// One seeded variant; its flag key comes from the enclosing [`SeedFlag`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedVariant {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachment: String,
}

impl Seed {
    /// Number of variants across all flags.
    pub fn variant_count(&self) -> usize {
        self.flags.iter().map(|f| f.variants.len()).sum()
    }
}

impl SeedFlag {
    pub(crate) fn to_request(&self) -> CreateFlagRequest {
        CreateFlagRequest {
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            enabled: self.enabled,
        }
    }
}

impl SeedVariant {
    pub(crate) fn to_request(&self, flag_key: &str) -> CreateVariantRequest {
        CreateVariantRequest {
            flag_key: flag_key.to_string(),
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            attachment: self.attachment.clone(),
        }
    }
}
