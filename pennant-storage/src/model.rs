//! Flag and variant entities, plus the request and response envelopes
//! exchanged with the facade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A keyed, boolean-oriented configuration entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Unique flag key.
    pub key: String,

    /// Human readable name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Whether the flag is switched on.
    pub enabled: bool,

    /// When the store first saved the flag.
    pub created_at: DateTime<Utc>,

    /// When the store last changed the flag.
    pub updated_at: DateTime<Utc>,
}

/// A named sub-option of a flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Store-assigned identifier.
    pub id: String,

    /// Key of the owning flag.
    pub flag_key: String,

    /// Variant key, unique within its flag.
    pub key: String,

    /// Human readable name.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Opaque payload; JSON text when set.
    #[serde(default)]
    pub attachment: String,

    /// When the store first saved the variant.
    pub created_at: DateTime<Utc>,

    /// When the store last changed the variant.
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// FLAG REQUESTS
// ============================================================================

/// Fetch one flag by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFlagRequest {
    pub key: String,
}

/// List flags; `offset` and `limit` are raw caller input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFlagRequest {
    #[serde(default)]
    pub offset: i32,
    #[serde(default)]
    pub limit: i32,
}

/// Create a flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFlagRequest {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
}

/// Replace the mutable fields of an existing flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFlagRequest {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
}

/// Delete a flag and, with it, its variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFlagRequest {
    pub key: String,
}

// ============================================================================
// VARIANT REQUESTS
// ============================================================================

/// Fetch one variant of a flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetVariantRequest {
    pub id: String,
    pub flag_key: String,
}

/// List the variants of a flag; `offset` and `limit` are raw caller input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVariantRequest {
    pub flag_key: String,
    #[serde(default)]
    pub offset: i32,
    #[serde(default)]
    pub limit: i32,
}

/// Create a variant under a flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVariantRequest {
    pub flag_key: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachment: String,
}

/// Replace the mutable fields of an existing variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVariantRequest {
    pub id: String,
    pub flag_key: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachment: String,
}

/// Delete one variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteVariantRequest {
    pub id: String,
    pub flag_key: String,
}

// ============================================================================
// RESPONSES
// ============================================================================

/// A page of flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagList {
    pub flags: Vec<Flag>,

    /// Number of flags in the store, regardless of the page.
    pub total_count: u64,
}

/// A page of variants belonging to one flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantList {
    pub variants: Vec<Variant>,

    /// Number of variants the flag has, regardless of the page.
    pub total_count: u64,
}

/// Acknowledgement with no payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}
