// crates/petfriends-client/src/model.rs
// ============================================================================
// Module: PetFriends Data Model
// Description: Credentials, auth keys, pet records, and list filters.
// Purpose: Give request inputs and decoded payloads explicit types.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Request inputs ([`Credentials`], [`AuthKey`], [`NewPet`], [`PetFilter`]) and
//! decoded service payloads ([`PetRecord`], [`PetList`]).
//! Invariants:
//! - Secrets (passwords, auth keys) are redacted from `Debug` output.
//! - Pet ages decode to strings whether the service emits a string or number.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Credentials
// ============================================================================

/// Account credentials exchanged for an [`AuthKey`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Builds credentials from an email and password.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// SECTION: Auth Key
// ============================================================================

/// Opaque bearer token issued by the key endpoint.
///
/// # Invariants
/// - The value is never inspected or validated client-side.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey(String);

impl AuthKey {
    /// Wraps a raw key value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw key value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthKey(<redacted>)")
    }
}

// ============================================================================
// SECTION: Pet Filter
// ============================================================================

/// Selects all pets or only the pets owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    /// Every pet visible to the service (wire value is the empty string).
    #[default]
    All,
    /// Pets owned by the authenticated account.
    MyPets,
}

impl PetFilter {
    /// Returns the `filter` query value sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "",
            Self::MyPets => "my_pets",
        }
    }
}

impl FromStr for PetFilter {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "" => Ok(Self::All),
            "my_pets" => Ok(Self::MyPets),
            other => Err(format!("unknown pet filter: {other}")),
        }
    }
}

// ============================================================================
// SECTION: Pet Input
// ============================================================================

/// Mutable pet fields submitted on create and update.
///
/// Values are sent verbatim; empty or malformed fields are left for the
/// service to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    /// Pet name.
    pub name: String,
    /// Animal type label.
    pub animal_type: String,
    /// Age as submitted (not required to be numeric).
    pub age: String,
}

impl NewPet {
    /// Builds a pet input from its three fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        animal_type: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            animal_type: animal_type.into(),
            age: age.into(),
        }
    }

    /// Returns the fields as form pairs in wire order.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [("name", &self.name), ("animal_type", &self.animal_type), ("age", &self.age)]
    }
}

// ============================================================================
// SECTION: Pet Records
// ============================================================================

/// Pet record as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    /// Service-assigned identifier.
    pub id: String,
    /// Pet name.
    #[serde(default)]
    pub name: String,
    /// Animal type label.
    #[serde(default)]
    pub animal_type: String,
    /// Age as stored by the service.
    ///
    /// String ages are kept verbatim. Numeric ages are rendered with
    /// `serde_json`'s number formatting, so integers beyond `u64` arrive as
    /// floats and lose precision (for example `3.3333333333333333e20`).
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: String,
    /// Photo payload (typically a `data:` URI) when one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_photo: Option<String>,
    /// Owning account identifier when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Creation timestamp when reported.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_string_or_number"
    )]
    pub created_at: Option<String>,
}

impl PetRecord {
    /// Returns true when a non-empty photo is attached.
    #[must_use]
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|photo| !photo.is_empty())
    }
}

/// Body of a successful pet listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetList {
    /// Listed pets in service order.
    #[serde(default)]
    pub pets: Vec<PetRecord>,
}

impl PetList {
    /// Returns true when a pet with the given id is listed.
    #[must_use]
    pub fn contains_id(&self, pet_id: &str) -> bool {
        self.pets.iter().any(|pet| pet.id == pet_id)
    }

    /// Returns the first listed pet.
    #[must_use]
    pub fn first(&self) -> Option<&PetRecord> {
        self.pets.first()
    }
}

// ============================================================================
// SECTION: Serde Helpers
// ============================================================================

/// Renders a JSON scalar as the string the service would have echoed.
fn scalar_to_string(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Array(_) | Value::Object(_) => Err("expected a string or number".to_string()),
    }
}

/// Deserializes a string or number field, treating null as empty.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value).map(Option::unwrap_or_default).map_err(serde::de::Error::custom)
}

/// Deserializes an optional string or number field.
fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value).map_err(serde::de::Error::custom)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
