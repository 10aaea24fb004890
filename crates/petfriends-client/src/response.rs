// crates/petfriends-client/src/response.rs
// ============================================================================
// Module: Normalized API Responses
// Description: Status/body pairs and the tagged success/failure outcome.
// Purpose: Surface service replies verbatim while giving callers explicit variants.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every client operation yields an [`ApiResponse`]: the numeric status plus a
//! [`ResponseBody`] that is JSON when the payload parses as JSON and raw text
//! otherwise. [`ApiResponse::outcome`] converts the pair into an
//! [`ApiOutcome`] so callers branch on a variant instead of probing fields.
//! Invariants:
//! - Status codes and bodies are never rewritten.
//! - Only 2xx statuses map to [`ApiOutcome::Success`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiClientError;
use crate::model::AuthKey;
use crate::model::PetList;
use crate::model::PetRecord;

// ============================================================================
// SECTION: Body
// ============================================================================

/// Parsed response payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResponseBody {
    /// Payload that parsed as JSON.
    Json(Value),
    /// Payload that did not parse as JSON, decoded lossily as UTF-8.
    Text(String),
}

impl ResponseBody {
    /// Classifies raw response bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice::<Value>(bytes).map_or_else(
            |_| Self::Text(String::from_utf8_lossy(bytes).into_owned()),
            Self::Json,
        )
    }

    /// Returns the JSON value when the body is JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text when the body is not JSON.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Returns a top-level JSON field when the body is a JSON object.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(name))
    }

    /// Returns true when the body is a JSON object carrying `name`.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns a top-level string field.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// Status code and parsed body of one service call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed body.
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Builds a response from a status and raw body bytes.
    #[must_use]
    pub fn from_parts(status: u16, bytes: &[u8]) -> Self {
        Self {
            status,
            body: ResponseBody::from_bytes(bytes),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Converts into the tagged outcome.
    #[must_use]
    pub fn outcome(self) -> ApiOutcome {
        if self.is_success() {
            ApiOutcome::Success(self.body)
        } else {
            ApiOutcome::Failure {
                status: self.status,
                body: self.body,
            }
        }
    }

    /// Extracts the `key` field issued by the key endpoint.
    #[must_use]
    pub fn auth_key(&self) -> Option<AuthKey> {
        self.body.str_field("key").map(AuthKey::new)
    }

    /// Decodes a JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Decode`] when the body is text or does not
    /// match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiClientError> {
        let value = self.body.as_json().ok_or_else(|| {
            ApiClientError::Decode(format!("status {} body is not json", self.status))
        })?;
        T::deserialize(value).map_err(|err| {
            ApiClientError::Decode(format!("status {} body: {err}", self.status))
        })
    }

    /// Decodes a pet listing body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Decode`] when the body is not a pet listing.
    pub fn pets(&self) -> Result<PetList, ApiClientError> {
        self.json()
    }

    /// Decodes a single pet record body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Decode`] when the body is not a pet record.
    pub fn pet(&self) -> Result<PetRecord, ApiClientError> {
        self.json()
    }
}

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Tagged result of a call: 2xx success or anything else.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// 2xx reply with its body.
    Success(ResponseBody),
    /// Non-2xx reply with its status and body.
    Failure {
        /// HTTP status code.
        status: u16,
        /// Parsed body.
        body: ResponseBody,
    },
}

impl ApiOutcome {
    /// Returns the success body, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&ResponseBody> {
        match self {
            Self::Success(body) => Some(body),
            Self::Failure {
                ..
            } => None,
        }
    }

    /// Returns the failure status, if any.
    #[must_use]
    pub const fn failure_status(&self) -> Option<u16> {
        match self {
            Self::Success(_) => None,
            Self::Failure {
                status, ..
            } => Some(*status),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
