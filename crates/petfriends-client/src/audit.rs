// crates/petfriends-client/src/audit.rs
// ============================================================================
// Module: API Call Audit Logging
// Description: Structured audit events for PetFriends API calls.
// Purpose: Emit redacted JSON-line call logs without a logging framework.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Each client call produces one [`ApiAuditEvent`] that is handed to the
//! configured [`ApiAuditSink`]. Sinks are observers; they never influence the
//! call result.
//! Invariants:
//! - Events carry no credentials, auth keys, or body content.
//! - Sink write failures are swallowed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Labels
// ============================================================================

/// Client operation classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOperation {
    /// Credential exchange for an auth key.
    GetApiKey,
    /// Pet listing.
    GetListOfPets,
    /// Pet creation with photo.
    AddNewPet,
    /// Pet creation without photo.
    AddNewPetWithoutPhoto,
    /// Photo attachment to an existing pet.
    AddFotoOfPet,
    /// Pet field update.
    UpdatePetInfo,
    /// Pet deletion.
    DeletePet,
}

impl ApiOperation {
    /// Returns a stable label for the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetApiKey => "get_api_key",
            Self::GetListOfPets => "get_list_of_pets",
            Self::AddNewPet => "add_new_pet",
            Self::AddNewPetWithoutPhoto => "add_new_pet_without_photo",
            Self::AddFotoOfPet => "add_foto_of_pet",
            Self::UpdatePetInfo => "update_pet_info",
            Self::DeletePet => "delete_pet",
        }
    }
}

/// Call outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiCallOutcome {
    /// 2xx reply.
    Success,
    /// Non-2xx reply.
    Failure,
    /// No reply was received.
    TransportError,
}

// ============================================================================
// SECTION: Event
// ============================================================================

/// Audit event for a single client call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Operation performed.
    pub operation: ApiOperation,
    /// HTTP method.
    pub method: &'static str,
    /// Request path without query string.
    pub path: String,
    /// Status code when a reply arrived.
    pub status: Option<u16>,
    /// Call outcome.
    pub outcome: ApiCallOutcome,
    /// Wall-clock latency in milliseconds.
    pub latency_ms: u128,
    /// Reply body size in bytes.
    pub response_bytes: usize,
    /// Transport error message when no reply arrived.
    pub error: Option<String>,
}

impl ApiAuditEvent {
    /// Builds an event for a call that received a reply.
    #[must_use]
    pub fn replied(
        operation: ApiOperation,
        method: &'static str,
        path: String,
        status: u16,
        latency_ms: u128,
        response_bytes: usize,
    ) -> Self {
        let outcome = if (200..300).contains(&status) {
            ApiCallOutcome::Success
        } else {
            ApiCallOutcome::Failure
        };
        Self {
            event: "petfriends_api_call",
            timestamp_ms: now_millis(),
            operation,
            method,
            path,
            status: Some(status),
            outcome,
            latency_ms,
            response_bytes,
            error: None,
        }
    }

    /// Builds an event for a call that failed before a reply arrived.
    #[must_use]
    pub fn transport_error(
        operation: ApiOperation,
        method: &'static str,
        path: String,
        latency_ms: u128,
        error: String,
    ) -> Self {
        Self {
            event: "petfriends_api_call",
            timestamp_ms: now_millis(),
            operation,
            method,
            path,
            status: None,
            outcome: ApiCallOutcome::TransportError,
            latency_ms,
            response_bytes: 0,
            error: Some(error),
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for client call events.
pub trait ApiAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &ApiAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl ApiAuditSink for StderrAuditSink {
    fn record(&self, event: &ApiAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ApiAuditSink for FileAuditSink {
    fn record(&self, event: &ApiAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl ApiAuditSink for NoopAuditSink {
    fn record(&self, _event: &ApiAuditEvent) {}
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the current wall-clock time in milliseconds since the epoch.
fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
