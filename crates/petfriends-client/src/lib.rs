// crates/petfriends-client/src/lib.rs
// ============================================================================
// Module: PetFriends Client Library
// Description: HTTP client contract for the PetFriends pet-management API.
// Purpose: Authenticate, list, create, update, delete, and photograph pets.
// Dependencies: reqwest, serde, serde_json, thiserror, toml, url
// ============================================================================

//! ## Overview
//! PetFriends Client wraps the fixed PetFriends HTTP API behind [`ApiClient`].
//! Each operation returns an [`ApiResponse`] holding the verbatim status code
//! and a parsed body; [`ApiResponse::outcome`] turns that into a tagged
//! [`ApiOutcome`].
//! Invariants:
//! - The client never classifies, retries, or rewrites service replies.
//! - Calls are independent; the client holds no session state.
//! - Audit events never include credentials or auth keys.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod client;
pub mod config;
pub mod model;
pub mod response;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::ApiAuditEvent;
pub use audit::ApiAuditSink;
pub use audit::ApiCallOutcome;
pub use audit::ApiOperation;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use client::ApiClient;
pub use client::ApiClientError;
pub use client::photo_content_type;
pub use config::ClientConfig;
pub use config::ConfigError;
pub use model::AuthKey;
pub use model::Credentials;
pub use model::NewPet;
pub use model::PetFilter;
pub use model::PetList;
pub use model::PetRecord;
pub use response::ApiOutcome;
pub use response::ApiResponse;
pub use response::ResponseBody;
