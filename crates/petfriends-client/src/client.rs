// crates/petfriends-client/src/client.rs
// ============================================================================
// Module: PetFriends API Client
// Description: Blocking HTTP client for the PetFriends pet-management API.
// Purpose: Translate typed calls into wire requests and normalize replies.
// Dependencies: reqwest, url, thiserror
// ============================================================================

//! ## Overview
//! [`ApiClient`] issues one blocking request per operation and returns the
//! reply as an [`ApiResponse`]. Status codes are never interpreted; the error
//! arm of each call covers only local and transport failures.
//! Invariants:
//! - No state is carried between calls.
//! - Redirects are not followed; 3xx replies surface verbatim.
//! - Response bodies are capped at the configured byte limit.
//! - Photo files are read before any network traffic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use reqwest::blocking::Response;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::multipart::Part;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use thiserror::Error;
use url::Url;
use url::form_urlencoded;

use crate::audit::ApiAuditEvent;
use crate::audit::ApiAuditSink;
use crate::audit::ApiOperation;
use crate::audit::NoopAuditSink;
use crate::config::ClientConfig;
use crate::model::AuthKey;
use crate::model::Credentials;
use crate::model::NewPet;
use crate::model::PetFilter;
use crate::response::ApiResponse;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Header carrying the auth key on authenticated calls.
pub const AUTH_KEY_HEADER: &str = "auth_key";
/// Multipart field carrying the photo file.
pub const PHOTO_FIELD: &str = "pet_photo";
/// Form content type for url-encoded bodies.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Client errors.
///
/// # Invariants
/// - HTTP status codes never produce an error; they surface in [`ApiResponse`].
/// - String payloads may include untrusted server text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiClientError {
    /// Invalid configuration or request input.
    #[error("petfriends client config error: {0}")]
    Config(String),
    /// Request could not be sent or the reply could not be read.
    #[error("petfriends transport error: {0}")]
    Transport(String),
    /// Photo file could not be read.
    #[error("petfriends photo error: {0}")]
    Photo(String),
    /// Reply body exceeds the configured cap.
    #[error("petfriends response exceeds size limit ({actual} > {limit})")]
    ResponseTooLarge {
        /// Observed size in bytes (lower bound when truncated).
        actual: usize,
        /// Maximum size in bytes.
        limit: usize,
    },
    /// Reply body did not decode into the requested shape.
    #[error("petfriends decode error: {0}")]
    Decode(String),
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking PetFriends API client.
///
/// Cheap to clone; clones share the connection pool and audit sink.
#[derive(Clone)]
pub struct ApiClient {
    /// Underlying HTTP client.
    http: Client,
    /// Normalized base URL ending in `/`.
    base_url: Url,
    /// Reply body cap in bytes.
    max_response_bytes: usize,
    /// Call observer.
    audit: Arc<dyn ApiAuditSink>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("max_response_bytes", &self.max_response_bytes)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Config`] when the configuration is invalid and
    /// [`ApiClientError::Transport`] when the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let mut config = config.clone();
        config.validate().map_err(|err| ApiClientError::Config(err.to_string()))?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| ApiClientError::Config(format!("invalid base url: {err}")))?;
        let http = Client::builder()
            .timeout(config.timeout())
            .redirect(Policy::none())
            .build()
            .map_err(|err| ApiClientError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url,
            max_response_bytes: config.max_response_bytes,
            audit: Arc::new(NoopAuditSink),
        })
    }

    /// Attaches an audit sink that observes every call.
    #[must_use]
    pub fn with_audit_sink(mut self, sink: Arc<dyn ApiAuditSink>) -> Self {
        self.audit = sink;
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Exchanges credentials for an auth key.
    ///
    /// A 200 reply carries the key in the `key` field; rejected credentials
    /// yield 403 without it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure or invalid header values.
    pub fn get_api_key(&self, credentials: &Credentials) -> Result<ApiResponse, ApiClientError> {
        let url = self.endpoint(&["api", "key"])?;
        let request = self
            .http
            .get(url)
            .header("email", header_value("email", &credentials.email)?)
            .header("password", header_value("password", &credentials.password)?);
        self.send(ApiOperation::GetApiKey, request)
    }

    /// Lists pets visible under `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure.
    pub fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> Result<ApiResponse, ApiClientError> {
        let mut url = self.endpoint(&["api", "pets"])?;
        url.query_pairs_mut().append_pair("filter", filter.as_str());
        let request = self.authorized(Method::GET, url, auth_key)?;
        self.send(ApiOperation::GetListOfPets, request)
    }

    /// Creates a pet with a photo read from `photo_path`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Photo`] when the photo cannot be read, or
    /// another [`ApiClientError`] on transport failure.
    pub fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        pet: &NewPet,
        photo_path: &Path,
    ) -> Result<ApiResponse, ApiClientError> {
        let photo = PhotoUpload::read(photo_path)?;
        let mut form = Form::new();
        for (name, value) in pet.form_fields() {
            form = form.text(name, value.to_string());
        }
        let form = form.part(PHOTO_FIELD, photo.into_part()?);
        let url = self.endpoint(&["api", "pets"])?;
        let request = self.authorized(Method::POST, url, auth_key)?.multipart(form);
        self.send(ApiOperation::AddNewPet, request)
    }

    /// Creates a pet without a photo.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure.
    pub fn add_new_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        pet: &NewPet,
    ) -> Result<ApiResponse, ApiClientError> {
        let url = self.endpoint(&["api", "create_pet_simple"])?;
        let request = self.authorized(Method::POST, url, auth_key)?;
        self.send(ApiOperation::AddNewPetWithoutPhoto, with_form_body(request, pet))
    }

    /// Attaches a photo to the pet identified by `pet_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Photo`] when the photo cannot be read, or
    /// another [`ApiClientError`] on transport failure.
    pub fn add_foto_of_pet(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse, ApiClientError> {
        let photo = PhotoUpload::read(photo_path)?;
        let form = Form::new().part(PHOTO_FIELD, photo.into_part()?);
        let url = self.endpoint(&["api", "pets", "set_photo", pet_id])?;
        let request = self.authorized(Method::POST, url, auth_key)?.multipart(form);
        self.send(ApiOperation::AddFotoOfPet, request)
    }

    /// Overwrites the mutable fields of the pet identified by `pet_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure.
    pub fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        pet: &NewPet,
    ) -> Result<ApiResponse, ApiClientError> {
        let url = self.endpoint(&["api", "pets", pet_id])?;
        let request = self.authorized(Method::PUT, url, auth_key)?;
        self.send(ApiOperation::UpdatePetInfo, with_form_body(request, pet))
    }

    /// Deletes the pet identified by `pet_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure.
    pub fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> Result<ApiResponse, ApiClientError> {
        let url = self.endpoint(&["api", "pets", pet_id])?;
        let request = self.authorized(Method::DELETE, url, auth_key)?;
        self.send(ApiOperation::DeletePet, request)
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                ApiClientError::Config("base url cannot carry path segments".to_string())
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Starts a request carrying the auth key header.
    fn authorized(
        &self,
        method: Method,
        url: Url,
        auth_key: &AuthKey,
    ) -> Result<RequestBuilder, ApiClientError> {
        let value = header_value(AUTH_KEY_HEADER, auth_key.as_str())?;
        Ok(self.http.request(method, url).header(AUTH_KEY_HEADER, value))
    }

    /// Sends a request, reads the capped body, and records the audit event.
    fn send(
        &self,
        operation: ApiOperation,
        builder: RequestBuilder,
    ) -> Result<ApiResponse, ApiClientError> {
        let request = builder.build().map_err(|err| ApiClientError::Transport(err.to_string()))?;
        let method = method_label(request.method());
        let path = request.url().path().to_string();
        let started = Instant::now();
        let result = self
            .http
            .execute(request)
            .map_err(|err| ApiClientError::Transport(err.to_string()))
            .and_then(|response| {
                let status = response.status().as_u16();
                read_body_with_limit(response, self.max_response_bytes).map(|body| (status, body))
            });
        let latency_ms = started.elapsed().as_millis();
        match result {
            Ok((status, body)) => {
                self.audit.record(&ApiAuditEvent::replied(
                    operation, method, path, status, latency_ms, body.len(),
                ));
                Ok(ApiResponse::from_parts(status, &body))
            }
            Err(err) => {
                self.audit.record(&ApiAuditEvent::transport_error(
                    operation,
                    method,
                    path,
                    latency_ms,
                    err.to_string(),
                ));
                Err(err)
            }
        }
    }
}

// ============================================================================
// SECTION: Photo Uploads
// ============================================================================

/// Photo file contents prepared for a multipart part.
struct PhotoUpload {
    /// Base name sent as the part's file name.
    file_name: String,
    /// Part content type derived from the extension.
    content_type: &'static str,
    /// File bytes.
    bytes: Vec<u8>,
}

impl PhotoUpload {
    /// Reads the photo file from disk.
    fn read(path: &Path) -> Result<Self, ApiClientError> {
        let bytes = fs::read(path)
            .map_err(|err| ApiClientError::Photo(format!("{}: {err}", path.display())))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ApiClientError::Photo(format!("{}: missing file name", path.display())))?;
        Ok(Self {
            file_name,
            content_type: photo_content_type(path),
            bytes,
        })
    }

    /// Converts the upload into a multipart part.
    fn into_part(self) -> Result<Part, ApiClientError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(self.content_type)
            .map_err(|err| ApiClientError::Photo(format!("invalid content type: {err}")))
    }
}

/// Returns the content type sent for a photo at `path`.
#[must_use]
pub fn photo_content_type(path: &Path) -> &'static str {
    let extension = path.extension().map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a header value, rejecting characters HTTP cannot carry.
fn header_value(name: &str, value: &str) -> Result<HeaderValue, ApiClientError> {
    HeaderValue::from_str(value)
        .map_err(|_| ApiClientError::Config(format!("invalid {name} header value")))
}

/// Sets a url-encoded body built from the pet's fields.
fn with_form_body(request: RequestBuilder, pet: &NewPet) -> RequestBuilder {
    let body = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pet.form_fields())
        .finish();
    request.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body)
}

/// Returns a stable label for the request method.
fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        _ => "OTHER",
    }
}

/// Reads a reply body while enforcing a hard byte limit.
fn read_body_with_limit(response: Response, limit: usize) -> Result<Vec<u8>, ApiClientError> {
    let limit_u64 = u64::try_from(limit).unwrap_or(u64::MAX);
    if let Some(length) = response.content_length()
        && length > limit_u64
    {
        return Err(ApiClientError::ResponseTooLarge {
            actual: usize::try_from(length).unwrap_or(usize::MAX),
            limit,
        });
    }
    let mut body = Vec::new();
    response
        .take(limit_u64.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(|err| ApiClientError::Transport(err.to_string()))?;
    if body.len() > limit {
        return Err(ApiClientError::ResponseTooLarge {
            actual: body.len(),
            limit,
        });
    }
    Ok(body)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
