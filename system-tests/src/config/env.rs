// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for PetFriends system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed, as do empty values.
//! Invariants:
//! - Valid credentials are configured as a pair or not at all.
//! - A live base URL requires valid credentials.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use super::deployment::DeploymentProfile;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Largest timeout override accepted, matching the client's request timeout ceiling.
const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Live service base URL; unset selects the in-process stub.
    BaseUrl,
    /// Email of an existing account on the target.
    Email,
    /// Password of an existing account on the target.
    Password,
    /// Email override for the rejected-credentials case.
    InvalidEmail,
    /// Password override for the rejected-credentials case.
    InvalidPassword,
    /// Deployment profile (`lenient` or `strict`).
    Deployment,
    /// Optional timeout override in seconds (1 to 600).
    TimeoutSeconds,
    /// Optional run root override.
    RunRoot,
}

impl SystemTestEnv {
    /// Every environment key, in documentation order.
    pub const ALL: [Self; 8] = [
        Self::BaseUrl,
        Self::Email,
        Self::Password,
        Self::InvalidEmail,
        Self::InvalidPassword,
        Self::Deployment,
        Self::TimeoutSeconds,
        Self::RunRoot,
    ];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "PETFRIENDS_SYSTEM_TEST_BASE_URL",
            Self::Email => "PETFRIENDS_SYSTEM_TEST_EMAIL",
            Self::Password => "PETFRIENDS_SYSTEM_TEST_PASSWORD",
            Self::InvalidEmail => "PETFRIENDS_SYSTEM_TEST_INVALID_EMAIL",
            Self::InvalidPassword => "PETFRIENDS_SYSTEM_TEST_INVALID_PASSWORD",
            Self::Deployment => "PETFRIENDS_SYSTEM_TEST_DEPLOYMENT",
            Self::TimeoutSeconds => "PETFRIENDS_SYSTEM_TEST_TIMEOUT_SEC",
            Self::RunRoot => "PETFRIENDS_SYSTEM_TEST_RUN_ROOT",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Live service base URL; `None` selects the in-process stub.
    pub base_url: Option<String>,
    /// Valid account email.
    pub email: Option<String>,
    /// Valid account password.
    pub password: Option<String>,
    /// Rejected-credentials email override.
    pub invalid_email: Option<String>,
    /// Rejected-credentials password override.
    pub invalid_password: Option<String>,
    /// Pinned deployment profile.
    pub deployment: Option<DeploymentProfile>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
}

impl std::fmt::Debug for SystemTestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemTestConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email.as_ref().map(|_| "<redacted>"))
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("deployment", &self.deployment)
            .field("timeout", &self.timeout)
            .field("run_root", &self.run_root)
            .finish_non_exhaustive()
    }
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or profile value).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?;
        let email = read_env_nonempty(SystemTestEnv::Email.as_str())?;
        let password = read_env_nonempty(SystemTestEnv::Password.as_str())?;
        let invalid_email = read_env_nonempty(SystemTestEnv::InvalidEmail.as_str())?;
        let invalid_password = read_env_nonempty(SystemTestEnv::InvalidPassword.as_str())?;
        let deployment = read_env_nonempty(SystemTestEnv::Deployment.as_str())?
            .map(|value| {
                value
                    .parse::<DeploymentProfile>()
                    .map_err(|err| format!("{}: {err}", SystemTestEnv::Deployment.as_str()))
            })
            .transpose()?;
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);

        if email.is_some() != password.is_some() {
            return Err(format!(
                "{} and {} must be set together",
                SystemTestEnv::Email.as_str(),
                SystemTestEnv::Password.as_str()
            ));
        }
        if base_url.is_some() && email.is_none() {
            return Err(format!(
                "{} requires {} and {}",
                SystemTestEnv::BaseUrl.as_str(),
                SystemTestEnv::Email.as_str(),
                SystemTestEnv::Password.as_str()
            ));
        }

        Ok(Self {
            base_url,
            email,
            password,
            invalid_email,
            invalid_password,
            deployment,
            timeout,
            run_root,
        })
    }

    /// Returns true when tests target a live deployment.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.base_url.is_some()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, zero, or above
/// [`MAX_TIMEOUT_SECONDS`].
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    if secs > MAX_TIMEOUT_SECONDS {
        return Err(format!("{name} must be at most {MAX_TIMEOUT_SECONDS} seconds"));
    }
    Ok(Duration::from_secs(secs))
}
