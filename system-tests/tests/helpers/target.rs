// system-tests/tests/helpers/target.rs
// ============================================================================
// Module: Test Target
// Description: Resolves the PetFriends deployment a test runs against.
// Purpose: Hand each test a client, credentials, and expectations.
// Dependencies: system-tests, petfriends-client
// ============================================================================

//! ## Overview
//! A [`TestTarget`] is either a live deployment named by
//! `PETFRIENDS_SYSTEM_TEST_BASE_URL` or a freshly spawned in-process stub.
//! Boundary suites iterate [`TestTarget::for_boundaries`], which yields one
//! target per deployment profile to assert.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use petfriends_client::ApiAuditEvent;
use petfriends_client::ApiClient;
use petfriends_client::AuthKey;
use petfriends_client::ClientConfig;
use petfriends_client::Credentials;
use petfriends_client::PetFilter;
use petfriends_client::PetList;
use petfriends_client::PetRecord;
use system_tests::config::DeploymentProfile;
use system_tests::config::SystemTestConfig;
use system_tests::config::SystemTestEnv;

use super::fixtures::replacement_pet;
use super::petfriends_stub::PetFriendsStub;
use super::petfriends_stub::spawn_petfriends_stub;
use super::transcript::TranscriptSink;

/// Rejected-credentials email used unless overridden.
const DEFAULT_INVALID_EMAIL: &str = "nobody@petfriends.invalid";
/// Rejected-credentials password used unless overridden.
const DEFAULT_INVALID_PASSWORD: &str = "not-a-password";

/// Result type used by suites.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Deployment under test with a client wired to record a transcript.
pub struct TestTarget {
    label: String,
    client: ApiClient,
    transcript: TranscriptSink,
    credentials: Credentials,
    invalid_credentials: Credentials,
    profile: Option<DeploymentProfile>,
    _stub: Option<PetFriendsStub>,
}

impl TestTarget {
    /// Resolves the target from the environment.
    ///
    /// Without a live base URL a lenient stub is used unless a profile is set.
    pub fn resolve() -> Result<Self, String> {
        let config = SystemTestConfig::load()?;
        match config.base_url.clone() {
            Some(base_url) => Self::live(&config, &base_url),
            None => Self::stub(&config, config.deployment.unwrap_or(DeploymentProfile::Lenient)),
        }
    }

    /// Resolves one target per deployment profile to assert.
    ///
    /// Stub runs cover every profile unless one is pinned; live runs require
    /// the profile to be pinned.
    pub fn for_boundaries() -> Result<Vec<Self>, String> {
        let config = SystemTestConfig::load()?;
        if let Some(base_url) = config.base_url.clone() {
            if config.deployment.is_none() {
                return Err(format!(
                    "{} must be set to assert boundary behavior of a live deployment",
                    SystemTestEnv::Deployment.as_str()
                ));
            }
            return Ok(vec![Self::live(&config, &base_url)?]);
        }
        let profiles =
            config.deployment.map_or_else(|| DeploymentProfile::ALL.to_vec(), |profile| vec![profile]);
        profiles.into_iter().map(|profile| Self::stub(&config, profile)).collect()
    }

    fn live(config: &SystemTestConfig, base_url: &str) -> Result<Self, String> {
        let (Some(email), Some(password)) = (&config.email, &config.password) else {
            return Err(format!(
                "{} and {} are required for a live target",
                SystemTestEnv::Email.as_str(),
                SystemTestEnv::Password.as_str()
            ));
        };
        let (client, transcript) = build_client(config, base_url)?;
        Ok(Self {
            label: "live".to_string(),
            client,
            transcript,
            credentials: Credentials::new(email.as_str(), password.as_str()),
            invalid_credentials: invalid_credentials(config),
            profile: config.deployment,
            _stub: None,
        })
    }

    fn stub(config: &SystemTestConfig, profile: DeploymentProfile) -> Result<Self, String> {
        let stub = spawn_petfriends_stub(profile)?;
        let (client, transcript) = build_client(config, stub.base_url())?;
        Ok(Self {
            label: format!("stub:{profile}"),
            client,
            transcript,
            credentials: PetFriendsStub::credentials(),
            invalid_credentials: invalid_credentials(config),
            profile: Some(profile),
            _stub: Some(stub),
        })
    }

    /// Returns a label naming the target for reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the client bound to this target.
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns credentials of an existing account.
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns credentials the target must reject.
    pub const fn invalid_credentials(&self) -> &Credentials {
        &self.invalid_credentials
    }

    /// Returns the pinned deployment profile.
    pub fn profile(&self) -> Result<DeploymentProfile, String> {
        self.profile.ok_or_else(|| format!("{} is not set", SystemTestEnv::Deployment.as_str()))
    }

    /// Returns every call made through the client so far.
    pub fn transcript(&self) -> Vec<ApiAuditEvent> {
        self.transcript.events()
    }

    /// Obtains an auth key for the valid account.
    pub fn auth_key(&self) -> TestResult<AuthKey> {
        let response = self.client.get_api_key(&self.credentials)?;
        if response.status != 200 {
            return Err(format!("auth key request returned status {}", response.status).into());
        }
        Ok(response.auth_key().ok_or("auth key response lacks the key field")?)
    }

    /// Lists pets owned by the valid account.
    pub fn my_pets(&self, auth_key: &AuthKey) -> TestResult<PetList> {
        let response = self.client.get_list_of_pets(auth_key, PetFilter::MyPets)?;
        if response.status != 200 {
            return Err(format!("my pets listing returned status {}", response.status).into());
        }
        Ok(response.pets()?)
    }

    /// Returns the first owned pet, failing with `empty_message` when none exist.
    pub fn first_my_pet(&self, auth_key: &AuthKey, empty_message: &str) -> TestResult<PetRecord> {
        let pets = self.my_pets(auth_key)?;
        Ok(pets.first().cloned().ok_or(empty_message)?)
    }

    /// Returns the owned pets, creating one first when the list is empty.
    pub fn my_pets_or_create(&self, auth_key: &AuthKey, photo: &Path) -> TestResult<PetList> {
        let pets = self.my_pets(auth_key)?;
        if !pets.pets.is_empty() {
            return Ok(pets);
        }
        let created = self.client.add_new_pet(auth_key, &replacement_pet(), photo)?;
        if created.status != 200 {
            return Err(format!("creating a replacement pet returned status {}", created.status).into());
        }
        self.my_pets(auth_key)
    }
}

fn build_client(
    config: &SystemTestConfig,
    base_url: &str,
) -> Result<(ApiClient, TranscriptSink), String> {
    let mut client_config = ClientConfig::for_base_url(base_url).map_err(|err| err.to_string())?;
    if let Some(timeout) = config.timeout {
        client_config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    }
    let transcript = TranscriptSink::default();
    let client = ApiClient::new(&client_config)
        .map_err(|err| err.to_string())?
        .with_audit_sink(Arc::new(transcript.clone()));
    Ok((client, transcript))
}

fn invalid_credentials(config: &SystemTestConfig) -> Credentials {
    Credentials::new(
        config.invalid_email.as_deref().unwrap_or(DEFAULT_INVALID_EMAIL),
        config.invalid_password.as_deref().unwrap_or(DEFAULT_INVALID_PASSWORD),
    )
}
