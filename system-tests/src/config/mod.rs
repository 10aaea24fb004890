// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for PetFriends system tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: petfriends-client
// ============================================================================

//! ## Overview
//! System-test configuration is read from environment variables and mapped into
//! a small typed structure for reuse across test helpers. Version-dependent
//! service validation is captured by [`DeploymentProfile`].

// ============================================================================
// SECTION: Modules
// ============================================================================

mod deployment;
mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use deployment::AgeCase;
pub use deployment::DeploymentProfile;
pub use env::SystemTestConfig;
pub use env::SystemTestEnv;
pub use env::read_env_strict;
