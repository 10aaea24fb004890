// system-tests/src/lib.rs
// ============================================================================
// Module: PetFriends System Tests Library
// Description: Shared configuration for PetFriends system-test scenarios.
// Purpose: Provide target selection and deployment expectations to suites.
// Dependencies: petfriends-client
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the PetFriends system-test
//! binaries in `system-tests/tests`: environment-backed target settings and the
//! [`config::DeploymentProfile`] that pins version-dependent service behavior.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
