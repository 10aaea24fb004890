// system-tests/src/config/deployment.rs
// ============================================================================
// Module: Deployment Profiles
// Description: Version-dependent validation behavior of PetFriends deployments.
// Purpose: Pin boundary expectations per deployment instead of guessing one.
// Dependencies: std
// ============================================================================

//! ## Overview
//! PetFriends deployments disagree on input validation: some accept empty,
//! negative, blank, or overlong ages (and blank type/age on simple creation),
//! others reject them with 400. [`DeploymentProfile`] names the two behaviors
//! so suites assert the one the target actually implements.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

// ============================================================================
// SECTION: Profiles
// ============================================================================

/// Validation behavior of the deployment under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentProfile {
    /// Accepts malformed ages and blank fields, echoing them back.
    Lenient,
    /// Rejects malformed ages and blank fields with 400.
    Strict,
}

impl DeploymentProfile {
    /// Every known profile.
    pub const ALL: [Self; 2] = [Self::Lenient, Self::Strict];

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// Returns true when the deployment stores `age` as submitted.
    #[must_use]
    pub fn accepts_age(self, age: &str) -> bool {
        match self {
            Self::Lenient => true,
            Self::Strict => age.parse::<u8>().is_ok(),
        }
    }

    /// Returns true when the deployment accepts a pet with these fields.
    #[must_use]
    pub fn accepts_pet(self, name: &str, animal_type: &str, age: &str) -> bool {
        match self {
            Self::Lenient => true,
            Self::Strict => {
                !name.trim().is_empty() && !animal_type.trim().is_empty() && self.accepts_age(age)
            }
        }
    }

    /// Returns the status expected when creating a pet whose age is `case`.
    #[must_use]
    pub fn expected_age_status(self, case: AgeCase) -> u16 {
        if self.accepts_age(case.value()) { 200 } else { 400 }
    }

    /// Returns the status expected when creating a pet with these fields.
    #[must_use]
    pub fn expected_create_status(self, name: &str, animal_type: &str, age: &str) -> u16 {
        if self.accepts_pet(name, animal_type, age) { 200 } else { 400 }
    }
}

impl fmt::Display for DeploymentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentProfile {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|profile| profile.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown deployment profile: {trimmed} (expected lenient or strict)"))
    }
}

// ============================================================================
// SECTION: Age Boundary Cases
// ============================================================================

/// Age values on which deployments disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCase {
    /// Empty string.
    Empty,
    /// Negative number.
    Negative,
    /// Single space.
    Space,
    /// Numeric string far beyond any real age.
    Overlong,
}

impl AgeCase {
    /// Every boundary case.
    pub const ALL: [Self; 4] = [Self::Empty, Self::Negative, Self::Space, Self::Overlong];

    /// Returns the submitted age value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Negative => "-7",
            Self::Space => " ",
            Self::Overlong => "333333333333333333333",
        }
    }

    /// Returns a stable label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Negative => "negative",
            Self::Space => "space",
            Self::Overlong => "overlong",
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
