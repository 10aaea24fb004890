// system-tests/tests/suites/age_boundaries.rs
// ============================================================================
// Module: Age Boundary Tests
// Description: Pet creation with malformed ages per deployment profile.
// Purpose: Pin lenient (accept and echo) and strict (reject) behavior.
// Dependencies: system-tests helpers
// ============================================================================

//! Age boundary system tests.

use helpers::artifacts::TestReporter;
use helpers::fixtures::PhotoFixture;
use helpers::fixtures::pet_with_photo;
use helpers::target::TestResult;
use helpers::target::TestTarget;
use petfriends_client::NewPet;
use system_tests::config::AgeCase;

use crate::helpers;

/// Creates a pet with the boundary age on every profile target.
fn run_age_case(test_name: &str, case: AgeCase) -> TestResult {
    let mut reporter = TestReporter::new(test_name)?;
    let targets = TestTarget::for_boundaries()?;
    let photo = PhotoFixture::cat()?;
    let base = pet_with_photo();
    let pet = NewPet::new(base.name, base.animal_type, case.value());
    let mut notes = Vec::new();
    let mut transcript = Vec::new();
    let mut labels = Vec::new();

    for target in &targets {
        let profile = target.profile()?;
        let auth_key = target.auth_key()?;

        let response = target.client().add_new_pet(&auth_key, &pet, photo.path())?;

        let expected = profile.expected_age_status(case);
        assert_eq!(response.status, expected, "{} age on {}", case.label(), target.label());
        if expected == 200 {
            let record = response.pet()?;
            assert_eq!(record.name, pet.name);
            assert_eq!(record.age, pet.age, "{} age echo on {}", case.label(), target.label());
            let stored = target.my_pets(&auth_key)?;
            let listed = stored
                .pets
                .iter()
                .find(|candidate| candidate.id == record.id)
                .ok_or("created pet is missing from my pets")?;
            assert_eq!(listed.age, pet.age, "{} age stored on {}", case.label(), target.label());
        } else {
            assert!(!response.body.has_field("id"));
        }
        notes.push(format!("{}: {} age -> {}", target.label(), case.label(), response.status));
        labels.push(target.label().to_string());
        transcript.extend(target.transcript());
    }

    reporter.set_target(&labels.join(","));
    reporter.finish_pass(notes, &transcript)?;
    Ok(())
}

#[test]
fn add_new_pet_with_empty_age() -> TestResult {
    run_age_case("add_new_pet_with_empty_age", AgeCase::Empty)
}

#[test]
fn add_new_pet_with_negative_age() -> TestResult {
    run_age_case("add_new_pet_with_negative_age", AgeCase::Negative)
}

#[test]
fn add_new_pet_with_space_in_age() -> TestResult {
    run_age_case("add_new_pet_with_space_in_age", AgeCase::Space)
}

#[test]
fn add_new_pet_with_incorrect_age() -> TestResult {
    run_age_case("add_new_pet_with_incorrect_age", AgeCase::Overlong)
}
