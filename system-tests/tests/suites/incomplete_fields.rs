// system-tests/tests/suites/incomplete_fields.rs
// ============================================================================
// Module: Incomplete Field Tests
// Description: Photo-less creation with a symbolic name and blank fields.
// Purpose: Pin per-profile acceptance of incomplete pet data.
// Dependencies: system-tests helpers
// ============================================================================

//! Incomplete pet data system tests.

use helpers::artifacts::TestReporter;
use helpers::fixtures::incomplete_pet_without_photo;
use helpers::target::TestResult;
use helpers::target::TestTarget;

use crate::helpers;

#[test]
fn add_new_pet_with_incorrect_data_without_foto() -> TestResult {
    let mut reporter = TestReporter::new("add_new_pet_with_incorrect_data_without_foto")?;
    let targets = TestTarget::for_boundaries()?;
    let pet = incomplete_pet_without_photo();
    let mut notes = Vec::new();
    let mut transcript = Vec::new();
    let mut labels = Vec::new();

    for target in &targets {
        let profile = target.profile()?;
        let auth_key = target.auth_key()?;

        let response = target.client().add_new_pet_without_photo(&auth_key, &pet)?;

        let expected = profile.expected_create_status(&pet.name, &pet.animal_type, &pet.age);
        assert_eq!(response.status, expected, "incomplete pet on {}", target.label());
        if expected == 200 {
            assert_eq!(response.pet()?.name, pet.name);
        }
        notes.push(format!("{}: incomplete pet -> {}", target.label(), response.status));
        labels.push(target.label().to_string());
        transcript.extend(target.transcript());
    }

    reporter.set_target(&labels.join(","));
    reporter.finish_pass(notes, &transcript)?;
    Ok(())
}
