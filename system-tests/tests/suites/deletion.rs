// system-tests/tests/suites/deletion.rs
// ============================================================================
// Module: Deletion Tests
// Description: Deletion of an owned pet and observation of its absence.
// Purpose: Ensure deleted pets disappear from "my pets".
// Dependencies: system-tests helpers
// ============================================================================

//! Pet deletion system tests.

use helpers::artifacts::TestReporter;
use helpers::fixtures::PhotoFixture;
use helpers::target::TestResult;
use helpers::target::TestTarget;

use crate::helpers;

#[test]
fn successful_delete_self_pet() -> TestResult {
    let mut reporter = TestReporter::new("successful_delete_self_pet")?;
    let target = TestTarget::resolve()?;
    reporter.set_target(target.label());
    let auth_key = target.auth_key()?;
    let photo = PhotoFixture::cat()?;
    let pets = target.my_pets_or_create(&auth_key, photo.path())?;
    let pet_id = pets.first().map(|pet| pet.id.clone()).ok_or("The list of my pets is empty")?;

    let response = target.client().delete_pet(&auth_key, &pet_id)?;

    assert_eq!(response.status, 200);
    let remaining = target.my_pets(&auth_key)?;
    assert!(!remaining.contains_id(&pet_id));

    reporter.finish_pass(
        vec![format!("deleted pet {pet_id} is gone from my pets")],
        &target.transcript(),
    )?;
    Ok(())
}
