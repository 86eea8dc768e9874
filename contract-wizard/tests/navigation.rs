//! Navigation-controller behavior: sequential forward progress, free
//! backward jumps, and skip prevention.

mod common;

use pretty_assertions::assert_eq;

use contract_wizard::{FormAction, StepId, WizardError};

use common::{fill_remaining_steps, select_property, seeded_backend, set, wizard};

#[tokio::test]
async fn next_is_blocked_without_a_selection() {
    common::init_tracing();
    let mut wizard = wizard(seeded_backend());

    let result = wizard.go_to_next_step();

    assert_eq!(result, Err(WizardError::SelectionRequired));
    assert_eq!(wizard.current_step(), StepId::PropertySelection);
    assert!(!wizard.steps()[0].completed);
}

#[tokio::test]
async fn next_advances_by_exactly_one_and_marks_completion() {
    let mut wizard = wizard(seeded_backend());
    select_property(&mut wizard, "P1").await;

    wizard.go_to_next_step().expect("step 1 is valid");

    assert_eq!(wizard.current_step(), StepId::GeneralInformation);
    assert!(wizard.steps()[0].completed);
    assert!(!wizard.steps()[1].completed);
}

#[tokio::test]
async fn forward_jump_of_two_is_rejected_even_when_valid() {
    let mut wizard = wizard(seeded_backend());
    select_property(&mut wizard, "P1").await;

    let result = wizard.go_to_step(StepId::FinancialTerms);

    assert_eq!(result, Err(WizardError::StepSkip));
    assert_eq!(wizard.current_step(), StepId::PropertySelection);
    assert!(!wizard.steps()[0].completed);
}

#[tokio::test]
async fn forward_jump_of_one_requires_a_valid_current_step() {
    let mut wizard = wizard(seeded_backend());
    select_property(&mut wizard, "P1").await;
    wizard.go_to_next_step().expect("step 1 is valid");

    // Step 2 is missing its dates.
    let result = wizard.go_to_step(StepId::FinancialTerms);

    assert_eq!(
        result,
        Err(WizardError::IncompleteStep(StepId::GeneralInformation))
    );
    assert_eq!(wizard.current_step(), StepId::GeneralInformation);
}

#[tokio::test]
async fn forward_jump_of_one_advances_when_valid() {
    let mut wizard = wizard(seeded_backend());
    select_property(&mut wizard, "P1").await;

    wizard
        .go_to_step(StepId::GeneralInformation)
        .expect("one step forward from a valid step");

    assert_eq!(wizard.current_step(), StepId::GeneralInformation);
    assert!(wizard.steps()[0].completed);
}

#[tokio::test]
async fn jump_to_current_step_is_a_no_op() {
    let mut wizard = wizard(seeded_backend());

    wizard
        .go_to_step(StepId::PropertySelection)
        .expect("same-step jump is always allowed");

    assert_eq!(wizard.current_step(), StepId::PropertySelection);
}

#[tokio::test]
async fn backward_jumps_are_free() {
    let mut wizard = wizard(seeded_backend());
    select_property(&mut wizard, "P1").await;
    fill_remaining_steps(&mut wizard);
    common::walk_to_review(&mut wizard);
    assert_eq!(wizard.current_step(), StepId::Review);

    // Straight back to step 1, several steps at once, no validation.
    wizard
        .go_to_step(StepId::PropertySelection)
        .expect("backward jumps need no validation");

    assert_eq!(wizard.current_step(), StepId::PropertySelection);
}

#[tokio::test]
async fn prev_stops_at_the_first_step() {
    let mut wizard = wizard(seeded_backend());

    wizard.go_to_prev_step();

    assert_eq!(wizard.current_step(), StepId::PropertySelection);
}

#[tokio::test]
async fn failed_navigation_leaves_entered_data_intact() {
    let mut wizard = wizard(seeded_backend());
    select_property(&mut wizard, "P1").await;
    wizard.go_to_next_step().expect("step 1 is valid");
    set(
        &mut wizard,
        FormAction::SetStartDate(Some(common::date("2026-09-01"))),
    );
    let before = wizard.form().clone();

    // End date still missing.
    assert!(wizard.go_to_next_step().is_err());

    assert_eq!(wizard.form(), &before);
}

#[tokio::test]
async fn full_walk_reaches_the_review_step() {
    let mut wizard = wizard(seeded_backend());
    select_property(&mut wizard, "P1").await;
    fill_remaining_steps(&mut wizard);

    common::walk_to_review(&mut wizard);

    assert_eq!(wizard.current_step(), StepId::Review);
    assert_eq!(wizard.progress_percent(), 100);
    // Steps 1 through 5 are completed; the review step itself is not.
    let completed: Vec<_> = wizard.steps().iter().map(|s| s.completed).collect();
    assert_eq!(completed, vec![true, true, true, true, true, false]);
}
