#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use contract_core::models::{Associate, Organisation, OwnerQuota, OwnerType, Property, Unit};
use contract_memstore::MemBackend;
use contract_wizard::{ContractWizard, FormAction, WizardConfig};

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Two properties with organisations, quotas and one unit under P1.
pub fn seeded_backend() -> Arc<MemBackend> {
    let backend = MemBackend::new();
    backend.add_property(
        Property {
            id: "P1".to_string(),
            name: "Résidence des Pins".to_string(),
            address: Some("12 rue des Pins, Brussels".to_string()),
        },
        Organisation {
            id: "ORG1".to_string(),
            name: "Want It Now Belgium".to_string(),
        },
        vec![
            OwnerQuota {
                owner_id: "O1".to_string(),
                name: "Dupont".to_string(),
                owner_type: OwnerType::Individual,
                quota_numerator: 1,
                quota_denominator: 2,
                associates: Vec::new(),
            },
            OwnerQuota {
                owner_id: "O2".to_string(),
                name: "Immo Horizon SA".to_string(),
                owner_type: OwnerType::Company,
                quota_numerator: 1,
                quota_denominator: 2,
                associates: vec![Associate {
                    name: "C. Mertens".to_string(),
                    role: Some("manager".to_string()),
                }],
            },
        ],
    );
    backend.add_property(
        Property {
            id: "P2".to_string(),
            name: "Villa Zeezicht".to_string(),
            address: Some("3 Zeedijk, Ostend".to_string()),
        },
        Organisation {
            id: "ORG2".to_string(),
            name: "Want It Now Coast".to_string(),
        },
        vec![OwnerQuota {
            owner_id: "O3".to_string(),
            name: "Peeters".to_string(),
            owner_type: OwnerType::Individual,
            quota_numerator: 1,
            quota_denominator: 1,
            associates: Vec::new(),
        }],
    );
    backend.add_unit(Unit {
        id: "U1".to_string(),
        property_id: "P1".to_string(),
        label: "Apt 2B".to_string(),
    });
    Arc::new(backend)
}

pub fn wizard(backend: Arc<MemBackend>) -> ContractWizard {
    ContractWizard::new(backend, WizardConfig::default())
}

/// Dispatch an action that must not trigger a side-data request.
pub fn set(wizard: &mut ContractWizard, action: FormAction) {
    assert!(
        wizard.apply(action).is_none(),
        "action unexpectedly triggered a side-data load"
    );
}

/// Select a property and synchronously complete the side-data load.
pub async fn select_property(wizard: &mut ContractWizard, id: &str) {
    let request = wizard
        .apply(FormAction::SetPropertyId(Some(id.to_string())))
        .expect("selecting a new property should trigger a side-data load");
    wizard.refresh_side_data(request).await;
}

/// Fill every required field of steps 2 through 5 with plausible values.
pub fn fill_remaining_steps(wizard: &mut ContractWizard) {
    // Step 2: only the dates are missing; the rest carries defaults.
    set(wizard, FormAction::SetStartDate(Some(date("2026-09-01"))));
    set(wizard, FormAction::SetEndDate(Some(date("2027-08-31"))));
    // Step 3 validates on defaults (commission 10, owner usage 60).
    // Step 4
    set(
        wizard,
        FormAction::SetInsurerName(Some("AXA Belgium".to_string())),
    );
    set(
        wizard,
        FormAction::SetPolicyNumber(Some("POL-2026-0042".to_string())),
    );
    // Step 5
    set(
        wizard,
        FormAction::SetSubletConditions(Some("no commercial use".to_string())),
    );
    set(
        wizard,
        FormAction::SetPermittedActivities(Some("residential only".to_string())),
    );
    set(
        wizard,
        FormAction::SetEmergencyContactName(Some("A. Janssens".to_string())),
    );
    set(
        wizard,
        FormAction::SetEmergencyContactPhone(Some("+32 470 00 00 00".to_string())),
    );
    // Step 6
    set(
        wizard,
        FormAction::SetInternalNotes(Some("checked against the mandate".to_string())),
    );
}

/// Walk a filled wizard from step 1 to the review step.
pub fn walk_to_review(wizard: &mut ContractWizard) {
    for _ in 0..5 {
        wizard
            .go_to_next_step()
            .expect("every step should validate");
    }
}
