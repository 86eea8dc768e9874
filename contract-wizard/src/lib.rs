//! Multi-step contract-creation wizard engine.
//!
//! The engine tracks step completion, enforces sequential forward navigation,
//! validates step-local business invariants, keeps derived property data
//! (owner quotas, managing organisation) in sync with the selected property,
//! and performs the final business-rule check before dispatching a create or
//! update to a [`contract_core::services::ContractBackend`].
//!
//! It is UI-agnostic: every rejected operation comes back as a
//! [`WizardError`] value for the embedding surface to display, and wizard
//! state is never changed by a failed operation.

pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod form;
pub mod steps;
pub mod validator;

pub use config::WizardConfig;
pub use engine::{ContractWizard, SideDataReport, SideDataRequest, SideDataResponse};
pub use error::WizardError;
pub use fields::{FieldId, FieldValue};
pub use form::{FormAction, FormStore};
pub use steps::{STEP_COUNT, StepId, WizardStep, progress_percent, step_registry};
pub use validator::validate_step;
