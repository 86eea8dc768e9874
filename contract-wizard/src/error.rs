use thiserror::Error;

use contract_core::rules::OWNER_USAGE_MAX_DAYS;
use contract_core::services::ServiceError;

use crate::steps::StepId;

/// Every way a wizard operation can be refused.
///
/// All variants are non-fatal: the engine's state is unchanged whenever one
/// is returned, and the embedding surface is expected to show the message as
/// a notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    /// Step 1's property-XOR-unit rule failed.
    #[error(
        "select either a property or a unit; a contract is tied to one or the other, never both"
    )]
    SelectionRequired,

    /// The generic presence rule failed for the named step.
    #[error("step {0} is incomplete; fill in every required field first")]
    IncompleteStep(StepId),

    /// Forward navigation attempted past the immediately next step.
    #[error("steps must be completed one at a time; you cannot skip ahead")]
    StepSkip,

    #[error("no organisation detected for the selected property; choose a valid property first")]
    OrganisationNotDetected,

    #[error("sub-letting authorization is mandatory")]
    SubletAuthorizationRequired,

    #[error("commission for variable contracts must be exactly 10%")]
    VariableCommissionMismatch,

    #[error("owner usage cannot exceed {OWNER_USAGE_MAX_DAYS} days per year, got {0}")]
    OwnerUsageExceeded(u32),

    #[error("draft saving is disabled")]
    DraftsDisabled,

    #[error(transparent)]
    Service(#[from] ServiceError),
}
