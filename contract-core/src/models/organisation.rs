use serde::{Deserialize, Serialize};

/// Managing organisation, resolved from the selected property.
///
/// Every contract must belong to exactly one organisation; the wizard
/// refuses to submit until one has been detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    pub id: String,
    pub name: String,
}
