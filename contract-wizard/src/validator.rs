//! Pure step validation.
//!
//! `validate_step` is a pure function of (step, form state): no side effects,
//! safe to re-run on every navigation attempt.

use crate::fields::FieldId;
use crate::form::FormStore;
use crate::steps::StepId;

/// Decide whether the fields required by `step` are present and internally
/// consistent.
///
/// Step 1 ignores the generic presence rule: `property_id` and `unit_id` are
/// each optional, but exactly one of the pair must be set (strict XOR).
/// Every other step requires each of its [`StepId::required_fields`] to pass
/// the generic rule of [`crate::fields::FieldValue::is_set`].
pub fn validate_step(step: StepId, form: &FormStore) -> bool {
    match step {
        StepId::PropertySelection => {
            let has_property = form.field(FieldId::PropertyId).is_set();
            let has_unit = form.field(FieldId::UnitId).is_set();
            has_property ^ has_unit
        }
        _ => step
            .required_fields()
            .iter()
            .all(|&field| form.field(field).is_set()),
    }
}
