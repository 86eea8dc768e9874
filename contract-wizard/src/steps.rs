//! The fixed, ordered list of wizard steps and their required fields.

use std::fmt;

use crate::fields::FieldId;

/// Number of steps in the wizard. Ordering is significant and fixed.
pub const STEP_COUNT: u8 = 6;

/// One page of the wizard, in its fixed 1-based order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepId {
    PropertySelection,
    GeneralInformation,
    FinancialTerms,
    Insurance,
    Clauses,
    Review,
}

impl StepId {
    pub const ALL: [StepId; STEP_COUNT as usize] = [
        StepId::PropertySelection,
        StepId::GeneralInformation,
        StepId::FinancialTerms,
        StepId::Insurance,
        StepId::Clauses,
        StepId::Review,
    ];

    /// 1-based position of this step.
    pub fn number(&self) -> u8 {
        match self {
            Self::PropertySelection => 1,
            Self::GeneralInformation => 2,
            Self::FinancialTerms => 3,
            Self::Insurance => 4,
            Self::Clauses => 5,
            Self::Review => 6,
        }
    }

    pub fn from_number(number: u8) -> Option<StepId> {
        Self::ALL.get(number.checked_sub(1)? as usize).copied()
    }

    pub fn next(&self) -> Option<StepId> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<StepId> {
        Self::from_number(self.number().wrapping_sub(1))
    }

    pub fn is_last(&self) -> bool {
        *self == Self::Review
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PropertySelection => "Property Selection",
            Self::GeneralInformation => "General Information",
            Self::FinancialTerms => "Financial Terms",
            Self::Insurance => "Insurance & Protection",
            Self::Clauses => "Clauses & Business Rules",
            Self::Review => "Review & Finalisation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PropertySelection => "Choose the property or unit concerned",
            Self::GeneralInformation => "Contract details and owners (auto-filled)",
            Self::FinancialTerms => "Rent, commission and payment terms",
            Self::Insurance => "Required coverage and protections",
            Self::Clauses => "Specific conditions and emergency contacts",
            Self::Review => "Final check and validation",
        }
    }

    /// Fields the generic presence rule checks for this step.
    ///
    /// Step 1 is listed for completeness but validated by the dedicated
    /// property-XOR-unit rule instead. Step 3 deliberately leaves rent and
    /// charges out: they stay optional until submission.
    pub fn required_fields(&self) -> &'static [FieldId] {
        match self {
            Self::PropertySelection => &[FieldId::PropertyId, FieldId::UnitId],
            Self::GeneralInformation => &[
                FieldId::ContractType,
                FieldId::StartDate,
                FieldId::EndDate,
                FieldId::Furnished,
                FieldId::SubletAuthorized,
                FieldId::RenovationNeeded,
            ],
            Self::FinancialTerms => &[
                FieldId::CommissionPercentage,
                FieldId::OwnerUsageMaxDays,
            ],
            Self::Insurance => &[
                FieldId::InsuranceCertificate,
                FieldId::InsurerName,
                FieldId::PolicyNumber,
                FieldId::BusinessInterruptionInsurance,
                FieldId::LegalProtection,
            ],
            Self::Clauses => &[
                FieldId::SubletConditions,
                FieldId::PermittedActivities,
                FieldId::EmergencyContactName,
                FieldId::EmergencyContactPhone,
            ],
            Self::Review => &[FieldId::InternalNotes],
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}

/// A step as tracked by the engine: static identity plus the one mutable
/// piece of state, the completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStep {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    pub required_fields: &'static [FieldId],
    pub completed: bool,
}

/// Build the fixed ordered step list, all steps initially incomplete.
pub fn step_registry() -> Vec<WizardStep> {
    StepId::ALL
        .iter()
        .map(|&id| WizardStep {
            id,
            title: id.title(),
            description: id.description(),
            required_fields: id.required_fields(),
            completed: false,
        })
        .collect()
}

/// Wizard progress as a whole percentage of steps reached.
pub fn progress_percent(current: StepId) -> u8 {
    (u16::from(current.number()) * 100 / u16::from(STEP_COUNT)) as u8
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn steps_are_numbered_one_through_six_in_order() {
        let numbers: Vec<_> = StepId::ALL.iter().map(StepId::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_number_round_trips() {
        for id in StepId::ALL {
            assert_eq!(StepId::from_number(id.number()), Some(id));
        }
        assert_eq!(StepId::from_number(0), None);
        assert_eq!(StepId::from_number(7), None);
    }

    #[test]
    fn next_and_prev_walk_the_order() {
        assert_eq!(
            StepId::PropertySelection.next(),
            Some(StepId::GeneralInformation)
        );
        assert_eq!(StepId::Review.next(), None);
        assert_eq!(StepId::PropertySelection.prev(), None);
        assert_eq!(StepId::Review.prev(), Some(StepId::Clauses));
    }

    #[test]
    fn only_the_review_step_is_last() {
        for id in StepId::ALL {
            assert_eq!(id.is_last(), id == StepId::Review);
        }
    }

    #[test]
    fn registry_starts_incomplete_and_ordered() {
        let steps = step_registry();
        assert_eq!(steps.len(), STEP_COUNT as usize);
        assert!(steps.iter().all(|s| !s.completed));
        let ids: Vec<_> = steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, StepId::ALL.to_vec());
    }

    #[test]
    fn progress_spans_from_first_to_last_step() {
        assert_eq!(progress_percent(StepId::PropertySelection), 16);
        assert_eq!(progress_percent(StepId::FinancialTerms), 50);
        assert_eq!(progress_percent(StepId::Review), 100);
    }
}
