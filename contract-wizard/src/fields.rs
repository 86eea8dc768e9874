use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Every form field the step validator can be asked about.
///
/// This is the validated subset of the form; auto-filled blocks (lessor,
/// premises) and optional financial details are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // Step 1
    PropertyId,
    UnitId,
    // Step 2
    ContractType,
    StartDate,
    EndDate,
    Furnished,
    SubletAuthorized,
    RenovationNeeded,
    // Step 3
    CommissionPercentage,
    OwnerUsageMaxDays,
    // Step 4
    InsuranceCertificate,
    InsurerName,
    PolicyNumber,
    BusinessInterruptionInsurance,
    LegalProtection,
    // Step 5
    SubletConditions,
    PermittedActivities,
    EmergencyContactName,
    EmergencyContactPhone,
    // Step 6
    InternalNotes,
}

/// Read-only view of a single form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Bool(bool),
    Text(&'a str),
    Number(Decimal),
    Date(NaiveDate),
    Missing,
}

impl FieldValue<'_> {
    /// Generic presence rule: a boolean is always set (a deliberate `false`
    /// is an answer), text must be non-empty after trimming, numbers and
    /// dates are set by existing at all.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(_) => true,
            Self::Text(text) => !text.trim().is_empty(),
            Self::Number(_) | Self::Date(_) => true,
            Self::Missing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_false_counts_as_set() {
        assert!(FieldValue::Bool(false).is_set());
        assert!(FieldValue::Bool(true).is_set());
    }

    #[test]
    fn whitespace_only_text_is_not_set() {
        assert!(!FieldValue::Text("").is_set());
        assert!(!FieldValue::Text("   ").is_set());
        assert!(FieldValue::Text("  x ").is_set());
    }

    #[test]
    fn missing_is_not_set() {
        assert!(!FieldValue::Missing.is_set());
    }
}
