//! Reducer-style form store.
//!
//! Steps never mutate the form directly: they dispatch a [`FormAction`] and
//! the store applies it, together with the derived-field rules (property XOR
//! unit maintenance, forced commission on variable contracts, the immutable
//! sub-letting authorization).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use contract_core::models::{Contract, ContractPayload, ContractTerms, ContractType};
use contract_core::rules;

use crate::fields::{FieldId, FieldValue};

/// One mutation of the form state.
///
/// User-editable fields get one variant each; the lessor and premises blocks
/// are auto-filled from property data as whole blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    // Step 1
    SetPropertyId(Option<String>),
    SetUnitId(Option<String>),
    // Step 2
    SetContractType(ContractType),
    SetIssueDate(Option<NaiveDate>),
    SetStartDate(Option<NaiveDate>),
    SetEndDate(Option<NaiveDate>),
    SetFurnished(bool),
    SetSubletAuthorized(bool),
    SetRenovationNeeded(bool),
    SetFutureRentDeduction(Option<Decimal>),
    SetImposedTermMonths(Option<u32>),
    SetLessorBlock {
        name: Option<String>,
        registered_address: Option<String>,
        company_id: Option<String>,
        vat_number: Option<String>,
        legal_representative: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    },
    SetPremisesBlock {
        address: Option<String>,
        kind: Option<String>,
        surface_m2: Option<Decimal>,
        room_count: Option<u32>,
        initial_inventory: Option<String>,
    },
    // Step 3
    SetCommissionPercentage(Decimal),
    SetOwnerUsageMaxDays(u32),
    SetMonthlyRent(Option<Decimal>),
    SetRentPaymentDay(Option<u32>),
    SetMonthlyCharges(Option<Decimal>),
    SetIncludedCharges(Option<String>),
    SetSecurityDeposit(Option<Decimal>),
    SetUrgentRepairCap(Option<Decimal>),
    SetInvoicePaymentDelayDays(Option<u32>),
    SetEstimatedMonthlyRevenue(Option<Decimal>),
    SetRevenueCalculationMethod(Option<String>),
    SetPaymentDates(Option<String>),
    SetInternetSubscriptionFee(Option<Decimal>),
    SetHomeAutomationFee(Option<Decimal>),
    SetEquipmentCatalogue(Option<String>),
    // Step 4
    SetInsuranceCertificate(bool),
    SetInsurerName(Option<String>),
    SetPolicyNumber(Option<String>),
    SetInsuranceExpiry(Option<NaiveDate>),
    SetBusinessInterruptionInsurance(bool),
    SetUnlawfulOccupationInsurance(bool),
    SetLegalProtection(bool),
    // Step 5
    SetSubletConditions(Option<String>),
    SetPermittedActivities(Option<String>),
    SetWorksAuthorized(bool),
    SetOneYearTerm(bool),
    SetRentReviewIndexed(bool),
    SetEmergencyContactName(Option<String>),
    SetEmergencyContactPhone(Option<String>),
    SetEmergencyContactEmail(Option<String>),
    // Step 6
    SetInternalNotes(Option<String>),
}

/// Holder of the collected [`ContractTerms`]; the single source of truth for
/// everything the user has entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    terms: ContractTerms,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate from an existing contract (edit mode or loaded draft).
    pub fn from_contract(contract: &Contract) -> Self {
        Self {
            terms: contract.terms.clone(),
        }
    }

    pub fn terms(&self) -> &ContractTerms {
        &self.terms
    }

    /// Outgoing payload for create/update/draft dispatch.
    pub fn to_payload(&self, organisation_id: String, draft: bool) -> ContractPayload {
        ContractPayload {
            organisation_id,
            draft,
            terms: self.terms.clone(),
        }
    }

    /// Apply one action. This is the only mutation path into the form.
    pub fn apply(&mut self, action: FormAction) {
        let terms = &mut self.terms;
        match action {
            FormAction::SetPropertyId(value) => {
                let value = normalize(value);
                if value.is_some() {
                    // A contract targets a property or a unit, never both.
                    terms.unit_id = None;
                }
                terms.property_id = value;
            }
            FormAction::SetUnitId(value) => {
                let value = normalize(value);
                if value.is_some() {
                    terms.property_id = None;
                }
                terms.unit_id = value;
            }
            FormAction::SetContractType(contract_type) => {
                terms.contract_type = contract_type;
                if contract_type == ContractType::Variable {
                    // Variable contracts carry a fixed 10% commission.
                    terms.commission_percentage = rules::VARIABLE_COMMISSION_PERCENT;
                }
            }
            FormAction::SetIssueDate(value) => terms.issue_date = value,
            FormAction::SetStartDate(value) => terms.start_date = value,
            FormAction::SetEndDate(value) => terms.end_date = value,
            FormAction::SetFurnished(value) => terms.furnished = value,
            FormAction::SetSubletAuthorized(value) => {
                // Mandatory business rule; the field is rendered disabled.
                if !value {
                    warn!("ignoring attempt to withdraw the mandatory sub-letting authorization");
                }
            }
            FormAction::SetRenovationNeeded(value) => terms.renovation_needed = value,
            FormAction::SetFutureRentDeduction(value) => terms.future_rent_deduction = value,
            FormAction::SetImposedTermMonths(value) => terms.imposed_term_months = value,
            FormAction::SetLessorBlock {
                name,
                registered_address,
                company_id,
                vat_number,
                legal_representative,
                email,
                phone,
            } => {
                terms.lessor_name = name;
                terms.lessor_registered_address = registered_address;
                terms.lessor_company_id = company_id;
                terms.lessor_vat_number = vat_number;
                terms.lessor_legal_representative = legal_representative;
                terms.lessor_email = email;
                terms.lessor_phone = phone;
            }
            FormAction::SetPremisesBlock {
                address,
                kind,
                surface_m2,
                room_count,
                initial_inventory,
            } => {
                terms.premises_address = address;
                terms.premises_kind = kind;
                terms.premises_surface_m2 = surface_m2;
                terms.premises_room_count = room_count;
                terms.premises_initial_inventory = initial_inventory;
            }
            FormAction::SetCommissionPercentage(value) => terms.commission_percentage = value,
            FormAction::SetOwnerUsageMaxDays(value) => terms.owner_usage_max_days = value,
            FormAction::SetMonthlyRent(value) => terms.monthly_rent = value,
            FormAction::SetRentPaymentDay(value) => terms.rent_payment_day = value,
            FormAction::SetMonthlyCharges(value) => terms.monthly_charges = value,
            FormAction::SetIncludedCharges(value) => terms.included_charges = value,
            FormAction::SetSecurityDeposit(value) => terms.security_deposit = value,
            FormAction::SetUrgentRepairCap(value) => terms.urgent_repair_cap = value,
            FormAction::SetInvoicePaymentDelayDays(value) => {
                terms.invoice_payment_delay_days = value
            }
            FormAction::SetEstimatedMonthlyRevenue(value) => {
                terms.estimated_monthly_revenue = value
            }
            FormAction::SetRevenueCalculationMethod(value) => {
                terms.revenue_calculation_method = value
            }
            FormAction::SetPaymentDates(value) => terms.payment_dates = value,
            FormAction::SetInternetSubscriptionFee(value) => {
                terms.internet_subscription_fee = value
            }
            FormAction::SetHomeAutomationFee(value) => terms.home_automation_fee = value,
            FormAction::SetEquipmentCatalogue(value) => terms.equipment_catalogue = value,
            FormAction::SetInsuranceCertificate(value) => terms.insurance_certificate = value,
            FormAction::SetInsurerName(value) => terms.insurer_name = value,
            FormAction::SetPolicyNumber(value) => terms.policy_number = value,
            FormAction::SetInsuranceExpiry(value) => terms.insurance_expiry = value,
            FormAction::SetBusinessInterruptionInsurance(value) => {
                terms.business_interruption_insurance = value
            }
            FormAction::SetUnlawfulOccupationInsurance(value) => {
                terms.unlawful_occupation_insurance = value
            }
            FormAction::SetLegalProtection(value) => terms.legal_protection = value,
            FormAction::SetSubletConditions(value) => terms.sublet_conditions = value,
            FormAction::SetPermittedActivities(value) => terms.permitted_activities = value,
            FormAction::SetWorksAuthorized(value) => terms.works_authorized = value,
            FormAction::SetOneYearTerm(value) => terms.one_year_term = value,
            FormAction::SetRentReviewIndexed(value) => terms.rent_review_indexed = value,
            FormAction::SetEmergencyContactName(value) => terms.emergency_contact_name = value,
            FormAction::SetEmergencyContactPhone(value) => {
                terms.emergency_contact_phone = value
            }
            FormAction::SetEmergencyContactEmail(value) => {
                terms.emergency_contact_email = value
            }
            FormAction::SetInternalNotes(value) => terms.internal_notes = value,
        }
    }

    /// Read view of a validated field.
    pub fn field(&self, id: FieldId) -> FieldValue<'_> {
        let terms = &self.terms;
        match id {
            FieldId::PropertyId => opt_text(&terms.property_id),
            FieldId::UnitId => opt_text(&terms.unit_id),
            FieldId::ContractType => FieldValue::Text(terms.contract_type.as_str()),
            FieldId::StartDate => opt_date(terms.start_date),
            FieldId::EndDate => opt_date(terms.end_date),
            FieldId::Furnished => FieldValue::Bool(terms.furnished),
            FieldId::SubletAuthorized => FieldValue::Bool(terms.sublet_authorized),
            FieldId::RenovationNeeded => FieldValue::Bool(terms.renovation_needed),
            FieldId::CommissionPercentage => FieldValue::Number(terms.commission_percentage),
            FieldId::OwnerUsageMaxDays => {
                FieldValue::Number(Decimal::from(terms.owner_usage_max_days))
            }
            FieldId::InsuranceCertificate => FieldValue::Bool(terms.insurance_certificate),
            FieldId::InsurerName => opt_text(&terms.insurer_name),
            FieldId::PolicyNumber => opt_text(&terms.policy_number),
            FieldId::BusinessInterruptionInsurance => {
                FieldValue::Bool(terms.business_interruption_insurance)
            }
            FieldId::LegalProtection => FieldValue::Bool(terms.legal_protection),
            FieldId::SubletConditions => opt_text(&terms.sublet_conditions),
            FieldId::PermittedActivities => opt_text(&terms.permitted_activities),
            FieldId::EmergencyContactName => opt_text(&terms.emergency_contact_name),
            FieldId::EmergencyContactPhone => opt_text(&terms.emergency_contact_phone),
            FieldId::InternalNotes => opt_text(&terms.internal_notes),
        }
    }
}

/// Empty-after-trim strings collapse to `None` so the XOR rule has a single
/// notion of "unset".
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn opt_text(value: &Option<String>) -> FieldValue<'_> {
    match value {
        Some(text) => FieldValue::Text(text),
        None => FieldValue::Missing,
    }
}

fn opt_date(value: Option<NaiveDate>) -> FieldValue<'static> {
    match value {
        Some(date) => FieldValue::Date(date),
        None => FieldValue::Missing,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn selecting_a_property_clears_the_unit() {
        let mut form = FormStore::new();
        form.apply(FormAction::SetUnitId(Some("U1".to_string())));

        form.apply(FormAction::SetPropertyId(Some("P1".to_string())));

        assert_eq!(form.terms().property_id, Some("P1".to_string()));
        assert_eq!(form.terms().unit_id, None);
    }

    #[test]
    fn selecting_a_unit_clears_the_property() {
        let mut form = FormStore::new();
        form.apply(FormAction::SetPropertyId(Some("P1".to_string())));

        form.apply(FormAction::SetUnitId(Some("U1".to_string())));

        assert_eq!(form.terms().property_id, None);
        assert_eq!(form.terms().unit_id, Some("U1".to_string()));
    }

    #[test]
    fn whitespace_property_id_collapses_to_none() {
        let mut form = FormStore::new();
        form.apply(FormAction::SetUnitId(Some("U1".to_string())));

        form.apply(FormAction::SetPropertyId(Some("   ".to_string())));

        // An effectively empty selection neither sets the property nor
        // clears the unit.
        assert_eq!(form.terms().property_id, None);
        assert_eq!(form.terms().unit_id, Some("U1".to_string()));
    }

    #[test]
    fn switching_to_variable_forces_ten_percent_commission() {
        let mut form = FormStore::new();
        form.apply(FormAction::SetCommissionPercentage(dec!(15)));

        form.apply(FormAction::SetContractType(ContractType::Variable));

        assert_eq!(form.terms().commission_percentage, dec!(10));
    }

    #[test]
    fn fixed_contracts_keep_a_typed_commission() {
        let mut form = FormStore::new();
        form.apply(FormAction::SetContractType(ContractType::Fixed));

        form.apply(FormAction::SetCommissionPercentage(dec!(15)));

        assert_eq!(form.terms().commission_percentage, dec!(15));
    }

    #[test]
    fn sublet_authorization_cannot_be_withdrawn() {
        let mut form = FormStore::new();

        form.apply(FormAction::SetSubletAuthorized(false));

        assert!(form.terms().sublet_authorized);
    }

    #[test]
    fn defaults_match_the_blank_wizard() {
        let terms = FormStore::new().terms().clone();

        assert_eq!(terms.contract_type, ContractType::Fixed);
        assert!(terms.furnished);
        assert!(terms.sublet_authorized);
        assert!(terms.one_year_term);
        assert_eq!(terms.commission_percentage, dec!(10));
        assert_eq!(terms.owner_usage_max_days, 60);
    }

    #[test]
    fn edit_mode_round_trips_the_loaded_values() {
        let mut terms = ContractTerms {
            property_id: Some("P1".to_string()),
            internal_notes: Some("loaded from store".to_string()),
            ..ContractTerms::default()
        };
        terms.commission_percentage = dec!(12.5);
        let now = Utc::now();
        let contract = Contract {
            id: "C1".to_string(),
            organisation_id: "ORG1".to_string(),
            draft: false,
            terms: terms.clone(),
            created_at: now,
            updated_at: now,
        };

        let form = FormStore::from_contract(&contract);
        let payload = form.to_payload("ORG1".to_string(), false);

        assert_eq!(payload.organisation_id, "ORG1");
        assert!(!payload.draft);
        assert_eq!(payload.terms, terms);
    }
}
