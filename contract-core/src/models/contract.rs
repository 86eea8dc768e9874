use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ContractType;
use crate::rules;

/// The business content of a management contract: every field collected by
/// the creation wizard, across all six steps.
///
/// Free text is `Option<String>`, money is `Option<Decimal>`, attestations
/// are plain `bool` (a deliberate `false` is a valid answer). The lessor and
/// premises blocks are auto-filled from the selected property and kept here
/// so an edit round-trips without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTerms {
    // Step 1: property / unit selection (mutually exclusive)
    pub property_id: Option<String>,
    pub unit_id: Option<String>,

    // Step 2: general information
    pub contract_type: ContractType,
    pub issue_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub furnished: bool,
    /// Always `true`: sub-letting authorization is mandatory and the field
    /// is rendered disabled in the wizard.
    pub sublet_authorized: bool,
    pub renovation_needed: bool,
    pub future_rent_deduction: Option<Decimal>,
    pub imposed_term_months: Option<u32>,

    // Lessor block, auto-filled from the selected property
    pub lessor_name: Option<String>,
    pub lessor_registered_address: Option<String>,
    pub lessor_company_id: Option<String>,
    pub lessor_vat_number: Option<String>,
    pub lessor_legal_representative: Option<String>,
    pub lessor_email: Option<String>,
    pub lessor_phone: Option<String>,

    // Premises block, auto-filled from the selected property or unit
    pub premises_address: Option<String>,
    pub premises_kind: Option<String>,
    pub premises_surface_m2: Option<Decimal>,
    pub premises_room_count: Option<u32>,
    pub premises_initial_inventory: Option<String>,

    // Step 3: financial terms
    pub commission_percentage: Decimal,
    pub owner_usage_max_days: u32,
    pub monthly_rent: Option<Decimal>,
    pub rent_payment_day: Option<u32>,
    pub monthly_charges: Option<Decimal>,
    pub included_charges: Option<String>,
    pub security_deposit: Option<Decimal>,
    pub urgent_repair_cap: Option<Decimal>,
    pub invoice_payment_delay_days: Option<u32>,
    pub estimated_monthly_revenue: Option<Decimal>,
    pub revenue_calculation_method: Option<String>,
    pub payment_dates: Option<String>,
    pub internet_subscription_fee: Option<Decimal>,
    pub home_automation_fee: Option<Decimal>,
    pub equipment_catalogue: Option<String>,

    // Step 4: insurance & protection
    pub insurance_certificate: bool,
    pub insurer_name: Option<String>,
    pub policy_number: Option<String>,
    pub insurance_expiry: Option<NaiveDate>,
    pub business_interruption_insurance: bool,
    pub unlawful_occupation_insurance: bool,
    pub legal_protection: bool,

    // Step 5: clauses & emergency contact
    pub sublet_conditions: Option<String>,
    pub permitted_activities: Option<String>,
    pub works_authorized: bool,
    pub one_year_term: bool,
    pub rent_review_indexed: bool,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_email: Option<String>,

    // Step 6: review & finalisation
    pub internal_notes: Option<String>,
}

impl Default for ContractTerms {
    fn default() -> Self {
        Self {
            property_id: None,
            unit_id: None,
            contract_type: ContractType::Fixed,
            issue_date: None,
            start_date: None,
            end_date: None,
            furnished: true,
            sublet_authorized: true,
            renovation_needed: false,
            future_rent_deduction: None,
            imposed_term_months: None,
            lessor_name: None,
            lessor_registered_address: None,
            lessor_company_id: None,
            lessor_vat_number: None,
            lessor_legal_representative: None,
            lessor_email: None,
            lessor_phone: None,
            premises_address: None,
            premises_kind: None,
            premises_surface_m2: None,
            premises_room_count: None,
            premises_initial_inventory: None,
            commission_percentage: rules::VARIABLE_COMMISSION_PERCENT,
            owner_usage_max_days: rules::OWNER_USAGE_MAX_DAYS,
            monthly_rent: None,
            rent_payment_day: None,
            monthly_charges: None,
            included_charges: None,
            security_deposit: None,
            urgent_repair_cap: None,
            invoice_payment_delay_days: None,
            estimated_monthly_revenue: None,
            revenue_calculation_method: None,
            payment_dates: None,
            internet_subscription_fee: None,
            home_automation_fee: None,
            equipment_catalogue: None,
            insurance_certificate: false,
            insurer_name: None,
            policy_number: None,
            insurance_expiry: None,
            business_interruption_insurance: false,
            unlawful_occupation_insurance: false,
            legal_protection: false,
            sublet_conditions: None,
            permitted_activities: None,
            works_authorized: false,
            one_year_term: true,
            rent_review_indexed: false,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            emergency_contact_email: None,
            internal_notes: None,
        }
    }
}

/// Outgoing create/update request: the collected terms plus the detected
/// organisation and the draft flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPayload {
    pub organisation_id: String,
    pub draft: bool,
    pub terms: ContractTerms,
}

/// A persisted contract as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub organisation_id: String,
    pub draft: bool,
    pub terms: ContractTerms,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
