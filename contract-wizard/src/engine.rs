//! The wizard engine: navigation, side-data synchronisation and submission.
//!
//! The engine is single-threaded and event-driven: every method runs to
//! completion, and suspension happens only around the backend collaborators
//! (the paired side-data fetches and the final create/update dispatch).

use std::sync::Arc;

use tracing::{info, warn};

use contract_core::models::{Contract, ContractType, Organisation, OwnerQuota};
use contract_core::rules;
use contract_core::services::{ContractBackend, ServiceError};

use crate::config::WizardConfig;
use crate::error::WizardError;
use crate::form::{FormAction, FormStore};
use crate::steps::{self, StepId, WizardStep};
use crate::validator::validate_step;

/// Token for an in-flight side-data load.
///
/// Each token carries the epoch it was issued under; a response is applied
/// only while its epoch is still current, so a fetch outlived by a newer
/// property selection is discarded instead of clobbering fresher data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideDataRequest {
    property_id: String,
    epoch: u64,
}

impl SideDataRequest {
    pub fn property_id(&self) -> &str {
        &self.property_id
    }
}

/// Raw results of one side-data load, produced by
/// [`ContractWizard::fetch_side_data`] and consumed by
/// [`ContractWizard::apply_side_data`].
#[derive(Debug)]
pub struct SideDataResponse {
    property_id: String,
    epoch: u64,
    owners: Result<Vec<OwnerQuota>, ServiceError>,
    organisation: Result<Organisation, ServiceError>,
}

/// What happened when a side-data response was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideDataReport {
    /// `false` when the response was stale and discarded wholesale.
    pub applied: bool,
    pub owners_loaded: bool,
    pub organisation_detected: bool,
    /// One human-readable warning per failed fetch; the two fetches degrade
    /// independently.
    pub warnings: Vec<String>,
}

/// State machine behind the contract-creation wizard.
pub struct ContractWizard {
    steps: Vec<WizardStep>,
    current: StepId,
    form: FormStore,
    owner_quotas: Vec<OwnerQuota>,
    organisation: Option<Organisation>,
    loading_side_data: bool,
    side_data_epoch: u64,
    backend: Arc<dyn ContractBackend>,
    config: WizardConfig,
    editing: Option<String>,
    draft_id: Option<String>,
}

impl ContractWizard {
    /// Fresh wizard for creating a new contract.
    pub fn new(backend: Arc<dyn ContractBackend>, config: WizardConfig) -> Self {
        Self {
            steps: steps::step_registry(),
            current: StepId::PropertySelection,
            form: FormStore::new(),
            owner_quotas: Vec::new(),
            organisation: None,
            loading_side_data: false,
            side_data_epoch: 0,
            backend,
            config,
            editing: None,
            draft_id: None,
        }
    }

    /// Wizard pre-populated from an existing contract; submission will
    /// dispatch an update instead of a create.
    ///
    /// Side data still has to be loaded: call [`Self::begin_side_data`] and
    /// feed the response back, exactly as after a property selection.
    pub fn edit(
        backend: Arc<dyn ContractBackend>,
        config: WizardConfig,
        contract: &Contract,
    ) -> Self {
        let mut wizard = Self::new(backend, config);
        wizard.form = FormStore::from_contract(contract);
        wizard.editing = Some(contract.id.clone());
        wizard
    }

    // ── accessors ────────────────────────────────────────────────────────

    pub fn current_step(&self) -> StepId {
        self.current
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn form(&self) -> &FormStore {
        &self.form
    }

    pub fn organisation(&self) -> Option<&Organisation> {
        self.organisation.as_ref()
    }

    pub fn owner_quotas(&self) -> &[OwnerQuota] {
        &self.owner_quotas
    }

    /// Single consolidated loading flag for both side-data fetches.
    pub fn is_loading_side_data(&self) -> bool {
        self.loading_side_data
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn draft_id(&self) -> Option<&str> {
        self.draft_id.as_deref()
    }

    pub fn progress_percent(&self) -> u8 {
        steps::progress_percent(self.current)
    }

    // ── form mutation ────────────────────────────────────────────────────

    /// Dispatch a form action.
    ///
    /// Property and unit selection are routed through the side-data edge
    /// detection; everything else goes straight to the form store. When a
    /// new property was selected the returned request must be fetched and
    /// applied for the derived data to catch up.
    #[must_use = "a returned side-data request must be fetched and applied"]
    pub fn apply(&mut self, action: FormAction) -> Option<SideDataRequest> {
        match action {
            FormAction::SetPropertyId(value) => self.set_property(value),
            FormAction::SetUnitId(value) => self.set_unit(value),
            other => {
                self.form.apply(other);
                None
            }
        }
    }

    fn set_property(&mut self, value: Option<String>) -> Option<SideDataRequest> {
        let before = self.form.terms().property_id.clone();
        self.form.apply(FormAction::SetPropertyId(value));
        let after = self.form.terms().property_id.clone();

        // Edge-triggered: re-selecting the same property does not refetch.
        if after == before {
            return None;
        }
        match after {
            Some(property_id) => Some(self.issue_side_data_request(property_id)),
            None => {
                self.clear_side_data();
                None
            }
        }
    }

    fn set_unit(&mut self, value: Option<String>) -> Option<SideDataRequest> {
        let had_property = self.form.terms().property_id.is_some();
        self.form.apply(FormAction::SetUnitId(value));
        // Selecting a unit drops the property selection, and the derived
        // property data goes with it.
        if had_property && self.form.terms().property_id.is_none() {
            self.clear_side_data();
        }
        None
    }

    /// Issue a side-data request for the currently selected property, if
    /// any. Used after constructing an edit-mode wizard, where the property
    /// is already set but nothing has been fetched yet.
    pub fn begin_side_data(&mut self) -> Option<SideDataRequest> {
        let property_id = self.form.terms().property_id.clone()?;
        Some(self.issue_side_data_request(property_id))
    }

    fn issue_side_data_request(&mut self, property_id: String) -> SideDataRequest {
        self.side_data_epoch += 1;
        self.loading_side_data = true;
        SideDataRequest {
            property_id,
            epoch: self.side_data_epoch,
        }
    }

    fn clear_side_data(&mut self) {
        self.owner_quotas.clear();
        self.organisation = None;
        self.loading_side_data = false;
        // Invalidate any fetch still in flight.
        self.side_data_epoch += 1;
    }

    // ── side-data loaders ────────────────────────────────────────────────

    /// Run the two side-data fetches concurrently and await both, so the
    /// caller sees a single consolidated completion.
    pub async fn fetch_side_data(&self, request: &SideDataRequest) -> SideDataResponse {
        let (owners, organisation) = tokio::join!(
            self.backend.owner_quotas(&request.property_id),
            self.backend.detect_organisation(&request.property_id),
        );
        SideDataResponse {
            property_id: request.property_id.clone(),
            epoch: request.epoch,
            owners,
            organisation,
        }
    }

    /// Apply a fetched response. Stale responses (issued before the latest
    /// property change) are discarded without touching any state. The two
    /// halves succeed or degrade independently: a failed half resets to its
    /// empty default and contributes a warning.
    pub fn apply_side_data(&mut self, response: SideDataResponse) -> SideDataReport {
        if response.epoch != self.side_data_epoch {
            warn!(
                property_id = %response.property_id,
                "discarding stale side-data response"
            );
            return SideDataReport::default();
        }

        self.loading_side_data = false;
        let mut report = SideDataReport {
            applied: true,
            ..SideDataReport::default()
        };

        match response.owners {
            Ok(owners) => {
                info!(
                    property_id = %response.property_id,
                    count = owners.len(),
                    "owner quotas loaded"
                );
                self.owner_quotas = owners;
                report.owners_loaded = true;
            }
            Err(err) => {
                warn!(property_id = %response.property_id, %err, "owner quota load failed");
                self.owner_quotas.clear();
                report
                    .warnings
                    .push(format!("failed to load owner quotas: {err}"));
            }
        }

        match response.organisation {
            Ok(organisation) => {
                info!(
                    property_id = %response.property_id,
                    organisation = %organisation.name,
                    "organisation detected"
                );
                self.organisation = Some(organisation);
                report.organisation_detected = true;
            }
            Err(err) => {
                warn!(
                    property_id = %response.property_id,
                    %err,
                    "organisation detection failed"
                );
                self.organisation = None;
                report
                    .warnings
                    .push(format!("failed to detect organisation: {err}"));
            }
        }

        report
    }

    /// Convenience wrapper: fetch and apply in one await.
    pub async fn refresh_side_data(&mut self, request: SideDataRequest) -> SideDataReport {
        let response = self.fetch_side_data(&request).await;
        self.apply_side_data(response)
    }

    // ── navigation ───────────────────────────────────────────────────────

    /// Validate the current step and advance by exactly one.
    pub fn go_to_next_step(&mut self) -> Result<(), WizardError> {
        if !validate_step(self.current, &self.form) {
            let err = self.step_error();
            warn!(step = %self.current, "forward navigation blocked: {err}");
            return Err(err);
        }
        self.mark_current_completed();
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        Ok(())
    }

    /// Backward navigation is always permitted; already-seen state is
    /// assumed valid enough to revisit.
    pub fn go_to_prev_step(&mut self) {
        if let Some(prev) = self.current.prev() {
            self.current = prev;
        }
    }

    /// Jump to an arbitrary step: free backwards, strictly sequential
    /// forwards.
    pub fn go_to_step(&mut self, target: StepId) -> Result<(), WizardError> {
        if target == self.current {
            return Ok(());
        }
        if target < self.current {
            self.current = target;
            return Ok(());
        }
        // Forward: the current step must validate first.
        if !validate_step(self.current, &self.form) {
            let err = self.step_error();
            warn!(step = %self.current, target = %target, "forward jump blocked: {err}");
            return Err(err);
        }
        if Some(target) != self.current.next() {
            warn!(step = %self.current, target = %target, "step skip rejected");
            return Err(WizardError::StepSkip);
        }
        self.mark_current_completed();
        self.current = target;
        Ok(())
    }

    fn step_error(&self) -> WizardError {
        if self.current == StepId::PropertySelection {
            WizardError::SelectionRequired
        } else {
            WizardError::IncompleteStep(self.current)
        }
    }

    fn mark_current_completed(&mut self) {
        if let Some(step) = self.steps.iter_mut().find(|s| s.id == self.current) {
            step.completed = true;
        }
    }

    // ── submission ───────────────────────────────────────────────────────

    /// Final business-rule check and dispatch.
    ///
    /// Preconditions are checked in order; the first violation wins and
    /// nothing is dispatched. On any failure, collaborator errors included,
    /// all wizard state is preserved so the user can correct and retry.
    pub async fn submit(&mut self) -> Result<Contract, WizardError> {
        let organisation = self
            .organisation
            .as_ref()
            .ok_or(WizardError::OrganisationNotDetected)?;

        let terms = self.form.terms();
        if !terms.sublet_authorized {
            return Err(WizardError::SubletAuthorizationRequired);
        }
        if terms.contract_type == ContractType::Variable
            && terms.commission_percentage != rules::VARIABLE_COMMISSION_PERCENT
        {
            return Err(WizardError::VariableCommissionMismatch);
        }
        if terms.owner_usage_max_days > rules::OWNER_USAGE_MAX_DAYS {
            return Err(WizardError::OwnerUsageExceeded(terms.owner_usage_max_days));
        }

        let payload = self.form.to_payload(organisation.id.clone(), false);
        let result = match &self.editing {
            Some(contract_id) => self.backend.update_contract(contract_id, payload).await,
            None => self.backend.create_contract(payload).await,
        };

        match result {
            Ok(contract) => {
                info!(
                    contract_id = %contract.id,
                    edit = self.is_edit(),
                    "contract submitted"
                );
                Ok(contract)
            }
            Err(err) => {
                warn!(%err, "contract submission failed");
                Err(err.into())
            }
        }
    }

    // ── drafts (feature-gated) ───────────────────────────────────────────

    /// Persist the current form as an explicitly unfinished draft.
    ///
    /// The organisation may still be undetected at draft time; the draft is
    /// then saved without one.
    pub async fn save_draft(&mut self) -> Result<Contract, WizardError> {
        if !self.config.drafts_enabled {
            return Err(WizardError::DraftsDisabled);
        }
        let organisation_id = self
            .organisation
            .as_ref()
            .map(|o| o.id.clone())
            .unwrap_or_default();
        let payload = self.form.to_payload(organisation_id, true);
        let draft = self
            .backend
            .save_draft(payload, self.draft_id.as_deref())
            .await?;
        info!(draft_id = %draft.id, "draft saved");
        self.draft_id = Some(draft.id.clone());
        Ok(draft)
    }

    /// Replace the form with a previously saved draft.
    pub async fn load_draft(&mut self, draft_id: &str) -> Result<(), WizardError> {
        if !self.config.drafts_enabled {
            return Err(WizardError::DraftsDisabled);
        }
        let draft = self.backend.load_draft(draft_id).await?;
        self.form = FormStore::from_contract(&draft);
        self.draft_id = Some(draft.id);
        Ok(())
    }
}
