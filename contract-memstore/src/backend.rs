use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use contract_core::models::{
    Contract, ContractPayload, Organisation, OwnerQuota, Property, Unit,
};
use contract_core::services::{ContractStore, PropertyDirectory, ServiceError};

#[derive(Default)]
struct Inner {
    properties: Vec<Property>,
    units: HashMap<String, Vec<Unit>>,
    quotas: HashMap<String, Vec<OwnerQuota>>,
    organisations: HashMap<String, Organisation>,
    contracts: HashMap<String, Contract>,
    drafts: HashMap<String, Contract>,
    next_id: u64,
}

/// In-memory directory and contract store.
///
/// Thread-safe: all state sits behind one `Mutex`, which is fine for the
/// fixture workloads this backend is meant for.
#[derive(Default)]
pub struct MemBackend {
    inner: Mutex<Inner>,
    fail_owner_quotas: AtomicBool,
    fail_detect_organisation: AtomicBool,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a property together with its managing organisation and owner
    /// quotas.
    pub fn add_property(
        &self,
        property: Property,
        organisation: Organisation,
        quotas: Vec<OwnerQuota>,
    ) {
        let mut inner = self.lock_unpoisoned();
        inner
            .organisations
            .insert(property.id.clone(), organisation);
        inner.quotas.insert(property.id.clone(), quotas);
        inner.properties.push(property);
    }

    /// Seed a unit under its parent property.
    pub fn add_unit(&self, unit: Unit) {
        let mut inner = self.lock_unpoisoned();
        inner
            .units
            .entry(unit.property_id.clone())
            .or_default()
            .push(unit);
    }

    /// Make the next `owner_quotas` call fail.
    pub fn fail_next_owner_quotas(&self) {
        self.fail_owner_quotas.store(true, Ordering::SeqCst);
    }

    /// Make the next `detect_organisation` call fail.
    pub fn fail_next_detect_organisation(&self) {
        self.fail_detect_organisation.store(true, Ordering::SeqCst);
    }

    /// Make the next `create_contract` call fail.
    pub fn fail_next_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    /// Make the next `update_contract` call fail.
    pub fn fail_next_update(&self) {
        self.fail_update.store(true, Ordering::SeqCst);
    }

    /// Number of `create_contract` calls received, including failed ones.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of `update_contract` calls received, including failed ones.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    // Seed/inspection methods must not fail, so they recover the guard from
    // a poisoned mutex; the service methods map poisoning to an error.
    fn lock_unpoisoned(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, ServiceError> {
        self.inner
            .lock()
            .map_err(|_| ServiceError::Backend("state lock poisoned".to_string()))
    }

    fn take(flag: &AtomicBool) -> bool {
        flag.swap(false, Ordering::SeqCst)
    }
}

#[async_trait]
impl PropertyDirectory for MemBackend {
    async fn list_properties(&self) -> Result<Vec<Property>, ServiceError> {
        Ok(self.lock()?.properties.clone())
    }

    async fn list_units(&self, property_id: &str) -> Result<Vec<Unit>, ServiceError> {
        Ok(self
            .lock()?
            .units
            .get(property_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn owner_quotas(&self, property_id: &str) -> Result<Vec<OwnerQuota>, ServiceError> {
        if Self::take(&self.fail_owner_quotas) {
            return Err(ServiceError::Backend(
                "injected owner quota failure".to_string(),
            ));
        }
        Ok(self
            .lock()?
            .quotas
            .get(property_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn detect_organisation(
        &self,
        property_id: &str,
    ) -> Result<Organisation, ServiceError> {
        if Self::take(&self.fail_detect_organisation) {
            return Err(ServiceError::Backend(
                "injected organisation failure".to_string(),
            ));
        }
        self.lock()?
            .organisations
            .get(property_id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }
}

#[async_trait]
impl ContractStore for MemBackend {
    async fn create_contract(
        &self,
        payload: ContractPayload,
    ) -> Result<Contract, ServiceError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if Self::take(&self.fail_create) {
            return Err(ServiceError::Backend(
                "injected create failure".to_string(),
            ));
        }

        let mut inner = self.lock()?;
        inner.next_id += 1;
        let id = format!("C{}", inner.next_id);
        let now = Utc::now();
        let contract = Contract {
            id: id.clone(),
            organisation_id: payload.organisation_id,
            draft: payload.draft,
            terms: payload.terms,
            created_at: now,
            updated_at: now,
        };
        inner.contracts.insert(id.clone(), contract.clone());
        debug!(contract_id = %id, "contract created");
        Ok(contract)
    }

    async fn update_contract(
        &self,
        id: &str,
        payload: ContractPayload,
    ) -> Result<Contract, ServiceError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if Self::take(&self.fail_update) {
            return Err(ServiceError::Backend(
                "injected update failure".to_string(),
            ));
        }

        let mut inner = self.lock()?;
        let contract = inner.contracts.get_mut(id).ok_or(ServiceError::NotFound)?;
        contract.organisation_id = payload.organisation_id;
        contract.draft = payload.draft;
        contract.terms = payload.terms;
        contract.updated_at = Utc::now();
        debug!(contract_id = %id, "contract updated");
        Ok(contract.clone())
    }

    async fn save_draft(
        &self,
        payload: ContractPayload,
        draft_id: Option<&str>,
    ) -> Result<Contract, ServiceError> {
        let mut inner = self.lock()?;
        let now = Utc::now();

        let (id, created_at) = match draft_id {
            Some(existing) => {
                let created = inner
                    .drafts
                    .get(existing)
                    .map(|d| d.created_at)
                    .unwrap_or(now);
                (existing.to_string(), created)
            }
            None => {
                inner.next_id += 1;
                (format!("D{}", inner.next_id), now)
            }
        };

        let draft = Contract {
            id: id.clone(),
            organisation_id: payload.organisation_id,
            draft: true,
            terms: payload.terms,
            created_at,
            updated_at: now,
        };
        inner.drafts.insert(id, draft.clone());
        Ok(draft)
    }

    async fn load_draft(&self, draft_id: &str) -> Result<Contract, ServiceError> {
        self.lock()?
            .drafts
            .get(draft_id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    async fn get_contract(&self, id: &str) -> Result<Contract, ServiceError> {
        self.lock()?
            .contracts
            .get(id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    async fn list_contracts(&self) -> Result<Vec<Contract>, ServiceError> {
        let mut contracts: Vec<_> = self.lock()?.contracts.values().cloned().collect();
        contracts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(contracts)
    }
}
