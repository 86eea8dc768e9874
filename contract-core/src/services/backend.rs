use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Contract, ContractPayload, Organisation, OwnerQuota, Property, Unit};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,

    #[error("backend error: {0}")]
    Backend(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Read-only directory of properties, units, ownership quotas and the
/// organisation responsible for a property.
///
/// The wizard treats this as an opaque collaborator; implementations may sit
/// on top of any transport (database, HTTP, in-memory fixture).
#[async_trait]
pub trait PropertyDirectory: Send + Sync {
    async fn list_properties(&self) -> Result<Vec<Property>, ServiceError>;

    async fn list_units(&self, property_id: &str) -> Result<Vec<Unit>, ServiceError>;

    /// Ownership quotas of the given property, one entry per owner.
    async fn owner_quotas(&self, property_id: &str) -> Result<Vec<OwnerQuota>, ServiceError>;

    /// Resolve the organisation that manages the given property.
    ///
    /// # Errors
    /// * [`ServiceError::NotFound`] — the property has no organisation.
    async fn detect_organisation(&self, property_id: &str)
    -> Result<Organisation, ServiceError>;
}

/// Persistence of contracts and drafts.
#[async_trait]
pub trait ContractStore: Send + Sync {
    async fn create_contract(&self, payload: ContractPayload)
    -> Result<Contract, ServiceError>;

    async fn update_contract(
        &self,
        id: &str,
        payload: ContractPayload,
    ) -> Result<Contract, ServiceError>;

    /// Persist an explicitly unfinished copy of the form. Passing an existing
    /// `draft_id` overwrites that draft instead of creating a new one.
    async fn save_draft(
        &self,
        payload: ContractPayload,
        draft_id: Option<&str>,
    ) -> Result<Contract, ServiceError>;

    async fn load_draft(&self, draft_id: &str) -> Result<Contract, ServiceError>;

    async fn get_contract(&self, id: &str) -> Result<Contract, ServiceError>;

    async fn list_contracts(&self) -> Result<Vec<Contract>, ServiceError>;
}

/// Everything the wizard needs from a backend, as a single trait object.
pub trait ContractBackend: PropertyDirectory + ContractStore {}

impl<T: PropertyDirectory + ContractStore> ContractBackend for T {}
