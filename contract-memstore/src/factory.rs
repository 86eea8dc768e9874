use async_trait::async_trait;

use contract_core::services::{BackendConfig, ContractBackend, ServiceError, ServiceFactory};

use crate::backend::MemBackend;

/// Factory for the `"memory"` backend.
///
/// `connection_string` is ignored: every `create` call returns a fresh,
/// empty [`MemBackend`].
pub struct MemFactory;

#[async_trait]
impl ServiceFactory for MemFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(
        &self,
        _config: &BackendConfig,
    ) -> Result<Box<dyn ContractBackend>, ServiceError> {
        Ok(Box::new(MemBackend::new()))
    }
}
