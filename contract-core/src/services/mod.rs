pub mod backend;
pub mod factory;

pub use backend::{ContractBackend, ContractStore, PropertyDirectory, ServiceError};
pub use factory::{BackendConfig, ServiceFactory, ServiceRegistry};
