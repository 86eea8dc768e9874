pub mod models;
pub mod rules;
pub mod services;

pub use models::*;
pub use services::{ContractBackend, ContractStore, PropertyDirectory, ServiceError};
