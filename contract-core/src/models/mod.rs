mod contract;
mod contract_type;
mod organisation;
mod owner_quota;
mod property;

pub use contract::{Contract, ContractPayload, ContractTerms};
pub use contract_type::ContractType;
pub use organisation::Organisation;
pub use owner_quota::{Associate, OwnerQuota, OwnerType};
pub use property::{Property, Unit};
