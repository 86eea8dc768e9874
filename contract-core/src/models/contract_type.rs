use serde::{Deserialize, Serialize};

/// Remuneration model of a management contract.
///
/// `Fixed` contracts pay the owner a fixed monthly rent; `Variable`
/// contracts pay a share of realised revenue and carry a mandatory
/// 10% commission (see [`crate::rules`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    #[default]
    Fixed,
    Variable,
}

impl ContractType {
    /// Wire code as stored by the upstream back office.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixe",
            Self::Variable => "variable",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fixe" => Some(Self::Fixed),
            "variable" => Some(Self::Variable),
            _ => None,
        }
    }
}
