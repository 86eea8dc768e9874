use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Legal nature of a property owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerType {
    Individual,
    Company,
}

impl OwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "individual" => Some(Self::Individual),
            "company" => Some(Self::Company),
            _ => None,
        }
    }
}

/// An associate of a company owner (partner, shareholder, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Associate {
    pub name: String,
    pub role: Option<String>,
}

/// Ownership share of one owner over a property, expressed as a fraction
/// (e.g. 1/2, 250/1000).
///
/// The list of quotas for a property is derived, read-only data: the wizard
/// loads it when a property is selected and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerQuota {
    pub owner_id: String,
    pub name: String,
    pub owner_type: OwnerType,
    pub quota_numerator: u32,
    pub quota_denominator: u32,
    pub associates: Vec<Associate>,
}

impl OwnerQuota {
    /// Ownership share as a decimal fraction. A zero denominator yields zero
    /// rather than panicking; the upstream data should never contain one.
    pub fn fraction(&self) -> Decimal {
        if self.quota_denominator == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.quota_numerator) / Decimal::from(self.quota_denominator)
    }

    /// Sum of the shares of `quotas`, as a percentage.
    ///
    /// Display-only check: for a fully described property this sums to 100,
    /// but incomplete quota data is tolerated.
    pub fn total_percent(quotas: &[OwnerQuota]) -> Decimal {
        quotas
            .iter()
            .map(OwnerQuota::fraction)
            .sum::<Decimal>()
            * Decimal::ONE_HUNDRED
    }
}
