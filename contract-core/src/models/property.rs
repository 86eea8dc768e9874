use serde::{Deserialize, Serialize};

/// A managed property, as offered in the wizard's selection step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
}

/// A rentable unit inside a property.
///
/// Contracts target either a whole property or a single unit, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub property_id: String,
    pub label: String,
}
