//! Hard business rules enforced at contract submission.
//!
//! These constants come from the management mandate itself, not from any
//! particular backend, so they live in the core crate where both the wizard
//! engine and backends can reference them.

use rust_decimal::Decimal;

/// Owners may reserve their own property for at most this many days per year.
pub const OWNER_USAGE_MAX_DAYS: u32 = 60;

/// Commission applied to every variable-remuneration contract, in percent.
/// Fixed contracts may negotiate any commission; variable ones may not.
pub const VARIABLE_COMMISSION_PERCENT: Decimal = Decimal::TEN;
