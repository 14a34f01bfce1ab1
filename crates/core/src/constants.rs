use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A full commission distribution, in percentage points.
pub const FULL_DISTRIBUTION_PCT: Decimal = dec!(100);

/// Default tolerance for split validation, in percentage points.
pub const DEFAULT_SPLIT_TOLERANCE: Decimal = dec!(0.5);

/// Default agency share when both an agency and a broker are known.
pub const DEFAULT_AGENCY_SPLIT_PCT: Decimal = dec!(50);

/// Decimal precision for persisted percentages and values.
pub const PERSISTED_DECIMAL_PRECISION: u32 = 2;

/// Placeholder shown when a beneficiary or lead name cannot be resolved.
pub const UNRESOLVED_NAME_PLACEHOLDER: &str = "(unavailable)";
