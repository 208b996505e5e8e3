/// Decimal precision for monetary amounts.
pub const AMOUNT_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for exchange rates (applies to derived reverse rates).
pub const RATE_DECIMAL_PRECISION: u32 = 5;

/// Decimal precision for commission coefficients.
pub const COEFFICIENT_DECIMAL_PRECISION: u32 = 5;
