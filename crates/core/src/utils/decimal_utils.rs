//! Decimal helpers pinning the system-wide rounding contract.
//!
//! Every rounding step in the exchange math truncates toward zero ("round
//! down"), never half-up: fractional remainders always favor the service.

use rust_decimal::Decimal;

/// Truncates `value` toward zero at `scale` decimal places.
pub fn round_down(value: Decimal, scale: u32) -> Decimal {
    value.trunc_with_scale(scale)
}

/// Divides `dividend` by `divisor` and truncates the result toward zero at
/// `scale` decimal places. Returns None when the divisor is zero or the
/// quotient is not representable.
pub fn div_down(dividend: Decimal, divisor: Decimal, scale: u32) -> Option<Decimal> {
    dividend
        .checked_div(divisor)
        .map(|quotient| quotient.trunc_with_scale(scale))
}
