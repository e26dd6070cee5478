//! Even amount splitting using the Largest Remainder Method.
//!
//! Splitting works in whole cents:
//! 1. Round the per-head quotient down to the cent
//! 2. Count the leftover cents
//! 3. Give one extra cent each to the earliest participants
//!
//! The shares therefore always sum exactly to the original total; no cents
//! are lost or invented.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Splits `total` evenly across `count` participants at cent precision.
///
/// The first `total mod count` participants (in cents) receive one extra
/// cent, so the result depends on participant order and sums exactly to
/// `total`. Expects a total with at most two decimal places; callers
/// validate that before splitting.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use divvy_core::expense::split_evenly;
///
/// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
/// let shares = split_evenly(dec!(100), 3);
/// assert_eq!(shares.iter().sum::<rust_decimal::Decimal>(), dec!(100));
/// ```
#[must_use]
pub fn split_evenly(total: Decimal, count: usize) -> Vec<Decimal> {
    if count == 0 {
        return vec![];
    }
    if count == 1 {
        return vec![total];
    }

    let count_dec = Decimal::from(count as u64);
    let cent = Decimal::new(1, 2);

    // Round the quotient down to the cent to get the base share
    let base = (total / count_dec).round_dp_with_strategy(2, RoundingStrategy::ToZero);

    // Leftover cents after handing everyone the base share
    let remainder = total - base * count_dec;
    let extra_count = (remainder / cent)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_u64()
        .unwrap_or(0);
    let extra_count = usize::try_from(extra_count).unwrap_or(0);

    (0..count)
        .map(|i| if i < extra_count { base + cent } else { base })
        .collect()
}
