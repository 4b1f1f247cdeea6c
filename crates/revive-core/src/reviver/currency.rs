//! Currency reviver
//!
//! Turns whole-pence integers into GBP strings. Only the configured keys are
//! considered; with no keys the reviver never converts anything.

use super::{KeySet, Reviver};
use crate::format::{format_gbp, MAX_SAFE_INTEGER};
use crate::value::Revived;
use serde_json::Number;

/// Create a GBP reviver for the values stored under `keys`.
///
/// Values must be integers between 0 and [`MAX_SAFE_INTEGER`] inclusive;
/// negative numbers, fractions, out-of-range numbers and non-numbers pass
/// through unchanged.
pub fn gbp<I, K>(keys: I) -> CurrencyReviver
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    CurrencyReviver::new(KeySet::new(keys))
}

/// Reviver turning integer pence into formatted GBP strings
#[derive(Debug, Clone, Default)]
pub struct CurrencyReviver {
    keys: KeySet,
}

impl CurrencyReviver {
    pub fn new(keys: KeySet) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }
}

impl Reviver for CurrencyReviver {
    fn revive(&self, key: &str, value: Revived) -> Revived {
        if !self.keys.contains(key) {
            return value;
        }
        match value.as_number().and_then(whole_pennies) {
            Some(pennies) => {
                let formatted = format_gbp(pennies);
                log::trace!("revived currency at key '{}': {} -> {}", key, pennies, formatted);
                Revived::String(formatted)
            }
            None => value,
        }
    }
}

/// The amount as whole pence, if it is an integer in `0..=MAX_SAFE_INTEGER`.
///
/// Integral floats such as `500.0` or `5e2` count as integers.
pub fn whole_pennies(n: &Number) -> Option<u64> {
    if let Some(u) = n.as_u64() {
        return (u <= MAX_SAFE_INTEGER).then_some(u);
    }
    if n.is_i64() {
        // negative
        return None;
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && (0.0..=MAX_SAFE_INTEGER as f64).contains(&f) {
        Some(f as u64)
    } else {
        None
    }
}
