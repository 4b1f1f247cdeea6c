//! Revivers: per-entry value transforms applied during a parse walk
//!
//! A parse walk visits every key/value pair of a document, innermost first,
//! and replaces each value with whatever the reviver hands back. Revivers in
//! this module are configured once with the keys they act on and can then be
//! reused across any number of walks.
//!
//! # Module Organization
//!
//! - [`date_time`] - ISO-8601 UTC strings to [`chrono::DateTime`]
//! - [`currency`] - integer pence to GBP strings
//! - [`set`] - combining several revivers into one
//!
//! # Examples
//!
//! ```
//! use revive_core::reviver::{self, Reviver};
//! use revive_core::Revived;
//!
//! let price = reviver::gbp(["price"]);
//! let revived = price.revive("price", Revived::Number(499900.into()));
//! assert_eq!(revived.as_str(), Some("£4,999.00"));
//! ```
//!
//! Copyright (c) 2025 Revive Team
//! Licensed under the Apache-2.0 license

use crate::value::Revived;
use std::collections::HashSet;

pub mod currency;
pub mod date_time;
pub mod set;


pub use currency::{gbp, CurrencyReviver};
pub use date_time::{date_time, is_date_time, DateTimeReviver};
pub use set::{ReviverSet, ReviverSetBuilder};

/// A transform invoked once per key/value pair of a parse walk.
///
/// Returning `value` untouched is the "no match" path. Array elements are
/// visited with their index as the key and the document root with `""`.
pub trait Reviver {
    fn revive(&self, key: &str, value: Revived) -> Revived;
}

impl<F> Reviver for F
where
    F: Fn(&str, Revived) -> Revived,
{
    fn revive(&self, key: &str, value: Revived) -> Revived {
        self(key, value)
    }
}

/// The keys a reviver is bound to, fixed at construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: HashSet<String>,
}

impl KeySet {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
