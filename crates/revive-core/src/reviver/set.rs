//! Combining revivers
//!
//! A parse walk takes a single reviver. [`ReviverSet`] chains several of them:
//! each member sees the value produced by the member before it.

use super::{currency, date_time, Reviver};
use crate::error::{Error, Result};
use crate::value::Revived;
use std::fmt;
use std::sync::Arc;

type SharedReviver = Arc<dyn Reviver + Send + Sync>;

/// An ordered chain of revivers applied as one
#[derive(Clone)]
pub struct ReviverSet {
    revivers: Vec<SharedReviver>,
}

impl ReviverSet {
    pub fn builder() -> ReviverSetBuilder {
        ReviverSetBuilder::new()
    }

    /// Number of revivers in the chain
    pub fn len(&self) -> usize {
        self.revivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revivers.is_empty()
    }
}

impl Reviver for ReviverSet {
    fn revive(&self, key: &str, value: Revived) -> Revived {
        self.revivers
            .iter()
            .fold(value, |value, reviver| reviver.revive(key, value))
    }
}

impl fmt::Debug for ReviverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviverSet")
            .field("revivers", &self.revivers.len())
            .finish()
    }
}

/// Builder for [`ReviverSet`]
#[derive(Default)]
pub struct ReviverSetBuilder {
    revivers: Vec<SharedReviver>,
}

impl ReviverSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a date-time reviver; no keys means every value is scanned
    pub fn date_time<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.with(date_time::date_time(keys))
    }

    /// Add a GBP reviver
    pub fn currency<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let reviver = currency::gbp(keys);
        if reviver.keys().is_empty() {
            log::warn!("currency reviver configured without keys; it will never convert a value");
        }
        self.with(reviver)
    }

    /// Add any reviver, including closures
    pub fn with<R>(mut self, reviver: R) -> Self
    where
        R: Reviver + Send + Sync + 'static,
    {
        self.revivers.push(Arc::new(reviver));
        self
    }

    /// Build the set; at least one reviver is required
    pub fn build(self) -> Result<ReviverSet> {
        if self.revivers.is_empty() {
            return Err(Error::configuration(
                "at least one reviver is required",
                None,
            ));
        }
        Ok(ReviverSet {
            revivers: self.revivers,
        })
    }
}
