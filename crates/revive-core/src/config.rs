//! Declarative reviver configuration
//!
//! ```json
//! {
//!   "date_time": { "keys": ["created", "modified"] },
//!   "currency": { "keys": ["price"] }
//! }
//! ```
//!
//! An absent or empty `date_time.keys` means every value is scanned.

use crate::error::{Error, Result};
use crate::reviver::ReviverSet;
use serde::{Deserialize, Serialize};

/// Which revivers to build and the keys they are bound to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviverConfig {
    /// Date-time reviver section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<KeyConfig>,
    /// GBP reviver section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<KeyConfig>,
}

/// Keys for a single reviver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyConfig {
    #[serde(default)]
    pub keys: Vec<String>,
}

impl ReviverConfig {
    /// Load a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::json("invalid reviver configuration", e))
    }

    /// Build the configured revivers, date-time first
    pub fn build(&self) -> Result<ReviverSet> {
        if self.date_time.is_none() && self.currency.is_none() {
            return Err(Error::configuration(
                "no revivers configured; expected `date_time` and/or `currency`",
                None,
            ));
        }

        let mut builder = ReviverSet::builder();
        if let Some(date_time) = &self.date_time {
            builder = builder.date_time(date_time.keys.iter().cloned());
        }
        if let Some(currency) = &self.currency {
            builder = builder.currency(currency.keys.iter().cloned());
        }
        builder.build()
    }
}
