//! Revive Core - value revivers for JSON parsing
//!
//! Declare ahead of parsing which keys hold date-time strings or integer
//! amounts in pence, and those values are converted while the document is
//! walked instead of in a separate pass afterwards.
//!
//! # Main Components
//!
//! - **Revivers**: [`reviver::date_time`] and [`reviver::gbp`] build per-entry transforms
//! - **Formatting**: [`format::format_gbp`] renders pence as `£1,234.56`
//! - **Parse Walk**: [`parse::from_str`] parses JSON and applies a reviver to every entry
//! - **Configuration**: [`ReviverConfig`] builds a [`ReviverSet`] from JSON
//! - **Error Handling**: error types using `thiserror`
//!
//! # Example
//!
//! ```
//! use revive_core::{parse, reviver, Result};
//!
//! fn example() -> Result<()> {
//!     let revivers = reviver::ReviverSet::builder()
//!         .date_time(["created"])
//!         .currency(["price"])
//!         .build()?;
//!
//!     let order = parse::from_str(
//!         r#"{"created": "2025-01-22T09:37:40.994Z", "price": 499900}"#,
//!         &revivers,
//!     )?;
//!     assert!(order["created"].is_date_time());
//!     assert_eq!(order["price"].as_str(), Some("£4,999.00"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod parse;
pub mod reviver;
pub mod value;

// Re-export main types for convenience
pub use config::{KeyConfig, ReviverConfig};
pub use error::{Error, Result};
pub use format::{format_gbp, MAX_SAFE_INTEGER};
pub use reviver::{
    date_time, gbp, CurrencyReviver, DateTimeReviver, KeySet, Reviver, ReviverSet,
    ReviverSetBuilder,
};
pub use value::Revived;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
