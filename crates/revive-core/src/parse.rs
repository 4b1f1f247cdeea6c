//! Parse walk
//!
//! `serde_json` parses the text; this module then rebuilds the document
//! bottom-up, handing every key/value pair to a [`Reviver`] and keeping
//! whatever it returns. Children are visited before their container, array
//! elements are keyed by their index, and the root is visited last with the
//! key `""`.

use crate::error::{Error, Result};
use crate::reviver::Reviver;
use crate::value::Revived;
use serde_json::Value;
use tracing::debug;

/// Parse `text` as JSON and revive every entry
pub fn from_str<R>(text: &str, reviver: &R) -> Result<Revived>
where
    R: Reviver + ?Sized,
{
    let value: Value =
        serde_json::from_str(text).map_err(|e| Error::json("failed to parse document", e))?;
    Ok(revive_value(value, reviver))
}

/// Parse a UTF-8 byte slice as JSON and revive every entry
pub fn from_slice<R>(bytes: &[u8], reviver: &R) -> Result<Revived>
where
    R: Reviver + ?Sized,
{
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| Error::json("failed to parse document", e))?;
    Ok(revive_value(value, reviver))
}

/// Revive an already parsed JSON tree
pub fn revive_value<R>(value: Value, reviver: &R) -> Revived
where
    R: Reviver + ?Sized,
{
    let span = tracing::debug_span!("revive");
    let _enter = span.enter();

    let mut walk = Walk { reviver, visited: 0 };
    let revived = walk.visit("", value);
    debug!(visited = walk.visited, "parse walk complete");
    revived
}

struct Walk<'r, R: ?Sized> {
    reviver: &'r R,
    visited: usize,
}

impl<R> Walk<'_, R>
where
    R: Reviver + ?Sized,
{
    fn visit(&mut self, key: &str, value: Value) -> Revived {
        let holder = match value {
            Value::Array(items) => Revived::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| self.visit(&index.to_string(), item))
                    .collect(),
            ),
            Value::Object(map) => Revived::Object(
                map.into_iter()
                    .map(|(member, item)| {
                        let revived = self.visit(&member, item);
                        (member, revived)
                    })
                    .collect(),
            ),
            scalar => Revived::from(scalar),
        };
        self.visited += 1;
        self.reviver.revive(key, holder)
    }
}
