//! # Record Parsing
//!
//! Turns the decompressed clear-text payload into name → location pairs.
//!
//! Each line has the form
//! ```text
//! <name> <domain:role> <priority> <location> <display name...>
//! ```
//! The first four fields are separated by single spaces; the fifth takes
//! the rest of the line, spaces included. A bad line is skipped and
//! reported, the rest of the payload is still parsed.

use std::collections::HashMap;

use crate::inventory::types::error::{DecodeError, InventoryError};
use crate::inventory::types::models::InventoryRecord;

/// Parses one payload line into a full record.
///
/// # Errors
/// [`DecodeError::FieldCount`] if the line does not split into five fields
/// (an empty line counts as one field). An empty name field is kept as is.
pub fn parse_record(line: &str) -> Result<InventoryRecord, DecodeError> {
    let fields: Vec<&str> = line.splitn(InventoryRecord::FIELD_COUNT, ' ').collect();
    let [name, role, priority, location, display] = fields.as_slice() else {
        return Err(DecodeError::FieldCount { found: fields.len() });
    };
    Ok(InventoryRecord {
        name: name.to_string(),
        role: role.to_string(),
        priority: priority.to_string(),
        location: location.to_string(),
        display: display.to_string(),
    })
}

/// Rewrites `\r\n` and lone `\r` terminators to `\n`.
fn normalize_line_endings(payload: &str) -> String {
    payload.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parses the whole payload into a name → location map.
///
/// Each malformed line is passed to `on_error` as an
/// [`InventoryError::ParseLine`] at the point it is found. Repeated names
/// keep the last location.
pub fn parse(
    payload: &str,
    base_url: &str,
    mut on_error: impl FnMut(InventoryError),
) -> HashMap<String, String> {
    let mut links = HashMap::new();
    // `lines` drops the empty tail after a final terminator only.
    for line in normalize_line_endings(payload).lines() {
        match parse_record(line) {
            Ok(record) => {
                links.insert(record.name, record.location);
            }
            Err(source) => on_error(InventoryError::ParseLine {
                line: line.to_string(),
                base_url: base_url.to_string(),
                source,
            }),
        }
    }
    links
}
