//! Inventory envelope decoding.
//!
//! # Envelope Structure
//! ```text
//! # Sphinx inventory version 2
//! # Project: <name>
//! # Version: <version>
//! # The rest of this file is compressed with zlib.
//! <zlib stream ...>
//! ```
//!
//! The number of comment lines is not fixed. Everything from the first line
//! that does not start with `#` onward is the compressed block.

use log::debug;

use crate::inventory::codec::compression;
use crate::inventory::types::error::{InventoryError, Result};

/// Splits off leading `#` comment lines and returns the rest of the buffer.
///
/// A final line without a terminating newline is never stripped, even if it
/// starts with `#`; it becomes the payload as is.
pub fn strip_comments(data: &[u8]) -> &[u8] {
    let mut rest = data;
    let mut skipped = 0usize;
    while let Some(newline) = rest.iter().position(|&b| b == b'\n') {
        if !rest.starts_with(b"#") {
            break;
        }
        rest = &rest[newline + 1..];
        skipped += 1;
    }
    debug!("Skipped {} header comment line(s), {} payload bytes remain", skipped, rest.len());
    rest
}

/// Strips the comment header and decompresses the payload into clear text.
///
/// `base_url` is only used to build the error.
///
/// # Errors
/// Returns [`InventoryError::Uncompress`] when the payload is not a valid
/// zlib stream.
pub fn decode(data: &[u8], base_url: &str) -> Result<String> {
    let payload = strip_comments(data);
    let clear = compression::decompress_zlib(payload).map_err(|source| {
        InventoryError::Uncompress {
            base_url: base_url.to_string(),
            source,
        }
    })?;
    Ok(String::from_utf8_lossy(&clear).into_owned())
}
