//! Zlib decompression for the inventory payload block.
//!
//! Version 2 inventories carry a single zlib stream after the comment
//! header. There is no declared decompressed size, so the output grows
//! as needed.

use std::io::Read;

use flate2::read::ZlibDecoder;
use log::trace;

use crate::inventory::types::error::DecodeError;

/// Decompresses a complete zlib stream.
///
/// # Errors
/// Returns [`DecodeError::Decompression`] on a bad zlib header, a corrupt
/// deflate stream or a checksum mismatch.
pub fn decompress_zlib(payload: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut output = Vec::with_capacity(payload.len().saturating_mul(4));
    let mut decoder = ZlibDecoder::new(payload);
    decoder.read_to_end(&mut output)?;
    trace!(
        "Decompressed zlib payload: {} bytes -> {} bytes",
        payload.len(),
        output.len()
    );
    Ok(output)
}
