//! Codec layer for compression operations.
//!
//! # Submodules
//!
//! - [`compression`][]: Decompression of the zlib payload block

pub mod compression;
