//! Custom error types for the sphinx-inventory crate.
//!
//! The `Display` text of [`InventoryError`] doubles as the diagnostic message
//! reported to the injected [`Diagnostics`](crate::Diagnostics) sink.

use thiserror::Error;

/// A failure to obtain manifest bytes from a transport.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The request could not be sent or the body could not be read.
    #[error("Request failed: {0}")]
    Request(String),

    /// The transport succeeded but returned no bytes.
    #[error("No data returned")]
    Empty,
}

/// A failure while turning manifest bytes into records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload after the comment header is not a valid zlib stream.
    #[error("Decompression failed: {0}")]
    Decompression(#[from] std::io::Error),

    /// A payload line does not split into the five record fields.
    #[error("Expected 5 fields, found {found}")]
    FieldCount { found: usize },
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The manifest URL has no `/` to split a base URL from.
    #[error("Failed to get remote base url for {url}")]
    BaseUrl { url: String },

    /// The transport returned no data for the manifest URL.
    #[error("Failed to get object inventory from {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The compressed block could not be decompressed.
    #[error("Failed to uncompress inventory from {base_url}")]
    Uncompress {
        base_url: String,
        #[source]
        source: DecodeError,
    },

    /// A single record line was malformed and skipped.
    #[error("Failed to parse line \"{line}\" for {base_url}")]
    ParseLine {
        line: String,
        base_url: String,
        #[source]
        source: DecodeError,
    },
}

/// A convenience `Result` type alias using the crate's `InventoryError` type.
pub type Result<T> = std::result::Result<T, InventoryError>;
