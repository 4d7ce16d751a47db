//! Core Sphinx inventory module.
//!
//! Layered front to back:
//! - [`transport`]: fetches manifest bytes
//! - [`format`]: strips the header, decompresses and parses records
//! - [`index`]: holds name → location pairs and resolves links

pub mod codec;
pub mod diagnostics;
pub mod format;
pub mod index;
pub mod transport;
pub mod types;

pub use diagnostics::{CollectingDiagnostics, Diagnostics, LogDiagnostics};
pub use index::SphinxInventory;
pub use transport::Fetch;
#[cfg(feature = "http")]
pub use transport::HttpFetcher;
pub use types::error::{DecodeError, FetchError, InventoryError, Result};
pub use types::models::{DEFAULT_CATEGORY, InventoryOptions, InventoryRecord, MergePolicy};
