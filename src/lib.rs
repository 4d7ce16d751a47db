//! # sphinx-inventory
//!
//! A decoder and lookup index for Sphinx `objects.inv` cross-reference
//! inventories (format version 2).
//!
//! The manifest is fetched through an injected [`Fetch`] capability, its
//! comment header is stripped, the zlib payload is decompressed and each
//! record line is parsed into a name → location pair. Problems are reported
//! to an injected [`Diagnostics`] sink and never abort the caller.
//!
//! ```rust
//! use sphinx_inventory::{CollectingDiagnostics, FetchError, SphinxInventory};
//!
//! let fetch = |_: &str| -> Result<Vec<u8>, FetchError> { Err(FetchError::Empty) };
//! let mut inventory = SphinxInventory::new(fetch, CollectingDiagnostics::new());
//! inventory.load("https://docs.python.org/3/objects.inv");
//!
//! assert_eq!(inventory.get_link("os.path"), None);
//! assert_eq!(
//!     inventory.diagnostics().messages(),
//!     ["Failed to get object inventory from https://docs.python.org/3/objects.inv"],
//! );
//! ```
pub mod inventory;

// Re-export the main types for convenience
pub use inventory::{
    CollectingDiagnostics,
    DecodeError,
    Diagnostics,
    Fetch,
    FetchError,
    InventoryError,
    InventoryOptions,
    InventoryRecord,
    LogDiagnostics,
    MergePolicy,
    Result,
    SphinxInventory,
    DEFAULT_CATEGORY,
};
#[cfg(feature = "http")]
pub use inventory::HttpFetcher;
