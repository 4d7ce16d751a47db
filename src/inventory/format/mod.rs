//! File format parsing layer for `objects.inv` inventories.
//!
//! # Module Organization
//!
//! - [`header`]: Strips the comment header and decompresses the payload
//! - [`content`]: Parses clear-text payload lines into records
//!
//! ```text
//! ┌─────────────────┐
//! │ # comment lines │ ← header::strip_comments()
//! ├─────────────────┤
//! │  zlib stream    │ ← header::decode()
//! │  (records)      │ ← content::parse()
//! └─────────────────┘
//! ```

pub mod content;
pub mod header;
