//! Core data structures for inventory records and loading options.

/// One decoded payload line.
///
/// Only `name` and `location` are retained by the index; the other fields
/// are exposed for callers that parse records themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub name: String,
    /// Domain and role, e.g. `py:module`.
    pub role: String,
    /// Kept as text: real inventories carry `-1`, `0`, `1` and occasionally junk.
    pub priority: String,
    /// Location relative to the base URL, possibly ending in `$`.
    pub location: String,
    /// Display name, `-` when identical to `name`. May contain spaces.
    pub display: String,
}

impl InventoryRecord {
    /// Number of space-separated fields in a record line.
    pub const FIELD_COUNT: usize = 5;
}

/// How a `load` combines freshly parsed records with the existing index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// New records are added, repeated names are overwritten, old names stay.
    ///
    /// The base URL of the latest load applies to every entry.
    #[default]
    Merge,
    /// The parsed records replace the whole mapping.
    Replace,
}

/// Default category tag attached to every diagnostic.
pub const DEFAULT_CATEGORY: &str = "sphinx";

/// Settings for a [`SphinxInventory`](crate::SphinxInventory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryOptions {
    pub category: String,
    pub merge_policy: MergePolicy,
}

impl Default for InventoryOptions {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            merge_policy: MergePolicy::default(),
        }
    }
}

impl InventoryOptions {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }
}
