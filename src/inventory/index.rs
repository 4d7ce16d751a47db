use std::collections::HashMap;

use log::{debug, info};

use super::diagnostics::{Diagnostics, LogDiagnostics};
use super::format::{content, header};
use super::transport::Fetch;
use super::types::error::{FetchError, InventoryError, Result};
use super::types::models::{InventoryOptions, MergePolicy};

/// Name → URL index over one or more Sphinx `objects.inv` inventories.
///
/// The index starts empty. [`load`](Self::load) fetches, decodes and parses a
/// manifest and folds its records in; [`get_link`](Self::get_link) resolves
/// names against the stored state. Loading takes `&mut self`, so a lookup can
/// never observe the base URL of one load paired with the links of another.
#[derive(Debug)]
pub struct SphinxInventory<F, D = LogDiagnostics> {
    fetcher: F,
    diagnostics: D,
    options: InventoryOptions,
    base_url: String,
    links: HashMap<String, String>,
}

impl<F: Fetch> SphinxInventory<F> {
    /// Creates an index that reports diagnostics through the `log` facade.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self::new(fetcher, LogDiagnostics)
    }
}

impl<F: Fetch, D: Diagnostics> SphinxInventory<F, D> {
    pub fn new(fetcher: F, diagnostics: D) -> Self {
        Self::with_options(fetcher, diagnostics, InventoryOptions::default())
    }

    pub fn with_options(fetcher: F, diagnostics: D, options: InventoryOptions) -> Self {
        Self {
            fetcher,
            diagnostics,
            options,
            base_url: String::new(),
            links: HashMap::new(),
        }
    }

    /// Loads the inventory at `url` into the index.
    ///
    /// Never fails: every problem is reported to the diagnostic sink and the
    /// index keeps whatever it could use. See [`try_load`](Self::try_load).
    pub fn load(&mut self, url: &str) {
        // Already reported.
        let _ = self.try_load(url);
    }

    /// Like [`load`](Self::load), but also hands back the error that aborted
    /// the load.
    ///
    /// Returns the number of records parsed from the manifest. A payload that
    /// fails to decompress or contains bad lines is not an abort: it is
    /// reported and the load completes with fewer records.
    ///
    /// # Errors
    /// - [`InventoryError::BaseUrl`] if `url` contains no `/`; nothing is changed.
    /// - [`InventoryError::Fetch`] if the transport returned no data; the
    ///   base URL is updated but the links are left untouched.
    pub fn try_load(&mut self, url: &str) -> Result<usize> {
        info!("Loading object inventory from {}", url);
        self.set_base_url(url)?;
        let data = self.fetcher.fetch(url);
        self.ingest(url, data)
    }

    /// Loads an inventory whose bytes are already in memory, as if fetched
    /// from `url`.
    ///
    /// `url` still determines the base URL used to resolve links.
    pub fn load_bytes(&mut self, url: &str, data: &[u8]) -> Result<usize> {
        self.set_base_url(url)?;
        self.ingest(url, Ok(data.to_vec()))
    }

    /// Returns the absolute URL for `name`, or `None` if it is not indexed.
    ///
    /// A location ending in `$` has the `$` replaced by `name`.
    pub fn get_link(&self, name: &str) -> Option<String> {
        let location = self.links.get(name).filter(|l| !l.is_empty())?;
        let location = match location.strip_suffix('$') {
            Some(prefix) => format!("{}{}", prefix, name),
            None => location.clone(),
        };
        Some(format!("{}/{}", self.base_url, location))
    }

    /// Base URL of the most recent load, empty before the first one.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn contains(&self, name: &str) -> bool {
        self.links.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over `(name, location)` pairs without resolving them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links.iter().map(|(n, l)| (n.as_str(), l.as_str()))
    }

    pub fn options(&self) -> &InventoryOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn set_base_url(&mut self, url: &str) -> Result<()> {
        let Some((base_url, file_name)) = url.rsplit_once('/') else {
            return Err(self.report(InventoryError::BaseUrl { url: url.to_string() }));
        };
        debug!("Base url '{}', inventory file '{}'", base_url, file_name);
        self.base_url = base_url.to_string();
        Ok(())
    }

    fn ingest(&mut self, url: &str, data: std::result::Result<Vec<u8>, FetchError>) -> Result<usize> {
        let data = data.and_then(|bytes| {
            if bytes.is_empty() {
                Err(FetchError::Empty)
            } else {
                Ok(bytes)
            }
        });
        let data = match data {
            Ok(bytes) => bytes,
            Err(source) => {
                debug!("Fetch of {} failed: {}", url, source);
                return Err(self.report(InventoryError::Fetch { url: url.to_string(), source }));
            }
        };

        let payload = header::decode(&data, &self.base_url).unwrap_or_else(|e| {
            self.report(e);
            String::new()
        });

        let parsed = content::parse(&payload, &self.base_url, |e| {
            self.report(e);
        });
        let count = parsed.len();

        match self.options.merge_policy {
            MergePolicy::Merge => self.links.extend(parsed),
            MergePolicy::Replace => self.links = parsed,
        }
        info!(
            "Loaded {} record(s) from {}, index now holds {}",
            count,
            url,
            self.links.len()
        );
        Ok(count)
    }

    /// Sends `error` to the diagnostic sink and returns it.
    fn report(&self, error: InventoryError) -> InventoryError {
        self.diagnostics
            .report(&self.options.category, &error.to_string());
        error
    }
}
