//! Transport capability used to fetch manifest bytes.
//!
//! The index never talks to the network itself. It is handed a [`Fetch`]
//! implementation at construction; any closure
//! `Fn(&str) -> Result<Vec<u8>, FetchError>` qualifies, which keeps tests
//! offline.

use crate::inventory::types::error::FetchError;

/// Returns the raw bytes stored at a URL.
///
/// Implementations must not panic. Every failure, including an empty body,
/// is reported as a [`FetchError`]; the index treats all of them as "no data".
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<Vec<u8>, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self(url)
    }
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use log::debug;

    use super::Fetch;
    use crate::inventory::types::error::FetchError;

    /// Blocking HTTP(S) transport backed by `reqwest`.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: reqwest::blocking::Client,
    }

    impl HttpFetcher {
        pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
        pub const DEFAULT_USER_AGENT: &'static str =
            concat!("sphinx-inventory/", env!("CARGO_PKG_VERSION"));

        /// Builds a fetcher with the default timeout and user agent.
        pub fn new() -> Result<Self, FetchError> {
            Self::with_options(Self::DEFAULT_TIMEOUT, Self::DEFAULT_USER_AGENT)
        }

        pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| FetchError::Request(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl Fetch for HttpFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            debug!("GET {}", url);
            let response = self
                .client
                .get(url)
                .send()
                .map_err(|e| FetchError::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .map_err(|e| FetchError::Request(e.to_string()))?;
            if body.is_empty() {
                return Err(FetchError::Empty);
            }
            Ok(body.to_vec())
        }
    }
}
