//! API Configuration
//!
//! Base URL of the block-list server. Looked up, in order, from a
//! `<meta name="fileblock-api" content="...">` tag in the host page, the
//! `FILEBLOCK_API_BASE_URL` build-time variable, then the local default.

use fileblock_core::Endpoint;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Name of the meta tag overriding the base URL at deploy time
pub const API_META_NAME: &str = "fileblock-api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from the page, then the build environment
    pub fn resolve() -> Self {
        let configured = meta_base_url()
            .or_else(|| option_env!("FILEBLOCK_API_BASE_URL").map(str::to_string))
            .filter(|url| !url.trim().is_empty());
        match configured {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `endpoint`
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_META_NAME);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
