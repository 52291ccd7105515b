//! twitchemotes.com API cache client.
//!
//! Two fixed endpoints, no parameters and no authentication. Each call
//! performs a single GET, decodes the document, and hands an owned
//! result back to the caller.

mod fetch;
mod time;
mod wire;

pub mod models;


pub use models::{Channel, Emoticon, GlobalResult, ImageTemplate, Metadata, SubscriberResult};

const CACHE_BASE: &str = "https://twitchemotes.com/api_cache/v2";

/// Client for the twitchemotes.com API cache.
///
/// Holds a shared `reqwest::Client`; calls are stateless and may be
/// issued concurrently from multiple tasks.
pub struct EmotesClient {
    http: reqwest::Client,
    base_url: String,
}

impl EmotesClient {
    /// Create a client against the live twitchemotes.com endpoints.
    pub fn new() -> Self {
        Self::with_base_url(CACHE_BASE)
    }

    /// Create a client against an alternate endpoint base.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for EmotesClient {
    fn default() -> Self {
        Self::new()
    }
}
