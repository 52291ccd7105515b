//! Client for the unofficial twitchemotes.com v2 API cache.
//!
//! Fetches the global emoticon list and the subscriber channel list
//! and decodes them into typed results, normalizing the mixed
//! timestamp formats the upstream documents carry.

pub mod api;

/// Unified error type for the twitchemotes crate.
#[derive(Debug, thiserror::Error)]
pub enum EmoteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
