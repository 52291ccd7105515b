//! Timestamp normalization for the two formats the upstream emits.
//!
//! Document metadata carries RFC 3339 with an offset; per-record
//! `first_seen` fields carry `YYYY-MM-DD HH:MM:SS` with no zone. The
//! two formats are genuinely distinct upstream, so the parsers stay
//! separate. Both are best-effort: a malformed value is logged and
//! dropped instead of failing the whole document.

use chrono::{DateTime, NaiveDateTime, Utc};

const FIRST_SEEN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a document-level `generated_at` value.
pub(super) fn parse_generated_at(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(err) => {
            tracing::warn!(raw, %err, "Could not parse 'generated_at' time");
            None
        }
    }
}

/// Parse a per-record `first_seen` value.
///
/// `owner` names the record the value belongs to (emote code or channel
/// title) so the warning identifies it.
pub(super) fn parse_first_seen(raw: &str, owner: &str) -> Option<NaiveDateTime> {
    if raw.is_empty() {
        return None;
    }
    match NaiveDateTime::parse_from_str(raw, FIRST_SEEN_FORMAT) {
        Ok(dt) => Some(dt),
        Err(err) => {
            tracing::warn!(raw, owner, %err, "Could not parse 'first_seen' time");
            None
        }
    }
}
