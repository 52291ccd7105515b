//! Raw on-the-wire payload shapes.
//!
//! The upstream documents key emotes by code and channels by id, and
//! leave optional fields as empty strings. Everything here flattens
//! those maps into the public models, normalizing timestamps per
//! record along the way.

use std::collections::HashMap;

use serde::Deserialize;

use super::models::{Channel, Emoticon, GlobalResult, ImageTemplate, Metadata, SubscriberResult};
use super::time;

#[derive(Debug, Deserialize)]
struct RawMeta {
    #[serde(default)]
    generated_at: String,
}

impl RawMeta {
    fn into_metadata(self) -> Metadata {
        Metadata {
            generated_at: time::parse_generated_at(&self.generated_at),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEmote {
    // Present inline for channel emotes; global emotes take the map key.
    #[serde(default)]
    code: String,
    image_id: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    first_seen: String,
}

impl RawEmote {
    /// Materialize with an explicit code (the map key, for global emotes).
    fn into_emoticon(self, code: String) -> Emoticon {
        let first_seen = time::parse_first_seen(&self.first_seen, &code);
        Emoticon {
            code,
            image_id: self.image_id,
            description: self.description,
            first_seen,
        }
    }

    /// Materialize a channel-embedded emote, which carries its own code.
    fn into_inline_emoticon(self) -> Emoticon {
        let code = self.code.clone();
        self.into_emoticon(code)
    }
}

#[derive(Debug, Deserialize)]
struct RawChannel {
    #[serde(default)]
    badge: String,
    #[serde(default)]
    badge_3m: String,
    #[serde(default)]
    badge_6m: String,
    #[serde(default)]
    badge_12m: String,
    #[serde(default)]
    badge_24m: String,
    #[serde(default)]
    badge_starting: String,
    channel_id: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    emotes: Vec<RawEmote>,
    #[serde(default)]
    first_seen: String,
    id: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    set: u32,
    title: String,
}

impl RawChannel {
    // The embedded `id` field is the source of truth for the channel
    // identifier; the map key is only the iteration handle.
    fn into_channel(self) -> Channel {
        let first_seen = time::parse_first_seen(&self.first_seen, &self.title);
        Channel {
            id: self.id,
            channel_id: self.channel_id,
            title: self.title,
            link: self.link,
            description: self.desc,
            badge: self.badge,
            badge_3m: self.badge_3m,
            badge_6m: self.badge_6m,
            badge_12m: self.badge_12m,
            badge_24m: self.badge_24m,
            badge_starting: self.badge_starting,
            set: self.set,
            first_seen,
            emotes: self
                .emotes
                .into_iter()
                .map(RawEmote::into_inline_emoticon)
                .collect(),
        }
    }
}

/// Global document: `{ meta, template, emotes: { code -> emote } }`.
#[derive(Debug, Deserialize)]
pub(super) struct RawGlobal {
    meta: RawMeta,
    template: ImageTemplate,
    emotes: HashMap<String, RawEmote>,
}

impl RawGlobal {
    pub(super) fn into_result(self) -> GlobalResult {
        GlobalResult {
            meta: self.meta.into_metadata(),
            template: self.template,
            emotes: self
                .emotes
                .into_iter()
                .map(|(code, raw)| raw.into_emoticon(code))
                .collect(),
        }
    }
}

/// Subscriber document: `{ meta, template, channels: { id -> channel } }`.
#[derive(Debug, Deserialize)]
pub(super) struct RawSubscriber {
    meta: RawMeta,
    template: ImageTemplate,
    channels: HashMap<String, RawChannel>,
}

impl RawSubscriber {
    pub(super) fn into_result(self) -> SubscriberResult {
        SubscriberResult {
            meta: self.meta.into_metadata(),
            template: self.template,
            channels: self
                .channels
                .into_values()
                .map(RawChannel::into_channel)
                .collect(),
        }
    }
}
