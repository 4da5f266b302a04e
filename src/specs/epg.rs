// src/specs/epg.rs
//! Reader for one page of the EPG channels endpoint.
//!
//! Purpose:
//! - Parse the JSON body of one `services/epg/channels` page.
//! - Pull out `totalPages` (sent as a number or a numeric string; missing → 1).
//! - Pull out `programDetailsByChannel` as [`ChannelRecord`]s, untouched.
//!
//! Non-Responsibilities:
//! - No networking, no pagination, no filtering. `scrape::fetch` owns those.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;
use crate::model::ChannelRecord;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpgPage {
    #[serde(default, deserialize_with = "lenient_count")]
    total_pages: Option<u32>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub program_details_by_channel: Vec<ChannelRecord>,
}

impl EpgPage {
    pub fn new(total_pages: u32, channels: Vec<ChannelRecord>) -> Self {
        Self { total_pages: Some(total_pages), program_details_by_channel: channels }
    }

    /// Page count the service reports; never less than 1.
    pub fn total_pages(&self) -> u32 {
        self.total_pages.unwrap_or(1).max(1)
    }

    pub fn into_channels(self) -> Vec<ChannelRecord> {
        self.program_details_by_channel
    }
}

/// Split out for unit tests.
pub fn parse_page(body: &str) -> Result<EpgPage> {
    Ok(serde_json::from_str(body)?)
}

fn lenient_count<'de, D>(de: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(de)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn null_as_empty<'de, D>(de: D) -> std::result::Result<Vec<ChannelRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ChannelRecord>>::deserialize(de)?.unwrap_or_default())
}
