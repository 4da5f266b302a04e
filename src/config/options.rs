// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuideOptions {
    /// Shared by the fetch filter and the renderer.
    pub channels: ChannelAllowList,
    pub fetch: FetchOptions,
    pub render: RenderOptions,
    pub snapshot_path: PathBuf,
}

impl Default for GuideOptions {
    fn default() -> Self {
        Self {
            channels: ChannelAllowList::default(),
            fetch: FetchOptions::default(),
            render: RenderOptions::default(),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
        }
    }
}

/// Ordered set of exact channel names. Empty means "keep everything".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelAllowList(Vec<String>);

impl ChannelAllowList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn all() -> Self { Self(Vec::new()) }

    pub fn permits(&self, name: &str) -> bool {
        self.0.is_empty() || self.0.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn names(&self) -> &[String] { &self.0 }
}

impl Default for ChannelAllowList {
    fn default() -> Self {
        Self::new(DESIRED_CHANNELS.iter().copied())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub guide_page: String,
    pub endpoint: String,
    pub timeout: Duration,
    /// Pause after every page past the first.
    pub request_pause: Duration,
    /// How long the headless browser waits for the token cookie.
    pub browser_wait: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            guide_page: s!(GUIDE_PAGE_URL),
            endpoint: s!(EPG_ENDPOINT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
            browser_wait: Duration::from_secs(BROWSER_TOKEN_WAIT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub out_path: PathBuf,
    /// "Today" for partitioning; `None` means today at the local offset.
    pub reference_date: Option<NaiveDate>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_HTML_FILE),
            reference_date: None,
        }
    }
}

impl RenderOptions {
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(local_today)
    }
}

pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(LOCAL_UTC_OFFSET_MINUTES * 60)
        .unwrap_or_else(|| Utc.fix())
}

/// Calendar date right now at the fixed listing offset.
pub fn local_today() -> NaiveDate {
    Utc::now().with_timezone(&local_offset()).date_naive()
}
