// src/scrape/mod.rs
pub mod credentials;
pub mod fetch;

use std::time::Duration;

use chrono::{Days, NaiveDate};

use crate::{
    config::options::ChannelAllowList,
    error::{GuideError, Result},
    model::ChannelRecord,
    progress::Progress,
};

pub use credentials::{acquire_first, CredentialSource, Credentials};
pub use fetch::{date_param, fetch_day, filter_channels, EpgSource, HttpEpg};

/// One fetched day, already narrowed to the allow-list.
#[derive(Clone, Debug)]
pub struct DayListing {
    pub date: NaiveDate,
    pub label: String,
    pub channels: Vec<ChannelRecord>,
    /// Set when page 1 failed and the day came back empty.
    pub error: Option<String>,
}

impl DayListing {
    pub fn is_empty(&self) -> bool { self.channels.is_empty() }
}

/// Fetch `today` and the day after, one after the other.
/// A day whose first page fails comes back empty with `error` set;
/// the other day is still fetched. Fails only when `today` has no next day.
pub fn collect_days(
    source: &mut dyn EpgSource,
    today: NaiveDate,
    allow: &ChannelAllowList,
    pause: Duration,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<(DayListing, DayListing)> {
    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| GuideError::Date(format!("no day after {today}")))?;

    let mut one = |date: NaiveDate, word: &str| {
        let label = join!(word, " (", &date_param(date), ")");
        match fetch_day(&mut *source, date, pause, progress.as_deref_mut()) {
            Ok(all) => {
                let fetched = all.len();
                let channels = filter_channels(all, allow);
                logf!("{label}: kept {} of {fetched} channels", channels.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!(
                        "Filtering for {} desired channels: kept {} of {fetched}",
                        allow.len(), channels.len()
                    ));
                }
                DayListing { date, label, channels, error: None }
            }
            Err(e) => {
                loge!("{label}: fetch failed: {e}");
                DayListing { date, label, channels: Vec::new(), error: Some(e.to_string()) }
            }
        }
    };

    let t0 = one(today, "TODAY");
    let t1 = one(tomorrow, "TOMORROW");
    Ok((t0, t1))
}
