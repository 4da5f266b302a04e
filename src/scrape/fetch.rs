// src/scrape/fetch.rs
use std::{thread, time::Duration};

use chrono::NaiveDate;
use reqwest::blocking::{multipart::Form, Client};

use crate::{
    config::consts::FETCH_DATE_FORMAT,
    config::options::{ChannelAllowList, FetchOptions},
    core::net,
    error::Result,
    model::ChannelRecord,
    progress::Progress,
    specs::epg::{self, EpgPage},
};

use super::credentials::Credentials;

/// One page of the listing for one date. The HTTP client is the real one;
/// tests swap in canned pages.
pub trait EpgSource {
    fn page(&mut self, date: &str, page_num: u32) -> Result<EpgPage>;
}

pub struct HttpEpg<'a> {
    client: &'a Client,
    creds: &'a Credentials,
    endpoint: &'a str,
    referer: &'a str,
}

impl<'a> HttpEpg<'a> {
    pub fn new(client: &'a Client, creds: &'a Credentials, opts: &'a FetchOptions) -> Self {
        Self { client, creds, endpoint: &opts.endpoint, referer: &opts.guide_page }
    }
}

impl EpgSource for HttpEpg<'_> {
    fn page(&mut self, date: &str, page_num: u32) -> Result<EpgPage> {
        let headers = net::epg_headers(&self.creds.auth_token, &self.creds.cookie_header, self.referer)?;
        let body = net::post_form(self.client, self.endpoint, headers, page_form(date, page_num), page_num)?;
        epg::parse_page(&body)
    }
}

fn page_form(date: &str, page_num: u32) -> Form {
    Form::new()
        .text("channelgenre", "")
        .text("language", "")
        .text("allowPastEvents", "true")
        .text("dataSize", "large")
        .text("pageNum", page_num.to_string())
        .text("date", date.to_string())
}

/// `DD/MM/YYYY`, the only date format the endpoint accepts.
pub fn date_param(date: NaiveDate) -> String {
    date.format(FETCH_DATE_FORMAT).to_string()
}

/// Fetch every page of the listing for `date`, in order.
///
/// Page 1 decides the page count; if it fails the whole day fails. Any later
/// page that fails is logged and skipped, so the result may be partial.
/// `pause` is slept after each later page, successful or not.
pub fn fetch_day(
    source: &mut dyn EpgSource,
    date: NaiveDate,
    pause: Duration,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<ChannelRecord>> {
    let date_str = date_param(date);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching page 1 for {date_str} to get total page count..."));
    }

    let first = match source.page(&date_str, 1) {
        Ok(page) => page,
        Err(e) => {
            loge!("Fetch {date_str}: page 1 failed: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(1, &e.to_string());
                p.finish();
            }
            return Err(e);
        }
    };

    let total = first.total_pages();
    let mut channels = first.into_channels();
    logf!("Fetch {date_str}: {total} pages, page 1 gave {} channels", channels.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total as usize);
        p.item_done(1, channels.len());
    }

    for page_num in 2..=total {
        match source.page(&date_str, page_num) {
            Ok(page) => {
                let new = page.into_channels();
                logd!("Fetch {date_str}: page {page_num}/{total} gave {} channels", new.len());
                channels.extend(new);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(page_num, channels.len());
                }
            }
            Err(e) => {
                loge!("Fetch {date_str}: page {page_num}/{total} failed: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(page_num, &e.to_string());
                }
            }
        }
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(channels)
}

/// Keep only allow-listed channels, in fetched order.
pub fn filter_channels(channels: Vec<ChannelRecord>, allow: &ChannelAllowList) -> Vec<ChannelRecord> {
    channels.into_iter().filter(|c| allow.permits(&c.name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuideError;
    use crate::progress::RecordingProgress;

    /// Canned pages; `None` entries fail.
    struct Canned {
        total: u32,
        pages: Vec<Option<Vec<&'static str>>>,
        asked: Vec<(String, u32)>,
    }

    impl EpgSource for Canned {
        fn page(&mut self, date: &str, page_num: u32) -> Result<EpgPage> {
            self.asked.push((s!(date), page_num));
            match self.pages.get(page_num as usize - 1).cloned().flatten() {
                Some(names) => Ok(EpgPage::new(
                    self.total,
                    names.iter().map(|n| ChannelRecord::new(n, vec![])).collect(),
                )),
                None => Err(GuideError::Status { page: page_num, status: 500, body: s!("boom") }),
            }
        }
    }

    fn day() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 1, 5).unwrap() }

    #[test]
    fn walks_all_pages_in_order() {
        let mut src = Canned {
            total: 3,
            pages: vec![Some(vec!["A", "B"]), Some(vec!["C"]), Some(vec!["D"])],
            asked: vec![],
        };
        let mut prog = RecordingProgress::default();
        let chans = fetch_day(&mut src, day(), Duration::ZERO, Some(&mut prog)).unwrap();

        let names: Vec<&str> = chans.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(src.asked, vec![(s!("05/01/2024"), 1), (s!("05/01/2024"), 2), (s!("05/01/2024"), 3)]);
        assert_eq!(prog.total, Some(3));
        assert_eq!(prog.done, vec![1, 2, 3]);
        assert!(prog.finished);
    }

    #[test]
    fn later_page_failure_is_skipped() {
        let mut src = Canned {
            total: 3,
            pages: vec![Some(vec!["A"]), None, Some(vec!["C"])],
            asked: vec![],
        };
        let mut prog = RecordingProgress::default();
        let chans = fetch_day(&mut src, day(), Duration::ZERO, Some(&mut prog)).unwrap();
        assert_eq!(chans.len(), 2);
        assert_eq!(prog.failed, vec![2]);
    }

    #[test]
    fn first_page_failure_fails_the_day() {
        let mut src = Canned { total: 3, pages: vec![None], asked: vec![] };
        let err = fetch_day(&mut src, day(), Duration::ZERO, None).unwrap_err();
        assert!(matches!(err, GuideError::Status { page: 1, status: 500, .. }));
        assert_eq!(src.asked.len(), 1);
    }

    #[test]
    fn single_page_day() {
        let mut src = Canned { total: 1, pages: vec![Some(vec!["A"])], asked: vec![] };
        let chans = fetch_day(&mut src, day(), Duration::ZERO, None).unwrap();
        assert_eq!(chans.len(), 1);
        assert_eq!(src.asked.len(), 1);
    }

    #[test]
    fn filter_uses_allow_list() {
        let chans = vec![
            ChannelRecord::new("Sony Pix", vec![]),
            ChannelRecord::new("News 24", vec![]),
            ChannelRecord::new("MNX", vec![]),
        ];
        let kept = filter_channels(chans.clone(), &ChannelAllowList::default());
        assert_eq!(kept.len(), 2);
        assert_eq!(filter_channels(chans, &ChannelAllowList::all()).len(), 3);
    }
}
