// src/runner.rs
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    config::options::GuideOptions,
    core::net,
    error::{GuideError, Result},
    file, layout,
    progress::Progress,
    report,
    scrape::{
        self,
        credentials::{Explicit, FromEnv, PageHarvester},
        CredentialSource, EpgSource, HttpEpg,
    },
    store,
};
#[cfg(feature = "browser")]
use crate::scrape::credentials::BrowserSession;

/// Summary of what was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// `None` for render-only runs.
    pub snapshot_path: Option<PathBuf>,
    pub html_path: PathBuf,
    /// Channels in the snapshot after the merge.
    pub channels: usize,
    /// Day labels whose fetch failed outright.
    pub failed_days: Vec<String>,
}

/// Full pipeline against the live service: credentials, fetch both days,
/// print the listing, save the snapshot, render the page.
///
/// `explicit` holds any token/cookie given on the command line; the
/// environment, the guide page's own cookies and (with the `browser`
/// feature) a headless browser session are tried after it.
pub fn run(
    opts: &GuideOptions,
    explicit: Explicit,
    mut progress: Option<&mut (dyn Progress + '_)>,
    listing: Option<&mut (dyn Write + '_)>,
) -> Result<RunSummary> {
    let client = net::client(&opts.fetch)?;
    let harvester = PageHarvester { client: &client, guide_page: &opts.fetch.guide_page };
    #[cfg(feature = "browser")]
    let browser = BrowserSession { guide_page: &opts.fetch.guide_page, wait: opts.fetch.browser_wait };

    #[allow(unused_mut)]
    let mut sources: Vec<&dyn CredentialSource> = vec![&explicit, &FromEnv, &harvester];
    #[cfg(feature = "browser")]
    sources.push(&browser);

    if let Some(p) = progress.as_deref_mut() {
        p.log("Acquiring credentials...");
    }
    let creds = scrape::acquire_first(&sources)?;

    let mut source = HttpEpg::new(&client, &creds, &opts.fetch);
    run_with(&mut source, opts, opts.render.reference_date(), progress, listing)
}

/// Everything after credentials, over any page source.
pub fn run_with(
    source: &mut dyn EpgSource,
    opts: &GuideOptions,
    today: NaiveDate,
    mut progress: Option<&mut (dyn Progress + '_)>,
    mut listing: Option<&mut (dyn Write + '_)>,
) -> Result<RunSummary> {
    let (d0, d1) = scrape::collect_days(
        source,
        today,
        &opts.channels,
        opts.fetch.request_pause,
        progress.as_deref_mut(),
    )?;

    if let Some(w) = listing.as_deref_mut() {
        report::write_guide(&mut *w, &d0.channels, &d0.label)?;
        report::write_guide(&mut *w, &d1.channels, &d1.label)?;
    }

    let failed_days: Vec<String> = [&d0, &d1]
        .iter()
        .filter(|d| d.error.is_some())
        .map(|d| d.label.clone())
        .collect();

    let snapshot = store::merge_days(d0.channels, d1.channels);
    if snapshot.is_empty() {
        loge!("No desired channels in either day; nothing saved");
        return Err(GuideError::EmptyResult);
    }

    let snapshot_path = store::save_snapshot(&opts.snapshot_path, &snapshot)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Saved today's and tomorrow's schedules to {}",
            snapshot_path.display()
        ));
    }

    let html = layout::render(&snapshot, &opts.channels, today)?;
    let html_path = file::write_document(&opts.render.out_path, &html)?;
    logf!("Wrote {}", html_path.display());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {}", html_path.display()));
        p.finish();
    }

    Ok(RunSummary {
        snapshot_path: Some(snapshot_path),
        html_path,
        channels: snapshot.channels.len(),
        failed_days,
    })
}

/// Re-render from a saved snapshot without touching the network.
pub fn render_only(opts: &GuideOptions) -> Result<RunSummary> {
    let snapshot = store::load_snapshot(&opts.snapshot_path)?;
    let html = layout::render(&snapshot, &opts.channels, opts.render.reference_date())?;
    let html_path = file::write_document(&opts.render.out_path, &html)?;
    logf!("Render-only: wrote {}", html_path.display());

    Ok(RunSummary {
        snapshot_path: None,
        html_path,
        channels: snapshot.filtered(&opts.channels).len(),
        failed_days: Vec::new(),
    })
}
