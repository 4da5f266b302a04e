// src/cli.rs
use std::{env, io, path::PathBuf};

use chrono::NaiveDate;
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::config::consts::DEFAULT_HTML_FILE;
use crate::config::options::{ChannelAllowList, GuideOptions};
use crate::file::resolve_out_path;
use crate::progress::{NullProgress, Progress};
use crate::runner::{self, RunSummary};
use crate::scrape::credentials::Explicit;

#[derive(Debug, Default)]
pub struct Args {
    pub opts: GuideOptions,
    pub render_only: bool,
    pub quiet: bool,
    pub help: bool,
    pub token: Option<String>,
    pub cookie: Option<String>,
}

/// Prints page progress to stdout.
pub struct ConsoleProgress {
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self { Self { total: 0 } }
}

impl Default for ConsoleProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Total pages to fetch: {total}");
    }
    fn log(&mut self, msg: &str) { println!("{msg}"); }
    fn item_done(&mut self, page: u32, collected: usize) {
        println!("  page {page}/{} ok ({collected} channels so far)", self.total);
    }
    fn item_failed(&mut self, page: u32, err: &str) {
        eprintln!("  page {page} failed: {err}");
    }
}

pub fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let summary = execute(args)?;
    if !summary.failed_days.is_empty() {
        eprintln!("Warning: no data for {}", summary.failed_days.join(", "));
    }
    println!(
        "Done: {} channels. Open {} in a browser.",
        summary.channels,
        summary.html_path.display()
    );
    Ok(())
}

fn execute(args: Args) -> Result<RunSummary> {
    if args.render_only {
        return runner::render_only(&args.opts).wrap_err_with(|| {
            format!("could not render from {}", args.opts.snapshot_path.display())
        });
    }

    let explicit = Explicit { token: args.token, cookie: args.cookie };
    let mut console = ConsoleProgress::new();
    let mut silent = NullProgress;
    let mut stdout = io::stdout();

    let (progress, listing): (&mut dyn Progress, Option<&mut dyn io::Write>) =
        if args.quiet { (&mut silent, None) } else { (&mut console, Some(&mut stdout)) };

    runner::run(&args.opts, explicit, Some(progress), listing).wrap_err("guide run failed")
}

pub fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Args::default();
    let mut picked: Vec<String> = Vec::new();
    let mut all_channels = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--render-only" => out.render_only = true,
            "--snapshot" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --snapshot"))?;
                out.opts.snapshot_path = PathBuf::from(v);
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing output path"))?;
                out.opts.render.out_path = resolve_out_path(&v, DEFAULT_HTML_FILE);
            }
            "--date" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --date"))?;
                let d = NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                    .wrap_err_with(|| format!("Bad --date '{v}', expected YYYY-MM-DD"))?;
                out.opts.render.reference_date = Some(d);
            }
            "--channel" => picked.push(args.next().ok_or_else(|| eyre!("Missing channel name"))?),
            "--all-channels" => all_channels = true,
            "--token" => out.token = Some(args.next().ok_or_else(|| eyre!("Missing value for --token"))?),
            "--cookie" => out.cookie = Some(args.next().ok_or_else(|| eyre!("Missing value for --cookie"))?),
            "-q" | "--quiet" => out.quiet = true,
            "-h" | "--help" => out.help = true,
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }

    if all_channels && !picked.is_empty() {
        return Err(eyre!("--all-channels and --channel are mutually exclusive"));
    }
    if all_channels {
        out.opts.channels = ChannelAllowList::all();
    } else if !picked.is_empty() {
        out.opts.channels = ChannelAllowList::new(picked);
    }

    Ok(out)
}
