// src/layout/render.rs
use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped, Render, DOCTYPE};

use crate::config::consts::{
    CHANNEL_COLUMN_WIDTH, HOURS_IN_RULER, LOCAL_UTC_OFFSET_MINUTES, SEARCH_URL,
};
use crate::config::options::ChannelAllowList;
use crate::core::Escaped;
use crate::error::{GuideError, Result};
use crate::model::{ChannelRecord, GuideSnapshot};

use super::assets::{CSS, FONT_URL, SCRIPT};
use super::geometry::{day_blocks, grid_width, LayoutBlock};

impl Render for LayoutBlock {
    fn render(&self) -> Markup {
        html! {
            div.program-block style=(self.style()) data-description=(self.description) {
                span.program-title { (self.title) }
                span.program-time { (self.time_label) }
            }
        }
    }
}

/// Snapshot → complete HTML document for `reference_date` and the day after.
///
/// Fails with `EmptyResult` when no channel survives the allow-list.
/// Pure: the same inputs always give the same bytes.
pub fn render(
    snapshot: &GuideSnapshot,
    allow: &ChannelAllowList,
    reference_date: NaiveDate,
) -> Result<String> {
    let channels = snapshot.filtered(allow);
    if channels.is_empty() {
        return Err(GuideError::EmptyResult);
    }
    let tomorrow = reference_date
        .succ_opt()
        .ok_or_else(|| GuideError::Date(format!("no day after {reference_date}")))?;

    let today_blocks = day_blocks(&channels, reference_date);
    let tomorrow_blocks = day_blocks(&channels, tomorrow);
    logf!(
        "Render: {} channels, {} blocks today, {} tomorrow",
        channels.len(), today_blocks.len(), tomorrow_blocks.len()
    );

    Ok(document(&channels, &today_blocks, &tomorrow_blocks).into_string())
}

fn document(channels: &[&ChannelRecord], today: &[LayoutBlock], tomorrow: &[LayoutBlock]) -> Markup {
    let width = format!("width: {}px;", grid_width(channels.len()));
    let root_vars = format!(":root {{ --channel-width: {CHANNEL_COLUMN_WIDTH}px; }}");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "TV Timeline Guide" }
                link href=(FONT_URL) rel="stylesheet";
                style { (PreEscaped(&root_vars)) (PreEscaped(CSS)) }
            }
            body data-utc-offset-minutes=(LOCAL_UTC_OFFSET_MINUTES) data-search-url=(SEARCH_URL) {
                header.page-header {
                    h1 { "My TV Guide" }
                    div.date-switcher {
                        button id="todayBtn" class="active" { "Today" }
                        button id="tomorrowBtn" { "Tomorrow" }
                    }
                }
                div.timeline-container {
                    div.corner-block {}
                    div.channels-header-wrapper {
                        div.channels-header-content style=(width) {
                            @for ch in channels {
                                div.channel-header { (Escaped::new(&ch.name)) }
                            }
                        }
                    }
                    div.time-markers {
                        @for h in 0..HOURS_IN_RULER {
                            div.time-marker { span { (hour_label(h)) } }
                        }
                    }
                    div.schedule-scroll-pane {
                        div id="todayGrid" class="schedule-grid" style=(width) {
                            div.time-indicator {}
                            @for b in today { (b) }
                        }
                        div id="tomorrowGrid" class="schedule-grid hidden" style=(width) {
                            @for b in tomorrow { (b) }
                        }
                    }
                }
                div id="tooltip" {}
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn hour_label(h: u32) -> String {
    format!("{:02}:00", h % 24)
}
