// src/layout/geometry.rs
//! Program → block geometry.
//!
//! Vertical placement is a share of a 1440-minute day: `top` comes from the
//! start's minute-of-day, `height` from the duration. Horizontal placement is
//! the channel ordinal times a fixed column width. Nothing here looks at the
//! wall clock, so the same input always lays out the same way.

use chrono::NaiveDate;

use crate::config::consts::{
    CHANNEL_BLOCK_INSET, CHANNEL_COLUMN_WIDTH, MINUTES_PER_DAY, PALETTE,
};
use crate::core::Escaped;
use crate::model::{ChannelRecord, ProgramRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub fill: &'static str,
    pub border: &'static str,
}

/// One rectangle on one day's grid. Recomputed on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBlock {
    pub channel_index: usize,
    pub top_percent: f64,
    pub height_percent: f64,
    pub left_px: u32,
    pub width_px: u32,
    pub color_pair: ColorPair,
    pub title: Escaped,
    pub time_label: String,
    pub description: Escaped,
}

impl LayoutBlock {
    /// Inline CSS placing the block; percentages to four decimals.
    pub fn style(&self) -> String {
        format!(
            "top:{:.4}%; left:{}px; height:{:.4}%; width:{}px;background-color: {}; border-color: {};",
            self.top_percent,
            self.left_px,
            self.height_percent,
            self.width_px,
            self.color_pair.fill,
            self.color_pair.border,
        )
    }
}

/// Same ordinal, same color, for the whole render.
pub fn color_for(channel_index: usize) -> ColorPair {
    let (fill, border) = PALETTE[channel_index % PALETTE.len()];
    ColorPair { fill, border }
}

pub fn left_px(channel_index: usize) -> u32 {
    channel_index as u32 * CHANNEL_COLUMN_WIDTH
}

pub fn grid_width(channel_count: usize) -> u32 {
    left_px(channel_count)
}

/// Block for `program` on `day`, or `None` when it doesn't belong there:
/// start or stop missing, start on another date, or duration ≤ 0.
pub fn block_for(channel_index: usize, program: &ProgramRecord, day: NaiveDate) -> Option<LayoutBlock> {
    let (start, stop, minutes) = program.span()?;
    if start.date() != day || minutes <= 0.0 {
        return None;
    }

    Some(LayoutBlock {
        channel_index,
        top_percent: start.minute_of_day() as f64 / MINUTES_PER_DAY * 100.0,
        height_percent: minutes / MINUTES_PER_DAY * 100.0,
        left_px: left_px(channel_index),
        width_px: CHANNEL_COLUMN_WIDTH - CHANNEL_BLOCK_INSET,
        color_pair: color_for(channel_index),
        title: Escaped::new(program.title_or_default()),
        time_label: format!("{} - {}", start.hhmm(), stop.hhmm()),
        description: Escaped::new(program.description_or_default()),
    })
}

/// All blocks for `day`, channel by channel, programs in record order.
pub fn day_blocks(channels: &[&ChannelRecord], day: NaiveDate) -> Vec<LayoutBlock> {
    channels
        .iter()
        .enumerate()
        .flat_map(|(i, ch)| ch.programs.iter().filter_map(move |p| block_for(i, p, day)))
        .collect()
}
