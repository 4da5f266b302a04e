// src/report.rs
use std::io::{self, Write};

use crate::core::LocalStamp;
use crate::model::ChannelRecord;

const RULE_WIDTH: usize = 60;

/// Plain-text listing of one fetched day, channel by channel.
pub fn write_guide<W: Write>(mut w: W, channels: &[ChannelRecord], day_label: &str) -> io::Result<()> {
    if channels.is_empty() {
        writeln!(w, "No channel data was fetched for {day_label}.")?;
        return Ok(());
    }

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(w)?;
    writeln!(w, "{rule}")?;
    writeln!(w, "TV GUIDE SCHEDULE FOR {} (Filtered for your channels)", day_label.to_uppercase())?;
    writeln!(w, "{rule}")?;

    for ch in channels {
        let name = if ch.name.is_empty() { "Unknown Channel" } else { ch.name.as_str() };
        writeln!(w)?;
        writeln!(w, "- {name}")?;

        if ch.programs.is_empty() {
            writeln!(w, "  No program information available.")?;
            continue;
        }
        for p in &ch.programs {
            writeln!(w, "  {}: {}", time_display(p.start_local(), p.stop_local()), p.title_or_default())?;
        }
    }
    Ok(())
}

/// `HH:MM - HH:MM`, or `Live` when either end is unknown.
fn time_display(start: Option<&LocalStamp>, stop: Option<&LocalStamp>) -> String {
    match (start, stop) {
        (Some(a), Some(b)) => format!("{} - {}", a.hhmm(), b.hhmm()),
        _ => s!("Live"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProgramRecord;

    fn render(channels: &[ChannelRecord], label: &str) -> String {
        let mut buf = Vec::new();
        write_guide(&mut buf, channels, label).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_programs_with_times() {
        let p = ProgramRecord::new(
            "Movie A",
            LocalStamp::parse("2024-01-01T10:00:00Z").unwrap(),
            LocalStamp::parse("2024-01-01T12:00:00Z").unwrap(),
        );
        let out = render(&[ChannelRecord::new("Sony Pix", vec![p])], "Today (01/01/2024)");
        assert!(out.contains("TV GUIDE SCHEDULE FOR TODAY (01/01/2024)"));
        assert!(out.contains("\n- Sony Pix\n"));
        assert!(out.contains("  10:00 - 12:00: Movie A\n"));
    }

    #[test]
    fn unknown_times_show_live() {
        let p = ProgramRecord { title: Some(s!("News")), ..Default::default() };
        let out = render(&[ChannelRecord::new("MNX", vec![p])], "x");
        assert!(out.contains("  Live: News\n"));
    }

    #[test]
    fn empty_channel_and_empty_day() {
        let out = render(&[ChannelRecord::new("MNX", vec![])], "x");
        assert!(out.contains("  No program information available.\n"));

        let out = render(&[], "TOMORROW (02/01/2024)");
        assert_eq!(out, "No channel data was fetched for TOMORROW (02/01/2024).\n");
    }
}
