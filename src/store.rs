// src/store.rs
use std::{collections::HashMap, fs, io::Write, path::{Path, PathBuf}};

use crate::error::Result;
use crate::file::ensure_parent;
use crate::model::{ChannelRecord, GuideSnapshot};

/// Combine two days into one snapshot keyed by channel name.
///
/// - `today` sets the order; a name seen twice is folded into its first entry.
/// - `tomorrow`'s programs are appended to the matching channel.
/// - Channels only present tomorrow pass through, appended at the end.
pub fn merge_days(today: Vec<ChannelRecord>, tomorrow: Vec<ChannelRecord>) -> GuideSnapshot {
    let mut out: Vec<ChannelRecord> = Vec::with_capacity(today.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for ch in today.into_iter().chain(tomorrow) {
        match index.get(&ch.name) {
            Some(&i) => out[i].programs.extend(ch.programs),
            None => {
                index.insert(ch.name.clone(), out.len());
                out.push(ch);
            }
        }
    }

    GuideSnapshot::new(out)
}

/// Pretty JSON (2-space indent, UTF-8 kept as-is).
pub fn save_snapshot(path: &Path, snapshot: &GuideSnapshot) -> Result<PathBuf> {
    ensure_parent(path)?;
    let mut text = serde_json::to_string_pretty(snapshot)?;
    text.push('\n');
    let mut f = fs::File::create(path)?;
    f.write_all(text.as_bytes())?;
    logf!("Store: saved {} channels to {}", snapshot.channels.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn load_snapshot(path: &Path) -> Result<GuideSnapshot> {
    let text = fs::read_to_string(path)?;
    let snap: GuideSnapshot = serde_json::from_str(&text)?;
    logd!("Store: loaded {} channels from {}", snap.channels.len(), path.display());
    Ok(snap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LocalStamp;
    use crate::model::ProgramRecord;

    fn prog(title: &str, start: &str, stop: &str) -> ProgramRecord {
        ProgramRecord::new(title, LocalStamp::parse(start).unwrap(), LocalStamp::parse(stop).unwrap())
    }

    fn titles(c: &ChannelRecord) -> Vec<&str> {
        c.programs.iter().map(|p| p.title_or_default()).collect()
    }

    #[test]
    fn tomorrow_appends_to_matching_channel() {
        let today = vec![
            ChannelRecord::new("MNX", vec![prog("A", "2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z")]),
            ChannelRecord::new("Sony Pix", vec![]),
        ];
        let tomorrow = vec![
            ChannelRecord::new("Sony Pix", vec![prog("C", "2024-01-02T09:00:00Z", "2024-01-02T10:00:00Z")]),
            ChannelRecord::new("MNX", vec![prog("B", "2024-01-02T10:00:00Z", "2024-01-02T11:00:00Z")]),
        ];
        let snap = merge_days(today, tomorrow);
        let names: Vec<&str> = snap.channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["MNX", "Sony Pix"]);
        assert_eq!(titles(&snap.channels[0]), vec!["A", "B"]);
        assert_eq!(titles(&snap.channels[1]), vec!["C"]);
    }

    #[test]
    fn one_sided_channels_pass_through() {
        let snap = merge_days(
            vec![ChannelRecord::new("Only Today", vec![])],
            vec![ChannelRecord::new("Only Tomorrow", vec![])],
        );
        let names: Vec<&str> = snap.channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Only Today", "Only Tomorrow"]);
    }

    #[test]
    fn duplicate_name_folds_into_first() {
        let snap = merge_days(
            vec![
                ChannelRecord::new("MNX", vec![prog("A", "2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z")]),
                ChannelRecord::new("Other", vec![]),
                ChannelRecord::new("MNX", vec![prog("Z", "2024-01-01T12:00:00Z", "2024-01-01T13:00:00Z")]),
            ],
            vec![],
        );
        assert_eq!(snap.channels.len(), 2);
        assert_eq!(snap.channels[0].name, "MNX");
        assert_eq!(titles(&snap.channels[0]), vec!["A", "Z"]);
    }

    #[test]
    fn save_then_load_keeps_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("guide.json");
        let snap = merge_days(
            vec![ChannelRecord::new("&prive HD", vec![prog("Ünïcödé", "2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z")])],
            vec![],
        );
        save_snapshot(&path, &snap).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"programDetailsByChannel\""));
        assert!(text.contains("Ünïcödé"));
        assert!(text.contains("\n  \""));

        assert_eq!(load_snapshot(&path).unwrap(), snap);
    }

    #[test]
    fn unreadable_times_survive_a_resave() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        fs::write(&first, r#"{"programDetailsByChannel": [{"channelname": "MNX", "programs": [
            {"title": "X", "start": "01/01/2024 10:00", "stop": "2024-01-01T11:00:00Z"}
        ]}]}"#).unwrap();

        let snap = load_snapshot(&first).unwrap();
        let p = &snap.channels[0].programs[0];
        assert!(p.start_local().is_none());
        assert!(p.span().is_none());

        save_snapshot(&second, &snap).unwrap();
        let text = fs::read_to_string(&second).unwrap();
        assert!(text.contains(r#""start": "01/01/2024 10:00""#));
        assert!(text.contains(r#""stop": "2024-01-01T11:00:00Z""#));
        assert_eq!(load_snapshot(&second).unwrap(), snap);
    }

    #[test]
    fn missing_or_broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_snapshot(&dir.path().join("absent.json")).is_err());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(load_snapshot(&broken).is_err());
    }
}
