// src/model.rs
//
// Channel/program records in the shape the listing service uses on the wire,
// which is also the shape of the saved snapshot. Fields the service sends
// that we don't use ride along in `extra` so a re-save loses nothing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::consts::{NO_DESCRIPTION, UNTITLED_PROGRAM};
use crate::config::options::ChannelAllowList;
use crate::core::time::{self, LocalStamp, WireStamp};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "time::deserialize_wire", skip_serializing_if = "Option::is_none")]
    pub start: Option<WireStamp>,

    #[serde(default, deserialize_with = "time::deserialize_wire", skip_serializing_if = "Option::is_none")]
    pub stop: Option<WireStamp>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProgramRecord {
    pub fn new(title: &str, start: LocalStamp, stop: LocalStamp) -> Self {
        Self {
            title: Some(s!(title)),
            start: Some(start.into()),
            stop: Some(stop.into()),
            ..Default::default()
        }
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_PROGRAM)
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    pub fn start_local(&self) -> Option<&LocalStamp> {
        self.start.as_ref()?.local()
    }

    pub fn stop_local(&self) -> Option<&LocalStamp> {
        self.stop.as_ref()?.local()
    }

    /// Start, stop and duration in minutes, when both ends are readable.
    pub fn span(&self) -> Option<(&LocalStamp, &LocalStamp, f64)> {
        let start = self.start_local()?;
        let stop = self.stop_local()?;
        Some((start, stop, start.minutes_until(stop)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    #[serde(rename = "channelname", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub programs: Vec<ProgramRecord>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChannelRecord {
    pub fn new(name: &str, programs: Vec<ProgramRecord>) -> Self {
        Self { name: s!(name), programs, extra: Map::new() }
    }
}

/// Today + tomorrow, one entry per channel name, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideSnapshot {
    #[serde(rename = "programDetailsByChannel", default, deserialize_with = "null_as_empty")]
    pub channels: Vec<ChannelRecord>,
}

impl GuideSnapshot {
    pub fn new(channels: Vec<ChannelRecord>) -> Self { Self { channels } }

    pub fn is_empty(&self) -> bool { self.channels.is_empty() }

    pub fn channel(&self, name: &str) -> Option<&ChannelRecord> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Channels the allow-list permits, in snapshot order.
    pub fn filtered<'a>(&'a self, allow: &ChannelAllowList) -> Vec<&'a ChannelRecord> {
        self.channels.iter().filter(|c| allow.permits(&c.name)).collect()
    }
}

fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    null_as_default(de)
}

/// `null` reads like an absent field.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_wire_shape_and_keeps_unknown_fields() {
        let json = r#"{
            "programDetailsByChannel": [
                {
                    "channelname": "Sony Pix",
                    "channelid": 42,
                    "programs": [
                        {"title": "Movie A", "desc": "Heist", "start": "2024-01-01T10:00:00Z",
                         "stop": "2024-01-01T12:00:00Z", "genre": "Action"}
                    ]
                },
                {"channelname": "MNX", "programs": null}
            ]
        }"#;
        let snap: GuideSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.channels.len(), 2);

        let pix = snap.channel("Sony Pix").unwrap();
        assert_eq!(pix.extra.get("channelid"), Some(&Value::from(42)));
        let p = &pix.programs[0];
        assert_eq!(p.title_or_default(), "Movie A");
        assert_eq!(p.description_or_default(), "Heist");
        assert_eq!(p.extra.get("genre"), Some(&Value::from("Action")));
        assert_eq!(p.span().unwrap().2, 120.0);

        assert!(snap.channel("MNX").unwrap().programs.is_empty());

        let back = serde_json::to_value(&snap).unwrap();
        assert_eq!(back["programDetailsByChannel"][0]["channelid"], 42);
        assert_eq!(back["programDetailsByChannel"][0]["programs"][0]["start"], "2024-01-01T10:00:00Z");
        assert_eq!(back["programDetailsByChannel"][0]["programs"][0]["genre"], "Action");
    }

    #[test]
    fn missing_pieces_get_defaults() {
        let p: ProgramRecord = serde_json::from_str(r#"{"start": "garbage", "stop": null}"#).unwrap();
        assert_eq!(p.title_or_default(), UNTITLED_PROGRAM);
        assert_eq!(p.description_or_default(), NO_DESCRIPTION);
        assert!(p.start_local().is_none());
        assert!(p.stop_local().is_none());
        assert!(p.span().is_none());

        // both fields written back as they came
        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["start"], "garbage");
        assert!(back["stop"].is_null());
        assert!(back.get("title").is_none());
    }

    #[test]
    fn null_channel_name_reads_as_empty() {
        let snap: GuideSnapshot = serde_json::from_str(r#"{
            "programDetailsByChannel": [
                {"channelname": null, "programs": []},
                {"channelname": "Sony Pix", "programs": []}
            ]
        }"#).unwrap();
        assert_eq!(snap.channels[0].name, "");
        let kept = snap.filtered(&ChannelAllowList::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Sony Pix");
    }

    #[test]
    fn missing_top_level_key_is_empty() {
        let snap: GuideSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snap.is_empty());
    }

    #[test]
    fn filter_keeps_snapshot_order() {
        let snap = GuideSnapshot::new(vec![
            ChannelRecord::new("MNX", vec![]),
            ChannelRecord::new("Other", vec![]),
            ChannelRecord::new("&prive HD", vec![]),
        ]);
        let names: Vec<&str> = snap
            .filtered(&ChannelAllowList::default())
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        // allow-list order puts "&prive HD" first; snapshot order wins
        assert_eq!(names, vec!["MNX", "&prive HD"]);
    }
}
