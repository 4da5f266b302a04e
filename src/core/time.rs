// src/core/time.rs
//! Wall-clock timestamps as the listing service publishes them.
//!
//! Every `start`/`stop` on the wire looks like `2024-01-01T10:00:00Z` or
//! `2024-01-01T10:00:00+05:30`. The zone marker is not trusted: the date and
//! time fields are taken at face value as local time, and the marker is
//! dropped. [`LocalStamp::parse`] is the only place that happens.
//!
//! A field that doesn't parse is kept as [`WireStamp::Unreadable`], so a
//! re-saved snapshot still carries it while layout treats it as missing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// A zone-less local timestamp. Keeps the raw text so a re-saved snapshot
/// carries exactly what the service sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStamp {
    at: NaiveDateTime,
    raw: String,
}

impl LocalStamp {
    /// Parse a wire timestamp, ignoring any trailing zone marker.
    /// Returns `None` for anything that doesn't carry a full date and time.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s.is_empty() { return None; }

        let at = DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.naive_local())
            .ok()
            .or_else(|| {
                let bare = strip_zone(s);
                NAIVE_FORMATS
                    .iter()
                    .find_map(|f| NaiveDateTime::parse_from_str(bare, f).ok())
            })?;

        Some(Self { at, raw: s.to_string() })
    }

    pub fn from_naive(at: NaiveDateTime) -> Self {
        Self { at, raw: at.format("%Y-%m-%dT%H:%M:%S").to_string() }
    }

    pub fn date(&self) -> NaiveDate { self.at.date() }

    /// Whole minutes since local midnight; seconds are ignored.
    pub fn minute_of_day(&self) -> u32 {
        self.at.hour() * 60 + self.at.minute()
    }

    /// `HH:MM`
    pub fn hhmm(&self) -> String {
        self.at.format("%H:%M").to_string()
    }

    /// Fractional minutes from `self` to `later`; negative if `later` is earlier.
    pub fn minutes_until(&self, later: &LocalStamp) -> f64 {
        (later.at - self.at).num_milliseconds() as f64 / 60_000.0
    }
}

/// Drop a trailing `Z` or `±HH:MM` / `±HHMM` after the time part.
fn strip_zone(s: &str) -> &str {
    if let Some(rest) = s.strip_suffix(['Z', 'z']) {
        return rest;
    }
    // Zone sign can only appear after the date ("YYYY-MM-DD" is 10 bytes).
    match s.rfind(['+', '-']) {
        Some(i) if i > 10 => &s[..i],
        _ => s,
    }
}

/* ---------------- serde ---------------- */

impl Serialize for LocalStamp {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&self.raw)
    }
}

/// A `start`/`stop` value exactly as the service sent it.
#[derive(Clone, Debug, PartialEq)]
pub enum WireStamp {
    Local(LocalStamp),
    /// Unparseable text, `null`, or a non-string value.
    Unreadable(Value),
}

impl WireStamp {
    pub fn from_value(v: Value) -> Self {
        if let Value::String(s) = &v {
            if let Some(stamp) = LocalStamp::parse(s) {
                return Self::Local(stamp);
            }
        }
        logd!("Unreadable timestamp {v}; program will be skipped");
        Self::Unreadable(v)
    }

    /// The parsed stamp, or `None` when the value couldn't be read.
    pub fn local(&self) -> Option<&LocalStamp> {
        match self {
            Self::Local(s) => Some(s),
            Self::Unreadable(_) => None,
        }
    }
}

impl From<LocalStamp> for WireStamp {
    fn from(s: LocalStamp) -> Self { Self::Local(s) }
}

impl Serialize for WireStamp {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Local(s) => s.serialize(ser),
            Self::Unreadable(v) => v.serialize(ser),
        }
    }
}

/// Present field (even `null`) → `Some`; an absent field falls back to `#[serde(default)]`.
pub fn deserialize_wire<'de, D>(de: D) -> Result<Option<WireStamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(WireStamp::from_value(Value::deserialize(de)?)))
}
