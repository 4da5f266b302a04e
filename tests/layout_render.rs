// tests/layout_render.rs
use chrono::NaiveDate;

use tv_guide::config::options::ChannelAllowList;
use tv_guide::layout::{self, day_blocks};
use tv_guide::model::GuideSnapshot;
use tv_guide::GuideError;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn snapshot(json: &str) -> GuideSnapshot {
    serde_json::from_str(json).unwrap()
}

const SONY_PIX: &str = r#"{
  "programDetailsByChannel": [
    { "channelname": "Sony Pix", "programs": [
      { "title": "Movie A", "desc": "A heist.", "start": "2024-01-01T10:00:00+05:30", "stop": "2024-01-01T12:00:00+05:30" }
    ] }
  ]
}"#;

#[test]
fn single_program_lands_where_expected() {
    let snap = snapshot(SONY_PIX);
    let allow = ChannelAllowList::default();
    let channels = snap.filtered(&allow);

    let today = day_blocks(&channels, day());
    assert_eq!(today.len(), 1);
    let b = &today[0];
    assert!((b.top_percent - 41.6667).abs() < 1e-3);
    assert!((b.height_percent - 8.3333).abs() < 1e-3);
    assert_eq!(b.left_px, 0);
    assert_eq!(b.time_label, "10:00 - 12:00");

    assert!(day_blocks(&channels, day().succ_opt().unwrap()).is_empty());

    let html = layout::render(&snap, &allow, day()).unwrap();
    assert_eq!(html.matches(r#"class="program-block""#).count(), 1);
    assert!(html.contains(r#"<span class="program-title">Movie A</span>"#));
}

#[test]
fn same_input_same_bytes() {
    let snap = snapshot(SONY_PIX);
    let allow = ChannelAllowList::default();
    let a = layout::render(&snap, &allow, day()).unwrap();
    let b = layout::render(&snap, &allow, day()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn hostile_text_is_escaped() {
    let snap = snapshot(r#"{
      "programDetailsByChannel": [
        { "channelname": "MNX", "programs": [
          { "title": "<script>alert('x')</script>", "desc": "Tom & \"Jerry\" <b>",
            "start": "2024-01-01T08:00:00Z", "stop": "2024-01-01T09:00:00Z" }
        ] }
      ]
    }"#);
    let html = layout::render(&snap, &ChannelAllowList::default(), day()).unwrap();

    // the page's own script tag only
    assert_eq!(html.matches("<script>").count(), 1);
    assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
    assert!(html.contains(r#"data-description="Tom &amp; &quot;Jerry&quot; &lt;b&gt;""#));
    assert!(!html.contains("<b>"));
}

#[test]
fn absent_channel_is_not_an_error() {
    // MNX is allow-listed but missing; Sony Pix still renders.
    let snap = snapshot(SONY_PIX);
    let allow = ChannelAllowList::new(["MNX", "Sony Pix"]);
    let html = layout::render(&snap, &allow, day()).unwrap();
    assert_eq!(html.matches(r#"<div class="channel-header">"#).count(), 1);
    assert!(!html.contains(">MNX<"));
}

#[test]
fn empty_and_reversed_spans_are_skipped() {
    let snap = snapshot(r#"{
      "programDetailsByChannel": [
        { "channelname": "Sony Pix", "programs": [
          { "title": "Zero", "start": "2024-01-01T10:00:00Z", "stop": "2024-01-01T10:00:00Z" },
          { "title": "Backwards", "start": "2024-01-01T12:00:00Z", "stop": "2024-01-01T11:00:00Z" },
          { "title": "No Stop", "start": "2024-01-01T13:00:00Z" },
          { "title": "Garbage", "start": "not a time", "stop": "2024-01-01T15:00:00Z" },
          { "title": "Fine", "start": "2024-01-01T16:00:00Z", "stop": "2024-01-01T17:00:00Z" }
        ] }
      ]
    }"#);
    let html = layout::render(&snap, &ChannelAllowList::default(), day()).unwrap();
    assert_eq!(html.matches(r#"class="program-block""#).count(), 1);
    assert!(html.contains(">Fine<"));
    for t in ["Zero", "Backwards", "No Stop", "Garbage"] {
        assert!(!html.contains(&format!(">{t}<")), "{t} should not render");
    }
}

#[test]
fn second_column_and_second_color() {
    let snap = snapshot(r#"{
      "programDetailsByChannel": [
        { "channelname": "Sony Pix", "programs": [] },
        { "channelname": "MNX", "programs": [
          { "title": "Late", "start": "2024-01-02T21:00:00Z", "stop": "2024-01-02T22:30:00Z" }
        ] }
      ]
    }"#);
    let channels = snap.filtered(&ChannelAllowList::default());
    let blocks = day_blocks(&channels, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].left_px, 200);
    assert_eq!(blocks[0].channel_index, 1);
    assert!(blocks[0].style().contains("background-color: #DB4437"));
}

#[test]
fn nothing_desired_is_empty_result() {
    let snap = snapshot(r#"{ "programDetailsByChannel": [ { "channelname": "Shopping", "programs": [] } ] }"#);
    let err = layout::render(&snap, &ChannelAllowList::default(), day()).unwrap_err();
    assert!(matches!(err, GuideError::EmptyResult));
}
