// src/layout/mod.rs
//! Timeline layout engine: snapshot in, one self-contained HTML document out.
//!
//! ```text
//! GuideSnapshot ─ filter by allow-list ─▶ channels (snapshot order)
//!               ─ partition by start date ─▶ today / tomorrow
//!               ─ geometry ─▶ LayoutBlock ─ maud ─▶ String
//! ```
pub mod assets;
pub mod geometry;
pub mod render;

pub use geometry::{block_for, day_blocks, LayoutBlock};
pub use render::render;
