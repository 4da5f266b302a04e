// src/core/mod.rs

pub mod html;
pub mod net;
pub mod time;

pub use html::Escaped;
pub use time::{LocalStamp, WireStamp};
