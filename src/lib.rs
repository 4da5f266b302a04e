// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod layout;
pub mod logging;
pub mod model;
pub mod specs;

pub mod file;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod store;

pub use error::{GuideError, Result};
