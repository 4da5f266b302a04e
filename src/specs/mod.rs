// src/specs/mod.rs
//! # Page readers
//!
//! Page-specific readers for the listing service. Each reader knows how one
//! response body is shaped and how to pull the ground truth out of it.
//!
//! ## What lives here
//! - **Pure parsing** of response bodies into model types.
//! - **Tolerance** for the service's quirks (numbers sent as strings, `null`
//!   lists, extra fields).
//!
//! ## What does **not** live here
//! - Networking and pagination (`scrape`), persistence (`store`), rendering (`layout`).
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::fetch_day → EpgSource::page → specs::epg::parse_page
//! ```
pub mod epg;
