//! Postlinker - automatic Bitly shortlinks for published content
//!
//! This library is the core of a content-platform plugin: it creates a
//! shortlink for each published content item through the Bitly v3 API,
//! caches it as item metadata, revalidates the cached value before reuse,
//! and fetches click statistics for the admin panel.
//!
//! # Features
//! - **ureq** (default): TLS-capable native HTTP transport. Without it the
//!   plain `std::net` transport is used (http:// endpoints only).
//!
//! # Architecture
//! - `api`: endpoint registry, HTTP adapter and response validation
//! - `services`: credential state and the shortlink resolution engine
//! - `storage`: host collaborators (metadata store, content source)
//! - `render`: template tag, shortcode and stats panel markup
//! - `runtime`: plugin context and host event entry points
//! - `config`: configuration loading
//! - `system`: logging initialization

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;

pub use errors::{PostlinkerError, Result};
pub use runtime::{Plugin, PluginContext};
