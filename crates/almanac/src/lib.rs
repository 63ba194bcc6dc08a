//! Weather and news dashboard client.
//!
//! `almanac` is the orchestration layer behind a small dashboard that queries a weather service
//! and a news service through a backend proxy, shows the most recent results, and lists a short
//! history of past searches. It provides:
//!
//! - A [`Collaborator`](collaborator::Collaborator) seam over the three backend endpoints, with an
//!   HTTP implementation built on `reqwest`
//! - A per-panel state machine ([`Panel`](panel::Panel)) that keeps exactly one of the loading
//!   indicator, the error banner, or the data view visible
//! - The weather, news, and history query flows ([`Dashboard`](dashboard::Dashboard))
//! - Presentation helpers (HTML escaping, relative time labels, image fallback) and an HTML
//!   renderer for the whole dashboard page
//!
//! # Getting Started
//!
//! ```no_run
//! use almanac::{
//!   config::Config,
//!   dashboard::{Dashboard, QueryOutcome},
//!   models::{Category, Country},
//!   prelude::*,
//! };
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::load_or_default(Config::default_path())?;
//!   let dashboard = Dashboard::new(config.collaborator()?);
//!
//!   // Query a city, then the default news feed
//!   if let QueryOutcome::Failed(message) = dashboard.search_weather("Oslo").await {
//!     eprintln!("weather: {message}");
//!   }
//!   dashboard.search_news(Category::Technology, Country::Gb).await;
//!
//!   // Wait for the history refreshes the successful searches triggered
//!   dashboard.settle().await;
//!
//!   let html = almanac::render::page(&dashboard.snapshot().await, chrono::Utc::now());
//!   std::fs::write(config.output_path, html)?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`models`]: Wire/view models and the closed enumerations for categories and countries
//! - [`collaborator`]: Backend endpoints and the response envelope
//! - [`panel`]: The loading/error/success state machine
//! - [`history`]: The search history log
//! - [`dashboard`]: Query flows tying the above together
//! - [`format`]: Escaping and formatting helpers
//! - [`render`]: HTML rendering of panels and the full page
//! - [`config`]: On-disk configuration
//! - [`error`]: Error type and `Result` alias

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
  sync::Arc,
};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, error, trace, warn};

pub mod collaborator;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod history;
pub mod models;
pub mod panel;
pub mod render;

use crate::{collaborator::*, error::*, models::*, panel::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use almanac::{dashboard::Dashboard, prelude::*};
///
/// fn build(collaborator: impl Collaborator + 'static) -> Dashboard { Dashboard::new(collaborator) }
/// ```
pub mod prelude {
  pub use crate::{
    collaborator::Collaborator,
    error::{AlmanacError, Result},
  };
}
