//! Backend collaborators.
//!
//! The dashboard talks to three read-only endpoints on a backend proxy:
//!
//! | Endpoint | Query | `data` on success |
//! |---|---|---|
//! | `GET /api/weather` | `city` | a [`WeatherReading`] |
//! | `GET /api/news` | `category`, `country` | a list of [`NewsArticle`] |
//! | `GET /api/search-history` | — | a list of [`HistoryEntry`] |
//!
//! Every response body is an envelope of the form `{ "success": bool, "data"?: ..., "error"?:
//! string }`. The HTTP status is not consulted: the backend reports failures such as an unknown
//! city as a `404` carrying a perfectly good envelope, so the body is always decoded.
//!
//! The [`Collaborator`] trait is the seam between the query flows and the network; see
//! [`HttpCollaborator`] for the real implementation.
//!
//! # Examples
//!
//! ```
//! use almanac::{collaborator::decode_envelope, error::AlmanacError, models::HistoryEntry};
//!
//! let err = decode_envelope::<Vec<HistoryEntry>>(br#"{"success": false, "error": "db down"}"#)
//!   .unwrap_err();
//! assert_eq!(err.collaborator_message(), Some("db down"));
//!
//! let err = decode_envelope::<Vec<HistoryEntry>>(br#"{"data": []}"#).unwrap_err();
//! assert!(err.is_transport());
//! ```

use super::*;

mod http;

pub use self::http::HttpCollaborator;

/// The backend endpoints this crate consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  /// Current weather for a city
  Weather,
  /// Top headlines for a category and country
  News,
  /// Recent searches
  SearchHistory,
}

impl Endpoint {
  /// Path of the endpoint relative to the backend's base URL.
  pub fn path(&self) -> &'static str {
    match self {
      Self::Weather => "/api/weather",
      Self::News => "/api/news",
      Self::SearchHistory => "/api/search-history",
    }
  }
}

impl Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.path()) }
}

/// Source of weather, news, and history data.
///
/// Implementations return the decoded `data` of a successful envelope, an
/// [`AlmanacError::Collaborator`] when the envelope reports `success: false`, and any other
/// [`AlmanacError`] for transport and decoding failures.
///
/// # Examples
///
/// ```no_run
/// # use almanac::{prelude::*, models::*};
/// # use async_trait::async_trait;
/// struct Offline;
///
/// #[async_trait]
/// impl Collaborator for Offline {
///   async fn weather(&self, _city: &str) -> Result<WeatherReading> {
///     Err(AlmanacError::Collaborator(Some("offline".into())))
///   }
///
///   async fn news(&self, _category: Category, _country: Country) -> Result<Vec<NewsArticle>> {
///     Ok(Vec::new())
///   }
///
///   async fn search_history(&self) -> Result<Vec<HistoryEntry>> { Ok(Vec::new()) }
/// }
/// ```
#[async_trait]
pub trait Collaborator: Send + Sync {
  /// Looks up current weather for `city`.
  async fn weather(&self, city: &str) -> Result<WeatherReading>;

  /// Fetches top headlines for a category and country.
  async fn news(&self, category: Category, country: Country) -> Result<Vec<NewsArticle>>;

  /// Fetches recent searches, most recent first.
  async fn search_history(&self) -> Result<Vec<HistoryEntry>>;
}

#[async_trait]
impl<C: Collaborator + ?Sized> Collaborator for Arc<C> {
  async fn weather(&self, city: &str) -> Result<WeatherReading> { (**self).weather(city).await }

  async fn news(&self, category: Category, country: Country) -> Result<Vec<NewsArticle>> {
    (**self).news(category, country).await
  }

  async fn search_history(&self) -> Result<Vec<HistoryEntry>> { (**self).search_history().await }
}

/// The response envelope, with `data` left undecoded until `success` is known.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
  /// Discriminant; required
  success: bool,
  /// Payload, only meaningful when `success` is true
  #[serde(default)]
  data:    Option<serde_json::Value>,
  /// Failure message, only meaningful when `success` is false
  #[serde(default)]
  error:   Option<String>,
}

/// Decodes a response body into the `data` of a successful envelope.
///
/// # Errors
///
/// - [`AlmanacError::Collaborator`] when `success` is false, carrying `error` if present
/// - [`AlmanacError::Json`] when the body is not JSON or lacks `success`
/// - [`AlmanacError::MalformedResponse`] when `success` is true but `data` is missing or does not
///   decode into `T`
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
  let envelope: RawEnvelope = serde_json::from_slice(body)?;

  if !envelope.success {
    return Err(AlmanacError::Collaborator(envelope.error));
  }

  let data = envelope
    .data
    .filter(|data| !data.is_null())
    .ok_or_else(|| AlmanacError::MalformedResponse("successful response without data".into()))?;

  serde_json::from_value(data).map_err(|e| AlmanacError::MalformedResponse(e.to_string()))
}
