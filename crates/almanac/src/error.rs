//! Error types for the almanac library.
//!
//! Every failure a query flow can observe falls into one of two tiers:
//!
//! - The collaborator answered and reported a failure itself ([`AlmanacError::Collaborator`]). The
//!   message it supplied (if any) is what the user gets to see.
//! - Anything else: the request never completed, the body was not JSON, the envelope was missing
//!   its `success` discriminant, or the data did not have the expected shape. These are
//!   [transport failures](AlmanacError::is_transport) and are only ever logged.
//!
//! # Examples
//!
//! ```
//! use almanac::error::AlmanacError;
//!
//! let reported = AlmanacError::Collaborator(Some("City not found".into()));
//! assert!(!reported.is_transport());
//! assert_eq!(reported.to_string(), "City not found");
//!
//! let malformed = AlmanacError::MalformedResponse("missing field `success`".into());
//! assert!(malformed.is_transport());
//! ```

use thiserror::Error;

/// Error type alias used for the [`almanac`](crate) crate.
pub type Result<T> = core::result::Result<T, AlmanacError>;

/// Errors that can occur when talking to the backend or handling configuration.
#[derive(Error, Debug)]
pub enum AlmanacError {
  /// The collaborator answered with `success: false`.
  ///
  /// Holds the collaborator's own message when it sent a non-empty one.
  #[error("{}", .0.as_deref().unwrap_or("collaborator reported a failure"))]
  Collaborator(Option<String>),

  /// A network request failed.
  ///
  /// This can occur when:
  /// - The backend is unreachable
  /// - The connection drops mid-response
  /// - TLS/SSL errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A response body could not be decoded as JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A response decoded as JSON but did not have the expected shape.
  #[error("Malformed collaborator response: {0}")]
  MalformedResponse(String),

  /// A category, country, or search type string outside the supported set.
  #[error("Unsupported {kind} value '{value}'")]
  UnsupportedValue {
    /// What kind of value was being parsed.
    kind:  &'static str,
    /// The rejected input.
    value: String,
  },

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// The configuration is unusable, e.g. the base URL does not parse.
  #[error("{0}")]
  Config(String),
}

impl AlmanacError {
  /// Builds an [`AlmanacError::UnsupportedValue`].
  pub fn unsupported(kind: &'static str, value: impl Into<String>) -> Self {
    Self::UnsupportedValue { kind, value: value.into() }
  }

  /// Whether this error belongs to the transport/parse tier rather than being a failure the
  /// collaborator reported.
  pub fn is_transport(&self) -> bool { !matches!(self, Self::Collaborator(_)) }

  /// The collaborator-supplied message, for [`AlmanacError::Collaborator`] errors that carry one.
  pub fn collaborator_message(&self) -> Option<&str> {
    match self {
      Self::Collaborator(message) => message.as_deref(),
      _ => None,
    }
  }
}
