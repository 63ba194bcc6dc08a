//! Per-panel display state.
//!
//! Each data panel (weather, news) owns three visual regions: a loading indicator, an error
//! banner, and the data view. A [`Panel`] is the only writer of its state and exposes exactly
//! three transitions, each of which fully determines which single region is visible:
//!
//! | Transition | State | Visible region |
//! |---|---|---|
//! | (initial) | [`PanelState::Idle`] | [`Region::DataView`] (default content) |
//! | [`Panel::set_loading`] | [`PanelState::Loading`] | [`Region::LoadingIndicator`] |
//! | [`Panel::set_error`] | [`PanelState::Error`] | [`Region::ErrorBanner`] |
//! | [`Panel::set_loaded`] | [`PanelState::Loaded`] | [`Region::DataView`] |
//!
//! There is no timeout: a panel set to loading stays there until the next transition.
//!
//! # Examples
//!
//! ```
//! use almanac::panel::{Panel, PanelKind, Region};
//!
//! let mut panel: Panel<Vec<String>> = Panel::new(PanelKind::News);
//! panel.set_loading();
//! assert_eq!(panel.visible_region(), Region::LoadingIndicator);
//!
//! panel.set_error(None);
//! assert_eq!(panel.error_message(), Some("Failed to fetch news data"));
//! assert!(!panel.is_visible(Region::DataView));
//! ```

use super::*;

/// Identifies one of the two query panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
  /// The weather panel
  Weather,
  /// The news panel
  News,
}

impl PanelKind {
  /// Lowercase panel name, used in messages and element ids.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Weather => "weather",
      Self::News => "news",
    }
  }

  /// Message shown when a failure arrives without one of its own.
  pub fn fallback_message(&self) -> String { format!("Failed to fetch {} data", self.name()) }
}

impl Display for PanelKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

/// The three mutually exclusive regions of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
  /// Spinner shown while a request is outstanding
  LoadingIndicator,
  /// Banner carrying the failure message
  ErrorBanner,
  /// The rendered data (or default content before the first query)
  DataView,
}

/// What a panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
  /// No query has been made yet
  Idle,
  /// A request is outstanding
  Loading,
  /// The last query failed with this user-facing message
  Error(String),
  /// The last query succeeded with this data
  Loaded(T),
}

impl<T> Default for PanelState<T> {
  fn default() -> Self { Self::Idle }
}

/// A data panel and its display state.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<T> {
  /// Which panel this is
  kind:  PanelKind,
  /// Current state
  state: PanelState<T>,
}

impl<T> Panel<T> {
  /// Creates an idle panel.
  pub fn new(kind: PanelKind) -> Self { Self { kind, state: PanelState::Idle } }

  /// Which panel this is.
  pub fn kind(&self) -> PanelKind { self.kind }

  /// The current state.
  pub fn state(&self) -> &PanelState<T> { &self.state }

  /// Shows the loading indicator, hiding the error banner and the data view.
  ///
  /// Any previously loaded data is discarded.
  pub fn set_loading(&mut self) { self.state = PanelState::Loading; }

  /// Shows the error banner with `message`, or the panel's fallback message when `message` is
  /// `None` or blank.
  pub fn set_error(&mut self, message: Option<String>) {
    let message = message
      .filter(|message| !message.trim().is_empty())
      .unwrap_or_else(|| self.kind.fallback_message());
    self.state = PanelState::Error(message);
  }

  /// Shows the data view with `data`, fully replacing whatever was shown before.
  pub fn set_loaded(&mut self, data: T) { self.state = PanelState::Loaded(data); }

  /// The single region currently visible.
  pub fn visible_region(&self) -> Region {
    match self.state {
      PanelState::Loading => Region::LoadingIndicator,
      PanelState::Error(_) => Region::ErrorBanner,
      PanelState::Idle | PanelState::Loaded(_) => Region::DataView,
    }
  }

  /// Whether `region` is the visible one.
  pub fn is_visible(&self, region: Region) -> bool { self.visible_region() == region }

  /// Loaded data, if the last query succeeded.
  pub fn data(&self) -> Option<&T> {
    match &self.state {
      PanelState::Loaded(data) => Some(data),
      _ => None,
    }
  }

  /// The banner message, if the panel is showing an error.
  pub fn error_message(&self) -> Option<&str> {
    match &self.state {
      PanelState::Error(message) => Some(message),
      _ => None,
    }
  }

  /// Whether a request is outstanding.
  pub fn is_loading(&self) -> bool { matches!(self.state, PanelState::Loading) }
}
