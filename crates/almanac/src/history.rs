//! The search history log.
//!
//! History is best-effort: the log is replaced wholesale on every successful refresh and simply
//! keeps its previous contents when a refresh fails. It never carries an error state.

use super::*;

/// Recent searches as last returned by the backend, most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
  /// Entries in the order the backend returned them
  entries:      Vec<HistoryEntry>,
  /// When the entries were last replaced
  refreshed_at: Option<DateTime<Utc>>,
}

impl HistoryLog {
  /// Text shown when the log is empty.
  pub const EMPTY_MESSAGE: &'static str = "No search history yet.";

  /// Creates an empty log that has never been refreshed.
  pub fn new() -> Self { Self::default() }

  /// Replaces every entry with `entries`, keeping their order.
  pub fn replace(&mut self, entries: Vec<HistoryEntry>) {
    debug!("Replacing search history with {} entries", entries.len());
    self.entries = entries;
    self.refreshed_at = Some(Utc::now());
  }

  /// The entries, most recent first.
  pub fn entries(&self) -> &[HistoryEntry] { &self.entries }

  /// Whether there is nothing to show.
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// Number of entries.
  pub fn len(&self) -> usize { self.entries.len() }

  /// Whether at least one refresh has succeeded.
  pub fn is_loaded(&self) -> bool { self.refreshed_at.is_some() }

  /// When the last successful refresh happened.
  pub fn refreshed_at(&self) -> Option<DateTime<Utc>> { self.refreshed_at }
}
