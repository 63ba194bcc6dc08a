//! The weather, news, and history query flows.
//!
//! A [`Dashboard`] owns the view state (two [`Panel`]s and a [`HistoryLog`]) and a
//! [`Collaborator`] to fill it from. Each query flow is a single logical sequence:
//!
//! 1. Move the panel to loading.
//! 2. Issue exactly one request and await it.
//! 3. Move the panel to loaded or to an error, classifying the failure:
//!    - the collaborator's own message (or the panel's fallback) when it answered `success: false`
//!    - [`NETWORK_ERROR_MESSAGE`] for anything else, with the detail only logged
//! 4. On success, refresh the history log in a detached task.
//!
//! Nothing is coalesced or cancelled: two overlapping queries on the same panel both run, and
//! whichever response lands last is what the panel shows. History refreshes never touch the
//! panels and their failures are logged and dropped.
//!
//! # Examples
//!
//! ```no_run
//! # use almanac::{dashboard::{Dashboard, QueryOutcome}, collaborator::HttpCollaborator};
//! # async fn example() -> almanac::error::Result<()> {
//! let dashboard = Dashboard::new(HttpCollaborator::new("http://127.0.0.1:5000")?);
//!
//! assert_eq!(dashboard.search_weather("   ").await, QueryOutcome::Skipped);
//!
//! match dashboard.search_weather("Paris").await {
//!   QueryOutcome::Loaded => println!("{:?}", dashboard.weather().await.data()),
//!   QueryOutcome::Failed(message) => println!("⚠️ {message}"),
//!   QueryOutcome::Skipped => unreachable!(),
//! }
//! dashboard.settle().await;
//! # Ok(())
//! # }
//! ```

use futures::future::join_all;
use tokio::{
  sync::{Mutex, RwLock},
  task::JoinHandle,
};

use super::*;
use crate::{config::Config, history::HistoryLog};

/// Banner text for failures the collaborator did not report itself.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// How a query flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
  /// The input was blank; no request was made and the panel is untouched
  Skipped,
  /// The panel now shows fresh data
  Loaded,
  /// The panel now shows this error message
  Failed(String),
}

impl QueryOutcome {
  /// Whether the panel ended up loaded.
  pub fn is_loaded(&self) -> bool { matches!(self, Self::Loaded) }
}

/// Results of the startup sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupOutcome {
  /// The default-city weather query
  pub weather: QueryOutcome,
  /// The default news query
  pub news:    QueryOutcome,
  /// Whether the initial history fetch succeeded
  pub history: bool,
}

/// A point-in-time copy of the whole view state, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
  /// The weather panel
  pub weather: Panel<WeatherReading>,
  /// The news panel
  pub news:    Panel<Vec<NewsArticle>>,
  /// The search history
  pub history: HistoryLog,
}

/// View state plus the flows that mutate it.
///
/// Cloning is cheap and every clone shares the same state, so independent flows can be driven
/// from separate tasks.
#[derive(Clone)]
pub struct Dashboard {
  /// Where data comes from
  collaborator: Arc<dyn Collaborator>,
  /// Weather panel; written only by the weather flow
  weather:      Arc<RwLock<Panel<WeatherReading>>>,
  /// News panel; written only by the news flow
  news:         Arc<RwLock<Panel<Vec<NewsArticle>>>>,
  /// Search history; written only by history refreshes
  history:      Arc<RwLock<HistoryLog>>,
  /// Detached history refreshes not yet collected by [`Dashboard::settle`]
  background:   Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl std::fmt::Debug for Dashboard {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Dashboard").finish_non_exhaustive()
  }
}

impl Dashboard {
  /// Creates a dashboard with idle panels and an empty history.
  pub fn new(collaborator: impl Collaborator + 'static) -> Self {
    Self::from_arc(Arc::new(collaborator))
  }

  /// Like [`Dashboard::new`] for an already shared collaborator.
  pub fn from_arc(collaborator: Arc<dyn Collaborator>) -> Self {
    Self {
      collaborator,
      weather: Arc::new(RwLock::new(Panel::new(PanelKind::Weather))),
      news: Arc::new(RwLock::new(Panel::new(PanelKind::News))),
      history: Arc::new(RwLock::new(HistoryLog::new())),
      background: Arc::new(Mutex::new(Vec::new())),
    }
  }

  /// Runs the startup sequence: the default weather query, the default news query, and a
  /// history fetch, all concurrently.
  pub async fn start(&self, config: &Config) -> StartupOutcome {
    debug!(
      "Starting dashboard with {} and {}/{}",
      config.default_city, config.default_category, config.default_country
    );
    let (weather, news, history) = tokio::join!(
      self.search_weather(&config.default_city),
      self.search_news(config.default_category, config.default_country),
      self.refresh_history(),
    );
    StartupOutcome { weather, news, history }
  }

  /// Queries current weather for `city`.
  ///
  /// Surrounding whitespace is trimmed; a blank city is [`QueryOutcome::Skipped`] without any
  /// request or state change.
  pub async fn search_weather(&self, city: &str) -> QueryOutcome {
    let city = city.trim();
    if city.is_empty() {
      debug!("Ignoring blank city");
      return QueryOutcome::Skipped;
    }

    self.weather.write().await.set_loading();
    let result = self.collaborator.weather(city).await;
    let outcome = Self::finish(&mut *self.weather.write().await, result);

    if outcome.is_loaded() {
      debug!("Loaded weather for {}", city);
      self.spawn_history_refresh().await;
    }
    outcome
  }

  /// Queries top headlines for `category` in `country`.
  pub async fn search_news(&self, category: Category, country: Country) -> QueryOutcome {
    self.news.write().await.set_loading();
    let result = self.collaborator.news(category, country).await;
    let outcome = Self::finish(&mut *self.news.write().await, result);

    if outcome.is_loaded() {
      debug!("Loaded news for {}/{}", category, country);
      self.spawn_history_refresh().await;
    }
    outcome
  }

  /// Like [`Dashboard::search_news`], parsing the selector values first.
  ///
  /// # Errors
  ///
  /// Returns [`AlmanacError::UnsupportedValue`] for a category or country outside the supported
  /// set. In that case no request is made and the news panel is untouched.
  pub async fn search_news_raw(&self, category: &str, country: &str) -> Result<QueryOutcome> {
    let category: Category = category.parse()?;
    let country: Country = country.parse()?;
    Ok(self.search_news(category, country).await)
  }

  /// Replaces the history log with the collaborator's current list.
  ///
  /// Returns whether the refresh succeeded. Failures leave the previous entries in place and are
  /// only logged.
  pub async fn refresh_history(&self) -> bool {
    match self.collaborator.search_history().await {
      Ok(entries) => {
        self.history.write().await.replace(entries);
        true
      },
      Err(AlmanacError::Collaborator(message)) => {
        warn!("History refresh rejected: {}", message.as_deref().unwrap_or("no message"));
        false
      },
      Err(e) => {
        warn!("History refresh failed: {}", e);
        false
      },
    }
  }

  /// Waits for every history refresh spawned so far, including ones spawned while waiting.
  pub async fn settle(&self) {
    loop {
      let handles = std::mem::take(&mut *self.background.lock().await);
      if handles.is_empty() {
        return;
      }
      trace!("Waiting on {} history refreshes", handles.len());
      for result in join_all(handles).await {
        if let Err(e) = result {
          error!("History refresh task did not complete: {}", e);
        }
      }
    }
  }

  /// A copy of the weather panel.
  pub async fn weather(&self) -> Panel<WeatherReading> { self.weather.read().await.clone() }

  /// A copy of the news panel.
  pub async fn news(&self) -> Panel<Vec<NewsArticle>> { self.news.read().await.clone() }

  /// A copy of the history log.
  pub async fn history(&self) -> HistoryLog { self.history.read().await.clone() }

  /// A copy of the whole view state.
  pub async fn snapshot(&self) -> Snapshot {
    Snapshot {
      weather: self.weather().await,
      news:    self.news().await,
      history: self.history().await,
    }
  }

  /// Applies a collaborator result to `panel`.
  fn finish<T>(panel: &mut Panel<T>, result: Result<T>) -> QueryOutcome {
    match result {
      Ok(data) => {
        panel.set_loaded(data);
        return QueryOutcome::Loaded;
      },
      Err(AlmanacError::Collaborator(message)) => {
        warn!("{} request rejected: {}", panel.kind(), message.as_deref().unwrap_or("no message"));
        panel.set_error(message);
      },
      Err(e) => {
        error!("{} request failed: {}", panel.kind(), e);
        panel.set_error(Some(NETWORK_ERROR_MESSAGE.to_string()));
      },
    }
    QueryOutcome::Failed(
      panel.error_message().map_or_else(|| panel.kind().fallback_message(), str::to_string),
    )
  }

  /// Starts a detached history refresh tracked for [`Dashboard::settle`].
  async fn spawn_history_refresh(&self) {
    let dashboard = self.clone();
    let handle = tokio::spawn(async move {
      dashboard.refresh_history().await;
    });
    let mut background = self.background.lock().await;
    background.retain(|handle| !handle.is_finished());
    background.push(handle);
  }
}
