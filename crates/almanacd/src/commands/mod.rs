//! The CLI subcommands.

use super::*;

pub mod dashboard;
pub mod history;
pub mod init;
pub mod news;
pub mod render;
pub mod weather;

pub use dashboard::interactive;
pub use history::history;
pub use init::{init, InitArgs};
pub use news::{news, NewsArgs};
pub use render::{render, RenderArgs};
pub use weather::{weather, WeatherArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
  /// Start an interactive dashboard session (default when no command specified)
  Dashboard,

  /// Write a configuration file
  Init(InitArgs),

  /// Show current weather for a city
  Weather(WeatherArgs),

  /// Show top headlines for a category and country
  News(NewsArgs),

  /// Refresh and show the search history
  History,

  /// Load every panel and write the dashboard as an HTML page
  Render(RenderArgs),
}

/// Reports whatever the weather panel shows after a query.
pub(crate) async fn show_weather<I: UserInteraction>(
  interaction: &I,
  dashboard: &Dashboard,
) -> Result<()> {
  match dashboard.weather().await.state() {
    PanelState::Loaded(reading) => interaction.reply(ResponseContent::Weather(reading)),
    PanelState::Error(message) => interaction.reply(ResponseContent::Banner(message)),
    PanelState::Idle | PanelState::Loading => Ok(()),
  }
}

/// Reports whatever the news panel shows after a query.
pub(crate) async fn show_news<I: UserInteraction>(
  interaction: &I,
  dashboard: &Dashboard,
) -> Result<()> {
  match dashboard.news().await.state() {
    PanelState::Loaded(articles) => interaction.reply(ResponseContent::Articles(articles)),
    PanelState::Error(message) => interaction.reply(ResponseContent::Banner(message)),
    PanelState::Idle | PanelState::Loading => Ok(()),
  }
}

/// Reports the history log as of now.
pub(crate) async fn show_history<I: UserInteraction>(
  interaction: &I,
  dashboard: &Dashboard,
) -> Result<()> {
  interaction.reply(ResponseContent::History(&dashboard.history().await, Utc::now()))
}
