//! Module for the interactive dashboard session.

use super::*;

/// Menu entries, in display order.
const ACTIONS: [&str; 5] =
  ["Search weather", "Search news", "Refresh history", "Render page", "Quit"];

/// Index of "Quit", the default so unattended sessions end right after startup.
const QUIT: usize = 4;

/// Function for the [`Commands::Dashboard`] in the CLI.
///
/// Loads every panel like the browser dashboard does on page load, then loops over a menu until
/// the user quits. Failed queries are shown and the session carries on.
pub async fn interactive<I: UserInteraction>(
  interaction: &I,
  dashboard: &Dashboard,
  config: &Config,
) -> Result<()> {
  interaction.reply(ResponseContent::Info(&format!("Connecting to {}", config.base_url)))?;
  dashboard.start(config).await;
  dashboard.settle().await;

  show_weather(interaction, dashboard).await?;
  show_news(interaction, dashboard).await?;
  show_history(interaction, dashboard).await?;

  let mut category = config.default_category;
  let mut country = config.default_country;

  loop {
    match interaction.select("What next?", &ACTIONS, QUIT)? {
      0 => {
        let city = interaction.prompt("City", &config.default_city)?;
        if dashboard.search_weather(&city).await == QueryOutcome::Skipped {
          interaction.reply(ResponseContent::Info("City name is blank, nothing to search for."))?;
          continue;
        }
        show_weather(interaction, dashboard).await?;
      },
      1 => {
        category = pick(interaction, "Category", &Category::ALL, category, |c| c.as_str())?;
        country = pick(interaction, "Country", &Country::ALL, country, |c| c.name())?;
        dashboard.search_news(category, country).await;
        show_news(interaction, dashboard).await?;
      },
      2 => {
        dashboard.settle().await;
        if !dashboard.refresh_history().await {
          interaction.reply(ResponseContent::Info("Search history is unavailable right now."))?;
        }
        show_history(interaction, dashboard).await?;
      },
      3 => {
        dashboard.settle().await;
        let path = &config.output_path;
        render::write_page(dashboard, path).await?;
        interaction
          .reply(ResponseContent::Success(&format!("Wrote dashboard to {}", path.display())))?;
      },
      _ => return Ok(()),
    }
  }
}

/// Asks for one of `options`, preselecting `current`.
fn pick<I: UserInteraction, T: Copy + PartialEq>(
  interaction: &I,
  message: &str,
  options: &[T],
  current: T,
  label: impl Fn(&T) -> &'static str,
) -> Result<T> {
  let labels: Vec<&str> = options.iter().map(&label).collect();
  let default = options.iter().position(|o| *o == current).unwrap_or(0);
  let index = interaction.select(message, &labels, default)?;
  Ok(options.get(index).copied().unwrap_or(current))
}
