//! Module for the "weather" command.

use super::*;

/// Arguments for [`Commands::Weather`].
#[derive(Args, Clone, Debug)]
pub struct WeatherArgs {
  /// City to look up; the configured default city when omitted
  pub city: Option<String>,
}

/// Function for the [`Commands::Weather`] in the CLI.
pub async fn weather<I: UserInteraction>(
  interaction: &I,
  dashboard: &Dashboard,
  config: &Config,
  args: WeatherArgs,
) -> Result<()> {
  let city = args.city.unwrap_or_else(|| config.default_city.clone());

  if dashboard.search_weather(&city).await == QueryOutcome::Skipped {
    return interaction.reply(ResponseContent::Info("City name is blank, nothing to search for."));
  }
  show_weather(interaction, dashboard).await
}
