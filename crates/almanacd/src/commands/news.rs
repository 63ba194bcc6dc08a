//! Module for the "news" command.

use super::*;

/// Arguments for [`Commands::News`].
#[derive(Args, Clone, Debug)]
pub struct NewsArgs {
  /// News category (business, entertainment, general, health, science, sports, technology)
  #[arg(long)]
  pub category: Option<Category>,

  /// Country code (us, gb, ca, au, in, de, fr)
  #[arg(long)]
  pub country: Option<Country>,
}

/// Function for the [`Commands::News`] in the CLI.
pub async fn news<I: UserInteraction>(
  interaction: &I,
  dashboard: &Dashboard,
  config: &Config,
  args: NewsArgs,
) -> Result<()> {
  let NewsArgs { category, country } = args;
  let category = category.unwrap_or(config.default_category);
  let country = country.unwrap_or(config.default_country);

  debug!("Searching {} news in {}", category, country.name());
  dashboard.search_news(category, country).await;
  show_news(interaction, dashboard).await
}
