//! Module for writing an almanac configuration file.

use almanac::config::DEFAULT_BASE_URL;

use super::*;

/// Arguments for [`Commands::Init`].
#[derive(Args, Clone, Debug)]
pub struct InitArgs {
  /// City queried on startup
  #[arg(long)]
  pub city: Option<String>,

  /// News category queried on startup
  #[arg(long)]
  pub category: Option<Category>,

  /// News country queried on startup
  #[arg(long)]
  pub country: Option<Country>,

  /// Where rendered pages are written
  #[arg(long)]
  pub output_path: Option<PathBuf>,
}

/// Function for the [`Commands::Init`] in the CLI.
///
/// Values given on the command line are used as is; anything else is asked for, offering the
/// defaults.
pub fn init<I: UserInteraction>(
  interaction: &I,
  path: &std::path::Path,
  base_url: Option<&str>,
  args: InitArgs,
) -> Result<()> {
  let InitArgs { city, category, country, output_path } = args;

  if path.exists()
    && !interaction.confirm(&format!(
      "A configuration already exists at {}, do you want to overwrite it?",
      path.display()
    ))?
  {
    interaction.reply(ResponseContent::Info(
      "Keeping the existing configuration. Pass --config to write somewhere else.",
    ))?;
    return Ok(());
  }

  let defaults = Config::default();
  let base_url = match base_url {
    Some(base_url) => base_url.to_string(),
    None => interaction.prompt("Backend URL", DEFAULT_BASE_URL)?,
  };
  let city = match city {
    Some(city) => city,
    None => interaction.prompt("Default city", &defaults.default_city)?,
  };

  let config = defaults
    .with_base_url(base_url.trim())
    .with_default_city(city.trim())
    .with_default_category(category.unwrap_or_default())
    .with_default_country(country.unwrap_or_default());
  let config = match output_path {
    Some(output_path) => config.with_output_path(output_path),
    None => config,
  };

  // refuse to write a file every other command would then fail to use
  config.collaborator()?;
  config.save(path)?;

  interaction.reply(ResponseContent::Success(&format!(
    "Created almanac configuration at {}\nBackend: {}\nDefault city: {}\nDefault news: {} / {}\nOutput \
     path: {}",
    path.display(),
    config.base_url,
    config.default_city,
    config.default_category,
    config.default_country,
    config.output_path.display(),
  )))
}
