//! Module for the "render" command.

use super::*;

/// Arguments for [`Commands::Render`].
#[derive(Args, Clone, Debug)]
pub struct RenderArgs {
  /// Where to write the page; the configured output path when omitted
  #[arg(long, short)]
  pub out: Option<PathBuf>,
}

/// Function for the [`Commands::Render`] in the CLI.
///
/// Runs the startup sequence, waits for the history refreshes it triggers, and writes the page.
/// Panels that failed are rendered with their error banners.
pub async fn render<I: UserInteraction>(
  interaction: &I,
  dashboard: &Dashboard,
  config: &Config,
  args: RenderArgs,
) -> Result<()> {
  let path = args.out.unwrap_or_else(|| config.output_path.clone());

  let outcome = dashboard.start(config).await;
  dashboard.settle().await;
  debug!("Startup finished: {:?}", outcome);

  write_page(dashboard, &path).await?;
  interaction.reply(ResponseContent::Success(&format!("Wrote dashboard to {}", path.display())))
}

/// Renders the current view state to `path`, creating parent directories as needed.
pub(crate) async fn write_page(dashboard: &Dashboard, path: &std::path::Path) -> Result<()> {
  let html = almanac::render::page(&dashboard.snapshot().await, Utc::now());
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    tokio::fs::create_dir_all(parent).await?;
  }
  tokio::fs::write(path, html).await?;
  Ok(())
}
