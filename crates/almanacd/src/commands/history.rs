//! Module for the "history" command.

use super::*;

/// Function for the [`Commands::History`] in the CLI.
pub async fn history<I: UserInteraction>(interaction: &I, dashboard: &Dashboard) -> Result<()> {
  if !dashboard.refresh_history().await {
    return interaction.reply(ResponseContent::Info(
      "Search history is unavailable right now. Run with -v for details.",
    ));
  }
  show_history(interaction, dashboard).await
}
