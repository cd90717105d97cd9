//! Deals command implementation.

use super::{CommandOutput, RequestOptions};
use crate::config::Settings;
use crate::rapidapi::{ProductSearch, ProductSearchClient};
use anyhow::{Context, Result};
use tracing::info;

/// Lists current deals and promotions.
pub struct DealsCommand {
    settings: Settings,
}

impl DealsCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, options: &RequestOptions) -> Result<CommandOutput> {
        let client =
            ProductSearchClient::new(&self.settings).context("Failed to create HTTP client")?;

        Ok(self.execute_with_client(&client, options).await)
    }

    /// Fetches deals with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ProductSearch,
        options: &RequestOptions,
    ) -> CommandOutput {
        info!("Fetching deals");

        let response = client.get_deals(&options.to_params()).await;
        CommandOutput::render(self.settings.format, &response)
    }
}
