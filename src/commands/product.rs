//! Product lookup commands: details, offers and reviews.

use super::{require_non_empty, CommandOutput, RequestOptions};
use crate::config::Settings;
use crate::rapidapi::{ProductSearch, ProductSearchClient};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Which product resource to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductView {
    Details,
    Offers,
    Reviews,
}

impl std::fmt::Display for ProductView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductView::Details => write!(f, "details"),
            ProductView::Offers => write!(f, "offers"),
            ProductView::Reviews => write!(f, "reviews"),
        }
    }
}

/// Executes a product lookup by ID.
pub struct ProductCommand {
    settings: Settings,
}

impl ProductCommand {
    /// Creates a new product command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Fetches a product resource and returns formatted output.
    pub async fn execute(
        &self,
        view: ProductView,
        product_id: &str,
        options: &RequestOptions,
    ) -> Result<CommandOutput> {
        let client =
            ProductSearchClient::new(&self.settings).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, view, product_id, options).await
    }

    /// Fetches a product resource with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ProductSearch,
        view: ProductView,
        product_id: &str,
        options: &RequestOptions,
    ) -> Result<CommandOutput> {
        let product_id = require_non_empty("Product ID", product_id)?;
        info!("Fetching product {}: {}", view, product_id);

        let params = options.to_params();
        let response = match view {
            ProductView::Details => {
                if !params.is_empty() {
                    warn!("Product details take no parameters, ignoring: {}", params.to_query_string());
                }
                client.get_product_details(product_id).await
            }
            ProductView::Offers => client.get_product_offers(product_id, &params).await,
            ProductView::Reviews => client.get_product_reviews(product_id, &params).await,
        };

        Ok(CommandOutput::render(self.settings.format, &response))
    }
}
