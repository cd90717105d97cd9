//! product-search - Command-line client for the RapidAPI Real-Time Product Search API.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use product_search::commands::{
    CommandOutput, DealsCommand, ProductCommand, ProductView, RequestOptions, SearchCommand,
    StoreReviewsCommand,
};
use product_search::config::{OutputFormat, Settings};
use product_search::rapidapi::params::{parse_key_value, ParamValue};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "product-search",
    version,
    about = "Query the RapidAPI Real-Time Product Search API",
    long_about = "Search products, offers, reviews and deals through the RapidAPI Real-Time Product Search API. Responses are printed as JSON."
)]
struct Cli {
    /// RapidAPI key
    #[arg(long, global = true, env = "RAPIDAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "RAPIDAPI_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "RAPIDAPI_PROXY")]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Paging and free-form parameters shared by list endpoints.
#[derive(Args)]
struct ListArgs {
    /// Maximum number of results
    #[arg(short, long)]
    limit: Option<u32>,

    /// Results page
    #[arg(long)]
    page: Option<u32>,

    /// Extra query parameter, forwarded as-is (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    params: Vec<(String, ParamValue)>,
}

impl ListArgs {
    fn into_options(self) -> RequestOptions {
        RequestOptions { limit: self.limit, page: self.page, extra: self.params, ..Default::default() }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products across stores
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Country code (e.g., us, de)
        #[arg(long)]
        country: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Show product details
    #[command(alias = "p")]
    Product {
        /// Product ID
        product_id: String,
    },

    /// List offers for a product
    Offers {
        /// Product ID
        product_id: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List reviews for a product
    Reviews {
        /// Product ID
        product_id: String,

        /// Sort order
        #[arg(long)]
        sort: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List current deals
    Deals {
        /// Deal category
        #[arg(long)]
        category: Option<String>,

        /// Store filter
        #[arg(long)]
        store: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List reviews for a store
    StoreReviews {
        /// Store ID
        store_id: String,

        /// Sort order
        #[arg(long)]
        sort: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Defaults < config file < environment < flags
    let mut settings = Settings::load(cli.config.as_deref())?.with_env();

    if let Some(key) = cli.api_key {
        settings.rapid_api_key = key;
    }
    if let Some(url) = cli.base_url {
        settings.base_url = url;
    }
    if let Some(timeout) = cli.timeout {
        settings.timeout_secs = timeout;
    }
    if let Some(proxy) = cli.proxy {
        settings.proxy = Some(proxy);
    }
    if let Some(format) = cli.format {
        settings.format = format;
    }

    let output = match cli.command {
        Commands::Search { query, country, list } => {
            let options = RequestOptions { country, ..list.into_options() };
            SearchCommand::new(settings).execute(&query, &options).await?
        }

        Commands::Product { product_id } => {
            ProductCommand::new(settings)
                .execute(ProductView::Details, &product_id, &RequestOptions::default())
                .await?
        }

        Commands::Offers { product_id, list } => {
            ProductCommand::new(settings)
                .execute(ProductView::Offers, &product_id, &list.into_options())
                .await?
        }

        Commands::Reviews { product_id, sort, list } => {
            let options = RequestOptions { sort, ..list.into_options() };
            ProductCommand::new(settings).execute(ProductView::Reviews, &product_id, &options).await?
        }

        Commands::Deals { category, store, list } => {
            let options = RequestOptions { category, store, ..list.into_options() };
            DealsCommand::new(settings).execute(&options).await?
        }

        Commands::StoreReviews { store_id, sort, list } => {
            let options = RequestOptions { sort, ..list.into_options() };
            StoreReviewsCommand::new(settings).execute(&store_id, &options).await?
        }
    };

    finish(output)
}

/// Prints the response and exits non-zero when it is an error payload.
fn finish(output: CommandOutput) -> Result<()> {
    println!("{}", output.text);

    if !output.success {
        std::process::exit(1);
    }

    Ok(())
}
