mod calc;
mod products;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hortops_core::{ProductCategory, ProductRate};
use tracing_subscriber::EnvFilter;

use crate::calc::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "hortops")]
#[command(about = "Tank-mix and granular application calculators")]
struct Cli {
    /// Product catalog file (defaults to `HORTOPS_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute per-product quantities for a spray tank
    Mix {
        /// Tank size in gallons of carrier
        #[arg(long, allow_negative_numbers = true)]
        tank: Option<f64>,
        /// Catalog product id; repeat to add more
        #[arg(long = "product")]
        products: Vec<String>,
        /// Ad-hoc product as NAME=FLOZ_PER_GAL or NAME=LABEL TEXT, listed after catalog products
        #[arg(long = "rate", value_parser = calc::parse_adhoc_rate)]
        rates: Vec<ProductRate>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compute pounds of dry product for an area
    Granular {
        /// Area to treat in square feet
        #[arg(long, allow_negative_numbers = true)]
        area: Option<f64>,
        /// Catalog product id; its stored granular rate is used
        #[arg(long, conflicts_with_all = ["rate", "name"])]
        product: Option<String>,
        /// Pounds of product per 1,000 sq ft
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,
        /// Product label to show with an explicit rate
        #[arg(long)]
        name: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List catalog products with their rates and REI
    Products {
        /// Only show one category (e.g., fungicide)
        #[arg(long)]
        category: Option<ProductCategory>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = hortops_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = cli.catalog.unwrap_or(config.catalog_path);

    match cli.command {
        Some(Commands::Mix {
            tank,
            products,
            rates,
            format,
        }) => calc::run_mix(
            &config.mix_settings,
            &catalog_path,
            tank,
            &products,
            rates,
            format,
        ),
        Some(Commands::Granular {
            area,
            product,
            rate,
            name,
            format,
        }) => calc::run_granular(
            &catalog_path,
            area,
            product.as_deref(),
            rate,
            name.as_deref(),
            format,
        ),
        Some(Commands::Products { category }) => products::run_products(&catalog_path, category),
        None => {
            println!("hortops: run `hortops --help` for available commands");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
