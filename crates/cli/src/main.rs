//! MarineHarvest CLI - Catalog browsing and cart management.
//!
//! # Usage
//!
//! ```bash
//! # List collections
//! mh-cli collections
//!
//! # Browse a collection
//! mh-cli products marine --category Shellfish --sort price-asc
//! mh-cli products farming --search pump
//!
//! # Work with the persisted cart
//! mh-cli cart add marine salmon-premium
//! mh-cli cart show
//! mh-cli cart checkout
//! ```
//!
//! # Commands
//!
//! - `collections` - List the four collections
//! - `products` - Filtered, sorted product listing
//! - `categories` - Category filter options for a collection
//! - `cart` - Show or change the cart stored under `--data-dir`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mh-cli")]
#[command(author, version, about = "MarineHarvest CLI tools")]
struct Cli {
    /// Directory holding the persisted cart
    #[arg(long, global = true, env = "STOREFRONT_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List collections
    Collections,
    /// List products in a collection
    Products {
        /// Collection handle (marine, farming, sustainable, equipment)
        handle: String,

        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name/description search
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order (featured, price-asc, price-desc, name-asc, name-desc)
        #[arg(long)]
        sort: Option<String>,
    },
    /// List a collection's categories
    Categories {
        /// Collection handle
        handle: String,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add one unit of a product
    Add {
        /// Collection handle
        handle: String,
        /// Product ID
        product_id: String,
    },
    /// Remove a line
    Remove { product_id: String },
    /// Increase a line's quantity by one
    Increase { product_id: String },
    /// Decrease a line's quantity by one
    Decrease { product_id: String },
    /// Empty the cart
    Clear,
    /// Place the order
    Checkout,
}

fn main() {
    dotenvy::dotenv().ok();
    // Command output is logged at info; RUST_LOG overrides
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Collections => commands::catalog::collections(),
        Commands::Products {
            handle,
            category,
            search,
            sort,
        } => {
            commands::catalog::products(&handle, category, search, sort.as_deref())?;
        }
        Commands::Categories { handle } => {
            commands::catalog::categories(&handle)?;
        }
        Commands::Cart { action } => {
            let mut cart = commands::cart::open(&data_dir)?;
            match action {
                CartAction::Show => commands::cart::show(&cart),
                CartAction::Add { handle, product_id } => {
                    commands::cart::add(&mut cart, &handle, &product_id)?;
                }
                CartAction::Remove { product_id } => commands::cart::remove(&mut cart, &product_id),
                CartAction::Increase { product_id } => {
                    commands::cart::increase(&mut cart, &product_id);
                }
                CartAction::Decrease { product_id } => {
                    commands::cart::decrease(&mut cart, &product_id);
                }
                CartAction::Clear => commands::cart::clear(&mut cart),
                CartAction::Checkout => commands::cart::checkout(&mut cart)?,
            }
        }
    }
    Ok(())
}
