//! Beauty Box CLI - local store inspection and catalog queries.
//!
//! # Usage
//!
//! ```bash
//! # List local accounts (passwords are never printed)
//! bb-cli accounts list
//!
//! # Show the active favorites, or one account's
//! bb-cli favorites show
//! bb-cli favorites show --email a@x.com
//!
//! # Read or change the theme preference
//! bb-cli theme show
//! bb-cli theme set dark
//!
//! # Query the catalog
//! bb-cli catalog featured
//! bb-cli catalog search --brand nyx --product-type lipstick
//! bb-cli catalog show 1048
//! ```
//!
//! The store file comes from `STOREFRONT_DATA_PATH` unless `--data` is given.
//! It is safe to point this at the file a running storefront uses: every
//! access re-reads the file, so changes show up on the server's next request.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use beauty_box_core::{ProductId, Theme};
use beauty_box_storefront::catalog::CatalogClient;
use beauty_box_storefront::config::StorefrontConfig;
use beauty_box_storefront::store::FileStore;

mod commands;

#[derive(Parser)]
#[command(name = "bb-cli")]
#[command(author, version, about = "Beauty Box CLI tools")]
struct Cli {
    /// Local store file (overrides `STOREFRONT_DATA_PATH`)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect local accounts
    Accounts {
        #[command(subcommand)]
        action: AccountsAction,
    },
    /// Inspect favorites lists
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Read or change the theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Query the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum AccountsAction {
    /// List account emails with their favorites count
    List,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Show a favorites list
    Show {
        /// Account email; defaults to the active list (session or anonymous)
        #[arg(short, long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored theme
    Show,
    /// Store a theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the featured products
    Featured,
    /// Search by brand and product type
    Search {
        /// Brand value, e.g. `maybelline` or `wet n wild`
        #[arg(short, long)]
        brand: Option<String>,

        /// Product type value, e.g. `lip_liner`
        #[arg(short = 't', long)]
        product_type: Option<String>,
    },
    /// Show one product in detail
    Show {
        /// Product ID
        id: ProductId,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let data_path = cli.data.unwrap_or_else(|| config.data_path.clone());
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Accounts { action } => match action {
            AccountsAction::List => {
                let store = FileStore::open(data_path)?;
                commands::accounts::list(&store, &mut out)?;
            }
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::Show { email } => {
                let store = FileStore::open(data_path)?;
                commands::favorites::show(Arc::new(store), email.as_deref(), &mut out)?;
            }
        },
        Commands::Theme { action } => {
            let store = FileStore::open(data_path)?;
            match action {
                ThemeAction::Show => commands::theme::show(&store, &mut out)?,
                ThemeAction::Set { theme } => commands::theme::set(&store, theme.into(), &mut out)?,
            }
        }
        Commands::Catalog { action } => {
            let client = CatalogClient::new(&config.catalog)?;
            match action {
                CatalogAction::Featured => {
                    commands::catalog::featured(&client, &config.catalog.featured_brand, &mut out)
                        .await?;
                }
                CatalogAction::Search {
                    brand,
                    product_type,
                } => {
                    commands::catalog::search(
                        &client,
                        brand.as_deref(),
                        product_type.as_deref(),
                        &mut out,
                    )
                    .await?;
                }
                CatalogAction::Show { id } => {
                    commands::catalog::show(&client, id, &mut out).await?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_search() {
        let cli = Cli::try_parse_from([
            "bb-cli",
            "catalog",
            "search",
            "--brand",
            "wet n wild",
            "-t",
            "lip_liner",
        ])
        .unwrap();

        match cli.command {
            Commands::Catalog {
                action: CatalogAction::Search {
                    brand,
                    product_type,
                },
            } => {
                assert_eq!(brand.as_deref(), Some("wet n wild"));
                assert_eq!(product_type.as_deref(), Some("lip_liner"));
            }
            _ => panic!("expected catalog search"),
        }
    }

    #[test]
    fn test_parse_global_data_flag() {
        let cli = Cli::try_parse_from(["bb-cli", "theme", "show", "--data", "/tmp/store.json"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/store.json")));
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(Cli::try_parse_from(["bb-cli", "theme", "set", "sepia"]).is_err());
        assert!(Cli::try_parse_from(["bb-cli", "catalog", "show", "abc"]).is_err());
    }

    #[test]
    fn test_parse_product_id() {
        let cli = Cli::try_parse_from(["bb-cli", "catalog", "show", "1048"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Catalog {
                action: CatalogAction::Show { id }
            } if id == ProductId::new(1048)
        ));
    }
}
