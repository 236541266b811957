use crate::app::render::OutputFormat;
use crate::core::session::Intent;
use crate::domain::model::CategoryFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "village-organics")]
#[command(about = "Village Organics storefront: catalog, cart and Verdie the organic assistant")]
pub struct CliConfig {
    /// Path to the TOML store configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON product list to use instead of the configured catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List products, optionally narrowed by category and name
    Catalog {
        /// One of the six categories, or "All"
        #[arg(long, default_value = "All")]
        category: CategoryFilter,

        /// Case-insensitive substring of the product name
        #[arg(long, default_value = "")]
        search: String,

        /// Only show the first few products, as on the home screen
        #[arg(long)]
        featured: bool,
    },

    /// Replay cart actions and print the resulting cart and order summary
    Cart {
        /// Actions such as add:1, remove:2, toggle:1
        intents: Vec<Intent>,
    },

    /// Ask Verdie a question
    Chat {
        prompt: String,

        /// Extra context, e.g. the product being viewed
        #[arg(long)]
        context: Option<String>,
    },

    /// Show the customer profile; subscriptions come from the replayed cart
    Profile {
        intents: Vec<Intent>,
    },

    /// Show the admin dashboard figures
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    #[test]
    fn test_parse_cart_command() {
        let cli = CliConfig::parse_from(["village-organics", "cart", "add:1", "toggle:1", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::Cart { intents } => {
                assert_eq!(
                    intents,
                    vec![
                        Intent::Add("1".to_string()),
                        Intent::ToggleSubscription("1".to_string())
                    ]
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalog_defaults() {
        let cli = CliConfig::parse_from(["village-organics", "catalog", "--category", "dairy"]);
        match cli.command {
            Command::Catalog { category, search, featured } => {
                assert_eq!(category, CategoryFilter::Only(Category::Dairy));
                assert_eq!(search, "");
                assert!(!featured);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_intent_is_rejected() {
        assert!(CliConfig::try_parse_from(["village-organics", "cart", "buy:1"]).is_err());
        assert!(CliConfig::try_parse_from(["village-organics", "catalog", "--category", "Bakery"]).is_err());
    }
}
