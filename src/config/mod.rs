#[cfg(feature = "cli")]
pub mod cli;
pub mod store_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use store_config::{ChatConfig, StoreConfig};
