pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::{catalog::InMemoryCatalog, chat::GeminiChat};
pub use crate::config::StoreConfig;
pub use crate::core::{session::Session, storefront::Storefront};
pub use crate::utils::error::{Result, StoreError};
