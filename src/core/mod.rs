pub mod cart;
pub mod catalog;
pub mod chat;
pub mod checkout;
pub mod session;
pub mod storefront;

pub use crate::domain::model::{Cart, CartLine, Category, CategoryFilter, Product, Rupees};
pub use crate::domain::ports::{CatalogProvider, ChatService};
pub use crate::utils::error::Result;
