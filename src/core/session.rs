use crate::core::cart;
use crate::core::catalog::filter_products;
use crate::domain::model::{Cart, CategoryFilter, Product, View};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{Result, StoreError};
use std::fmt;
use std::str::FromStr;

/// A user action against the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Remove(String),
    ToggleSubscription(String),
}

impl FromStr for Intent {
    type Err = StoreError;

    /// Parses `add:<id>`, `remove:<id>` or `toggle:<id>`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StoreError::InvalidIntent {
            input: s.to_string(),
        };
        let (verb, id) = s.split_once(':').ok_or_else(invalid)?;
        let id = id.trim();
        if id.is_empty() {
            return Err(invalid());
        }

        match verb.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Intent::Add(id.to_string())),
            "remove" | "rm" => Ok(Intent::Remove(id.to_string())),
            "toggle" | "subscribe" => Ok(Intent::ToggleSubscription(id.to_string())),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Add(id) => write!(f, "add:{}", id),
            Intent::Remove(id) => write!(f, "remove:{}", id),
            Intent::ToggleSubscription(id) => write!(f, "toggle:{}", id),
        }
    }
}

/// State of one shopper's visit. Owned by the caller; nothing here is global
/// or persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cart: Cart,
    view: View,
    category: CategoryFilter,
    search: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Lines in the cart, as shown on the header badge.
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    /// Applies `intent` to the cart.
    ///
    /// Adding needs the product record, so an id the catalog does not know is
    /// rejected and the cart is left alone. Removing or toggling an id that is
    /// not in the cart is a no-op.
    pub fn dispatch<C: CatalogProvider + ?Sized>(&mut self, intent: &Intent, catalog: &C) -> Result<()> {
        tracing::debug!("Dispatching intent {}", intent);
        self.cart = match intent {
            Intent::Add(id) => {
                let product = catalog
                    .product(id)
                    .ok_or_else(|| StoreError::UnknownProduct { id: id.clone() })?;
                cart::add_item(&self.cart, product)
            }
            Intent::Remove(id) => cart::remove_item(&self.cart, id),
            Intent::ToggleSubscription(id) => cart::toggle_subscription(&self.cart, id),
        };
        Ok(())
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// Picking a category always lands on the catalog screen.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.view = View::Catalog;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn clear_filters(&mut self) {
        self.category = CategoryFilter::All;
        self.search.clear();
    }

    pub fn visible_products<'a, C: CatalogProvider + ?Sized>(&self, catalog: &'a C) -> Vec<&'a Product> {
        filter_products(catalog.products(), &self.category, &self.search)
    }
}
