use crate::core::catalog::{featured, filter_products};
use crate::core::checkout::OrderSummary;
use crate::core::session::{Intent, Session};
use crate::domain::model::{CategoryFilter, Product, Rupees};
use crate::domain::ports::{CatalogProvider, ChatService};
use crate::utils::error::Result;

/// Ties a catalog and a chat backend together for one store.
pub struct Storefront<C: CatalogProvider, S: ChatService> {
    catalog: C,
    chat: S,
    delivery_fee: Rupees,
}

impl<C: CatalogProvider, S: ChatService> Storefront<C, S> {
    pub fn new(catalog: C, chat: S, delivery_fee: Rupees) -> Self {
        Self {
            catalog,
            chat,
            delivery_fee,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn browse(&self, category: &CategoryFilter, search: &str) -> Vec<&Product> {
        let products = filter_products(self.catalog.products(), category, search);
        tracing::info!(
            "Catalog filter category={} search={:?} matched {} of {} products",
            category,
            search,
            products.len(),
            self.catalog.products().len()
        );
        products
    }

    pub fn fresh_arrivals(&self, count: usize) -> &[Product] {
        featured(self.catalog.products(), count)
    }

    /// Replays `intents` into a new session and summarises the resulting cart.
    ///
    /// Stops at the first intent that cannot be applied.
    pub fn run_session(&self, intents: &[Intent]) -> Result<(Session, OrderSummary)> {
        let mut session = Session::new();
        for intent in intents {
            session.dispatch(intent, &self.catalog)?;
        }

        let summary = OrderSummary::for_cart(session.cart(), self.delivery_fee);
        tracing::info!(
            "Cart has {} lines, subtotal {}, total {}",
            summary.line_count,
            summary.subtotal,
            summary.total
        );
        Ok((session, summary))
    }

    pub async fn ask(&self, prompt: &str, context: Option<&str>) -> String {
        tracing::debug!("Forwarding chat prompt ({} chars)", prompt.len());
        self.chat.reply(prompt, context).await
    }
}
