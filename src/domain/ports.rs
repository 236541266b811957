use crate::domain::model::Product;
use async_trait::async_trait;

/// Source of the product list for a session.
pub trait CatalogProvider: Send + Sync {
    /// All products, in display order.
    fn products(&self) -> &[Product];

    fn product(&self, id: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}

/// Text assistant behind the chat widget.
///
/// Implementations never fail: any problem reaching the backend is turned
/// into a fixed apology reply.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn reply(&self, prompt: &str, context: Option<&str>) -> String;
}
