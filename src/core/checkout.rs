use crate::core::cart::compute_total;
use crate::domain::model::{Cart, Rupees};
use serde::Serialize;

/// Label shown next to the subscription toggle. No discount is computed.
pub const SUBSCRIPTION_LABEL: &str = "Subscribe & Save 10%";

/// Figures for the order summary panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub line_count: usize,
    pub item_count: u32,
    pub subtotal: Rupees,
    pub delivery: Rupees,
    pub total: Rupees,
    /// Names of products marked for a recurring box.
    pub subscriptions: Vec<String>,
}

impl OrderSummary {
    /// The delivery fee only applies once something is in the cart.
    pub fn for_cart(cart: &Cart, delivery_fee: Rupees) -> Self {
        let subtotal = compute_total(cart);
        let delivery = if cart.is_empty() {
            Rupees::ZERO
        } else {
            delivery_fee
        };

        Self {
            line_count: cart.len(),
            item_count: cart.item_count(),
            subtotal,
            delivery,
            total: subtotal + delivery,
            subscriptions: cart
                .subscriptions()
                .map(|line| line.product.name.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryCatalog;
    use crate::core::cart::{add_item, toggle_subscription};
    use crate::domain::ports::CatalogProvider;

    #[test]
    fn test_summary_adds_delivery_fee() {
        let catalog = InMemoryCatalog::village_organics();
        let avocados = catalog.product("1").unwrap();
        let honey = catalog.product("2").unwrap();

        let cart = add_item(&Cart::new(), avocados);
        let cart = add_item(&cart, honey);
        let cart = add_item(&cart, avocados);
        let cart = toggle_subscription(&cart, "2");

        let summary = OrderSummary::for_cart(&cart, Rupees(40));
        assert_eq!(summary.subtotal, Rupees(810));
        assert_eq!(summary.delivery, Rupees(40));
        assert_eq!(summary.total, Rupees(850));
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subscriptions, vec!["Raw Forest Honey".to_string()]);
    }

    #[test]
    fn test_empty_cart_has_no_delivery_charge() {
        let summary = OrderSummary::for_cart(&Cart::new(), Rupees(40));
        assert_eq!(summary.total, Rupees::ZERO);
        assert!(summary.subscriptions.is_empty());
    }
}
