//! Cart state transitions.
//!
//! Every function borrows the current cart and returns a fresh one, so a
//! caller holding an earlier value never sees it change.

use crate::domain::model::{Cart, CartLine, Product, Rupees};

/// Adds one unit of `product`.
///
/// An existing line for the same product id has its quantity bumped; anything
/// else is appended with quantity 1 and no subscription. The product is taken
/// as given.
pub fn add_item(cart: &Cart, product: &Product) -> Cart {
    let mut lines = cart.lines.clone();
    match lines.iter_mut().find(|line| line.id() == product.id) {
        Some(line) => line.quantity = line.quantity.saturating_add(1),
        None => lines.push(CartLine::new(product.clone())),
    }
    Cart { lines }
}

/// Drops the line for `product_id`. Absent ids leave the cart as it was.
pub fn remove_item(cart: &Cart, product_id: &str) -> Cart {
    Cart {
        lines: cart
            .lines
            .iter()
            .filter(|line| line.id() != product_id)
            .cloned()
            .collect(),
    }
}

/// Flips the subscription flag on the line for `product_id`, if any.
pub fn toggle_subscription(cart: &Cart, product_id: &str) -> Cart {
    Cart {
        lines: cart
            .lines
            .iter()
            .map(|line| {
                if line.id() == product_id {
                    CartLine {
                        subscription: !line.subscription,
                        ..line.clone()
                    }
                } else {
                    line.clone()
                }
            })
            .collect(),
    }
}

/// Sum of price times quantity over all lines. Subscriptions do not change it.
pub fn compute_total(cart: &Cart) -> Rupees {
    cart.lines.iter().map(CartLine::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price: Rupees(price),
            unit: "kg".to_string(),
            category: Category::Vegetables,
            image: String::new(),
            is_organic: true,
            rating: 4.5,
            stock: 10,
            benefits: vec![],
        }
    }

    fn ids(cart: &Cart) -> Vec<(&str, u32)> {
        cart.lines().iter().map(|l| (l.id(), l.quantity)).collect()
    }

    #[test]
    fn test_add_new_product_appends_single_unit() {
        let cart = add_item(&Cart::new(), &product("1", 180));

        assert_eq!(cart.len(), 1);
        let line = cart.line("1").unwrap();
        assert_eq!(line.quantity, 1);
        assert!(!line.subscription);
    }

    #[test]
    fn test_add_existing_product_increments_quantity() {
        let p = product("1", 180);
        let once = add_item(&Cart::new(), &p);
        let twice = add_item(&once, &p);

        assert_eq!(twice.len(), 1);
        assert_eq!(twice.line("1").unwrap().quantity, 2);
        // earlier snapshot is untouched
        assert_eq!(once.line("1").unwrap().quantity, 1);
    }

    #[test]
    fn test_add_keeps_insertion_order_and_subscription() {
        let cart = add_item(&Cart::new(), &product("1", 180));
        let cart = add_item(&cart, &product("2", 450));
        let cart = toggle_subscription(&cart, "1");
        let cart = add_item(&cart, &product("1", 180));

        assert_eq!(ids(&cart), vec![("1", 2), ("2", 1)]);
        assert!(cart.line("1").unwrap().subscription);
    }

    #[test]
    fn test_add_accepts_product_as_given() {
        let mut odd = product("", 0);
        odd.name = String::new();
        let cart = add_item(&Cart::new(), &odd);
        assert_eq!(cart.len(), 1);
        assert_eq!(compute_total(&cart), Rupees::ZERO);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let cart = add_item(&Cart::new(), &product("1", 180));
        let cart = add_item(&cart, &product("2", 450));

        let first = remove_item(&cart, "1");
        let second = remove_item(&first, "1");

        assert_eq!(ids(&first), vec![("2", 1)]);
        assert_eq!(first, second);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_absent_id_is_a_no_op() {
        let cart = add_item(&Cart::new(), &product("1", 180));

        assert_eq!(remove_item(&cart, "99"), cart);
        assert_eq!(toggle_subscription(&cart, "99"), cart);
        assert_eq!(remove_item(&Cart::new(), "1"), Cart::new());
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let cart = add_item(&Cart::new(), &product("1", 180));
        let cart = add_item(&cart, &product("2", 450));

        let toggled = toggle_subscription(&cart, "2");
        assert!(toggled.line("2").unwrap().subscription);
        assert!(!toggled.line("1").unwrap().subscription);

        assert_eq!(toggle_subscription(&toggled, "2"), cart);
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        assert_eq!(compute_total(&Cart::new()), Rupees::ZERO);
    }

    #[test]
    fn test_scenario_total() {
        let cart = add_item(&Cart::new(), &product("1", 180));
        let cart = add_item(&cart, &product("2", 450));
        let cart = add_item(&cart, &product("1", 180));

        assert_eq!(ids(&cart), vec![("1", 2), ("2", 1)]);
        assert_eq!(compute_total(&cart), Rupees(810));
    }

    #[test]
    fn test_total_ignores_subscription() {
        let cart = add_item(&Cart::new(), &product("1", 300));
        let subscribed = toggle_subscription(&cart, "1");
        assert_eq!(compute_total(&subscribed), compute_total(&cart));
    }

    #[test]
    fn test_huge_prices_saturate_total() {
        let pricey = product("1", u64::MAX / 2 + 1);
        let cart = add_item(&Cart::new(), &pricey);
        let cart = add_item(&cart, &pricey);
        assert_eq!(compute_total(&cart), Rupees(u64::MAX));

        let cart = add_item(&Cart::new(), &product("1", u64::MAX));
        let cart = add_item(&cart, &product("2", 1));
        assert_eq!(compute_total(&cart), Rupees(u64::MAX));
    }

    #[test]
    fn test_item_count_saturates() {
        let mut cart = add_item(&Cart::new(), &product("1", 10));
        cart = add_item(&cart, &product("2", 10));
        cart.lines[0].quantity = u32::MAX;
        assert_eq!(cart.item_count(), u32::MAX);
    }
}
