use crate::domain::model::{CategoryFilter, Product};

/// Products in `category` whose name contains `search`, ignoring case.
///
/// An empty search matches every name. Input order is kept.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    search: &str,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p.category))
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// The first `count` products, shown as "Fresh Arrivals" on the home screen.
pub fn featured(products: &[Product], count: usize) -> &[Product] {
    &products[..count.min(products.len())]
}

pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}
