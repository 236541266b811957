use crate::app::admin::Dashboard;
use crate::core::checkout::{OrderSummary, SUBSCRIPTION_LABEL};
use crate::domain::model::{Cart, Order, Product, Rupees, User};
use crate::utils::error::{Result, StoreError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Serialize)]
struct ProductRow<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    price: u64,
    unit: &'a str,
    rating: f32,
    stock: u32,
}

#[derive(Serialize)]
struct CartRow<'a> {
    id: &'a str,
    name: &'a str,
    price: u64,
    quantity: u32,
    subscription: bool,
    line_total: u64,
}

#[derive(Serialize)]
struct CartView<'a> {
    lines: &'a Cart,
    summary: &'a OrderSummary,
}

#[derive(Serialize)]
struct OrderRow<'a> {
    id: &'a str,
    customer: &'a str,
    status: String,
    total: u64,
    date: String,
}

fn csv_to_string<R: Serialize>(rows: impl IntoIterator<Item = R>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render_products(products: &[&Product], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(products)?),
        OutputFormat::Csv => csv_to_string(products.iter().map(|p| ProductRow {
            id: &p.id,
            name: &p.name,
            category: p.category.as_str(),
            price: p.price.value(),
            unit: &p.unit,
            rating: p.rating,
            stock: p.stock,
        })),
        OutputFormat::Text => {
            if products.is_empty() {
                return Ok("No products found.\n".to_string());
            }
            let mut out = String::new();
            for p in products {
                out.push_str(&format!(
                    "[{}] {} ({}) {}  ★{:.1}\n",
                    p.id,
                    p.name,
                    p.category,
                    price_tag(p.price, &p.unit),
                    p.rating
                ));
            }
            Ok(out)
        }
    }
}

pub fn render_cart(cart: &Cart, summary: &OrderSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CartView {
            lines: cart,
            summary,
        })?),
        OutputFormat::Csv => csv_to_string(cart.lines().iter().map(|line| CartRow {
            id: line.id(),
            name: &line.product.name,
            price: line.product.price.value(),
            quantity: line.quantity,
            subscription: line.subscription,
            line_total: line.line_total().value(),
        })),
        OutputFormat::Text => {
            if cart.is_empty() {
                return Ok("Your cart is currently empty.\n".to_string());
            }
            let mut out = String::new();
            for line in cart.lines() {
                let marker = if line.subscription { "x" } else { " " };
                out.push_str(&format!(
                    "{} x{} @ {} = {}  [{}] {}\n",
                    line.product.name,
                    line.quantity,
                    line.product.price,
                    line.line_total(),
                    marker,
                    SUBSCRIPTION_LABEL
                ));
            }
            out.push_str(&format!("Subtotal: {}\n", summary.subtotal));
            out.push_str(&format!("Delivery: {}\n", summary.delivery));
            out.push_str(&format!("Total:    {}\n", summary.total));
            if !summary.subscriptions.is_empty() {
                out.push_str(&format!("Active subscriptions: {}\n", summary.subscriptions.join(", ")));
            }
            Ok(out)
        }
    }
}

pub fn render_dashboard(dashboard: &Dashboard, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dashboard)?),
        OutputFormat::Csv => csv_to_string(dashboard.recent_orders.iter().map(|o| OrderRow {
            id: &o.id,
            customer: &o.customer,
            status: o.status.to_string(),
            total: o.total.value(),
            date: o.date.format("%Y-%m-%d").to_string(),
        })),
        OutputFormat::Text => {
            let mut out = String::new();
            for card in &dashboard.stats {
                let sign = if card.trend > 0 { "+" } else { "" };
                out.push_str(&format!("{}: {} ({}{}%)\n", card.title, card.value, sign, card.trend));
            }
            let totals = dashboard.weekly_totals();
            out.push_str(&format!(
                "Weekly sales: {} across {} orders (busiest: {})\n",
                totals.sales,
                totals.orders,
                totals.busiest_day.unwrap_or("-")
            ));
            for order in &dashboard.recent_orders {
                out.push_str(&format!(
                    "{}  {}  {}  {}  {}\n",
                    order.id,
                    order.customer,
                    order.status,
                    order.total,
                    order.date.format("%b %-d, %Y")
                ));
            }
            Ok(out)
        }
    }
}

#[derive(Serialize)]
struct ProfileView<'a> {
    user: &'a User,
    orders: &'a [Order],
    subscriptions: &'a [String],
}

/// Profile page: greeting, order history and active subscriptions.
pub fn render_profile(
    user: &User,
    orders: &[Order],
    subscriptions: &[String],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ProfileView {
            user,
            orders,
            subscriptions,
        })?),
        OutputFormat::Csv => csv_to_string(orders.iter().map(|o| OrderRow {
            id: &o.id,
            customer: &o.customer,
            status: o.status.to_string(),
            total: o.total.value(),
            date: o.date.format("%Y-%m-%d").to_string(),
        })),
        OutputFormat::Text => {
            let mut out = format!("Welcome back, {}!\n", user.name);
            if subscriptions.is_empty() {
                out.push_str("No active subscriptions. Go to cart to subscribe to items!\n");
            } else {
                out.push_str(&format!("Active subscriptions: {}\n", subscriptions.join(", ")));
            }
            for order in orders {
                out.push_str(&format!(
                    "{}  {} on {}  {}\n",
                    order.id,
                    order.status,
                    order.date.format("%b %-d"),
                    order.total
                ));
            }
            Ok(out)
        }
    }
}

/// One-line price tag, e.g. `₹180 / kg`.
pub fn price_tag(price: Rupees, unit: &str) -> String {
    format!("{} / {}", price, unit)
}
