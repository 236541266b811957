use crate::utils::error::StoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

/// A price or total in whole rupees.
///
/// Integer arithmetic keeps cart totals exact. Sums and products saturate at
/// `u64::MAX` rather than overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(pub u64);

impl Rupees {
    pub const ZERO: Self = Self(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Add for Rupees {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Rupees {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<u32> for Rupees {
    type Output = Self;
    fn mul(self, quantity: u32) -> Self::Output {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Vegetables,
    Fruits,
    Dairy,
    Spices,
    Oils,
    Grains,
}

impl Category {
    /// Display order used by the category chips.
    pub const ALL: [Category; 6] = [
        Category::Vegetables,
        Category::Fruits,
        Category::Dairy,
        Category::Spices,
        Category::Oils,
        Category::Grains,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Dairy => "Dairy",
            Category::Spices => "Spices",
            Category::Oils => "Oils",
            Category::Grains => "Grains",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StoreError::UnknownCategory {
                name: wanted.to_string(),
            })
    }
}

/// Category selection for the catalog. `All` disables category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// A purchasable product. Read-only reference data for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Rupees,
    pub unit: String,
    pub category: Category,
    pub image: String,
    pub is_organic: bool,
    /// Display only.
    pub rating: f32,
    /// Display only; never decremented or enforced.
    pub stock: u32,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    #[serde(rename = "isSubscription")]
    pub subscription: bool,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            subscription: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn line_total(&self) -> Rupees {
        self.product.price * self.quantity
    }
}

/// Ordered cart contents, first-added product first.
///
/// Lines are unique by product id and never hold a zero quantity. The only
/// way to change a cart is through the functions in [`crate::core::cart`],
/// each of which returns a new value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Cart {
    pub(crate) lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.line(product_id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines, saturating at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn subscriptions(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|line| line.subscription)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    #[default]
    Home,
    Catalog,
    ProductDetail,
    Cart,
    Profile,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(label)
    }
}

/// A past order shown on the profile and admin screens. Fixture data only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub status: OrderStatus,
    pub total: Rupees,
    pub date: NaiveDate,
}
