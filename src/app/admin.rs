//! Static figures behind the admin dashboard and the profile page.
//!
//! None of this is computed from real orders; it is display data for the
//! demo store, plus a few aggregates over it.

use crate::domain::model::{Order, OrderStatus, Rupees, User, UserRole};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Percentage change against the previous period.
    pub trend: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailySales {
    pub day: &'static str,
    pub sales: Rupees,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub stats: Vec<StatCard>,
    pub weekly_sales: Vec<DailySales>,
    pub recent_orders: Vec<Order>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyTotals {
    pub sales: Rupees,
    pub orders: u32,
    pub busiest_day: Option<&'static str>,
}

impl Dashboard {
    pub fn demo() -> Self {
        Self {
            stats: stat_cards(),
            weekly_sales: weekly_sales(),
            recent_orders: recent_orders(),
        }
    }

    pub fn weekly_totals(&self) -> WeeklyTotals {
        WeeklyTotals {
            sales: self.weekly_sales.iter().map(|d| d.sales).sum(),
            orders: self.weekly_sales.iter().map(|d| d.orders).sum(),
            busiest_day: self
                .weekly_sales
                .iter()
                .max_by_key(|d| d.orders)
                .map(|d| d.day),
        }
    }
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard { title: "Total Revenue", value: "₹124,500", trend: 12 },
        StatCard { title: "Active Orders", value: "45", trend: 8 },
        StatCard { title: "New Customers", value: "128", trend: 24 },
        StatCard { title: "Growth Rate", value: "18.2%", trend: 4 },
    ]
}

pub fn weekly_sales() -> Vec<DailySales> {
    [
        ("Mon", 4000, 24),
        ("Tue", 3000, 18),
        ("Wed", 2000, 12),
        ("Thu", 2780, 20),
        ("Fri", 1890, 15),
        ("Sat", 6390, 45),
        ("Sun", 5490, 38),
    ]
    .into_iter()
    .map(|(day, sales, orders)| DailySales {
        day,
        sales: Rupees(sales),
        orders,
    })
    .collect()
}

fn october_2023(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or(NaiveDate::MIN)
}

/// Five processing orders `#ORD-001`..`#ORD-005`.
pub fn recent_orders() -> Vec<Order> {
    (1..=5u32)
        .map(|i| Order {
            id: format!("#ORD-00{}", i),
            customer: "John Doe".to_string(),
            status: OrderStatus::Processing,
            total: Rupees(u64::from(i) * 450 + 100),
            date: october_2023(10 + i),
        })
        .collect()
}

pub fn demo_customer() -> User {
    User {
        id: "u-1".to_string(),
        name: "Customer".to_string(),
        email: "customer@villageorganics.in".to_string(),
        role: UserRole::Customer,
    }
}

/// Order history on the profile page.
pub fn profile_orders() -> Vec<Order> {
    vec![Order {
        id: "#ORD-9921".to_string(),
        customer: demo_customer().name,
        status: OrderStatus::Delivered,
        total: Rupees(850),
        date: october_2023(12),
    }]
}
