//! # Domain Records
//!
//! The business data shown on the dashboard. Field names serialize in
//! camelCase so the JSON shape matches what a remote data source would send.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of sales activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    pub month: String,
    pub revenue: u64,
    pub orders: u64,
    pub customers: u64,
}

/// Sales figures for a single product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPoint {
    pub name: String,
    pub sales: u64,
    pub revenue: u64,
    /// Month-over-month growth in percent. May be negative.
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPoint {
    pub region: String,
    pub sales: u64,
    pub percentage: f64,
}

/// Headline metrics shown on the KPI cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_revenue: u64,
    pub total_orders: u64,
    pub total_customers: u64,
    pub conversion_rate: f64,
    pub revenue_growth: f64,
    pub order_growth: f64,
}

/// Everything a dashboard fetch resolves with. Applied to the store as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub sales_data: Vec<SalesPoint>,
    pub product_data: Vec<ProductPoint>,
    pub region_data: Vec<RegionPoint>,
    pub kpis: Kpis,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
    pub department: String,
    pub join_date: NaiveDate,
}

impl User {
    /// Up to two uppercase initials, used where an avatar image can't be shown.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
