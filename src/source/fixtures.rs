//! Sample business data served by `MockSource`.

use chrono::NaiveDate;

use crate::core::types::{DashboardPayload, Kpis, ProductPoint, RegionPoint, SalesPoint, User};

/// (month, revenue, orders, customers)
const MONTHLY_SALES: [(&str, u64, u64, u64); 12] = [
    ("Jan", 45000, 120, 89),
    ("Feb", 52000, 145, 102),
    ("Mar", 48000, 132, 95),
    ("Apr", 61000, 168, 118),
    ("May", 55000, 155, 108),
    ("Jun", 67000, 189, 134),
    ("Jul", 72000, 201, 145),
    ("Aug", 69000, 195, 139),
    ("Sep", 78000, 218, 156),
    ("Oct", 82000, 235, 167),
    ("Nov", 89000, 251, 178),
    ("Dec", 95000, 267, 189),
];

/// (name, sales, revenue, growth %)
const PRODUCTS: [(&str, u64, u64, f64); 5] = [
    ("Premium Package", 1250, 125000, 12.5),
    ("Standard Package", 2100, 84000, 8.3),
    ("Basic Package", 3200, 64000, -2.1),
    ("Enterprise", 450, 180000, 25.7),
    ("Starter", 1800, 36000, 5.2),
];

/// (region, sales, share %)
const REGIONS: [(&str, u64, f64); 5] = [
    ("North America", 45, 45.0),
    ("Europe", 28, 28.0),
    ("Asia Pacific", 18, 18.0),
    ("Latin America", 6, 6.0),
    ("Others", 3, 3.0),
];

pub fn sales_data() -> Vec<SalesPoint> {
    MONTHLY_SALES
        .iter()
        .map(|&(month, revenue, orders, customers)| SalesPoint {
            month: month.to_string(),
            revenue,
            orders,
            customers,
        })
        .collect()
}

pub fn product_data() -> Vec<ProductPoint> {
    PRODUCTS
        .iter()
        .map(|&(name, sales, revenue, growth)| ProductPoint {
            name: name.to_string(),
            sales,
            revenue,
            growth,
        })
        .collect()
}

pub fn region_data() -> Vec<RegionPoint> {
    REGIONS
        .iter()
        .map(|&(region, sales, percentage)| RegionPoint {
            region: region.to_string(),
            sales,
            percentage,
        })
        .collect()
}

pub fn kpis() -> Kpis {
    Kpis {
        total_revenue: 773000,
        total_orders: 2275,
        total_customers: 1520,
        conversion_rate: 3.2,
        revenue_growth: 15.8,
        order_growth: 12.4,
    }
}

pub fn dashboard_payload() -> DashboardPayload {
    DashboardPayload {
        sales_data: sales_data(),
        product_data: product_data(),
        region_data: region_data(),
        kpis: kpis(),
    }
}

pub fn user() -> User {
    User {
        id: "1".to_string(),
        name: "Sarah Johnson".to_string(),
        email: "sarah.johnson@company.com".to_string(),
        avatar: "/placeholder.svg?height=40&width=40".to_string(),
        role: "Sales Manager".to_string(),
        department: "Sales & Marketing".to_string(),
        join_date: NaiveDate::from_ymd_opt(2022, 3, 15).unwrap_or_default(),
    }
}
