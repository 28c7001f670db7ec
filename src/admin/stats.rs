//! Dashboard aggregates over the loaded catalog.

use chrono::{DateTime, Datelike, Utc};

use crate::catalog::Product;

/// Aggregate statistics shown on the admin overview. Computed over the
/// full loaded dataset; the repository is always fetched whole, so there
/// is no page window to aggregate instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub product_count: usize,
    pub total_value_minor: i64,
    pub average_price_minor: i64,
    pub added_this_month: usize,
}

impl CatalogStats {
    pub fn compute(products: &[Product], now: DateTime<Utc>) -> Self {
        let product_count = products.len();
        let total_value_minor: i64 = products.iter().map(|p| p.price_minor).sum();
        let average_price_minor = if product_count > 0 {
            (total_value_minor as f64 / product_count as f64).round() as i64
        } else {
            0
        };

        let month_start = now.date_naive().with_day(1).unwrap_or(now.date_naive());
        let added_this_month = products
            .iter()
            .filter(|p| p.created_at.is_some_and(|c| c.date_naive() >= month_start))
            .count();

        Self {
            product_count,
            total_value_minor,
            average_price_minor,
            added_this_month,
        }
    }

    /// One-line summary for logs and the CLI.
    pub fn summary(&self) -> String {
        format!(
            "{} products, total value {} minor units, average price {}, {} added this month",
            self.product_count, self.total_value_minor, self.average_price_minor, self.added_this_month
        )
    }
}
