use serde::{Deserialize, Serialize};

/// Total revenue for the selected period.
///
/// Returned by every `total` endpoint regardless of period kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalSalesResponse {
    pub total_sales: f64,
}

/// Per-product sales bar chart rendered by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesByProductsResponse {
    /// Base64-encoded PNG
    pub sales_by_products_chart: String,
}

/// Quantity distribution pie chart rendered by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityPieResponse {
    /// Base64-encoded PNG
    pub quantity_sales_pie_chart: String,
}
