use contracts::sales::common::{QuantityPieResponse, SalesByProductsResponse, TotalSalesResponse};
use contracts::sales::monthly::{SalesComparisonResponse, WeeklySalesResponse};

use crate::shared::api_utils::api_url;
use crate::shared::http::{get_json, FetchError};

pub fn total_sales_path(selected_month: &str) -> String {
    format!("/sales/total/?selected_month={selected_month}")
}

pub fn by_products_path(selected_month: &str) -> String {
    format!("/sales/by-products/?selected_month={selected_month}")
}

pub fn quantity_pie_path(selected_month: &str) -> String {
    format!("/sales/quantity-pie/?selected_month={selected_month}")
}

pub fn weekly_sales_path(selected_month: &str) -> String {
    format!("/sales/weekly/?selected_month={selected_month}")
}

pub fn comparison_path(selected_month: &str) -> String {
    format!("/sales/comparison/?selected_month={selected_month}")
}

pub async fn get_total_sales(selected_month: &str) -> Result<TotalSalesResponse, FetchError> {
    get_json(&api_url(&total_sales_path(selected_month))).await
}

pub async fn get_sales_by_products(
    selected_month: &str,
) -> Result<SalesByProductsResponse, FetchError> {
    get_json(&api_url(&by_products_path(selected_month))).await
}

pub async fn get_quantity_pie(selected_month: &str) -> Result<QuantityPieResponse, FetchError> {
    get_json(&api_url(&quantity_pie_path(selected_month))).await
}

pub async fn get_weekly_sales(selected_month: &str) -> Result<WeeklySalesResponse, FetchError> {
    get_json(&api_url(&weekly_sales_path(selected_month))).await
}

pub async fn get_comparison(selected_month: &str) -> Result<SalesComparisonResponse, FetchError> {
    get_json(&api_url(&comparison_path(selected_month))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_fixed_monthly_endpoint_set() {
        let token = "2024-07";
        assert_eq!(
            [
                total_sales_path(token),
                by_products_path(token),
                quantity_pie_path(token),
                weekly_sales_path(token),
                comparison_path(token),
            ],
            [
                "/sales/total/?selected_month=2024-07",
                "/sales/by-products/?selected_month=2024-07",
                "/sales/quantity-pie/?selected_month=2024-07",
                "/sales/weekly/?selected_month=2024-07",
                "/sales/comparison/?selected_month=2024-07",
            ]
        );
    }

    #[test]
    fn tokens_are_forwarded_verbatim() {
        // No validation happens client-side; the backend rejects bad tokens.
        assert_eq!(
            total_sales_path("not-a-month"),
            "/sales/total/?selected_month=not-a-month"
        );
    }
}
