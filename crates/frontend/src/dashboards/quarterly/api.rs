use contracts::sales::common::{QuantityPieResponse, SalesByProductsResponse, TotalSalesResponse};
use contracts::sales::quarterly::{QuarterlyComparisonResponse, QuarterlyMonthlyComparisonResponse};

use crate::shared::api_utils::api_url;
use crate::shared::http::{get_json, FetchError};

pub fn total_sales_path(selected_quarter: &str) -> String {
    format!("/sales/quarterly/total/?selected_quarter={selected_quarter}")
}

pub fn by_products_path(selected_quarter: &str) -> String {
    format!("/sales/quarterly/by-products/?selected_quarter={selected_quarter}")
}

pub fn quantity_pie_path(selected_quarter: &str) -> String {
    format!("/sales/quarterly/quantity-pie/?selected_quarter={selected_quarter}")
}

pub fn comparison_path(selected_quarter: &str) -> String {
    format!("/sales/quarterly/comparison/?selected_quarter={selected_quarter}")
}

pub fn monthly_comparison_path(selected_quarter: &str) -> String {
    format!("/sales/quarterly/monthly-comparison/?selected_quarter={selected_quarter}")
}

pub async fn get_total_sales(selected_quarter: &str) -> Result<TotalSalesResponse, FetchError> {
    get_json(&api_url(&total_sales_path(selected_quarter))).await
}

pub async fn get_sales_by_products(
    selected_quarter: &str,
) -> Result<SalesByProductsResponse, FetchError> {
    get_json(&api_url(&by_products_path(selected_quarter))).await
}

pub async fn get_quantity_pie(selected_quarter: &str) -> Result<QuantityPieResponse, FetchError> {
    get_json(&api_url(&quantity_pie_path(selected_quarter))).await
}

pub async fn get_comparison(
    selected_quarter: &str,
) -> Result<QuarterlyComparisonResponse, FetchError> {
    get_json(&api_url(&comparison_path(selected_quarter))).await
}

pub async fn get_monthly_comparison(
    selected_quarter: &str,
) -> Result<QuarterlyMonthlyComparisonResponse, FetchError> {
    get_json(&api_url(&monthly_comparison_path(selected_quarter))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_fixed_quarterly_endpoint_set() {
        let token = "2011-Q3";
        assert_eq!(
            [
                total_sales_path(token),
                by_products_path(token),
                quantity_pie_path(token),
                comparison_path(token),
                monthly_comparison_path(token),
            ],
            [
                "/sales/quarterly/total/?selected_quarter=2011-Q3",
                "/sales/quarterly/by-products/?selected_quarter=2011-Q3",
                "/sales/quarterly/quantity-pie/?selected_quarter=2011-Q3",
                "/sales/quarterly/comparison/?selected_quarter=2011-Q3",
                "/sales/quarterly/monthly-comparison/?selected_quarter=2011-Q3",
            ]
        );
    }
}
