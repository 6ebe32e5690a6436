use contracts::sales::annual::{AnnualComparisonResponse, AnnualMonthlyComparisonResponse};
use contracts::sales::common::{QuantityPieResponse, SalesByProductsResponse, TotalSalesResponse};

use crate::shared::api_utils::api_url;
use crate::shared::http::{get_json, FetchError};

pub fn total_sales_path(selected_year: &str) -> String {
    format!("/sales/annual/total/?selected_year={selected_year}")
}

pub fn by_products_path(selected_year: &str) -> String {
    format!("/sales/annual/by-products/?selected_year={selected_year}")
}

pub fn quantity_pie_path(selected_year: &str) -> String {
    format!("/sales/annual/quantity-pie/?selected_year={selected_year}")
}

pub fn comparison_path(selected_year: &str) -> String {
    format!("/sales/annual/comparison/?selected_year={selected_year}")
}

pub fn monthly_comparison_path(selected_year: &str) -> String {
    format!("/sales/annual/monthly-comparison/?selected_year={selected_year}")
}

pub async fn get_total_sales(selected_year: &str) -> Result<TotalSalesResponse, FetchError> {
    get_json(&api_url(&total_sales_path(selected_year))).await
}

pub async fn get_sales_by_products(
    selected_year: &str,
) -> Result<SalesByProductsResponse, FetchError> {
    get_json(&api_url(&by_products_path(selected_year))).await
}

pub async fn get_quantity_pie(selected_year: &str) -> Result<QuantityPieResponse, FetchError> {
    get_json(&api_url(&quantity_pie_path(selected_year))).await
}

pub async fn get_comparison(selected_year: &str) -> Result<AnnualComparisonResponse, FetchError> {
    get_json(&api_url(&comparison_path(selected_year))).await
}

pub async fn get_monthly_comparison(
    selected_year: &str,
) -> Result<AnnualMonthlyComparisonResponse, FetchError> {
    get_json(&api_url(&monthly_comparison_path(selected_year))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_fixed_annual_endpoint_set() {
        let token = "2011";
        assert_eq!(
            [
                total_sales_path(token),
                by_products_path(token),
                quantity_pie_path(token),
                comparison_path(token),
                monthly_comparison_path(token),
            ],
            [
                "/sales/annual/total/?selected_year=2011",
                "/sales/annual/by-products/?selected_year=2011",
                "/sales/annual/quantity-pie/?selected_year=2011",
                "/sales/annual/comparison/?selected_year=2011",
                "/sales/annual/monthly-comparison/?selected_year=2011",
            ]
        );
    }
}
