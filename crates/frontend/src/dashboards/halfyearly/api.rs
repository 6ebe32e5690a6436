use contracts::sales::common::{QuantityPieResponse, SalesByProductsResponse, TotalSalesResponse};
use contracts::sales::halfyearly::{
    HalfYearlyComparisonResponse, HalfYearlyMonthlyComparisonResponse,
};

use crate::shared::api_utils::api_url;
use crate::shared::http::{get_json, FetchError};

pub fn total_sales_path(selected_halfyear: &str) -> String {
    format!("/sales/halfyearly/total/?selected_halfyear={selected_halfyear}")
}

pub fn by_products_path(selected_halfyear: &str) -> String {
    format!("/sales/halfyearly/by-products/?selected_halfyear={selected_halfyear}")
}

pub fn quantity_pie_path(selected_halfyear: &str) -> String {
    format!("/sales/halfyearly/quantity-pie/?selected_halfyear={selected_halfyear}")
}

pub fn comparison_path(selected_halfyear: &str) -> String {
    format!("/sales/halfyearly/comparison/?selected_halfyear={selected_halfyear}")
}

pub fn monthly_comparison_path(selected_halfyear: &str) -> String {
    format!("/sales/halfyearly/monthly-comparison/?selected_halfyear={selected_halfyear}")
}

pub async fn get_total_sales(selected_halfyear: &str) -> Result<TotalSalesResponse, FetchError> {
    get_json(&api_url(&total_sales_path(selected_halfyear))).await
}

pub async fn get_sales_by_products(
    selected_halfyear: &str,
) -> Result<SalesByProductsResponse, FetchError> {
    get_json(&api_url(&by_products_path(selected_halfyear))).await
}

pub async fn get_quantity_pie(selected_halfyear: &str) -> Result<QuantityPieResponse, FetchError> {
    get_json(&api_url(&quantity_pie_path(selected_halfyear))).await
}

pub async fn get_comparison(
    selected_halfyear: &str,
) -> Result<HalfYearlyComparisonResponse, FetchError> {
    get_json(&api_url(&comparison_path(selected_halfyear))).await
}

pub async fn get_monthly_comparison(
    selected_halfyear: &str,
) -> Result<HalfYearlyMonthlyComparisonResponse, FetchError> {
    get_json(&api_url(&monthly_comparison_path(selected_halfyear))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_fixed_halfyearly_endpoint_set() {
        let token = "2011-H2";
        assert_eq!(
            [
                total_sales_path(token),
                by_products_path(token),
                quantity_pie_path(token),
                comparison_path(token),
                monthly_comparison_path(token),
            ],
            [
                "/sales/halfyearly/total/?selected_halfyear=2011-H2",
                "/sales/halfyearly/by-products/?selected_halfyear=2011-H2",
                "/sales/halfyearly/quantity-pie/?selected_halfyear=2011-H2",
                "/sales/halfyearly/comparison/?selected_halfyear=2011-H2",
                "/sales/halfyearly/monthly-comparison/?selected_halfyear=2011-H2",
            ]
        );
    }
}
