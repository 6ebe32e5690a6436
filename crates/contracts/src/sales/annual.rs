use crate::sales::breakdown::SubPeriodBreakdown;
use serde::{Deserialize, Serialize};

/// Year-over-year comparison: the sentence plus both totals keyed by
/// year label for the bar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualComparisonResponse {
    pub sales_comparison_text: String,
    pub comparison_chart_data: AnnualComparisonChart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualComparisonChart {
    /// Selected year first, previous year second.
    pub years: Vec<String>,
    /// Totals aligned with `years`.
    pub total_sales: Vec<f64>,
}

/// Month-by-month breakdown of the selected year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualMonthlyComparisonResponse {
    pub chart_data: SubPeriodBreakdown,
    /// Base64-encoded PNG of the same series, rendered by the backend.
    pub sales_chart_base64: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_comparison_with_year_pair() {
        let json = r#"{
            "sales_comparison_text": "Sales for 2011: $500000.00\nSales for 2010: $450000.00\nChange: Increase\nPercentage Change: 11.11%",
            "comparison_chart_data": {
                "years": ["2011", "2010"],
                "total_sales": [500000.0, 450000.0]
            }
        }"#;
        let response: AnnualComparisonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.comparison_chart_data.years, vec!["2011", "2010"]);
        assert_eq!(response.comparison_chart_data.total_sales, vec![500000.0, 450000.0]);
    }
}
