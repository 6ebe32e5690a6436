use crate::sales::breakdown::QuarterMonthlyBreakdown;
use serde::{Deserialize, Serialize};

/// Quarter-over-quarter comparison: the sentence plus the same two
/// totals in chartable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyComparisonResponse {
    pub sales_comparison_text: String,
    pub quarterly_comparison_chart_data: QuarterlyComparisonChart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyComparisonChart {
    /// Total for the selected quarter.
    pub selected_quarter: f64,
    /// Total for the quarter before it.
    pub previous_quarter: f64,
    /// Token of the previous quarter, e.g. `"2011-Q2"`.
    pub previous_quarter_label: String,
}

/// Month-by-month breakdown of the selected quarter, with a
/// backend-rendered chart of the same data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyMonthlyComparisonResponse {
    /// Base64-encoded PNG
    pub monthly_sales_chart: String,
    pub monthly_sales_data: QuarterMonthlyBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_comparison_with_chart_pair() {
        let json = r#"{
            "sales_comparison_text": "Sales for 2011-Q3: $120000.00\nSales for 2011-Q2: $110000.00\nChange: Increase\nPercentage Change: 9.09%",
            "quarterly_comparison_chart_data": {
                "selected_quarter": 120000.0,
                "previous_quarter": 110000.0,
                "previous_quarter_label": "2011-Q2"
            }
        }"#;
        let response: QuarterlyComparisonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.quarterly_comparison_chart_data.selected_quarter, 120000.0);
        assert_eq!(
            response.quarterly_comparison_chart_data.previous_quarter_label,
            "2011-Q2"
        );
    }

    #[test]
    fn decodes_monthly_comparison() {
        let json = r#"{
            "monthly_sales_chart": "iVBORw0KGgo=",
            "monthly_sales_data": {
                "months": [7, 8, 9],
                "S-P1": [1.0, 2.0, 3.0],
                "S-P2": [1.0, 2.0, 3.0],
                "S-P3": [1.0, 2.0, 3.0],
                "S-P4": [1.0, 2.0, 3.0],
                "Total": [4.0, 8.0, 12.0]
            }
        }"#;
        let response: QuarterlyMonthlyComparisonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.monthly_sales_data.months, vec![7, 8, 9]);
        assert_eq!(response.monthly_sales_data.sales.total, vec![4.0, 8.0, 12.0]);
    }
}
