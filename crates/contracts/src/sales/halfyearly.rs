use crate::sales::breakdown::SubPeriodBreakdown;
use serde::{Deserialize, Serialize};

/// Half-year comparison; text only, no structured pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HalfYearlyComparisonResponse {
    pub sales_comparison_text: String,
}

/// Month-by-month breakdown of the selected half-year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HalfYearlyMonthlyComparisonResponse {
    pub chart_data: SubPeriodBreakdown,
    /// Base64-encoded PNG of the same series, rendered by the backend.
    pub sales_chart_base64: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_monthly_comparison() {
        let json = r#"{
            "chart_data": {
                "months": ["July 2011", "August 2011"],
                "sales": {
                    "S-P1": [10.0, 11.0],
                    "S-P2": [20.0, 21.0],
                    "S-P3": [30.0, 31.0],
                    "S-P4": [40.0, 41.0],
                    "Total": [100.0, 104.0]
                }
            },
            "sales_chart_base64": "iVBORw0KGgo="
        }"#;
        let response: HalfYearlyMonthlyComparisonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.chart_data.months[0], "July 2011");
        assert_eq!(response.chart_data.sales.total, vec![100.0, 104.0]);
    }
}
