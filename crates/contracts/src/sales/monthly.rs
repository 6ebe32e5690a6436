use serde::{Deserialize, Serialize};

/// Week-by-week sales chart for the selected month, rendered by the
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySalesResponse {
    /// Base64-encoded PNG
    pub weekly_sales_chart: String,
}

/// Month-over-month comparison.
///
/// The monthly endpoint returns free text only; the chartable pair is
/// derived client-side by parsing the sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesComparisonResponse {
    pub sales_comparison_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_comparison_sentence() {
        let json = r#"{
            "sales_comparison_text": "Sales for 2011-08: $40614.34\nSales for 2011-07: $39421.90\nChange: Increase\nPercentage Change: 3.02%"
        }"#;
        let response: SalesComparisonResponse = serde_json::from_str(json).unwrap();
        assert!(response.sales_comparison_text.starts_with("Sales for 2011-08"));
        assert_eq!(response.sales_comparison_text.lines().count(), 4);
    }
}
