use serde::{Deserialize, Serialize};

/// Per-product sales series for a sequence of sub-periods.
///
/// The wire keys are the product codes themselves plus a `Total` row.
/// A key the backend omits deserializes to an empty series; consumers
/// must pair values with their label sequence positionally and never
/// assume a fixed length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSalesSeries {
    #[serde(rename = "S-P1", default)]
    pub product_1: Vec<f64>,
    #[serde(rename = "S-P2", default)]
    pub product_2: Vec<f64>,
    #[serde(rename = "S-P3", default)]
    pub product_3: Vec<f64>,
    #[serde(rename = "S-P4", default)]
    pub product_4: Vec<f64>,
    #[serde(rename = "Total", default)]
    pub total: Vec<f64>,
}

impl ProductSalesSeries {
    /// Product series in display order, paired with their wire codes.
    pub fn products(&self) -> [(&'static str, &[f64]); 4] {
        [
            ("S-P1", &self.product_1),
            ("S-P2", &self.product_2),
            ("S-P3", &self.product_3),
            ("S-P4", &self.product_4),
        ]
    }
}

/// Monthly breakdown as returned by the quarterly endpoint family:
/// month numbers, with the product series flattened alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterMonthlyBreakdown {
    /// Calendar month numbers within the selected quarter.
    #[serde(default)]
    pub months: Vec<u32>,
    #[serde(flatten)]
    pub sales: ProductSalesSeries,
}

/// Monthly breakdown as returned by the half-yearly and annual endpoint
/// families: month-name labels with the product series nested under
/// `sales`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubPeriodBreakdown {
    /// Month labels such as `"July 2011"`.
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default)]
    pub sales: ProductSalesSeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_flattened_quarterly_breakdown() {
        let json = r#"{
            "months": [7, 8, 9],
            "S-P1": [10.0, 20.0, 30.0],
            "S-P2": [1.5, 2.5, 3.5],
            "S-P3": [0.0, 0.0, 1.0],
            "S-P4": [4.0, 5.0, 6.0],
            "Total": [15.5, 27.5, 40.5]
        }"#;
        let breakdown: QuarterMonthlyBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown.months, vec![7, 8, 9]);
        assert_eq!(breakdown.sales.product_1, vec![10.0, 20.0, 30.0]);
        assert_eq!(breakdown.sales.total, vec![15.5, 27.5, 40.5]);
    }

    #[test]
    fn decodes_nested_breakdown() {
        let json = r#"{
            "months": ["January 2011", "February 2011"],
            "sales": {
                "S-P1": [100.0, 200.0],
                "S-P2": [50.0, 60.0],
                "S-P3": [10.0, 20.0],
                "S-P4": [5.0, 15.0],
                "Total": [165.0, 295.0]
            }
        }"#;
        let breakdown: SubPeriodBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown.months.len(), 2);
        assert_eq!(breakdown.sales.total, vec![165.0, 295.0]);
    }

    #[test]
    fn missing_series_keys_default_to_empty() {
        let breakdown: QuarterMonthlyBreakdown =
            serde_json::from_str(r#"{"months": [1, 2, 3], "S-P1": [10.0, 20.0, 30.0]}"#).unwrap();
        assert_eq!(breakdown.months.len(), 3);
        assert_eq!(breakdown.sales.product_1.len(), 3);
        assert!(breakdown.sales.product_2.is_empty());
        assert!(breakdown.sales.total.is_empty());

        let nested: SubPeriodBreakdown = serde_json::from_str(r#"{"months": []}"#).unwrap();
        assert!(nested.months.is_empty());
        assert!(nested.sales.total.is_empty());
    }
}
