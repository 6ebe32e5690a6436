use contracts::sales::annual::AnnualComparisonChart;
use contracts::sales::breakdown::SubPeriodBreakdown;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::annual::api;
use crate::shared::http::FetchError;

/// Display record for the annual view, published incrementally by the
/// fetch cycle.
#[derive(Clone, Copy)]
pub struct AnnualDisplay {
    pub total_sales: RwSignal<Option<f64>>,
    pub by_products_chart: RwSignal<Option<String>>,
    pub quantity_pie_chart: RwSignal<Option<String>>,
    pub comparison_text: RwSignal<Option<String>>,
    pub comparison_chart: RwSignal<Option<AnnualComparisonChart>>,
    pub monthly_breakdown: RwSignal<Option<SubPeriodBreakdown>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<&'static str>>,
    cycle: StoredValue<u64>,
}

impl AnnualDisplay {
    pub fn new() -> Self {
        Self {
            total_sales: RwSignal::new(None),
            by_products_chart: RwSignal::new(None),
            quantity_pie_chart: RwSignal::new(None),
            comparison_text: RwSignal::new(None),
            comparison_chart: RwSignal::new(None),
            monthly_breakdown: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            cycle: StoredValue::new(0),
        }
    }

    fn begin_cycle(&self) -> u64 {
        let next = self.cycle.get_value() + 1;
        self.cycle.set_value(next);
        next
    }

    fn is_current(&self, cycle: u64) -> bool {
        self.cycle.get_value() == cycle
    }
}

impl Default for AnnualDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts one fetch cycle for `selected_year`.
pub fn start_fetch(display: AnnualDisplay, selected_year: String) {
    let cycle = display.begin_cycle();
    display.loading.set(true);
    display.error.set(None);

    spawn_local(async move {
        let outcome = run_cycle(display, cycle, &selected_year).await;
        if !display.is_current(cycle) {
            return;
        }
        if let Err(err) = outcome {
            log::error!("annual sales fetch failed: {err}");
            display.error.set(Some(err.user_message()));
        }
        display.loading.set(false);
    });
}

async fn run_cycle(
    display: AnnualDisplay,
    cycle: u64,
    selected_year: &str,
) -> Result<(), FetchError> {
    let total = api::get_total_sales(selected_year).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display.total_sales.set(Some(total.total_sales));

    let by_products = api::get_sales_by_products(selected_year).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display
        .by_products_chart
        .set(Some(by_products.sales_by_products_chart));

    let pie = api::get_quantity_pie(selected_year).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display
        .quantity_pie_chart
        .set(Some(pie.quantity_sales_pie_chart));

    let comparison = api::get_comparison(selected_year).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display
        .comparison_chart
        .set(Some(comparison.comparison_chart_data));
    display
        .comparison_text
        .set(Some(comparison.sales_comparison_text));

    let breakdown = api::get_monthly_comparison(selected_year).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display.monthly_breakdown.set(Some(breakdown.chart_data));

    Ok(())
}
