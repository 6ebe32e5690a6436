use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::monthly::api;
use crate::shared::comparison::parse_comparison_pair;
use crate::shared::http::FetchError;

/// Display record for the monthly view.
///
/// Fields are published incrementally as responses arrive during a
/// fetch cycle; a failed cycle leaves whatever was already fetched on
/// screen, including values from an earlier successful cycle.
#[derive(Clone, Copy)]
pub struct MonthlyDisplay {
    pub total_sales: RwSignal<Option<f64>>,
    pub by_products_chart: RwSignal<Option<String>>,
    pub quantity_pie_chart: RwSignal<Option<String>>,
    pub weekly_sales_chart: RwSignal<Option<String>>,
    pub comparison_text: RwSignal<Option<String>>,
    pub comparison_pair: RwSignal<Option<(f64, f64)>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<&'static str>>,
    cycle: StoredValue<u64>,
}

impl MonthlyDisplay {
    pub fn new() -> Self {
        Self {
            total_sales: RwSignal::new(None),
            by_products_chart: RwSignal::new(None),
            quantity_pie_chart: RwSignal::new(None),
            weekly_sales_chart: RwSignal::new(None),
            comparison_text: RwSignal::new(None),
            comparison_pair: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            cycle: StoredValue::new(0),
        }
    }

    /// Stamps a new fetch cycle and returns its id. Results of older
    /// cycles are dropped instead of overwriting newer state.
    fn begin_cycle(&self) -> u64 {
        let next = self.cycle.get_value() + 1;
        self.cycle.set_value(next);
        next
    }

    fn is_current(&self, cycle: u64) -> bool {
        self.cycle.get_value() == cycle
    }
}

impl Default for MonthlyDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts one fetch cycle for `selected_month`.
pub fn start_fetch(display: MonthlyDisplay, selected_month: String) {
    let cycle = display.begin_cycle();
    display.loading.set(true);
    display.error.set(None);

    spawn_local(async move {
        let outcome = run_cycle(display, cycle, &selected_month).await;
        if !display.is_current(cycle) {
            return;
        }
        if let Err(err) = outcome {
            log::error!("monthly sales fetch failed: {err}");
            display.error.set(Some(err.user_message()));
        }
        display.loading.set(false);
    });
}

/// Issues the five monthly queries in order, publishing each field as
/// soon as its response arrives. The first failure aborts the rest of
/// the cycle; earlier fields stay as published.
async fn run_cycle(
    display: MonthlyDisplay,
    cycle: u64,
    selected_month: &str,
) -> Result<(), FetchError> {
    let total = api::get_total_sales(selected_month).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display.total_sales.set(Some(total.total_sales));

    let by_products = api::get_sales_by_products(selected_month).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display
        .by_products_chart
        .set(Some(by_products.sales_by_products_chart));

    let pie = api::get_quantity_pie(selected_month).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display
        .quantity_pie_chart
        .set(Some(pie.quantity_sales_pie_chart));

    let weekly = api::get_weekly_sales(selected_month).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display
        .weekly_sales_chart
        .set(Some(weekly.weekly_sales_chart));

    let comparison = api::get_comparison(selected_month).await?;
    if !display.is_current(cycle) {
        return Ok(());
    }
    display
        .comparison_pair
        .set(parse_comparison_pair(&comparison.sales_comparison_text));
    display
        .comparison_text
        .set(Some(comparison.sales_comparison_text));

    Ok(())
}
