use chrono::Utc;
use leptos::prelude::*;

use crate::dashboards::halfyearly::state::{self, HalfYearlyDisplay};
use crate::shared::charts;
use crate::shared::components::chart_image::ChartImage;
use crate::shared::components::period_form::PeriodForm;
use crate::shared::period;

/// Half-yearly sales view. The breakdown arrives with month-name
/// labels and is drawn as a total line plus a per-product bar chart.
#[component]
pub fn HalfYearlySalesDashboard() -> impl IntoView {
    let display = HalfYearlyDisplay::new();
    let token = RwSignal::new(period::halfyear_token(Utc::now().date_naive()));

    let on_fetch = Callback::new(move |_: ()| {
        state::start_fetch(display, token.get());
    });

    let breakdown_line = move || {
        let data = display.monthly_breakdown.get()?;
        Some(
            charts::line_svg("Total Sales", &data.months, &data.sales.total).unwrap_or_else(
                |err| {
                    log::error!("failed to render total sales chart: {err}");
                    String::new()
                },
            ),
        )
    };

    let breakdown_bars = move || {
        let data = display.monthly_breakdown.get()?;
        let series = charts::product_series(data.months.len(), &data.sales);
        Some(
            charts::grouped_bar_svg("Sales by Product", &data.months, &series).unwrap_or_else(
                |err| {
                    log::error!("failed to render breakdown chart: {err}");
                    String::new()
                },
            ),
        )
    };

    view! {
        <div class="dashboard halfyearly-dashboard">
            <h1>"Half-Yearly Sales Dashboard"</h1>
            <PeriodForm
                label="Select Half-Year"
                placeholder="YYYY-H1 or YYYY-H2"
                token=token
                loading=display.loading
                on_fetch=on_fetch
            />

            {move || display.loading.get().then(|| view! { <p>"Loading data..."</p> })}
            {move || {
                display
                    .error
                    .get()
                    .map(|message| view! { <p class="error-message">{message}</p> })
            }}

            {move || {
                display.total_sales.get().map(|total| {
                    view! {
                        <h2>{format!("Total Sales for {}: ${total:.2}", token.get())}</h2>
                    }
                })
            }}

            <ChartImage title="Sales by Products" image=display.by_products_chart />
            <ChartImage title="Quantity Sales Pie Chart" image=display.quantity_pie_chart />

            <div class="chart-card">
                <h2>"Sales Comparison"</h2>
                {move || {
                    display
                        .comparison_text
                        .get()
                        .map(|text| view! { <pre>{text}</pre> })
                }}
            </div>

            {move || {
                display.monthly_breakdown.get().map(|_| {
                    view! {
                        <div class="chart-card">
                            <h2>
                                {format!("Monthly Sales Comparison for {}", token.get())}
                            </h2>
                            {breakdown_line()
                                .map(|svg| view! { <div class="chart-svg" inner_html=svg></div> })}
                            {breakdown_bars()
                                .map(|svg| view! { <div class="chart-svg" inner_html=svg></div> })}
                        </div>
                    }
                })
            }}
        </div>
    }
}
