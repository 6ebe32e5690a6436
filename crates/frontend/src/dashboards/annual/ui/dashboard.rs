use chrono::Utc;
use leptos::prelude::*;

use crate::dashboards::annual::state::{self, AnnualDisplay};
use crate::shared::charts;
use crate::shared::components::chart_image::ChartImage;
use crate::shared::components::period_form::PeriodForm;
use crate::shared::period;
use crate::shared::series::align_series;

/// Annual sales view: year-over-year comparison from the structured
/// pair, plus the twelve-month breakdown as line and bar charts.
#[component]
pub fn AnnualSalesDashboard() -> impl IntoView {
    let display = AnnualDisplay::new();
    let token = RwSignal::new(period::year_token(Utc::now().date_naive()));

    let on_fetch = Callback::new(move |_: ()| {
        state::start_fetch(display, token.get());
    });

    let comparison_chart = move || {
        display.comparison_chart.get().map(|chart| {
            let bars: Vec<(String, f64, _)> =
                align_series(&chart.years, &chart.total_sales)
                    .into_iter()
                    .map(|(year, total)| (year, total, charts::TOTAL_COLOR))
                    .collect();
            charts::bar_svg("Annual Sales Comparison", &bars).unwrap_or_else(|err| {
                log::error!("failed to render comparison chart: {err}");
                String::new()
            })
        })
    };

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
            charts::grouped_bar_svg("Monthly Product Sales Comparison", &data.months, &series)
                .unwrap_or_else(|err| {
                    log::error!("failed to render breakdown chart: {err}");
                    String::new()
                }),
        )
    };

    view! {
        <div class="dashboard annual-dashboard">
            <h1>"Annual Sales Dashboard"</h1>
            <PeriodForm
                label="Select Year"
                placeholder="YYYY"
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
                    view! { <h2>{format!("Total Sales for {}: ${}", token.get(), total)}</h2> }
                })
            }}

            <ChartImage title="Sales by Products" image=display.by_products_chart />
            <ChartImage title="Quantity Sales Pie Chart" image=display.quantity_pie_chart />

            <div class="chart-card comparison-row">
                <h2>"Annual Sales Comparison"</h2>
                {move || {
                    comparison_chart()
                        .map(|svg| view! { <div class="chart-svg" inner_html=svg></div> })
                }}
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
                            <h2>"Monthly Sales Comparison (Total Sales)"</h2>
                            {breakdown_line()
                                .map(|svg| view! { <div class="chart-svg" inner_html=svg></div> })}
                            <h2>"Monthly Product Sales Comparison"</h2>
                            {breakdown_bars()
                                .map(|svg| view! { <div class="chart-svg" inner_html=svg></div> })}
                        </div>
                    }
                })
            }}
        </div>
    }
}
