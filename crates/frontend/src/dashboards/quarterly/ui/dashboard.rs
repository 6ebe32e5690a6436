use chrono::Utc;
use leptos::prelude::*;

use crate::dashboards::quarterly::state::{self, QuarterlyDisplay};
use crate::shared::charts;
use crate::shared::components::chart_image::ChartImage;
use crate::shared::components::period_form::PeriodForm;
use crate::shared::period;

/// Quarterly sales view. The comparison endpoint returns the two
/// totals in structured form, so the pair chart is drawn from those
/// instead of parsing the sentence.
#[component]
pub fn QuarterlySalesDashboard() -> impl IntoView {
    let display = QuarterlyDisplay::new();
    let token = RwSignal::new(period::quarter_token(Utc::now().date_naive()));

    let on_fetch = Callback::new(move |_: ()| {
        state::start_fetch(display, token.get());
    });

    let comparison_chart = move || {
        display.comparison_chart.get().map(|chart| {
            charts::bar_svg(
                "Quarterly Sales Comparison",
                &[
                    (
                        "Selected Quarter".to_string(),
                        chart.selected_quarter,
                        charts::CURRENT_COLOR,
                    ),
                    (
                        chart.previous_quarter_label.clone(),
                        chart.previous_quarter,
                        charts::PREVIOUS_COLOR,
                    ),
                ],
            )
            .unwrap_or_else(|err| {
                log::error!("failed to render comparison chart: {err}");
                String::new()
            })
        })
    };

    let month_labels = move || {
        display.monthly_breakdown.get().map(|data| {
            data.months
                .iter()
                .map(|month| format!("Month {month}"))
                .collect::<Vec<_>>()
        })
    };

    let breakdown_bars = move || {
        let data = display.monthly_breakdown.get()?;
        let labels = month_labels()?;
        let series = charts::product_series(labels.len(), &data.sales);
        Some(
            charts::grouped_bar_svg("Monthly Sales Comparison", &labels, &series).unwrap_or_else(
                |err| {
                    log::error!("failed to render breakdown chart: {err}");
                    String::new()
                },
            ),
        )
    };

    let breakdown_line = move || {
        let data = display.monthly_breakdown.get()?;
        let labels = month_labels()?;
        Some(
            charts::line_svg("Total Sales", &labels, &data.sales.total).unwrap_or_else(|err| {
                log::error!("failed to render total sales chart: {err}");
                String::new()
            }),
        )
    };

    view! {
        <div class="dashboard quarterly-dashboard">
            <h1>"Quarterly Sales Dashboard"</h1>
            <PeriodForm
                label="Select Quarter"
                placeholder="YYYY-Q1"
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

            <div class="chart-card">
                <h2>"Quarterly Sales Comparison"</h2>
                {move || {
                    display
                        .comparison_text
                        .get()
                        .map(|text| view! { <pre>{text}</pre> })
                }}
                {move || {
                    comparison_chart()
                        .map(|svg| view! { <div class="chart-svg" inner_html=svg></div> })
                }}
            </div>

            {move || {
                display.monthly_breakdown.get().map(|_| {
                    view! {
                        <div class="chart-card">
                            <h2>
                                {format!("Monthly Sales Comparison for {}", token.get())}
                            </h2>
                            {breakdown_bars()
                                .map(|svg| view! { <div class="chart-svg" inner_html=svg></div> })}
                            {breakdown_line()
                                .map(|svg| view! { <div class="chart-svg" inner_html=svg></div> })}
                        </div>
                    }
                })
            }}
        </div>
    }
}
