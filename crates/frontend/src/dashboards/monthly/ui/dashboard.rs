use chrono::Utc;
use leptos::prelude::*;

use crate::dashboards::monthly::state::{self, MonthlyDisplay};
use crate::shared::charts;
use crate::shared::components::chart_image::ChartImage;
use crate::shared::components::period_form::PeriodForm;
use crate::shared::period;

/// Monthly sales view: total, three backend-rendered charts and the
/// month-over-month comparison with its client-derived bar chart.
#[component]
pub fn MonthlySalesDashboard() -> impl IntoView {
    let display = MonthlyDisplay::new();
    let token = RwSignal::new(period::month_token(Utc::now().date_naive()));

    let on_fetch = Callback::new(move |_: ()| {
        state::start_fetch(display, token.get());
    });

    let comparison_chart = move || {
        display.comparison_pair.get().map(|(current, previous)| {
            charts::bar_svg(
                "Sales Comparison",
                &[
                    ("Current Month".to_string(), current, charts::CURRENT_COLOR),
                    ("Previous Month".to_string(), previous, charts::PREVIOUS_COLOR),
                ],
            )
            .unwrap_or_else(|err| {
                log::error!("failed to render comparison chart: {err}");
                String::new()
            })
        })
    };

    view! {
        <div class="dashboard monthly-dashboard">
            <h1>"Monthly Sales Dashboard"</h1>
            <PeriodForm
                label="Select Month"
                placeholder="Enter month in YYYY-MM format"
                token=token
                loading=display.loading
                on_fetch=on_fetch
            />

            {move || {
                display
                    .error
                    .get()
                    .map(|message| view! { <p class="error-message">{message}</p> })
            }}

            <div class="chart-card total-sales-card">
                <h2>"Total Sales"</h2>
                {move || match display.total_sales.get() {
                    Some(total) => {
                        view! { <p class="total-sales">{format!("${total:.2}")}</p> }.into_any()
                    }
                    None => view! { <p>"No data available"</p> }.into_any(),
                }}
            </div>

            <ChartImage title="Sales by Products" image=display.by_products_chart />
            <ChartImage title="Quantity Pie Chart" image=display.quantity_pie_chart />
            <ChartImage title="Weekly Sales" image=display.weekly_sales_chart />

            <div class="chart-card">
                <h2>"Monthly Sales Comparison"</h2>
                {move || {
                    display
                        .comparison_text
                        .get()
                        .map(|text| view! { <pre>{text}</pre> })
                }}
                {move || match comparison_chart() {
                    Some(svg) => view! { <div class="chart-svg" inner_html=svg></div> }.into_any(),
                    None => view! { <p>"No comparison data available"</p> }.into_any(),
                }}
            </div>
        </div>
    }
}
