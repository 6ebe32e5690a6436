use leptos::prelude::*;

/// Backend-rendered chart displayed as an opaque inline image.
#[component]
pub fn ChartImage(
    /// Section heading
    title: &'static str,
    /// Base64-encoded PNG payload, None until fetched
    #[prop(into)]
    image: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h2>{title}</h2>
            {move || match image.get() {
                Some(encoded) => view! {
                    <img
                        class="chart-img"
                        src=format!("data:image/png;base64,{encoded}")
                        alt=title
                    />
                }
                    .into_any(),
                None => view! { <p>"No chart available"</p> }.into_any(),
            }}
        </div>
    }
}
