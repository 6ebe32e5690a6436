use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Landing page: pick an analysis type and jump to its view.
#[component]
pub fn HomePage() -> impl IntoView {
    let (selected, set_selected) = signal(String::new());
    let navigate = use_navigate();

    let on_go = move |_| {
        let target = selected.get();
        if !target.is_empty() {
            navigate(&target, NavigateOptions::default());
        }
    };

    view! {
        <div class="home-page">
            <h1>"Choose Analysis"</h1>
            <label>"Select Analysis Type:"</label>
            <select
                prop:value=move || selected.get()
                on:change=move |ev| set_selected.set(event_target_value(&ev))
            >
                <option value="">"--Select--"</option>
                <option value="/monthly">"Monthly Sales"</option>
                <option value="/annual">"Annual Sales"</option>
                <option value="/halfyearly">"Half-Yearly Sales"</option>
                <option value="/quarterly">"Quarterly Sales"</option>
            </select>
            <button on:click=on_go>"Go"</button>
        </div>
    }
}
