use leptos::prelude::*;

/// Period input with a fetch trigger.
///
/// The token is forwarded to the backend verbatim; no format is
/// enforced client-side.
#[component]
pub fn PeriodForm(
    /// Input label, e.g. "Select Month"
    label: &'static str,
    /// Format hint shown in the empty input
    placeholder: &'static str,
    /// The period token being edited
    token: RwSignal<String>,
    /// Whether a fetch cycle is currently running
    #[prop(into)]
    loading: Signal<bool>,
    /// Invoked when the user triggers a fetch
    on_fetch: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="period-form">
            <label>{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || token.get()
                on:input=move |ev| token.set(event_target_value(&ev))
            />
            <button on:click=move |_| on_fetch.run(()) disabled=move || loading.get()>
                {move || if loading.get() { "Loading..." } else { "Fetch Data" }}
            </button>
        </div>
    }
}
