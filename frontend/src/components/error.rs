use leptos::*;

/// Dismissible page-level error, shown above content that is still usable.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                class="flex items-start justify-between gap-4 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2"
                role="alert"
            >
                <p class="text-sm">{move || message.get().unwrap_or_default()}</p>
                <button
                    type="button"
                    aria-label="Dismiss"
                    class="text-status-error-text hover:opacity-75"
                    on:click=move |_| on_dismiss.call(())
                >
                    {"✕"}
                </button>
            </div>
        </Show>
    }
}
