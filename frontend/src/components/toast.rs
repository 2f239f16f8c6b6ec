use leptos::*;

use crate::state::{use_toasts, NotificationLevel};

fn toast_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        NotificationLevel::Error => {
            "bg-status-error-bg border-status-error-border text-status-error-text"
        }
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let center = use_toasts();
    let toasts = center.toasts();

    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "flex items-start justify-between gap-3 rounded-md border px-4 py-3 shadow {}",
                            toast_class(toast.notification.level)
                        )>
                            <p class="text-sm">{toast.notification.message}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-75 hover:opacity-100"
                                on:click=move |_| center.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
