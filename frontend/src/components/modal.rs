use leptos::ev::KeyboardEvent;
use leptos::*;

/// Overlay dialog. Backdrop clicks, the close button and Escape all route
/// through `on_close`; callers decide whether closing is currently allowed.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    let title = Signal::derive(move || title.get());
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_only_when_open() {
        let open = render_to_string(|| {
            view! {
                <Modal is_open=Signal::derive(|| true) title="Add New Employee" on_close=Callback::new(|_| {})>
                    <p>"form body"</p>
                </Modal>
            }
        });
        assert!(open.contains("Add New Employee"));
        assert!(open.contains("form body"));
        assert!(open.contains("aria-modal=\"true\""));

        let closed = render_to_string(|| {
            view! {
                <Modal is_open=Signal::derive(|| false) title="Hidden" on_close=Callback::new(|_| {})>
                    <p>"form body"</p>
                </Modal>
            }
        });
        assert!(!closed.contains("form body"));
    }
}
