use leptos::*;

use crate::components::{
    common::{Button, ButtonVariant},
    modal::Modal,
};

#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] busy_label: MaybeSignal<String>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let busy = Signal::derive(move || busy.get());
    let message = Signal::derive(move || message.get());
    let confirm_text = Signal::derive(move || {
        let busy_text = busy_label.get();
        let text = confirm_label.get();
        if busy.get() && !busy_text.trim().is_empty() {
            busy_text
        } else if text.trim().is_empty() {
            "Confirm".to_string()
        } else {
            text
        }
    });
    let variant = if destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel>
            <p class="text-sm text-fg-muted">{move || message.get()}</p>
            <div class="flex justify-end gap-2">
                <Button
                    variant=ButtonVariant::Outline
                    disabled=busy
                    on_click=on_cancel
                >
                    "Cancel"
                </Button>
                <Button variant=variant disabled=busy on_click=on_confirm>
                    {move || confirm_text.get()}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_message_and_default_label() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Confirm Delete"
                    message="Are you sure?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Are you sure?"));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn busy_dialog_shows_busy_label() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Confirm Delete"
                    message="Are you sure?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    confirm_label="Delete"
                    busy_label="Deleting..."
                    busy=true
                    destructive=true
                />
            }
        });
        assert!(html.contains("Deleting..."));
        assert!(html.contains("bg-action-danger-bg"));
    }
}
