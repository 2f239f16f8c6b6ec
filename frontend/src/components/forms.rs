use leptos::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "mt-1 block w-full rounded-md border border-status-error-border bg-surface-elevated px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-status-error-border"
    } else {
        "mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
    }
}

#[component]
fn FieldLabel(name: String, label: String, required: bool) -> impl IntoView {
    view! {
        <label for=name class="block text-sm font-medium text-fg">
            {label}
            {required.then(|| view! { <span class="ml-0.5 text-status-error-text">"*"</span> })}
        </label>
    }
}

#[component]
fn FieldMessage(error: MaybeSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! {
            <p class="mt-1 text-xs text-status-error-text">{message}</p>
        })}
    }
}

/// Labelled `<input>` with an inline error slot.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let error_for_class = error.clone();
    view! {
        <div class="space-y-1">
            <FieldLabel name=name.clone() label=label required=required />
            <input
                id=name.clone()
                name=name
                type=input_type
                placeholder=placeholder
                class=move || input_class(error_for_class.with(Option::is_some))
                prop:value=move || value.get()
                value=value.get_untracked()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldMessage error=error />
        </div>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    on_change: Callback<String>,
    /// Label of an empty-valued first option.
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let error_for_class = error.clone();
    view! {
        <div class="space-y-1">
            <FieldLabel name=name.clone() label=label required=required />
            <select
                id=name.clone()
                name=name
                class=move || input_class(error_for_class.with(Option::is_some))
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {placeholder.map(|text| view! {
                    <option value="" selected=move || value.get().is_empty()>{text}</option>
                })}
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let selected_value = option.value.clone();
                        view! {
                            <option
                                value=option.value
                                selected=move || value.get() == selected_value
                            >
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldMessage error=error />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_field_renders_required_marker_and_error() {
        let html = render_to_string(|| {
            let value = create_rw_signal(String::new());
            view! {
                <FormField
                    label="Email Address"
                    name="email"
                    input_type="email"
                    value=value
                    on_input=Callback::new(|_| {})
                    error=Some("Invalid email format".to_string())
                    required=true
                />
            }
        });
        assert!(html.contains("Email Address"));
        assert!(html.contains("Invalid email format"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains('*'));
    }

    #[test]
    fn select_field_marks_current_option() {
        let html = render_to_string(|| {
            let value = create_rw_signal("Absent".to_string());
            let options = Signal::derive(|| {
                vec![
                    SelectOption::new("Present", "Present"),
                    SelectOption::new("Absent", "Absent"),
                ]
            });
            view! {
                <SelectField
                    label="Status"
                    name="status"
                    value=value
                    options=options
                    on_change=Callback::new(|_| {})
                    placeholder="Select status"
                />
            }
        });
        assert!(html.contains("Select status"));
        assert!(html.contains("Present"));
        assert!(html.contains("selected"));
    }
}
