use leptos::*;

use crate::components::{
    common::{Button, ButtonVariant},
    forms::FormField,
    modal::Modal,
};
use crate::pages::employees::{utils::EmployeeField, view_model::EmployeesViewModel};
use crate::state::FormField as _;

#[component]
pub fn EmployeeFormModal(vm: EmployeesViewModel) -> impl IntoView {
    let is_open = Signal::derive(move || vm.state.with(|state| state.form.is_open()));
    let submitting = Signal::derive(move || vm.state.with(|state| state.form.is_submitting()));
    let on_close = Callback::new(move |_| vm.close_form());

    let field = move |field: EmployeeField| {
        let value = Signal::derive(move || vm.state.with(|state| state.form.value(field).to_string()));
        let error = Signal::derive(move || {
            vm.state
                .with(|state| state.form.error(field).map(str::to_string))
        });
        view! {
            <FormField
                label=field.label()
                name=field.name()
                input_type=field.input_type()
                placeholder=field.placeholder()
                value=value
                error=error
                required=true
                on_input=Callback::new(move |value: String| vm.update_field(field, value))
            />
        }
    };

    view! {
        <Modal is_open=is_open title="Add New Employee" on_close=on_close>
            <form
                class="space-y-4"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    spawn_local(vm.submit());
                }
            >
                {EmployeeField::ALL.iter().map(|f| field(*f)).collect_view()}
                <div class="flex justify-end gap-2 pt-2">
                    <Button variant=ButtonVariant::Outline disabled=submitting on_click=on_close>
                        "Cancel"
                    </Button>
                    <Button kind="submit" disabled=submitting>
                        {move || if submitting.get() { "Adding..." } else { "Add Employee" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
