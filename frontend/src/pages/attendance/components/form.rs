use leptos::*;

use crate::components::{
    common::{Button, ButtonVariant},
    forms::{FormField, SelectField},
    modal::Modal,
};
use crate::pages::attendance::{
    utils::{form_options, status_options, AttendanceField},
    view_model::AttendanceViewModel,
};

#[component]
pub fn MarkAttendanceModal(vm: AttendanceViewModel) -> impl IntoView {
    let is_open = Signal::derive(move || vm.state.with(|state| state.form.is_open()));
    let submitting = Signal::derive(move || vm.state.with(|state| state.form.is_submitting()));
    let employee_options =
        Signal::derive(move || vm.state.with(|state| form_options(&state.employees)));
    let title = Signal::derive(move || {
        vm.state.with(|state| match &state.selected_employee {
            Some(employee) => format!("Mark Attendance: {}", employee.full_name),
            None => "Mark Attendance".to_string(),
        })
    });
    let on_close = Callback::new(move |_| vm.close_modal());

    let value = move |field: AttendanceField| {
        Signal::derive(move || vm.state.with(|state| state.form.value(field).to_string()))
    };
    let error = move |field: AttendanceField| {
        Signal::derive(move || {
            vm.state
                .with(|state| state.form.error(field).map(str::to_string))
        })
    };
    let on_change = move |field: AttendanceField| {
        Callback::new(move |value: String| vm.update_field(field, value))
    };

    view! {
        <Modal is_open=is_open title=title on_close=on_close>
            <form
                class="space-y-4"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    spawn_local(vm.submit());
                }
            >
                <SelectField
                    label="Employee"
                    name="employeeId"
                    value=value(AttendanceField::EmployeeId)
                    options=employee_options
                    placeholder="Select an employee"
                    error=error(AttendanceField::EmployeeId)
                    required=true
                    on_change=on_change(AttendanceField::EmployeeId)
                />
                <FormField
                    label="Date"
                    name="date"
                    input_type="date"
                    value=value(AttendanceField::Date)
                    error=error(AttendanceField::Date)
                    required=true
                    on_input=on_change(AttendanceField::Date)
                />
                <SelectField
                    label="Status"
                    name="status"
                    value=value(AttendanceField::Status)
                    options=Signal::derive(status_options)
                    error=error(AttendanceField::Status)
                    required=true
                    on_change=on_change(AttendanceField::Status)
                />
                <div class="flex justify-end gap-2 pt-2">
                    <Button variant=ButtonVariant::Outline disabled=submitting on_click=on_close>
                        "Cancel"
                    </Button>
                    <Button kind="submit" disabled=submitting>
                        {move || if submitting.get() { "Saving..." } else { "Mark Attendance" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::attendance::repository::AttendanceRepository;
    use crate::state::notify::recording::RecordingNotifier;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    #[test]
    fn modal_lists_employees_and_prefills_selection() {
        let html = render_to_string(|| {
            let vm = AttendanceViewModel::new(
                AttendanceRepository::new(ApiClient::new_with_base_url("http://localhost/api")),
                Rc::new(RecordingNotifier::default()),
            );
            let jane = employee("e1", "EMP001", "Jane Doe");
            vm.state.update(|state| state.set_employees(vec![jane.clone()]));
            vm.open_modal(Some(jane));
            view! { <MarkAttendanceModal vm=vm /> }
        });
        assert!(html.contains("Mark Attendance: Jane Doe"));
        assert!(html.contains("EMP001 - Jane Doe (Engineering)"));
        assert!(html.contains("Present"));
        assert!(html.contains("type=\"date\""));
    }
}
