use leptos::*;

use crate::api::Employee;
use crate::components::common::{Button, ButtonVariant};

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_remove: Callback<Employee>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Employee ID"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Full Name"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Email"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Department"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id.clone()
                        children=move |employee| {
                            let target = employee.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-2 font-mono">{employee.employee_id}</td>
                                    <td class="px-4 py-2">{employee.full_name}</td>
                                    <td class="px-4 py-2">{employee.email}</td>
                                    <td class="px-4 py-2">{employee.department}</td>
                                    <td class="px-4 py-2">
                                        <Button
                                            variant=ButtonVariant::Danger
                                            on_click=Callback::new(move |_| on_remove.call(target.clone()))
                                        >
                                            <i class="fas fa-trash"></i>
                                            "Remove"
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
