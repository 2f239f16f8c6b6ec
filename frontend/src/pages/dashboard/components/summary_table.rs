use leptos::*;

use crate::api::EmployeeAttendanceRow;

#[component]
pub fn EmployeeSummaryTable(rows: Vec<EmployeeAttendanceRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <p class="py-6 text-center text-sm text-fg-muted">
                "No employees found. "
                <a href="/employees" class="text-action-primary-bg hover:underline">
                    "Add employees"
                </a>
            </p>
        }
        .into_view();
    }

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Employee ID"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Full Name"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Department"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Total Days"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Present Days"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td class="px-4 py-2 font-mono">{row.employee_id}</td>
                                <td class="px-4 py-2">{row.full_name}</td>
                                <td class="px-4 py-2">{row.department}</td>
                                <td class="px-4 py-2">{row.total_attendance_days}</td>
                                <td class="px-4 py-2 text-status-success-text">{row.present_days}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
