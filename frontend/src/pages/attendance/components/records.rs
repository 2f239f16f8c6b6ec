use leptos::*;

use crate::api::AttendanceStatus;
use crate::pages::attendance::state::AttendanceRow;

fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "inline-flex rounded-full px-2 py-0.5 text-xs font-semibold bg-status-success-bg text-status-success-text"
        }
        AttendanceStatus::Absent => {
            "inline-flex rounded-full px-2 py-0.5 text-xs font-semibold bg-status-error-bg text-status-error-text"
        }
    }
}

#[component]
pub fn AttendanceTable(#[prop(into)] rows: Signal<Vec<AttendanceRow>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Date"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Employee ID"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Employee Name"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Department"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || rows.get()
                        key=|row| row.id.clone()
                        children=move |row| view! {
                            <tr>
                                <td class="px-4 py-2">{row.date}</td>
                                <td class="px-4 py-2 font-mono">{row.employee_code}</td>
                                <td class="px-4 py-2">{row.employee_name}</td>
                                <td class="px-4 py-2">{row.department}</td>
                                <td class="px-4 py-2">
                                    <span class=status_badge_class(row.status)>{row.status.as_str()}</span>
                                </td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn rows_render_with_status_badges() {
        let html = render_to_string(|| {
            let rows = Signal::derive(|| {
                vec![AttendanceRow {
                    id: "a1".into(),
                    date: "Jan 2, 2025".into(),
                    employee_code: "EMP001".into(),
                    employee_name: "Jane Doe".into(),
                    department: "Engineering".into(),
                    status: AttendanceStatus::Absent,
                }]
            });
            view! { <AttendanceTable rows=rows /> }
        });
        assert!(html.contains("Jan 2, 2025"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("bg-status-error-bg"));
        assert!(html.contains("Absent"));
    }
}
