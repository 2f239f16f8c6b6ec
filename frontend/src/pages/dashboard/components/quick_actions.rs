use leptos::*;

const ACTIONS: [(&str, &str, &str); 2] = [
    ("/employees", "Manage Employees", "fas fa-users"),
    ("/attendance", "Mark Attendance", "fas fa-calendar-check"),
];

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-3 sm:grid-cols-2">
            {ACTIONS
                .iter()
                .map(|(href, label, icon)| view! {
                    <a
                        href=*href
                        class="flex items-center gap-3 rounded-lg border border-border px-4 py-3 text-fg hover:bg-surface-muted"
                    >
                        <i class=*icon></i>
                        <span class="font-medium">{*label}</span>
                    </a>
                })
                .collect_view()}
        </div>
    }
}
