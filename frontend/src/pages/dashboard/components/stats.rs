use leptos::*;

use crate::api::DashboardSummary;
use crate::components::cards::{StatCard, StatTone};

#[component]
pub fn DashboardStats(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <StatCard
                label="Total Employees"
                value=summary.total_employees.to_string()
                icon="fas fa-users"
            />
            <StatCard
                label="Total Records"
                value=summary.total_attendance_records.to_string()
                icon="fas fa-clipboard-list"
            />
            <StatCard
                label="Present Days"
                value=summary.present_count.to_string()
                tone=StatTone::Success
                icon="fas fa-check-circle"
            />
            <StatCard
                label="Absent Days"
                value=summary.absent_count.to_string()
                tone=StatTone::Danger
                icon="fas fa-times-circle"
            />
        </div>
    }
}
