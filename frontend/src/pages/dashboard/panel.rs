use leptos::*;
use leptos_meta::Title;

use crate::components::{
    cards::Card,
    layout::{ErrorMessage, Layout, LoadingSpinner},
};
use crate::pages::dashboard::{
    components::{DashboardStats, EmployeeSummaryTable, QuickActions},
    view_model::{use_dashboard_view_model, DashboardViewModel},
};
use crate::state::LoadState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    create_effect(move |_| spawn_local(vm.load()));

    view! {
        <Title text="Dashboard | HRMS Lite"/>
        <Layout>
            <DashboardPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn DashboardPanel(vm: DashboardViewModel) -> impl IntoView {
    let body = move || {
        vm.state.with(|state| match &state.summary {
            LoadState::Idle | LoadState::Loading { stale: None } => {
                view! { <LoadingSpinner message="Loading dashboard..." /> }.into_view()
            }
            LoadState::LoadError(message) => view! {
                <ErrorMessage
                    message=message.clone()
                    on_retry=Callback::new(move |_| spawn_local(vm.retry()))
                />
            }
            .into_view(),
            LoadState::Loaded(summary) | LoadState::Loading { stale: Some(summary) } => {
                let summary = summary.clone();
                let rows = summary.employees_summary.clone();
                view! {
                    <div class="space-y-6">
                        <DashboardStats summary=summary />
                        <Card title="Employee Attendance Summary">
                            <EmployeeSummaryTable rows=rows />
                        </Card>
                        <Card title="Quick Actions">
                            <QuickActions />
                        </Card>
                    </div>
                }
                .into_view()
            }
        })
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Dashboard"</h1>
                <p class="text-sm text-fg-muted">"Overview of your HRMS"</p>
            </div>
            {body}
        </div>
    }
}
