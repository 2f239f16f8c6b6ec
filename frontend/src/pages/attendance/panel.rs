use leptos::*;
use leptos_meta::Title;

use crate::components::{
    cards::Card,
    common::Button,
    empty_state::EmptyState,
    error::ErrorBanner,
    layout::{ErrorMessage, Layout, LoadingSpinner},
};
use crate::pages::attendance::{
    components::{AttendanceFiltersCard, AttendanceTable, MarkAttendanceModal, SummaryCards},
    view_model::{use_attendance_view_model, AttendanceViewModel},
};
use crate::state::LoadState;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    create_effect(move |_| spawn_local(vm.mount()));

    view! {
        <Title text="Attendance | HRMS Lite"/>
        <Layout>
            <AttendancePanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn AttendancePanel(vm: AttendanceViewModel) -> impl IntoView {
    let open_modal = Callback::new(move |_| vm.open_modal(None));
    let banner = Signal::derive(move || vm.state.with(|state| state.banner.clone()));
    let summary = Signal::derive(move || vm.state.with(|state| state.summary.clone()));
    let rows = Signal::derive(move || vm.state.with(|state| state.rows()));

    let records = move || {
        vm.state.with(|state| match &state.records {
            LoadState::Idle | LoadState::Loading { stale: None } => {
                view! { <LoadingSpinner message="Loading attendance records..." /> }.into_view()
            }
            LoadState::LoadError(message) => view! {
                <ErrorMessage
                    message=message.clone()
                    on_retry=Callback::new(move |_| spawn_local(vm.fetch()))
                />
            }
            .into_view(),
            _ if state.records().is_empty() => view! {
                <EmptyState
                    title="No attendance records found."
                    description="Mark attendance to see records here."
                    action=view! {
                        <Button on_click=open_modal>
                            <i class="fas fa-calendar-check"></i>
                            "Mark Attendance"
                        </Button>
                    }
                    .into_view()
                />
            }
            .into_view(),
            _ => view! { <AttendanceTable rows=rows /> }.into_view(),
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Attendance"</h1>
                    <p class="text-sm text-fg-muted">"Mark and view attendance records"</p>
                </div>
                <Button on_click=open_modal>
                    <i class="fas fa-calendar-check"></i>
                    "Mark Attendance"
                </Button>
            </div>
            <ErrorBanner message=banner on_dismiss=Callback::new(move |_| vm.dismiss_error()) />
            <SummaryCards summary=summary />
            <AttendanceFiltersCard vm=vm />
            <Card title="Attendance Records">{records}</Card>
            <MarkAttendanceModal vm=vm />
        </div>
    }
}
