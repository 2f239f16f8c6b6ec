use leptos::*;
use leptos_meta::Title;

use crate::components::{
    cards::Card,
    common::Button,
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::ErrorBanner,
    layout::{ErrorMessage, Layout, LoadingSpinner},
};
use crate::pages::employees::{
    components::{EmployeeFormModal, EmployeeTable},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::state::LoadState;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    create_effect(move |_| spawn_local(vm.load()));

    view! {
        <Title text="Employees | HRMS Lite"/>
        <Layout>
            <EmployeesPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn EmployeesPanel(vm: EmployeesViewModel) -> impl IntoView {
    let open_form = Callback::new(move |_| vm.open_create_form());
    let banner = Signal::derive(move || vm.state.with(|state| state.banner.clone()));
    let employees = Signal::derive(move || vm.state.with(|state| state.employees().to_vec()));

    let delete_open = Signal::derive(move || vm.state.with(|state| state.delete.is_open()));
    let deleting = Signal::derive(move || vm.state.with(|state| state.delete.is_deleting()));
    let delete_message = Signal::derive(move || {
        vm.state.with(|state| {
            let name = state
                .delete
                .target()
                .map(|employee| employee.full_name.clone())
                .unwrap_or_default();
            format!("Are you sure you want to delete {name}? This action cannot be undone.")
        })
    });

    let body = move || {
        vm.state.with(|state| match &state.list {
            LoadState::Idle | LoadState::Loading { stale: None } => {
                view! { <LoadingSpinner message="Loading employees..." /> }.into_view()
            }
            LoadState::LoadError(message) => view! {
                <ErrorMessage
                    message=message.clone()
                    on_retry=Callback::new(move |_| spawn_local(vm.load()))
                />
            }
            .into_view(),
            _ if state.employees().is_empty() => view! {
                <Card>
                    <EmptyState
                        title="No employees found. Add your first employee to get started."
                        action=view! {
                            <Button on_click=open_form>
                                <i class="fas fa-user-plus"></i>
                                "Add Employee"
                            </Button>
                        }
                        .into_view()
                    />
                </Card>
            }
            .into_view(),
            _ => view! {
                <Card>
                    <EmployeeTable
                        employees=employees
                        on_remove=Callback::new(move |employee| vm.request_delete(employee))
                    />
                </Card>
            }
            .into_view(),
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Employees"</h1>
                    <p class="text-sm text-fg-muted">"Manage employee records"</p>
                </div>
                <Button on_click=open_form>
                    <i class="fas fa-user-plus"></i>
                    "Add Employee"
                </Button>
            </div>
            <ErrorBanner message=banner on_dismiss=Callback::new(move |_| vm.dismiss_error()) />
            {body}
            <EmployeeFormModal vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Confirm Delete"
                message=delete_message
                confirm_label="Delete"
                busy_label="Deleting..."
                busy=deleting
                destructive=true
                on_confirm=Callback::new(move |_| spawn_local(vm.confirm_delete()))
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError};
    use crate::pages::employees::repository::EmployeesRepository;
    use crate::state::notify::recording::RecordingNotifier;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    fn vm() -> EmployeesViewModel {
        EmployeesViewModel::new(
            EmployeesRepository::new(ApiClient::new_with_base_url("http://localhost/api")),
            Rc::new(RecordingNotifier::default()),
        )
    }

    #[test]
    fn empty_list_renders_call_to_action() {
        let html = render_to_string(|| {
            let vm = vm();
            vm.state.update(|state| {
                let token = state.begin_load();
                state.finish_load(token, Ok(Vec::new()));
            });
            view! { <EmployeesPanel vm=vm /> }
        });
        assert!(html.contains("No employees found. Add your first employee to get started."));
        assert!(html.matches("Add Employee").count() >= 2);
    }

    #[test]
    fn first_load_failure_renders_retry() {
        let html = render_to_string(|| {
            let vm = vm();
            vm.state.update(|state| {
                let token = state.begin_load();
                state.finish_load(token, Err(ApiError::request_failed("offline")));
            });
            view! { <EmployeesPanel vm=vm /> }
        });
        assert!(html.contains("Failed to load employees"));
        assert!(html.contains("Try Again"));
    }

    #[test]
    fn delete_confirmation_names_the_employee() {
        let html = render_to_string(|| {
            let vm = vm();
            vm.state.update(|state| {
                let token = state.begin_load();
                state.finish_load(token, Ok(vec![employee("e1", "EMP001", "Jane Doe")]));
                state.request_delete(employee("e1", "EMP001", "Jane Doe"));
                state.begin_delete();
            });
            view! { <EmployeesPanel vm=vm /> }
        });
        assert!(html.contains("EMP001"));
        assert!(html.contains("Are you sure you want to delete Jane Doe?"));
        assert!(html.contains("Deleting..."));
    }

    #[test]
    fn page_renders_inside_layout() {
        let html = render_to_string(|| view! { <EmployeesPage /> });
        assert!(html.contains("Manage employee records"));
        assert!(html.contains("Loading employees..."));
    }
}
