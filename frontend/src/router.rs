use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{AttendancePage, DashboardPage, EmployeesPage},
    state::provide_toasts,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_toasts();
    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <Redirect path="/"/> }
}
