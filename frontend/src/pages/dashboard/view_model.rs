use leptos::*;

use crate::api::{ApiClient, DashboardSummary};
use crate::pages::dashboard::{repository::DashboardRepository, state::DashboardState};

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub state: RwSignal<DashboardState>,
    repository: StoredValue<DashboardRepository>,
}

impl DashboardViewModel {
    pub fn new(repository: DashboardRepository) -> Self {
        Self {
            state: create_rw_signal(DashboardState::default()),
            repository: store_value(repository),
        }
    }

    pub async fn load(self) {
        let Some(token) = self.state.try_update(DashboardState::begin_load) else {
            return;
        };
        let result = self.repository.get_value().summary().await;
        if let Err(err) = &result {
            log::warn!("loading dashboard summary failed: {}", err);
        }
        let applied = self
            .state
            .try_update(|state| state.finish_load(token, result))
            .unwrap_or(false);
        if !applied {
            log::debug!("discarded superseded dashboard response");
        }
    }

    pub async fn retry(self) {
        self.load().await;
    }

    pub fn summary(self) -> Option<DashboardSummary> {
        self.state.with(|state| state.summary.data().cloned())
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_default();
            let vm = DashboardViewModel::new(DashboardRepository::new(api));
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::pages::dashboard::state::LOAD_FAILED;
    use crate::state::LoadState;
    use crate::test_support::ssr::with_runtime_async;
    use serde_json::json;

    const SUMMARY_PATH: &str = "/api/attendance/dashboard/summary";

    fn view_model(server: &MockServer) -> DashboardViewModel {
        let api = ApiClient::new_with_base_url(server.url("/api"));
        DashboardViewModel::new(DashboardRepository::new(api))
    }

    fn summary_body() -> serde_json::Value {
        json!({
            "data": {
                "totalEmployees": 2,
                "totalAttendanceRecords": 3,
                "presentCount": 2,
                "absentCount": 1,
                "employeesSummary": [{
                    "id": "e1",
                    "employeeId": "EMP001",
                    "fullName": "Jane Doe",
                    "department": "Engineering",
                    "totalAttendanceDays": 3,
                    "presentDays": 2
                }]
            }
        })
    }

    #[tokio::test]
    async fn load_fetches_summary_once() {
        with_runtime_async(|| async {
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path(SUMMARY_PATH);
                then.status(200).json_body(summary_body());
            });
            let vm = view_model(&server);
            vm.load().await;

            assert_eq!(server.hits(GET, SUMMARY_PATH), 1);
            let summary = vm.summary().unwrap();
            assert_eq!(summary.total_employees, 2);
            assert_eq!(summary.employees_summary[0].full_name, "Jane Doe");
        })
        .await;
    }

    #[tokio::test]
    async fn failure_then_retry_recovers() {
        with_runtime_async(|| async {
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path(SUMMARY_PATH);
                then.status(500).json_body(json!({}));
            });
            let vm = view_model(&server);
            vm.load().await;
            assert_eq!(
                vm.state.get_untracked().summary,
                LoadState::LoadError(LOAD_FAILED.into())
            );

            server.mock(|when, then| {
                when.method(GET).path(SUMMARY_PATH);
                then.status(200).json_body(summary_body());
            });
            vm.retry().await;
            assert_eq!(server.hits(GET, SUMMARY_PATH), 2);
            assert!(matches!(
                vm.state.get_untracked().summary,
                LoadState::Loaded(_)
            ));
        })
        .await;
    }
}
