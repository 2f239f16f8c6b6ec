use leptos::*;
use std::rc::Rc;

use crate::api::{ApiClient, Employee};
use crate::pages::attendance::{
    repository::AttendanceRepository,
    state::AttendanceState,
    utils::{AttendanceField, FilterField},
};
use crate::state::{use_notifier, Notification, Notifier};
use crate::utils::time::today_utc;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub state: RwSignal<AttendanceState>,
    repository: StoredValue<AttendanceRepository>,
    notifier: StoredValue<Rc<dyn Notifier>>,
}

impl AttendanceViewModel {
    pub fn new(repository: AttendanceRepository, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            state: create_rw_signal(AttendanceState::default()),
            repository: store_value(repository),
            notifier: store_value(notifier),
        }
    }

    fn notify(self, notification: Notification) {
        self.notifier.with_value(|notifier| notifier.notify(notification));
    }

    /// Picker employees and the unfiltered list, fetched side by side.
    pub async fn mount(self) {
        futures::join!(self.load_employees(), self.fetch());
    }

    pub async fn load_employees(self) {
        match self.repository.get_value().list_employees().await {
            Ok(employees) => self.state.update(|state| state.set_employees(employees)),
            Err(err) => log::warn!("loading employees for attendance picker failed: {}", err),
        }
    }

    /// Re-reads the list for the current filters, then the employee-scoped
    /// summary when an employee filter is set.
    pub async fn fetch(self) {
        let Some((token, query)) = self.state.try_update(AttendanceState::begin_fetch) else {
            return;
        };
        let repository = self.repository.get_value();
        let list = repository.list(&query).await;
        if let Err(err) = &list {
            log::warn!("loading attendance records failed: {}", err);
        }
        let proceed = self
            .state
            .try_update(|state| state.finish_list(token, list))
            .unwrap_or(false);
        if !proceed {
            return;
        }

        let summary = match query.employee_id.as_deref() {
            Some(employee_id) => Some(repository.employee_attendance(employee_id, &query).await),
            None => None,
        };
        let applied = self
            .state
            .try_update(|state| state.finish_summary(token, summary))
            .unwrap_or(false);
        if !applied {
            log::debug!("discarded superseded attendance summary response");
        }
    }

    pub async fn set_filter(self, field: FilterField, value: String) {
        let changed = self
            .state
            .try_update(|state| state.set_filter(field, value))
            .unwrap_or(false);
        if changed {
            self.fetch().await;
        }
    }

    pub async fn clear_filters(self) {
        let changed = self
            .state
            .try_update(AttendanceState::clear_filters)
            .unwrap_or(false);
        if changed {
            self.fetch().await;
        }
    }

    pub fn open_modal(self, employee: Option<Employee>) {
        let today = today_utc();
        self.state.update(|state| state.open_modal(employee, today));
    }

    pub fn close_modal(self) {
        self.state.update(|state| {
            state.close_modal();
        });
    }

    pub fn update_field(self, field: AttendanceField, value: String) {
        self.state.update(|state| state.update_field(field, value));
    }

    pub async fn submit(self) {
        let Some(Some(payload)) = self.state.try_update(AttendanceState::begin_submit) else {
            return;
        };
        let result = self.repository.get_value().mark(&payload).await;
        if let Some(notification) = self.state.try_update(|state| state.finish_submit(&result)) {
            self.notify(notification);
        }
        if result.is_ok() {
            self.fetch().await;
        }
    }

    pub fn employee_name(self, id: &str) -> String {
        self.state.with_untracked(|state| state.employee_name(id))
    }

    pub fn has_active_filters(self) -> bool {
        self.state.with(AttendanceState::has_active_filters)
    }

    pub fn dismiss_error(self) {
        self.state.update(AttendanceState::dismiss_error);
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_default();
            let vm = AttendanceViewModel::new(AttendanceRepository::new(api), use_notifier());
            provide_context(vm);
            vm
        }
    }
}
