use leptos::*;
use std::rc::Rc;

use crate::api::{ApiClient, Employee};
use crate::pages::employees::{
    repository::EmployeesRepository, state::EmployeesState, utils::EmployeeField,
};
use crate::state::{use_notifier, Notification, Notifier};

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub state: RwSignal<EmployeesState>,
    repository: StoredValue<EmployeesRepository>,
    notifier: StoredValue<Rc<dyn Notifier>>,
}

impl EmployeesViewModel {
    pub fn new(repository: EmployeesRepository, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            state: create_rw_signal(EmployeesState::default()),
            repository: store_value(repository),
            notifier: store_value(notifier),
        }
    }

    fn notify(self, notification: Notification) {
        self.notifier.with_value(|notifier| notifier.notify(notification));
    }

    pub async fn load(self) {
        let Some(token) = self.state.try_update(EmployeesState::begin_load) else {
            return;
        };
        let result = self.repository.get_value().list().await;
        if let Err(err) = &result {
            log::warn!("loading employees failed: {}", err);
        }
        let applied = self
            .state
            .try_update(|state| state.finish_load(token, result))
            .unwrap_or(false);
        if !applied {
            log::debug!("discarded superseded employee list response");
        }
    }

    pub fn open_create_form(self) {
        self.state.update(EmployeesState::open_create_form);
    }

    pub fn close_form(self) {
        self.state.update(|state| {
            state.close_form();
        });
    }

    pub fn update_field(self, field: EmployeeField, value: String) {
        self.state.update(|state| state.update_field(field, value));
    }

    pub async fn submit(self) {
        let Some(Some(payload)) = self.state.try_update(EmployeesState::begin_submit) else {
            return;
        };
        let result = self.repository.get_value().create(&payload).await;
        if let Some(notification) = self.state.try_update(|state| state.finish_submit(&result)) {
            self.notify(notification);
        }
        if result.is_ok() {
            self.load().await;
        }
    }

    pub fn request_delete(self, employee: Employee) {
        self.state.update(|state| state.request_delete(employee));
    }

    pub fn cancel_delete(self) {
        self.state.update(|state| {
            state.cancel_delete();
        });
    }

    pub async fn confirm_delete(self) {
        let Some(Some(id)) = self.state.try_update(EmployeesState::begin_delete) else {
            return;
        };
        let result = self.repository.get_value().delete(&id).await;
        if let Some(notification) = self.state.try_update(|state| state.finish_delete(&result)) {
            self.notify(notification);
        }
        if result.is_ok() {
            self.load().await;
        }
    }

    pub fn dismiss_error(self) {
        self.state.update(EmployeesState::dismiss_error);
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_default();
            let vm = EmployeesViewModel::new(EmployeesRepository::new(api), use_notifier());
            provide_context(vm);
            vm
        }
    }
}
