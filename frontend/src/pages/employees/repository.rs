use crate::api::{ApiClient, ApiError, CreateEmployee, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create(&self, payload: &CreateEmployee) -> Result<Option<Employee>, ApiError> {
        self.client.create_employee(payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }
}
