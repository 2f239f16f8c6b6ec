use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, CreateEmployee, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_employee(
        &self,
        payload: &CreateEmployee,
    ) -> Result<Option<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        self.send_created(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}", encode_segment(id)))
            .await;
        self.send_empty(self.http_client().delete(url)).await
    }
}
