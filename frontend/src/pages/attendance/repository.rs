use crate::api::{
    ApiClient, ApiError, AttendanceQuery, AttendanceRecord, Employee, EmployeeAttendance,
    MarkAttendance,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn list(&self, query: &AttendanceQuery) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance(query).await
    }

    pub async fn employee_attendance(
        &self,
        employee_id: &str,
        query: &AttendanceQuery,
    ) -> Result<EmployeeAttendance, ApiError> {
        self.client.get_employee_attendance(employee_id, query).await
    }

    pub async fn mark(
        &self,
        payload: &MarkAttendance,
    ) -> Result<Option<AttendanceRecord>, ApiError> {
        self.client.mark_attendance(payload).await
    }
}
