use super::{
    client::{encode_segment, ApiClient},
    types::{
        ApiError, AttendanceQuery, AttendanceRecord, DashboardSummary, EmployeeAttendance,
        MarkAttendance,
    },
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/attendance").await;
        let params = query.params();
        let mut request = self.http_client().get(url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send_json(request).await
    }

    pub async fn get_employee_attendance(
        &self,
        employee_id: &str,
        query: &AttendanceQuery,
    ) -> Result<EmployeeAttendance, ApiError> {
        let url = self
            .endpoint(&format!(
                "/attendance/employee/{}",
                encode_segment(employee_id)
            ))
            .await;
        let params = query.date_params();
        let mut request = self.http_client().get(url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send_json(request).await
    }

    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendance,
    ) -> Result<Option<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/attendance").await;
        self.send_created(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let url = self.endpoint("/attendance/dashboard/summary").await;
        self.send_json(self.http_client().get(url)).await
    }
}
