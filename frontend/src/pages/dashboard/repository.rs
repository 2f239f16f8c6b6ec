use crate::api::{ApiClient, ApiError, DashboardSummary};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, ApiError> {
        self.client.get_dashboard_summary().await
    }
}
