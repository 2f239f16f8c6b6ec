use crate::api::{ApiError, DashboardSummary};
use crate::state::{LoadState, RequestToken, RequestTokens};

pub const LOAD_FAILED: &str = "Failed to load dashboard data";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub summary: LoadState<DashboardSummary>,
    tokens: RequestTokens,
}

impl DashboardState {
    pub fn begin_load(&mut self) -> RequestToken {
        self.summary.begin();
        self.tokens.issue()
    }

    /// Applies a summary response. A failed reload keeps the last summary on screen.
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        result: Result<DashboardSummary, ApiError>,
    ) -> bool {
        if !self.tokens.is_current(token) {
            return false;
        }
        match result {
            Ok(summary) => self.summary.succeed(summary),
            Err(err) => {
                if let Some(message) = self.summary.fail(err.message_or(LOAD_FAILED)) {
                    log::warn!("dashboard reload failed, keeping last summary: {}", message);
                }
            }
        }
        true
    }
}
