mod quick_actions;
mod stats;
mod summary_table;

pub use quick_actions::QuickActions;
pub use stats::DashboardStats;
pub use summary_table::EmployeeSummaryTable;
