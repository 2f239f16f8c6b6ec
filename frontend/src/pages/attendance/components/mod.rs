pub mod filters;
pub mod form;
pub mod records;
pub mod summary;

pub use filters::AttendanceFiltersCard;
pub use form::MarkAttendanceModal;
pub use records::AttendanceTable;
pub use summary::SummaryCards;
