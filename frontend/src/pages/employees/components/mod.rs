pub mod form;
pub mod table;

pub use form::EmployeeFormModal;
pub use table::EmployeeTable;
