mod employee_form;
mod employee_table;
mod loading;
mod nav;

pub use employee_form::EmployeeFormView;
pub use employee_table::EmployeeTable;
pub use loading::Loading;
pub use nav::Nav;
