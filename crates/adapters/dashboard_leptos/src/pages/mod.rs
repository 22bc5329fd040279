mod employee_list;
mod not_found;
mod update_employee;

pub use employee_list::EmployeeList;
pub use not_found::NotFound;
pub use update_employee::UpdateEmployee;

use crate::api::ApiClient;
use leptos::prelude::*;

/// The client provided by `<App/>`, or a default one outside of it.
fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}
