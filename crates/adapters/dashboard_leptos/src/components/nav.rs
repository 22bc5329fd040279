use leptos::prelude::*;
use staffdesk_app::routes::Route;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><a href=Route::EmployeeList.to_string()>"Employees"</a></li>
            </ul>
        </nav>
    }
}
