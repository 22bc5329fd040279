//! Employee table with per-row edit link and delete button.

use leptos::prelude::*;
use leptos_router::components::A;
use staffdesk_app::routes::Route;
use staffdesk_domain::employee::Employee;
use staffdesk_domain::id::EmployeeId;

/// A table displaying a list of employees.
#[component]
pub fn EmployeeTable(
    /// The employees to display.
    employees: Vec<Employee>,
    /// Called with the id of the row whose delete button was pressed.
    #[prop(into)]
    on_delete: Callback<EmployeeId>,
) -> impl IntoView {
    if employees.is_empty() {
        view! {
            <p>"No employees found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Department"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {employees.into_iter().map(|employee| {
                        view! {
                            <EmployeeRow employee on_delete/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

#[component]
fn EmployeeRow(employee: Employee, #[prop(into)] on_delete: Callback<EmployeeId>) -> impl IntoView {
    let id = employee.id;

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{employee.name}</td>
            <td>{employee.department}</td>
            <td>
                <A href=Route::UpdateEmployee(id).to_string()>"Edit"</A>
                " "
                <button on:click=move |_| on_delete.run(id)>"Delete"</button>
            </td>
        </tr>
    }
}
