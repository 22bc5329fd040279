//! Employee list page: table of all employees plus a creation form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use staffdesk_app::ports::EmployeeGateway;
use staffdesk_domain::form::EmployeeForm;
use staffdesk_domain::id::EmployeeId;

use super::use_api;
use crate::components::{EmployeeFormView, EmployeeTable, Loading};

#[component]
pub fn EmployeeList() -> impl IntoView {
    let api = use_api();
    let (reload_trigger, set_reload_trigger) = signal(0);

    let employees = LocalResource::new({
        let api = api.clone();
        move || {
            reload_trigger.track();
            let api = api.clone();
            async move { api.fetch_all().await }
        }
    });

    let form = RwSignal::new(EmployeeForm::default());
    let (is_saving, set_is_saving) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    let handle_submit = {
        let api = api.clone();
        move || {
            let employee = match form.with_untracked(EmployeeForm::to_employee) {
                Ok(employee) => employee,
                Err(err) => {
                    set_error_message.set(Some(err.to_string()));
                    return;
                }
            };

            set_is_saving.set(true);
            set_error_message.set(None);

            let api = api.clone();
            spawn_local(async move {
                match api.upsert(employee).await {
                    Ok(_) => {
                        form.update(EmployeeForm::clear);
                        reload();
                    }
                    Err(err) => set_error_message.set(Some(err.to_string())),
                }
                set_is_saving.set(false);
            });
        }
    };

    let handle_delete = move |id: EmployeeId| {
        set_error_message.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api.delete(id).await {
                Ok(()) => reload(),
                Err(err) => set_error_message.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div>
            <h1>"Employees"</h1>
            <EmployeeFormView
                form
                submit_label="Add employee"
                busy=is_saving
                on_submit=handle_submit
            />
            {move || error_message.get().map(|msg| view! {
                <p class="error">{msg}</p>
            })}
            <Suspense fallback=move || view! { <Loading message="Loading employees\u{2026}"/> }>
                {move || {
                    employees.read().as_ref().map(|result| match result {
                        Ok(list) => view! {
                            <EmployeeTable employees=list.clone() on_delete=handle_delete.clone()/>
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load employees: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
