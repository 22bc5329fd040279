//! Update page: loads one employee into the form and saves changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;
use staffdesk_app::ports::EmployeeGateway;
use staffdesk_app::routes::Route;
use staffdesk_domain::form::EmployeeForm;
use staffdesk_domain::id::EmployeeId;

use super::use_api;
use crate::components::{EmployeeFormView, Loading};

#[component]
pub fn UpdateEmployee() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let id = move || {
        params
            .read()
            .get("id")
            .unwrap_or_default()
            .parse::<EmployeeId>()
    };

    let form = RwSignal::new(EmployeeForm::default());
    let (is_saving, set_is_saving) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);
    let (next_route, set_next_route) = signal::<Option<Route>>(None);

    let employee = LocalResource::new({
        let api = api.clone();
        move || {
            let id = id();
            let api = api.clone();
            async move {
                let id = id.map_err(|err| err.to_string())?;
                let employee = api.fetch_one(id).await.map_err(|err| err.to_string())?;
                form.set(EmployeeForm::from(&employee));
                Ok::<_, String>(employee)
            }
        }
    });

    let handle_submit = move || {
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
                Ok(saved) => {
                    form.set(EmployeeForm::from(&saved));
                    set_next_route.set(Some(Route::EmployeeList));
                }
                Err(err) => set_error_message.set(Some(err.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div>
            <h1>"Update Employee"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading employee\u{2026}"/> }>
                {move || {
                    employee.read().as_ref().map(|result| match result {
                        Ok(_) => view! {
                            <EmployeeFormView
                                form
                                submit_label="Save"
                                busy=is_saving
                                on_submit=handle_submit.clone()
                            />
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load employee: "} {err.clone()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
            {move || error_message.get().map(|msg| view! {
                <p class="error">{msg}</p>
            })}
            {move || next_route.get().map(|route| view! {
                <Redirect path=route.to_string()/>
            })}
            <p><a href=Route::EmployeeList.to_string()>"\u{2190} Back to employees"</a></p>
        </div>
    }
}
