//! # staffdesk-dashboard
//!
//! Browser front-end for the `/v1/emp` API, rendered client-side with Leptos.
//! Build with `trunk build --release` and point staffdeskd's `dashboard_dir`
//! at the resulting `dist/`.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;

use api::ApiClient;
use components::Nav;
use pages::{EmployeeList, NotFound, UpdateEmployee};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::default());

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=EmployeeList/>
                    <Route path=path!("update-employee/:id") view=UpdateEmployee/>
                </Routes>
            </main>
        </Router>
    }
}
