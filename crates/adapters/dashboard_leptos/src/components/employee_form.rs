//! Three-field employee form bound to an [`EmployeeForm`] signal.

use leptos::prelude::*;
use staffdesk_domain::employee::EmployeeField;
use staffdesk_domain::form::EmployeeForm;

const FIELDS: [EmployeeField; 3] = [
    EmployeeField::Id,
    EmployeeField::Name,
    EmployeeField::Department,
];

fn label(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::Id => "ID",
        EmployeeField::Name => "Name",
        EmployeeField::Department => "Department",
    }
}

/// Editable form; submission is disabled until every field is filled in.
#[component]
pub fn EmployeeFormView(
    /// Form state, shared with the owning page.
    form: RwSignal<EmployeeForm>,
    /// Caption of the submit button.
    #[prop(into)]
    submit_label: String,
    /// Whether a save is in flight.
    #[prop(into)]
    busy: Signal<bool>,
    /// Called when the user submits a valid form.
    #[prop(into)]
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(EmployeeForm::is_valid) {
            on_submit.run(());
        }
    };

    view! {
        <form class="employee-form" on:submit=handle_submit>
            {FIELDS.into_iter().map(|field| {
                view! {
                    <label>
                        {label(field)}
                        <input
                            type="text"
                            name=field.as_str()
                            required=true
                            prop:value=move || form.with(|f| f.field(field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| *f.field_mut(field) = value);
                            }
                        />
                    </label>
                }
            }).collect_view()}
            <button
                type="submit"
                disabled=move || busy.get() || !form.with(EmployeeForm::is_valid)
            >
                {submit_label}
            </button>
        </form>
    }
}
