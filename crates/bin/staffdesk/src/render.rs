//! Plain-text rendering of the list and edit screens.

use std::io::{self, Write};

use staffdesk_app::routes::Route;
use staffdesk_domain::employee::{Employee, EmployeeField};
use staffdesk_domain::form::EmployeeForm;
use staffdesk_domain::id::EmployeeId;

const HEADERS: [&str; 4] = ["ID", "NAME", "DEPARTMENT", "EDIT"];

/// Render the employee table, one row per employee plus the path its edit
/// action leads to.
pub fn employee_table(
    out: &mut impl Write,
    employees: &[Employee],
    edit_route: impl Fn(EmployeeId) -> Route,
) -> io::Result<()> {
    if employees.is_empty() {
        return writeln!(out, "No employees found.");
    }

    let rows: Vec<[String; 4]> = employees
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.name.clone(),
                e.department.clone(),
                edit_route(e.id).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, cells: &[impl AsRef<str>], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

/// Render a form as labelled fields under a title.
pub fn employee_form(out: &mut impl Write, title: &str, form: &EmployeeForm) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for (field, value) in [
        (EmployeeField::Id, &form.id),
        (EmployeeField::Name, &form.name),
        (EmployeeField::Department, &form.department),
    ] {
        let label = format!("{field}:");
        writeln!(out, "  {label:<12}{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_table(employees: &[Employee]) -> String {
        let mut out = Vec::new();
        employee_table(&mut out, employees, Route::UpdateEmployee).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn should_render_placeholder_when_list_is_empty() {
        assert_eq!(render_table(&[]), "No employees found.\n");
    }

    #[test]
    fn should_align_columns_and_show_edit_path() {
        let employees = vec![
            Employee {
                id: EmployeeId::new(1),
                name: "Ann".to_string(),
                department: "Engineering".to_string(),
            },
            Employee {
                id: EmployeeId::new(12),
                name: "Bob".to_string(),
                department: "Ops".to_string(),
            },
        ];

        let rendered = render_table(&employees);

        assert_eq!(
            rendered,
            "ID  NAME  DEPARTMENT   EDIT\n\
             1   Ann   Engineering  /update-employee/1\n\
             12  Bob   Ops          /update-employee/12\n"
        );
    }

    #[test]
    fn should_render_form_fields_in_order() {
        let mut out = Vec::new();
        let form = EmployeeForm::new("7", "Bob", "Ops");

        employee_form(&mut out, "Update employee", &form).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Update employee\n  id:         7\n  name:       Bob\n  department: Ops\n"
        );
    }
}
