//! Front-end routing table.
//!
//! | Path                    | Route                         |
//! |-------------------------|-------------------------------|
//! | `/`                     | [`Route::EmployeeList`]       |
//! | `/update-employee/{id}` | [`Route::UpdateEmployee`]     |

use std::fmt;

use staffdesk_domain::id::EmployeeId;

const UPDATE_PREFIX: &str = "/update-employee/";

/// A screen a front-end can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Employee list with the creation form.
    EmployeeList,
    /// Edit form for one employee.
    UpdateEmployee(EmployeeId),
}

impl Route {
    /// Resolve a path to a route.
    ///
    /// Update paths may end with a single `/`. Returns `None` for unknown
    /// paths and for an id that is not a plain run of digits.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Self::EmployeeList);
        }
        let path = path.strip_suffix('/').unwrap_or(path);
        let id = path.strip_prefix(UPDATE_PREFIX)?;
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        id.parse().ok().map(Self::UpdateEmployee)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmployeeList => f.write_str("/"),
            Self::UpdateEmployee(id) => write!(f, "{UPDATE_PREFIX}{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_root_to_list() {
        assert_eq!(Route::parse("/"), Some(Route::EmployeeList));
    }

    #[test]
    fn should_resolve_update_path_with_id() {
        assert_eq!(
            Route::parse("/update-employee/7"),
            Some(Route::UpdateEmployee(EmployeeId::new(7)))
        );
        assert_eq!(
            Route::parse("/update-employee/7/"),
            Some(Route::UpdateEmployee(EmployeeId::new(7)))
        );
    }

    #[test]
    fn should_reject_unknown_paths() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/employees"), None);
        assert_eq!(Route::parse("/update-employee"), None);
        assert_eq!(Route::parse("/update-employee/"), None);
        assert_eq!(Route::parse("/update-employee/abc"), None);
        assert_eq!(Route::parse("/update-employee/7/extra"), None);
        assert_eq!(Route::parse("/update-employee/7//"), None);
    }

    #[test]
    fn should_reject_doubled_slashes_and_padded_ids() {
        assert_eq!(Route::parse("//"), None);
        assert_eq!(Route::parse("/update-employee/ 7"), None);
        assert_eq!(Route::parse("/update-employee/+7"), None);
        assert_eq!(Route::parse("/update-employee/-7"), None);
    }

    #[test]
    fn should_render_canonical_paths() {
        assert_eq!(Route::EmployeeList.to_string(), "/");
        assert_eq!(
            Route::UpdateEmployee(EmployeeId::new(12)).to_string(),
            "/update-employee/12"
        );
    }

    #[test]
    fn should_roundtrip_through_display_and_parse() {
        let route = Route::UpdateEmployee(EmployeeId::new(3));
        assert_eq!(Route::parse(&route.to_string()), Some(route));
    }
}
