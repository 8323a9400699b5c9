//! Employee lookups.

use crate::model::Employee;
use techstore_search::{filter_all, normalize};

/// Employees matching both first and last name.
///
/// With `partial`, each query only has to be contained in the corresponding
/// name instead of equal to it.
pub fn by_full_name<'a>(employees: &'a [Employee], first: &str, last: &str, partial: bool) -> Vec<&'a Employee> {
    let first = normalize(first);
    let last = normalize(last);
    filter_all(employees, |e| {
        let first_name = normalize(&e.first_name);
        let last_name = normalize(&e.last_name);
        if partial {
            first_name.contains(&first) && last_name.contains(&last)
        } else {
            first_name == first && last_name == last
        }
    })
}

/// Employees in a department.
pub fn by_department<'a>(employees: &'a [Employee], department: &str) -> Vec<&'a Employee> {
    let target = normalize(department);
    filter_all(employees, |e| normalize(&e.department) == target)
}

/// Employees whose active flag equals `active`.
pub fn by_status(employees: &[Employee], active: bool) -> Vec<&Employee> {
    filter_all(employees, |e| e.active == active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    fn ids(employees: &[&Employee]) -> Vec<u32> {
        employees.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_full_name_exact() {
        let catalog = Catalog::sample();
        assert_eq!(ids(&by_full_name(&catalog.employees, "carlos", " LÓPEZ ", false)), vec![102]);
        assert!(by_full_name(&catalog.employees, "Carl", "López", false).is_empty());
    }

    #[test]
    fn test_full_name_partial() {
        let catalog = Catalog::sample();
        assert_eq!(ids(&by_full_name(&catalog.employees, "a", "ez", true)), vec![102, 103]);
        assert_eq!(ids(&by_full_name(&catalog.employees, "", "", true)), vec![101, 102, 103, 104]);
    }

    #[test]
    fn test_by_department() {
        let catalog = Catalog::sample();
        assert_eq!(ids(&by_department(&catalog.employees, "ventas")), vec![101, 103]);
        assert!(by_department(&catalog.employees, "Marketing").is_empty());
    }

    #[test]
    fn test_by_status() {
        let catalog = Catalog::sample();
        assert_eq!(ids(&by_status(&catalog.employees, true)), vec![101, 102, 104]);
        assert_eq!(ids(&by_status(&catalog.employees, false)), vec![103]);
    }
}
