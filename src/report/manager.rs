use std::collections::BTreeMap;

use crate::types::EmployeeListing;

/// Group manager ids by the manager's full name, as seen from the employees
/// that report to them.
///
/// Keys are display names, not ids: two managers sharing a first and last
/// name land under one key, with both ids in the value. Employees recorded
/// as their own manager are skipped, as are managers whose row is gone.
#[must_use]
pub fn group_employees_by_manager(employees: &[EmployeeListing]) -> BTreeMap<String, Vec<i64>> {
    let mut groups: BTreeMap<String, Vec<i64>> = BTreeMap::new();

    for employee in employees {
        let (Some(manager_id), Some(name)) = (employee.manager_id, &employee.manager) else {
            continue;
        };
        if manager_id == employee.id {
            continue;
        }

        let ids = groups.entry(name.clone()).or_default();
        if !ids.contains(&manager_id) {
            ids.push(manager_id);
        }
    }

    groups
}

/// Employees whose manager is one of `manager_ids`, in input order.
#[must_use]
pub fn employees_reporting_to<'a>(
    employees: &'a [EmployeeListing],
    manager_ids: &[i64],
) -> Vec<&'a EmployeeListing> {
    employees
        .iter()
        .filter(|e| e.manager_id.is_some_and(|m| m != e.id && manager_ids.contains(&m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, first: &str, last: &str, manager: Option<(i64, &str)>) -> EmployeeListing {
        EmployeeListing {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            title: Some("Engineer".to_string()),
            department: Some("Engineering".to_string()),
            salary: Some(90000.0),
            manager_id: manager.map(|(id, _)| id),
            manager: manager.map(|(_, name)| name.to_string()),
        }
    }

    #[test]
    fn test_groups_by_manager_name() {
        let employees = vec![
            employee(1, "Grace", "Hopper", None),
            employee(2, "Ada", "Lovelace", Some((1, "Grace Hopper"))),
            employee(3, "Alan", "Turing", Some((1, "Grace Hopper"))),
            employee(4, "Edsger", "Dijkstra", Some((2, "Ada Lovelace"))),
        ];

        let groups = group_employees_by_manager(&employees);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Grace Hopper"], vec![1]);
        assert_eq!(groups["Ada Lovelace"], vec![2]);
        assert_eq!(
            groups.keys().collect::<Vec<_>>(),
            vec!["Ada Lovelace", "Grace Hopper"]
        );
    }

    #[test]
    fn test_same_name_managers_share_a_group() {
        let employees = vec![
            employee(1, "John", "Smith", None),
            employee(2, "John", "Smith", None),
            employee(3, "Ada", "Lovelace", Some((1, "John Smith"))),
            employee(4, "Alan", "Turing", Some((2, "John Smith"))),
        ];

        let groups = group_employees_by_manager(&employees);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["John Smith"], vec![1, 2]);

        let reports = employees_reporting_to(&employees, &groups["John Smith"]);
        let ids: Vec<i64> = reports.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_skips_self_managed_and_missing_managers() {
        let mut dangling = employee(3, "Alan", "Turing", None);
        dangling.manager_id = Some(42);

        let employees = vec![
            employee(1, "Grace", "Hopper", Some((1, "Grace Hopper"))),
            employee(2, "Ada", "Lovelace", None),
            dangling,
        ];

        assert!(group_employees_by_manager(&employees).is_empty());
        assert!(employees_reporting_to(&employees, &[1]).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(group_employees_by_manager(&[]).is_empty());
        assert!(employees_reporting_to(&[], &[1, 2]).is_empty());
    }
}
