//! The fixed sample roster.

use roster_seeker::Decimal;

use crate::model::{Department, Employee};

fn employee(
    id: u32,
    first_name: &str,
    last_name: &str,
    annual_salary: Decimal,
    is_manager: bool,
    department_id: u32,
) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        annual_salary,
        is_manager,
        department_id,
    }
}

/// Employees 1 to 4, present from the start.
pub fn employees() -> Vec<Employee> {
    vec![
        employee(1, "Bob", "Jones", Decimal::new(600003, 1), true, 1),
        employee(2, "Sarah", "Jameson", Decimal::new(800001, 1), true, 2),
        employee(3, "Douglas", "Roberts", Decimal::new(400002, 1), false, 3),
        employee(4, "Jane", "Stevens", Decimal::new(300002, 1), false, 1),
    ]
}

pub fn departments() -> Vec<Department> {
    [(1, "HR", "Human Resources"), (2, "FN", "Finance"), (3, "TE", "Technology")]
        .into_iter()
        .map(|(id, short_name, long_name)| Department {
            id,
            short_name: short_name.to_string(),
            long_name: long_name.to_string(),
        })
        .collect()
}

/// Employee 5, hired after the pipelines are built.
pub fn sam_sulek() -> Employee {
    employee(5, "Sam", "Sulek", Decimal::new(10000020, 2), true, 2)
}

/// Employee 6, hired last.
pub fn jonah_davis() -> Employee {
    employee(6, "Jonah", "Davis", Decimal::new(12000020, 2), false, 3)
}
