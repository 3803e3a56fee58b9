//! The "high salary" rule in its three evaluation modes.

use roster_seeker::{Deferred, Lazy, Query, Seekable, Source};

use crate::model::{Employee, SalaryLine};

/// Inclusive lower bound for a high salary.
pub const SALARY_THRESHOLD: i64 = 50_000;

/// Projection used by the deferred pipeline.
pub type SalaryProjection = fn(&Employee) -> SalaryLine;

/// `annual_salary >= SALARY_THRESHOLD`
pub fn high_salary_query() -> Query {
    Query::new()
        .and_gte(Employee::ANNUAL_SALARY, SALARY_THRESHOLD)
        .build()
}

pub fn salary_line(employee: &Employee) -> SalaryLine {
    SalaryLine::from(employee)
}

/// Filters and projects `employees` right away.
///
/// The result is detached from wherever `employees` came from.
pub fn eager_high_earners(employees: &[Employee]) -> Vec<SalaryLine> {
    high_salary_query().select(employees, Employee::accessor, salary_line)
}

/// Stores the rule against `staff`; each traversal rescans it.
pub fn deferred_high_earners(staff: &Source<Employee>) -> Deferred<Employee, SalaryProjection> {
    Deferred::new(staff, high_salary_query(), salary_line as SalaryProjection)
}

/// Yields high earners one at a time. Attach a visit hook with
/// [`Lazy::on_visit`] to observe every employee examined.
pub fn high_salaried_employees(staff: &Source<Employee>) -> Lazy<Employee> {
    high_salary_query().lazy(staff)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use proptest::prelude::*;
    use roster_seeker::Decimal;

    use super::*;
    use crate::data;

    fn names(lines: &[SalaryLine]) -> Vec<&str> {
        lines.iter().map(|l| l.full_name.as_str()).collect()
    }

    fn staff_earning(salary: Decimal) -> Employee {
        Employee {
            annual_salary: salary,
            ..data::sam_sulek()
        }
    }

    #[test]
    fn eager_selects_bob_and_sarah() {
        let lines = eager_high_earners(&data::employees());
        assert_eq!(names(&lines), vec!["Bob Jones", "Sarah Jameson"]);
        assert_eq!(lines[0].annual_salary.to_string(), "60000.3");
    }

    #[test]
    fn threshold_is_inclusive() {
        let exact = staff_earning(Decimal::from(SALARY_THRESHOLD));
        let below = staff_earning(Decimal::new(4999999, 2));

        assert_eq!(eager_high_earners(&[exact]).len(), 1);
        assert!(eager_high_earners(&[below]).is_empty());
    }

    #[test]
    fn deferred_sees_later_hires() {
        let staff = Source::new(data::employees());
        let deferred = deferred_high_earners(&staff);
        staff.push(data::sam_sulek());

        let lines = deferred.run();
        assert_eq!(names(&lines), vec!["Bob Jones", "Sarah Jameson", "Sam Sulek"]);
        assert_eq!(lines[2].to_string(), "Sam Sulek's salary is 100000.20");
    }

    #[test]
    fn lazy_hook_sees_every_employee() {
        let staff = Source::new(data::employees());
        let visited = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&visited);
        let lazy = high_salaried_employees(&staff)
            .on_visit(move |e: &Employee| log.borrow_mut().push(e.id));

        let ids: Vec<u32> = lazy.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(*visited.borrow(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn query_is_a_single_gte_clause() {
        let query = high_salary_query();
        assert_eq!(query.and_clauses().len(), 1);
        assert!(query.or_clauses().is_empty());
        assert!(query.not_clauses().is_empty());
    }

    proptest! {
        #[test]
        fn qualifies_iff_at_or_above_threshold(mantissa in -10_000_000i64..20_000_000, scale in 0u32..4) {
            let salary = Decimal::new(mantissa, scale);
            let qualifies = salary >= Decimal::from(SALARY_THRESHOLD);

            prop_assert_eq!(eager_high_earners(&[staff_earning(salary)]).len() == 1, qualifies);
        }
    }
}
