//! Employee and department records, and the projected salary line.

use std::fmt;

use roster_seeker::{Decimal, Number, Seekable, Value};

/// One employee. Records are appended to the live roster over time.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub annual_salary: Decimal,
    pub is_manager: bool,
    /// Refers to [`Department::id`]. Not checked.
    pub department_id: u32,
}

impl Employee {
    pub const ID: &'static str = "id";
    pub const FIRST_NAME: &'static str = "first_name";
    pub const LAST_NAME: &'static str = "last_name";
    pub const ANNUAL_SALARY: &'static str = "annual_salary";
    pub const IS_MANAGER: &'static str = "is_manager";
    pub const DEPARTMENT_ID: &'static str = "department_id";

    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Seekable for Employee {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            Self::ID => Value::Number(Number::from(self.id)),
            Self::FIRST_NAME => Value::String(&self.first_name),
            Self::LAST_NAME => Value::String(&self.last_name),
            Self::ANNUAL_SALARY => Value::Number(Number::Decimal(self.annual_salary)),
            Self::IS_MANAGER => Value::Bool(self.is_manager),
            Self::DEPARTMENT_ID => Value::Number(Number::from(self.department_id)),
            _ => Value::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: u32,
    pub short_name: String,
    pub long_name: String,
}

impl Department {
    pub const ID: &'static str = "id";
    pub const SHORT_NAME: &'static str = "short_name";
    pub const LONG_NAME: &'static str = "long_name";
}

impl Seekable for Department {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            Self::ID => Value::Number(Number::from(self.id)),
            Self::SHORT_NAME => Value::String(&self.short_name),
            Self::LONG_NAME => Value::String(&self.long_name),
            _ => Value::None,
        }
    }
}

/// What the salary pipelines project each qualifying employee to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SalaryLine {
    pub full_name: String,
    pub annual_salary: Decimal,
}

impl From<&Employee> for SalaryLine {
    fn from(employee: &Employee) -> Self {
        SalaryLine {
            full_name: employee.full_name(),
            annual_salary: employee.annual_salary,
        }
    }
}

impl fmt::Display for SalaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s salary is {}", self.full_name, self.annual_salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Employee {
        Employee {
            id: 1,
            first_name: "Bob".to_string(),
            last_name: "Jones".to_string(),
            annual_salary: Decimal::new(600003, 1),
            is_manager: true,
            department_id: 1,
        }
    }

    #[test]
    fn full_name_joins_with_space() {
        assert_eq!(bob().full_name(), "Bob Jones");
    }

    #[test]
    fn employee_fields_are_seekable() {
        let bob = bob();
        assert_eq!(
            bob.seeker_field_value(Employee::ANNUAL_SALARY),
            Value::Number(Number::Decimal(Decimal::new(600003, 1)))
        );
        assert_eq!(bob.seeker_field_value(Employee::IS_MANAGER), Value::Bool(true));
        assert_eq!(bob.seeker_field_value(Employee::LAST_NAME), Value::String("Jones"));
        assert_eq!(
            bob.seeker_field_value(Employee::DEPARTMENT_ID),
            Value::Number(Number::U64(1))
        );
        assert_eq!(bob.seeker_field_value("full_name"), Value::None);
    }

    #[test]
    fn department_fields_are_seekable() {
        let finance = Department {
            id: 2,
            short_name: "FN".to_string(),
            long_name: "Finance".to_string(),
        };
        assert_eq!(finance.seeker_field_value(Department::SHORT_NAME), Value::String("FN"));
        assert_eq!(
            Department::accessor(&finance, Department::LONG_NAME),
            Value::String("Finance")
        );
        assert_eq!(
            finance.seeker_field_value(Department::ID),
            Value::Number(Number::U64(2))
        );
    }

    #[test]
    fn salary_line_projection_and_display() {
        let line = SalaryLine::from(&bob());
        assert_eq!(line.full_name, "Bob Jones");
        assert_eq!(line.to_string(), "Bob Jones's salary is 60000.3");
    }
}
