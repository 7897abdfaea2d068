use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

pub const NAME_WIDTH: usize = 15;
pub const ID_WIDTH: usize = 10;
pub const SALARY_WIDTH: usize = 10;

/// The kinds of person a roster can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonKind {
    Employee,
}

impl PersonKind {
    /// Tag written in front of every record in the text format.
    pub fn tag(&self) -> &'static str {
        match self {
            PersonKind::Employee => "Employee",
        }
    }

    /// Maps the numeric type selector offered by the add prompt.
    pub fn from_selector(selector: i64) -> Result<Self> {
        match selector {
            1 => Ok(PersonKind::Employee),
            other => Err(RosterError::InvalidSelector(other.to_string())),
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PersonKind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Employee" => Ok(PersonKind::Employee),
            other => Err(RosterError::InvalidSelector(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub id: i32,
    pub salary: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, id: i32, salary: f64) -> Self {
        Self {
            name: name.into(),
            id,
            salary,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            pad_left(&self.name, NAME_WIDTH),
            pad_left(&self.id.to_string(), ID_WIDTH),
            pad_left(&self.salary.to_string(), SALARY_WIDTH)
        )
    }
}

/// A record held by the roster.
///
/// Each variant carries its own fields. Callers that only need to show or
/// name a record go through [`Person::kind`], [`Person::name`] and the
/// `Display` impl, so new variants do not leak into listing code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Person {
    Employee(Employee),
}

impl Person {
    pub fn kind(&self) -> PersonKind {
        match self {
            Person::Employee(_) => PersonKind::Employee,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::Employee(emp) => &emp.name,
        }
    }

    pub fn as_employee(&self) -> Option<&Employee> {
        match self {
            Person::Employee(emp) => Some(emp),
        }
    }

    pub fn as_employee_mut(&mut self) -> Option<&mut Employee> {
        match self {
            Person::Employee(emp) => Some(emp),
        }
    }
}

impl From<Employee> for Person {
    fn from(emp: Employee) -> Self {
        Person::Employee(emp)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::Employee(emp) => emp.fmt(f),
        }
    }
}

/// Column header matching the widths used by `Display for Person`.
pub fn display_header() -> String {
    format!(
        "{}{}{}",
        pad_left("Name", NAME_WIDTH),
        pad_left("ID", ID_WIDTH),
        pad_left("Salary", SALARY_WIDTH)
    )
}

/// Right-aligns `s` in `width` terminal columns. Longer values are kept whole.
pub(crate) fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employees_equal_when_all_fields_match() {
        let a = Employee::new("Alice", 1, 50000.0);
        assert_eq!(a, Employee::new("Alice", 1, 50000.0));
        assert_ne!(a, Employee::new("Alice", 2, 50000.0));
        assert_ne!(a, Employee::new("Alicia", 1, 50000.0));
        assert_ne!(a, Employee::new("Alice", 1, 50000.5));
    }

    #[test]
    fn display_uses_fixed_columns() {
        let person = Person::from(Employee::new("Alice", 1, 50000.0));
        assert_eq!(
            person.to_string(),
            "          Alice         1     50000"
        );
        assert_eq!(person.to_string().len(), NAME_WIDTH + ID_WIDTH + SALARY_WIDTH);
    }

    #[test]
    fn header_lines_up_with_rows() {
        assert_eq!(display_header(), "           Name        ID    Salary");
    }

    #[test]
    fn long_names_are_not_truncated() {
        let person = Person::from(Employee::new("Maximiliana-Rosalind", 3, 1.5));
        assert!(person.to_string().starts_with("Maximiliana-Rosalind"));
    }

    #[test]
    fn selector_one_is_employee() {
        assert_eq!(PersonKind::from_selector(1).unwrap(), PersonKind::Employee);
        assert!(matches!(
            PersonKind::from_selector(2),
            Err(RosterError::InvalidSelector(_))
        ));
    }

    #[test]
    fn kind_round_trips_through_tag() {
        let kind: PersonKind = "Employee".parse().unwrap();
        assert_eq!(kind.tag(), "Employee");
        assert!("Manager".parse::<PersonKind>().is_err());
    }

    #[test]
    fn person_capabilities_reach_the_variant() {
        let mut person = Person::from(Employee::new("Bob", 2, 10.0));
        assert_eq!(person.kind(), PersonKind::Employee);
        assert_eq!(person.name(), "Bob");
        person.as_employee_mut().unwrap().salary = 20.0;
        assert_eq!(person.as_employee().unwrap().salary, 20.0);
    }
}
