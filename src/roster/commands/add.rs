use crate::commands::{CmdMessage, CmdResult, check_salary};
use crate::error::Result;
use crate::model::{Employee, Person, PersonKind};
use crate::roster::Roster;
use tracing::debug;

pub fn run(
    roster: &mut Roster,
    kind: PersonKind,
    name: String,
    id: i32,
    salary: f64,
) -> Result<CmdResult> {
    let salary = check_salary(salary)?;
    let person = match kind {
        PersonKind::Employee => Person::from(Employee::new(name, id, salary)),
    };
    debug!(kind = %person.kind(), id, "adding person");
    roster.add(person.clone());

    let mut result = CmdResult::default().with_affected_persons(vec![person]);
    result.add_message(CmdMessage::success(format!("{} added successfully.", kind)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn appends_employee() {
        let mut roster = Roster::new();
        run(&mut roster, PersonKind::Employee, "Alice".into(), 1, 50000.0).unwrap();
        let result = run(&mut roster, PersonKind::Employee, "Bob".into(), 2, 60000.0).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.list_all()[1].name(), "Bob");
        assert_eq!(result.affected_persons.len(), 1);
        assert_eq!(result.messages[0].content, "Employee added successfully.");
    }

    #[test]
    fn non_finite_salary_is_rejected() {
        let mut roster = Roster::new();
        for salary in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = run(&mut roster, PersonKind::Employee, "Al".into(), 1, salary).unwrap_err();
            assert!(matches!(err, RosterError::InvalidSalary(_)));
        }
        assert!(roster.is_empty());
    }
}
