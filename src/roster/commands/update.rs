use crate::commands::{CmdMessage, CmdResult, EmployeeUpdate, check_salary};
use crate::error::Result;
use crate::model::Person;
use crate::roster::Roster;
use tracing::debug;

pub fn run(roster: &mut Roster, id: i32, update: EmployeeUpdate) -> Result<CmdResult> {
    let salary = check_salary(update.salary)?;
    let emp = roster.update(id, update.name, update.id, salary)?;
    debug!(old_id = id, new_id = emp.id, "updated employee");

    let mut result = CmdResult::default().with_affected_persons(vec![Person::from(emp.clone())]);
    result.add_message(CmdMessage::success("Person information updated successfully."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::model::Employee;

    fn sample() -> Roster {
        let mut roster = Roster::new();
        roster.add(Employee::new("Al", 7, 100.0));
        roster.add(Employee::new("Cy", 8, 200.0));
        roster
    }

    #[test]
    fn updates_matching_employee() {
        let mut roster = sample();
        let result = run(&mut roster, 7, EmployeeUpdate::new("Bob", 7, 5000.0)).unwrap();

        assert_eq!(roster.find_by_id(7), Some(&Employee::new("Bob", 7, 5000.0)));
        assert_eq!(roster.find_by_id(8), Some(&Employee::new("Cy", 8, 200.0)));
        assert_eq!(result.affected_persons[0].name(), "Bob");
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut roster = sample();
        let err = run(&mut roster, 99, EmployeeUpdate::new("X", 1, 1.0)).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(99)));
        assert_eq!(roster, sample());
    }

    #[test]
    fn nan_salary_leaves_employee_untouched() {
        let mut roster = sample();
        let err = run(&mut roster, 7, EmployeeUpdate::new("Bob", 7, f64::NAN)).unwrap_err();
        assert!(matches!(err, RosterError::InvalidSalary(_)));
        assert_eq!(roster, sample());
    }
}
