use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use tracing::debug;

pub fn run(roster: &mut Roster, id: i32) -> Result<CmdResult> {
    let removed = roster.remove(id)?;
    debug!(id, name = removed.name(), "deleted person");

    let mut result = CmdResult::default().with_affected_persons(vec![removed]);
    result.add_message(CmdMessage::success("Person deleted successfully."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::model::Employee;

    #[test]
    fn deletes_first_match_only() {
        let mut roster = Roster::new();
        roster.add(Employee::new("A", 1, 1.0));
        roster.add(Employee::new("B", 2, 2.0));
        roster.add(Employee::new("C", 2, 3.0));

        let result = run(&mut roster, 2).unwrap();
        assert_eq!(result.affected_persons[0].name(), "B");
        let names: Vec<_> = roster.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut roster = Roster::new();
        assert!(matches!(run(&mut roster, 3), Err(RosterError::NotFound(3))));
    }
}
