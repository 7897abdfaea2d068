//! # API Facade
//!
//! [`RosterApi`] is the single entry point for roster operations. It owns the
//! session's in-memory [`Roster`] together with the [`DataStore`] it was
//! loaded from, and dispatches each operation to its command module.
//!
//! A session is: [`RosterApi::open`] once, any number of add/update/list/delete
//! calls (memory only), then [`RosterApi::save`]. Nothing reaches the store
//! before `save`.
//!
//! The API never prints. Status travels back as [`CmdMessage`]s inside
//! [`CmdResult`], failures as [`RosterError`](crate::error::RosterError).

use crate::commands;
use crate::error::{Result, RosterError};
use crate::model::{Employee, PersonKind};
use crate::roster::Roster;
use crate::store::DataStore;
use tracing::{info, warn};

pub struct RosterApi<S: DataStore> {
    store: S,
    roster: Roster,
    startup_messages: Vec<CmdMessage>,
    /// Set when the store held content that could not be read back.
    load_error: Option<RosterError>,
}

impl<S: DataStore> RosterApi<S> {
    /// Loads the roster from `store`.
    ///
    /// A store that cannot be read is treated as a first run: the session
    /// starts empty and a warning is queued. Malformed content is returned
    /// as an error so that it is never overwritten by an empty roster.
    pub fn open(store: S) -> Result<Self> {
        let mut api = Self::open_read_only_on_error(store);
        match api.load_error.take() {
            Some(e) => Err(e),
            None => Ok(api),
        }
    }

    /// Loads the roster from `store` without ever failing.
    ///
    /// Unreadable stores behave as in [`open`](Self::open). Malformed content
    /// starts an empty session instead of failing: the problem is queued as
    /// an error message and the session is read-only, so [`save`](Self::save)
    /// leaves the store untouched.
    pub fn open_read_only_on_error(store: S) -> Self {
        let mut startup_messages = Vec::new();
        let mut load_error = None;
        let roster = match store.load() {
            Ok(roster) => {
                if roster.is_empty() {
                    startup_messages.push(CmdMessage::info(format!(
                        "No records in {}. Starting with an empty roster.",
                        store.location()
                    )));
                }
                roster
            }
            Err(e @ RosterError::PersistenceUnavailable { .. }) => {
                warn!(error = %e, "falling back to an empty roster");
                startup_messages.push(CmdMessage::warning(format!(
                    "{}. Starting with an empty roster.",
                    e
                )));
                Roster::new()
            }
            Err(e) => {
                warn!(error = %e, location = %store.location(), "store content could not be loaded");
                startup_messages.push(CmdMessage::error(format!(
                    "{}. Starting with an empty roster; {} will not be overwritten.",
                    e,
                    store.location()
                )));
                load_error = Some(e);
                Roster::new()
            }
        };
        info!(location = %store.location(), records = roster.len(), "roster opened");

        Self {
            store,
            roster,
            startup_messages,
            load_error,
        }
    }

    /// True when the store could not be parsed and will not be written.
    pub fn is_read_only(&self) -> bool {
        self.load_error.is_some()
    }

    pub fn startup_messages(&self) -> &[CmdMessage] {
        &self.startup_messages
    }

    /// Adds a person of the kind chosen by the numeric `selector` (1 = Employee).
    pub fn add_person(
        &mut self,
        selector: i64,
        name: String,
        id: i32,
        salary: f64,
    ) -> Result<CmdResult> {
        let kind = PersonKind::from_selector(selector)?;
        commands::add::run(&mut self.roster, kind, name, id, salary)
    }

    pub fn add_employee(&mut self, name: String, id: i32, salary: f64) -> Result<CmdResult> {
        commands::add::run(&mut self.roster, PersonKind::Employee, name, id, salary)
    }

    pub fn update_employee(&mut self, id: i32, update: EmployeeUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.roster, id, update)
    }

    pub fn delete_employee(&mut self, id: i32) -> Result<CmdResult> {
        commands::delete::run(&mut self.roster, id)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn find(&self, id: i32) -> Option<&Employee> {
        self.roster.find_by_id(id)
    }

    /// Writes the whole roster back to the store, unless the session is
    /// read-only.
    pub fn save(&mut self) -> Result<CmdResult> {
        if let Some(reason) = &self.load_error {
            warn!(location = %self.store.location(), "refusing to save a read-only session");
            return Err(RosterError::ReadOnly {
                location: self.store.location(),
                reason: reason.to_string(),
            });
        }
        self.store.save(&self.roster)?;
        info!(location = %self.store.location(), records = self.roster.len(), "roster saved");

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Saved {} record(s) to {}.",
            self.roster.len(),
            self.store.location()
        )));
        Ok(result)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location(&self) -> String {
        self.store.location()
    }
}

/// Reads or changes the configuration in `paths.config_dir`. Needs no open roster.
pub fn config(paths: &RosterPaths, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(paths, action)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, EmployeeUpdate, MessageLevel, RosterPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{self, Format};
    use crate::model::Person;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    fn open(store: InMemoryStore) -> RosterApi<InMemoryStore> {
        RosterApi::open(store).unwrap()
    }

    #[test]
    fn open_loads_existing_records() {
        let api = open(StoreFixture::new().with_employees(3).build());
        assert_eq!(api.roster().len(), 3);
        assert!(api.startup_messages().is_empty());
    }

    #[test]
    fn open_empty_store_notes_first_run() {
        let api = open(InMemoryStore::new());
        assert!(api.roster().is_empty());
        assert_eq!(api.startup_messages()[0].level, MessageLevel::Info);
    }

    #[test]
    fn unreadable_store_starts_empty_with_warning() {
        let dir = TempDir::new().unwrap();
        let api = RosterApi::open(FileStore::new(dir.path())).unwrap();
        assert!(api.roster().is_empty());
        assert_eq!(api.startup_messages()[0].level, MessageLevel::Warning);
    }

    #[test]
    fn corrupt_store_refuses_to_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("persons.txt");
        std::fs::write(&path, "Employee Alice 1\n").unwrap();

        let result = RosterApi::open(FileStore::new(&path));
        assert!(matches!(result, Err(RosterError::Parse { .. })));
    }

    #[test]
    fn corrupt_store_opens_read_only_and_is_never_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("persons.txt");
        std::fs::write(&path, "Employee Alice 1\n").unwrap();

        let mut api = RosterApi::open_read_only_on_error(FileStore::new(&path));
        assert!(api.is_read_only());
        assert!(api.roster().is_empty());
        assert_eq!(api.startup_messages()[0].level, MessageLevel::Error);

        api.add_employee("Bob".into(), 2, 60000.0).unwrap();
        assert!(matches!(api.save(), Err(RosterError::ReadOnly { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Employee Alice 1\n");
    }

    #[test]
    fn non_utf8_store_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("persons.txt");
        let bytes = b"Employee Jos\xe9 1 50000\nEmployee Bob 2 60000\n";
        std::fs::write(&path, bytes).unwrap();

        assert!(matches!(
            RosterApi::open(FileStore::new(&path)),
            Err(RosterError::Parse { line: 1, .. })
        ));

        let mut api = RosterApi::open_read_only_on_error(FileStore::new(&path));
        assert!(api.save().is_err());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn readable_store_is_not_read_only() {
        let store = StoreFixture::new().with_employees(2).build();
        let mut api = RosterApi::open_read_only_on_error(store);
        assert!(!api.is_read_only());
        api.save().unwrap();
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn add_person_rejects_unknown_selector() {
        let mut api = open(InMemoryStore::new());
        let err = api.add_person(2, "Alice".into(), 1, 1.0).unwrap_err();
        assert!(matches!(err, RosterError::InvalidSelector(_)));
        assert!(api.roster().is_empty());
    }

    #[test]
    fn mutations_stay_in_memory_until_save() {
        let mut api = open(StoreFixture::new().with_employee("Al", 7, 10.0).build());
        api.add_person(1, "Bea".into(), 8, 20.0).unwrap();
        api.update_employee(7, EmployeeUpdate::new("Bob", 7, 5000.0)).unwrap();
        assert_eq!(api.store().save_count(), 0);
        assert_eq!(api.store().saved().len(), 1);

        api.save().unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().saved(), api.roster());
    }

    #[test]
    fn update_and_delete_report_not_found() {
        let mut api = open(StoreFixture::new().with_employees(2).build());
        let before = api.roster().clone();

        assert!(matches!(
            api.update_employee(99, EmployeeUpdate::new("X", 99, 1.0)),
            Err(RosterError::NotFound(99))
        ));
        assert!(matches!(api.delete_employee(99), Err(RosterError::NotFound(99))));
        assert_eq!(api.roster(), &before);
    }

    #[test]
    fn find_and_list_see_the_same_records() {
        let mut api = open(InMemoryStore::new());
        api.add_employee("Alice".into(), 1, 50000.0).unwrap();
        assert_eq!(api.find(1).unwrap().name, "Alice");
        assert_eq!(api.list().unwrap().listed_persons.len(), 1);
    }

    #[test]
    fn add_save_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("persons.txt");

        let mut api = RosterApi::open(FileStore::new(&path)).unwrap();
        api.add_employee("Alice".into(), 1, 50000.0).unwrap();
        api.add_employee("Bob".into(), 2, 60000.0).unwrap();
        api.save().unwrap();

        let reopened = RosterApi::open(FileStore::new(&path)).unwrap();
        let listed = reopened.list().unwrap().listed_persons;
        assert_eq!(
            listed,
            vec![
                Person::from(Employee::new("Alice", 1, 50000.0)),
                Person::from(Employee::new("Bob", 2, 60000.0)),
            ]
        );
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(codec::deserialize(&text, Format::Text).unwrap().len(), 2);
    }

    #[test]
    fn failed_save_keeps_records_in_memory() {
        let dir = TempDir::new().unwrap();
        let mut api = RosterApi::open(FileStore::new(dir.path())).unwrap();
        api.add_employee("Alice".into(), 1, 50000.0).unwrap();

        let err = api.save().unwrap_err();
        assert!(matches!(err, RosterError::PersistenceUnavailable { .. }));
        assert_eq!(api.roster().len(), 1);
    }
}
