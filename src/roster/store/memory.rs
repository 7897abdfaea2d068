use super::DataStore;
use crate::error::Result;
use crate::roster::Roster;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    roster: Roster,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self { roster, saves: 0 }
    }

    /// The roster as of the last `save`.
    pub fn saved(&self) -> &Roster {
        &self.roster
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Roster> {
        Ok(self.roster.clone())
    }

    fn save(&mut self, roster: &Roster) -> Result<()> {
        self.roster = roster.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Employee;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_employees(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = i as i32 + 1;
                let emp = Employee::new(format!("Employee{}", n), n, 1000.0 * n as f64);
                self.store.roster.add(emp);
            }
            self
        }

        pub fn with_employee(mut self, name: &str, id: i32, salary: f64) -> Self {
            self.store.roster.add(Employee::new(name, id, salary));
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
