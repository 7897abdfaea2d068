//! # Record Store
//!
//! [`Roster`] is the in-memory, ordered collection of [`Person`] records for
//! one session. It owns every record outright: removing a record drops it,
//! and dropping the roster drops everything it holds.
//!
//! Lookups by employee ID are linear scans in insertion order. Duplicate IDs
//! are allowed; every ID-based operation acts on the **first** match and
//! skips records of other kinds.

use crate::error::{Result, RosterError};
use crate::model::{Employee, Person};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    persons: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end. Never fails, no uniqueness checks.
    pub fn add(&mut self, person: impl Into<Person>) {
        self.persons.push(person.into());
    }

    pub fn find_by_id(&self, id: i32) -> Option<&Employee> {
        self.persons
            .iter()
            .filter_map(Person::as_employee)
            .find(|emp| emp.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: i32) -> Option<&mut Employee> {
        self.persons
            .iter_mut()
            .filter_map(Person::as_employee_mut)
            .find(|emp| emp.id == id)
    }

    fn position_of(&self, id: i32) -> Option<usize> {
        self.persons
            .iter()
            .position(|p| p.as_employee().is_some_and(|emp| emp.id == id))
    }

    /// Overwrites name, ID and salary of the first employee with `id`.
    ///
    /// The new ID is written even when it differs from `id`, and even when
    /// another record already uses it.
    pub fn update(
        &mut self,
        id: i32,
        name: impl Into<String>,
        new_id: i32,
        salary: f64,
    ) -> Result<&Employee> {
        let emp = self.find_by_id_mut(id).ok_or(RosterError::NotFound(id))?;
        emp.name = name.into();
        emp.id = new_id;
        emp.salary = salary;
        Ok(&*emp)
    }

    /// Removes the first employee with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: i32) -> Result<Person> {
        let pos = self.position_of(id).ok_or(RosterError::NotFound(id))?;
        Ok(self.persons.remove(pos))
    }

    pub fn list_all(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self {
        Self {
            persons: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}
