//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the in-memory [`Roster`] and
//! wherever it is persisted. The whole roster is read once when a session
//! starts and written back in one piece when it ends; nothing is written in
//! between.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single text file (`persons.txt` by default), in
//!   either of the [`Format`](crate::codec::Format)s the codec supports.
//!   A missing file loads as an empty roster.
//! - [`memory::InMemoryStore`]: keeps the last saved roster in memory. Used
//!   by tests.

use crate::error::Result;
use crate::roster::Roster;

pub mod fs;
pub mod memory;

/// Abstract interface for roster persistence.
pub trait DataStore {
    /// Read the persisted roster. A store that has never been written
    /// returns an empty roster rather than an error.
    fn load(&self) -> Result<Roster>;

    /// Replace the persisted roster with `roster`.
    fn save(&mut self, roster: &Roster) -> Result<()>;

    /// Human readable description of where records live, for messages.
    fn location(&self) -> String;
}
