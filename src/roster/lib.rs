//! # Roster Architecture
//!
//! Roster keeps a small list of person records (today only employees) in a
//! plain text file. The interactive menu is one client of a library that
//! does not know about terminals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, subcommands, colored output          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session roster and its DataStore                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, update, list, delete, config                        │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (roster.rs) + Storage Layer (store/, codec)   │
//! │  - Ordered in-memory records, lookup by employee ID         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Model
//!
//! The data file is read once when the API is opened and written once when
//! the session saves. Edits in between live only in memory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each operation
//! - [`roster`]: The in-memory record store
//! - [`model`]: `Person`, `Employee`, `PersonKind`
//! - [`codec`]: Text and JSON lines persistence formats
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod store;
