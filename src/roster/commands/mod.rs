use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::model::Person;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_persons: Vec<Person>,
    pub listed_persons: Vec<Person>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_persons(mut self, persons: Vec<Person>) -> Self {
        self.affected_persons = persons;
        self
    }

    pub fn with_listed_persons(mut self, persons: Vec<Person>) -> Self {
        self.listed_persons = persons;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// New field values for an existing employee.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeUpdate {
    pub name: String,
    pub id: i32,
    pub salary: f64,
}

impl EmployeeUpdate {
    pub fn new(name: impl Into<String>, id: i32, salary: f64) -> Self {
        Self {
            name: name.into(),
            id,
            salary,
        }
    }
}

/// NaN and infinities cannot be written back in every format, so they never
/// enter a roster.
pub(crate) fn check_salary(salary: f64) -> Result<f64> {
    if salary.is_finite() {
        Ok(salary)
    } else {
        Err(RosterError::InvalidSalary(salary))
    }
}
