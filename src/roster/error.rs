use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Person not found: no employee with ID {0}")]
    NotFound(i32),

    #[error("Invalid person type: {0}")]
    InvalidSelector(String),

    #[error("Invalid salary {0}: must be a finite number")]
    InvalidSalary(f64),

    #[error("Unable to access {}: {source}", .path.display())]
    PersistenceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Not saving to {location}: its previous content could not be read ({reason})")]
    ReadOnly { location: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        RosterError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
