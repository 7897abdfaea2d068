use super::DataStore;
use crate::codec::{self, Format};
use crate::error::{Result, RosterError};
use crate::roster::Roster;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_DATA_FILE: &str = "persons.txt";

pub struct FileStore {
    path: PathBuf,
    format: Format,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: Format::default(),
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    fn unavailable(&self, source: std::io::Error) -> RosterError {
        RosterError::PersistenceUnavailable {
            path: self.path.clone(),
            source,
        }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
            }
        }
        Ok(())
    }
}

/// Text that is not UTF-8 is malformed content, not a missing file.
fn decode(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let valid = e.utf8_error().valid_up_to();
        let line = e.as_bytes()[..valid].iter().filter(|&&b| b == b'\n').count() + 1;
        RosterError::parse(line, "invalid UTF-8")
    })
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Roster> {
        let content = match fs::read(&self.path) {
            Ok(bytes) => decode(bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Roster::new());
            }
            Err(e) => return Err(self.unavailable(e)),
        };
        let roster = codec::deserialize(&content, self.format)?;
        debug!(path = %self.path.display(), records = roster.len(), "loaded roster");
        Ok(roster)
    }

    fn save(&mut self, roster: &Roster) -> Result<()> {
        self.ensure_parent()?;
        let content = codec::serialize(roster, self.format)?;
        fs::write(&self.path, content).map_err(|e| self.unavailable(e))?;
        debug!(path = %self.path.display(), records = roster.len(), "saved roster");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
