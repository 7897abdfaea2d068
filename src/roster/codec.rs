//! # Text Codec
//!
//! Converts a [`Roster`] to and from its persisted text form.
//!
//! ## Text format (default)
//!
//! One record per line, tagged by kind:
//!
//! ```text
//! Employee           Alice          1      50000
//! Employee             Bob          2      60000
//! ```
//!
//! Every field is written after a single space and then right-aligned to its
//! column, so a value that fills or overflows its width still stays a
//! separate token. Reading splits on whitespace and ignores the columns.
//! There is no escaping: a name containing whitespace will not read back.
//! Use [`Format::Json`] when that matters.
//!
//! ## JSON lines format (opt-in)
//!
//! One JSON object per line, internally tagged by `kind`:
//!
//! ```text
//! {"kind":"Employee","name":"Mary Ann","id":3,"salary":41000.0}
//! ```

use crate::error::{Result, RosterError};
use crate::model::{Employee, ID_WIDTH, NAME_WIDTH, Person, PersonKind, SALARY_WIDTH, pad_left};
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Json => f.write_str("json"),
        }
    }
}

impl FromStr for Format {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "json" | "jsonl" => Ok(Format::Json),
            other => Err(RosterError::Config(format!(
                "Unknown format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

pub fn serialize(roster: &Roster, format: Format) -> Result<String> {
    let out = match format {
        Format::Text => serialize_text(roster),
        Format::Json => serialize_json(roster)?,
    };
    debug!(records = roster.len(), %format, "serialized roster");
    Ok(out)
}

pub fn deserialize(text: &str, format: Format) -> Result<Roster> {
    let roster = match format {
        Format::Text => deserialize_text(text)?,
        Format::Json => deserialize_json(text)?,
    };
    debug!(records = roster.len(), %format, "deserialized roster");
    Ok(roster)
}

fn serialize_text(roster: &Roster) -> String {
    let mut out = String::new();
    for person in roster {
        match person {
            Person::Employee(emp) => {
                let id = emp.id.to_string();
                let salary = emp.salary.to_string();
                out.push_str(PersonKind::Employee.tag());
                for (field, width) in [
                    (emp.name.as_str(), NAME_WIDTH),
                    (id.as_str(), ID_WIDTH),
                    (salary.as_str(), SALARY_WIDTH),
                ] {
                    out.push(' ');
                    out.push_str(&pad_left(field, width));
                }
                out.push('\n');
            }
        }
    }
    out
}

fn serialize_json(roster: &Roster) -> Result<String> {
    let mut out = String::new();
    for person in roster {
        out.push_str(&serde_json::to_string(person)?);
        out.push('\n');
    }
    Ok(out)
}

/// Whitespace tokens paired with the 1-based line they came from.
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)))
}

fn deserialize_text(text: &str) -> Result<Roster> {
    let mut roster = Roster::new();
    let mut toks = tokens(text);

    while let Some((line, tok)) = toks.next() {
        match tok.parse::<PersonKind>() {
            Ok(PersonKind::Employee) => {
                let name = next_field(&mut toks, line, "name")?;
                let id: i32 = parse_field(&mut toks, line, "id")?;
                let salary: f64 = parse_field(&mut toks, line, "salary")?;
                if !salary.is_finite() {
                    return Err(RosterError::parse(line, format!("invalid salary '{}'", salary)));
                }
                roster.add(Employee::new(name, id, salary));
            }
            Err(_) => trace!(line, token = tok, "skipping unrecognized token"),
        }
    }

    Ok(roster)
}

fn next_field<'a, I>(toks: &mut I, line: usize, field: &str) -> Result<&'a str>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    toks.next()
        .map(|(_, tok)| tok)
        .ok_or_else(|| RosterError::parse(line, format!("missing {} after record tag", field)))
}

fn parse_field<'a, T, I>(toks: &mut I, line: usize, field: &str) -> Result<T>
where
    T: FromStr,
    I: Iterator<Item = (usize, &'a str)>,
{
    let (tok_line, tok) = toks
        .next()
        .ok_or_else(|| RosterError::parse(line, format!("missing {} after record tag", field)))?;
    tok.parse::<T>()
        .map_err(|_| RosterError::parse(tok_line, format!("invalid {} '{}'", field, tok)))
}

fn deserialize_json(text: &str) -> Result<Roster> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Person>(line).map_err(|e| RosterError::parse(i + 1, e.to_string()))
        })
        .collect()
}
