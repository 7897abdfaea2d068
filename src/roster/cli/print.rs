use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::error::RosterError;
use roster::model::{Person, display_header};
use std::io::{self, Write};

pub(crate) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(crate) fn print_error<W: Write>(out: &mut W, error: &RosterError) -> io::Result<()> {
    let text = match error {
        RosterError::NotFound(_) => "Person not found.".to_string(),
        RosterError::InvalidSelector(_) => "Invalid person type.".to_string(),
        other => format!("Error: {}", other),
    };
    writeln!(out, "{}", text.red())
}

/// Header plus one row per person, each rendered by the person itself.
pub(crate) fn print_persons<W: Write>(out: &mut W, persons: &[Person]) -> io::Result<()> {
    writeln!(out, "{}", display_header().bold())?;
    for person in persons {
        writeln!(out, "{}", person)?;
    }
    Ok(())
}
