//! Interactive menu.
//!
//! Input is read as whitespace separated tokens, so answers may be given one
//! per line or several on one line. A line that is not UTF-8 is rejected as
//! invalid input. Running out of input, or failing to read it, behaves like
//! choosing Exit: the roster is saved and the loop ends.

use super::print::{print_error, print_messages, print_persons};
use roster::api::{CmdResult, EmployeeUpdate, RosterApi};
use roster::error::Result as RosterResult;
use roster::model::PersonKind;
use roster::store::DataStore;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

const MENU: &str = "\nPerson Management System\n\
1. Add Person\n\
2. Update Person Information\n\
3. Show Persons\n\
4. Delete Person\n\
5. Exit\n";

/// Why a menu step stopped before finishing.
#[derive(Debug)]
enum Interrupt {
    InvalidInput(String),
    EndOfInput,
    ReadFailed(io::Error),
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(e: io::Error) -> Self {
        Interrupt::Io(e)
    }
}

/// Splits a reader into whitespace separated tokens, one line at a time.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, Interrupt> {
        while self.pending.is_empty() {
            let mut buf = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut buf)
                .map_err(Interrupt::ReadFailed)?;
            if read == 0 {
                return Ok(None);
            }
            match String::from_utf8(buf) {
                Ok(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(e) => {
                    let line = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                    return Err(Interrupt::InvalidInput(line));
                }
            }
        }
        Ok(self.pending.pop_front())
    }
}

pub(crate) struct Menu<'a, S: DataStore, R, W> {
    api: &'a mut RosterApi<S>,
    input: Tokens<R>,
    out: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub(crate) fn new(api: &'a mut RosterApi<S>, input: R, out: W) -> Self {
        Self {
            api,
            input: Tokens::new(input),
            out,
        }
    }

    /// Runs until Exit, end of input or a failed read. Only output failures
    /// escape, after a last attempt to save.
    pub(crate) fn run(mut self) -> io::Result<()> {
        print_messages(&mut self.out, self.api.startup_messages())?;

        loop {
            write!(self.out, "{}Enter your choice: ", MENU)?;
            self.out.flush()?;

            let step = match self.input.next_token() {
                Err(e) => Err(e),
                Ok(None) => Err(Interrupt::EndOfInput),
                Ok(Some(choice)) => match choice.parse::<i64>() {
                    Ok(1) => self.add(),
                    Ok(2) => self.update(),
                    Ok(3) => self.show(),
                    Ok(4) => self.delete(),
                    Ok(5) => return self.exit(),
                    _ => {
                        writeln!(self.out, "Invalid choice. Please try again.")?;
                        Ok(())
                    }
                },
            };

            match step {
                Ok(()) => {}
                Err(Interrupt::InvalidInput(token)) => {
                    writeln!(self.out, "Invalid input '{}'.", token)?;
                }
                Err(Interrupt::EndOfInput) => {
                    writeln!(self.out)?;
                    return self.exit();
                }
                Err(Interrupt::ReadFailed(e)) => {
                    warn!(error = %e, "failed to read input");
                    writeln!(self.out, "Unable to read input: {}", e)?;
                    return self.exit();
                }
                Err(Interrupt::Io(e)) => {
                    if let Err(save_err) = self.api.save() {
                        warn!(error = %save_err, "save after output failure did not succeed");
                    }
                    return Err(e);
                }
            }
        }
    }

    fn prompt<T: FromStr>(&mut self, label: &str) -> Result<T, Interrupt> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let token = self.input.next_token()?.ok_or(Interrupt::EndOfInput)?;
        token.parse().map_err(|_| Interrupt::InvalidInput(token))
    }

    fn report(&mut self, result: RosterResult<CmdResult>) -> Result<(), Interrupt> {
        match result {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(e) => {
                debug!(error = %e, "command failed");
                print_error(&mut self.out, &e)?;
            }
        }
        Ok(())
    }

    fn add(&mut self) -> Result<(), Interrupt> {
        let name: String = self.prompt("Enter person name: ")?;
        let selector: i64 = self.prompt("Enter person type (1 for Employee): ")?;
        if let Err(e) = PersonKind::from_selector(selector) {
            return self.report(Err(e));
        }
        let id: i32 = self.prompt("Enter employee ID: ")?;
        let salary: f64 = self.prompt("Enter employee salary: ")?;
        let result = self.api.add_person(selector, name, id, salary);
        self.report(result)
    }

    fn update(&mut self) -> Result<(), Interrupt> {
        let id: i32 = self.prompt("Enter the employee ID to update: ")?;
        writeln!(self.out, "Enter new person information:")?;
        let name: String = self.prompt("Enter employee name: ")?;
        let new_id: i32 = self.prompt("Enter employee ID: ")?;
        let salary: f64 = self.prompt("Enter employee salary: ")?;
        let result = self
            .api
            .update_employee(id, EmployeeUpdate::new(name, new_id, salary));
        self.report(result)
    }

    fn show(&mut self) -> Result<(), Interrupt> {
        match self.api.list() {
            Ok(result) => {
                print_persons(&mut self.out, &result.listed_persons)?;
                print_messages(&mut self.out, &result.messages)?;
            }
            Err(e) => print_error(&mut self.out, &e)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), Interrupt> {
        let id: i32 = self.prompt("Enter the employee ID to delete: ")?;
        let result = self.api.delete_employee(id);
        self.report(result)
    }

    /// Saves and ends the session. A failed save is reported, not returned.
    fn exit(mut self) -> io::Result<()> {
        match self.api.save() {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(e) => {
                print_error(&mut self.out, &e)?;
                writeln!(self.out, "Changes from this session were not saved.")?;
            }
        }
        writeln!(self.out, "Exiting the program.")?;
        self.out.flush()
    }
}
