//! Interactive prompt loop.
//!
//! # Invariants
//! - One line is fully processed before the next prompt is written.
//! - End of input ends the session the same way `exit` does.
//! - Bytes that are not UTF-8 are decoded lossily; they never end the session.

use chrono::NaiveDate;
use contactbook_core::command::dispatch::FAREWELL;
use contactbook_core::{process_line, AddressBook, Reply};
use log::info;
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Runs the prompt loop until `exit`/`close` or end of input.
///
/// `today` is asked for once per line so a session left open overnight
/// still computes the right birthday window.
pub fn run_session<I, O, F>(mut input: I, output: &mut O, today: F) -> io::Result<()>
where
    I: BufRead,
    O: Write,
    F: Fn() -> NaiveDate,
{
    let mut book = AddressBook::in_memory();
    let mut buf = Vec::new();
    writeln!(output, "{WELCOME}")?;
    info!("event=session_start module=cli status=ok");

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            writeln!(output, "{FAREWELL}")?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        match process_line(&line, &mut book, today()) {
            Reply::Message(text) => writeln!(output, "{text}")?,
            Reply::Exit(text) => {
                writeln!(output, "{text}")?;
                break;
            }
            Reply::Silent => {}
        }
    }

    info!(
        "event=session_end module=cli status=ok contacts={}",
        book.contact_count()
    );
    Ok(())
}
