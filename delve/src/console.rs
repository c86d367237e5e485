//! Line-oriented console front end.
//!
//! Reads one answer per line and prints every message on its own line. The
//! core rejects unknown words; this front end answers them with
//! "Command not recognized." and asks again. End of input counts as quitting.

use delve_core::{Action, Direction, InterfaceError, PlayerInterface};
use std::io::{BufRead, Write};

pub struct ConsoleInterface<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, InterfaceError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Accepts "north", "NORTH", "n" and so on.
fn parse_direction(input: &str) -> Result<Direction, InterfaceError> {
    let canonical = match input.trim().to_lowercase().as_str() {
        "n" | "north" => "North",
        "s" | "south" => "South",
        "e" | "east" => "East",
        "w" | "west" => "West",
        _ => input.trim(),
    };
    Ok(canonical.parse::<Direction>()?)
}

impl<R: BufRead, W: Write> PlayerInterface for ConsoleInterface<R, W> {
    fn get_action(&mut self) -> Result<Action, InterfaceError> {
        loop {
            let Some(line) = self.ask("Enter action (quit to exit): ")? else {
                return Ok(Action::Quit);
            };
            match line.parse::<Action>() {
                Ok(action) => return Ok(action),
                Err(InterfaceError::UnknownCommand(word)) => {
                    tracing::debug!(%word, "Unrecognized command");
                    writeln!(self.output, "Command not recognized.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn provide_directions(&mut self, directions: &[Direction]) -> Result<(), InterfaceError> {
        writeln!(self.output, "Available directions:")?;
        for direction in directions {
            writeln!(self.output, "- {direction}")?;
        }
        Ok(())
    }

    fn get_direction(&mut self) -> Result<Direction, InterfaceError> {
        loop {
            let Some(line) = self.ask("Choose direction: ")? else {
                return Err(InterfaceError::Io(std::io::ErrorKind::UnexpectedEof.into()));
            };
            match parse_direction(&line) {
                Ok(direction) => return Ok(direction),
                Err(InterfaceError::InvalidDirection(e)) => {
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn get_item_name(&mut self) -> Result<String, InterfaceError> {
        match self.ask("> ")? {
            Some(name) => Ok(name),
            None => Err(InterfaceError::Io(std::io::ErrorKind::UnexpectedEof.into())),
        }
    }

    fn provide_message(&mut self, message: &str) -> Result<(), InterfaceError> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }
}
