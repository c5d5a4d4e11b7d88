//! Interactive prompts for the command line.
//!
//! Each question reads one line. Invalid answers are returned as errors and
//! the caller decides what to do with them.

use std::io::{BufRead, Write};

use crate::domain::{InvalidPortCode, PortCode};
use crate::planner::StrategyRegistry;
use crate::repository::SailingRepository;

/// Error reading an answer.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading or writing the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input closed before an answer was given
    #[error("no input")]
    Eof,

    /// The answer is not a well-formed port code
    #[error("invalid port {input:?}: {source}")]
    InvalidPort {
        input: String,
        #[source]
        source: InvalidPortCode,
    },

    /// The port is well-formed but not in the schedule
    #[error("unknown port {input}, expected one of: {}", join(.known))]
    UnknownPort { input: String, known: Vec<PortCode> },

    /// The criteria is not registered
    #[error("unknown criteria {input:?}, expected one of: {}", .known.join(", "))]
    UnknownCriteria {
        input: String,
        known: Vec<&'static str>,
    },
}

fn join(ports: &[PortCode]) -> String {
    ports
        .iter()
        .map(PortCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a port code and check it appears in the repository.
///
/// The input is trimmed and uppercased before lookup.
pub fn known_port(input: &str, repo: &dyn SailingRepository) -> Result<PortCode, InputError> {
    let port = PortCode::parse_normalized(input).map_err(|source| InputError::InvalidPort {
        input: input.to_string(),
        source,
    })?;

    if !repo.has_port(&port) {
        return Err(InputError::UnknownPort {
            input: input.to_string(),
            known: repo.ports(),
        });
    }
    Ok(port)
}

/// Line-oriented question and answer over a reader and writer.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask for a port known to the repository.
    pub fn port(
        &mut self,
        label: &str,
        repo: &dyn SailingRepository,
    ) -> Result<PortCode, InputError> {
        let input = self.ask(&format!("Enter the {label}: "))?;
        known_port(&input, repo)
    }

    /// Ask for one of the registry's criteria names.
    pub fn criteria(&mut self, registry: &StrategyRegistry) -> Result<&'static str, InputError> {
        let names = registry.names();
        let input = self.ask(&format!("Enter the criteria ({}): ", names.join(", ")))?;

        if let Some(name) = names.iter().copied().find(|name| *name == input) {
            return Ok(name);
        }
        Err(InputError::UnknownCriteria {
            input,
            known: names,
        })
    }

    #[cfg(test)]
    fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn ask(&mut self, question: &str) -> Result<String, InputError> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line.trim().to_string())
    }
}
