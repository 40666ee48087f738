//! Interactive read loop.
//!
//! Reads one line at a time, tokenizes it and writes every token on its own
//! line. End of input ends the loop normally.

use std::io::{BufRead, Write};

use monkey_lexer::Lexer;
use thiserror::Error;

use crate::ReplConfig;

/// Host-level failure of the read loop.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the read loop until `input` is exhausted.
///
/// Each iteration writes the prompt, reads a line and writes the display
/// form of each token (`{Type:INT Literal:5}`) up to, but not including,
/// `EOF`.
pub fn start<R, W>(mut input: R, mut output: W, config: &ReplConfig) -> Result<(), ReplError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input");
            return Ok(());
        }

        let count = write_tokens(&mut output, &line)?;
        tracing::debug!(tokens = count, "lexed line");
    }
}

fn write_tokens<W: Write>(output: &mut W, line: &str) -> Result<usize, ReplError> {
    let mut count = 0;
    for token in Lexer::new(line) {
        writeln!(output, "{token}")?;
        count += 1;
    }
    Ok(count)
}
