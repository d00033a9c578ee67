//! Interactive chat session.
//!
//! The session writes a prompt, reads one line, and prints one reply, until the
//! input ends. There is no exit command; interrupting the process ends it too.

use crate::models::Corpus;
use crate::quality::SyntaxCheck;
use crate::services::Responder;
use crate::{Error, Result};
use rand::Rng;
use std::io::{BufRead, Write};

/// Label written before each read.
pub const PROMPT: &str = "Usuario: ";

/// Label written before each reply.
pub const REPLY_PREFIX: &str = "IA: ";

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines answered.
    pub turns: usize,
    /// Turns answered from the corpus.
    pub matched: usize,
    /// Turns answered with the fallback.
    pub fallbacks: usize,
}

/// Runs the read-respond loop until `input` reaches end of file.
///
/// Each line has its trailing line terminator removed and is otherwise passed
/// to the responder as typed, including empty lines. Bytes that are not valid
/// UTF-8 are replaced with `U+FFFD` rather than ending the session.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] if reading input or writing output fails.
pub fn run_session<C, R, I, O>(
    responder: &mut Responder<C, R>,
    corpus: &mut Corpus,
    mut input: I,
    mut output: O,
) -> Result<SessionStats>
where
    C: SyntaxCheck,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut stats = SessionStats::default();
    let mut buf = Vec::new();

    loop {
        write!(output, "{PROMPT}")
            .and_then(|()| output.flush())
            .map_err(|e| io_error("write_prompt", &e))?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| io_error("read_line", &e))?;
        if read == 0 {
            writeln!(output).map_err(|e| io_error("write_reply", &e))?;
            tracing::debug!(turns = stats.turns, "input closed, ending session");
            return Ok(stats);
        }

        let line = String::from_utf8_lossy(&buf);
        let text = line.strip_suffix('\n').unwrap_or(&line);
        let text = text.strip_suffix('\r').unwrap_or(text);

        let reply = responder.respond(corpus, text);
        stats.turns += 1;
        if reply.is_fallback() {
            stats.fallbacks += 1;
        } else {
            stats.matched += 1;
        }
        tracing::debug!(turn = stats.turns, outcome = reply.outcome.as_str(), "answered");

        writeln!(output, "{REPLY_PREFIX}{}", reply.text)
            .and_then(|()| output.flush())
            .map_err(|e| io_error("write_reply", &e))?;
    }
}

fn io_error(operation: &str, e: &std::io::Error) -> Error {
    Error::OperationFailed {
        operation: operation.to_string(),
        cause: e.to_string(),
    }
}
