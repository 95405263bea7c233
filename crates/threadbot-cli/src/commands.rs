//! Subcommand bodies, written against plain readers and writers.

use std::io::{self, BufRead, Write};

use threadbot_core::errors::ThreadbotResult;

/// Inputs that end an interactive session.
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Answer each input line until EOF or a quit word.
///
/// Blank lines are skipped. A failed answer is reported on `errors` and the
/// session continues.
pub fn run_chat<A, R, W, E>(answer: A, input: R, out: &mut W, errors: &mut E) -> io::Result<usize>
where
    A: Fn(&str) -> ThreadbotResult<String>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut answered = 0;
    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if QUIT_WORDS.iter().any(|w| query.eq_ignore_ascii_case(w)) {
            break;
        }
        match answer(query) {
            Ok(reply) => {
                writeln!(out, "{reply}")?;
                answered += 1;
            }
            Err(e) => writeln!(errors, "error: {e}")?,
        }
        out.flush()?;
    }
    Ok(answered)
}

/// Print one tag per line.
pub fn print_tags<W: Write>(tags: &[String], out: &mut W) -> io::Result<()> {
    for tag in tags {
        writeln!(out, "{tag}")?;
    }
    Ok(())
}
