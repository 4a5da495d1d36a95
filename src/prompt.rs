//! Console prompt helpers.
//!
//! The session asks for everything through these, so tests can drive a
//! whole run from a `Cursor` and capture the transcript in a `Vec<u8>`.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Print a prompt and read one trimmed line. EOF is an error — the session
/// cannot continue without input.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        bail!("input closed before the session finished");
    }
    Ok(line.trim().to_string())
}

/// Keep asking until the predicate accepts the answer. The first attempt
/// uses `prompt`, every retry uses `retry`. Unbounded, matching the
/// blocking re-prompt discipline of the console flow.
pub fn read_until<R, W, P>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    retry: &str,
    accept: P,
) -> Result<String>
where
    R: BufRead,
    W: Write,
    P: Fn(&str) -> bool,
{
    let mut answer = read_line(input, output, prompt)?;
    while !accept(&answer) {
        answer = read_line(input, output, retry)?;
    }
    Ok(answer)
}
