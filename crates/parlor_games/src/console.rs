//! Shared terminal prompt and input helpers.

use anyhow::{Result, bail};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};

/// Prints a `=>`-prefixed prompt line.
pub fn prompt(message: impl AsRef<str>) {
    println!("=> {}", message.as_ref());
}

/// Clears the terminal before a fresh render.
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Reads one line from stdin, trimmed of surrounding whitespace.
///
/// The prompt loops rely on eventual valid input; the only hard failure
/// is the input stream closing underneath us.
pub fn read_line() -> Result<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}
