//! The two-option roll menu.
//!
//! Each iteration prints the menu, takes the next whitespace-separated
//! token from the input, and dispatches. Several selections may share a
//! line; leftover tokens carry over to the following iterations. Input that
//! is not a recognized selection, including bytes that are not UTF-8, is
//! ignored and the menu repeats. End of input ends the loop as cleanly as
//! choosing Quit.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{McgError, McgResult};
use crate::roller::CharacterRoller;

/// The menu as printed before every selection.
pub const MENU_TEXT: &str = "\n1) Roll\n2) Quit\n";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Option 1.
    Roll,
    /// Option 2.
    Quit,
    /// Any other integer. Does nothing.
    Other(i64),
}

impl MenuChoice {
    /// Parse one whitespace-separated token of menu input.
    pub fn parse(input: &str) -> McgResult<Self> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| McgError::InvalidSelection(trimmed.to_string()))?;
        Ok(match value {
            1 => Self::Roll,
            2 => Self::Quit,
            n => Self::Other(n),
        })
    }
}

/// Why the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user chose Quit.
    Quit,
    /// The input stream closed.
    EndOfInput,
}

/// Run the menu until Quit or end of input.
pub fn run_menu<R: BufRead, W: Write>(
    roller: &mut CharacterRoller,
    mut input: R,
    out: &mut W,
) -> McgResult<MenuExit> {
    let mut pending = VecDeque::new();
    loop {
        out.write_all(MENU_TEXT.as_bytes())?;
        out.flush()?;

        let Some(token) = next_token(&mut input, &mut pending)? else {
            debug!("end of input");
            return Ok(MenuExit::EndOfInput);
        };

        match MenuChoice::parse(&token) {
            Ok(MenuChoice::Roll) => {
                let character = roller.roll();
                write!(out, "\n{character}")?;
            }
            Ok(MenuChoice::Quit) => return Ok(MenuExit::Quit),
            Ok(MenuChoice::Other(n)) => debug!(selection = n, "no such option"),
            Err(e @ McgError::InvalidSelection(_)) => debug!(error = %e, "ignoring input"),
            Err(e) => return Err(e),
        }
    }
}

/// Next whitespace-separated token, reading more lines while none are
/// pending. Blank lines are skipped without a prompt.
fn next_token<R: BufRead>(
    input: &mut R,
    pending: &mut VecDeque<String>,
) -> McgResult<Option<String>> {
    let mut buf = Vec::new();
    while pending.is_empty() {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        pending.extend(line.split_whitespace().map(str::to_owned));
    }
    Ok(pending.pop_front())
}
