use crate::core::tracker::ItemTracker;
use crate::utils::error::{GrocerError, Result};
use std::io::{BufRead, Write};

pub const MENU: &str = "\n===== Corner Grocer Menu =====\n\
1. Search for item frequency\n\
2. Print all item frequencies\n\
3. Print histogram of item frequencies\n\
4. Exit\n\
Enter your choice: ";

pub const INVALID_CHOICE_PROMPT: &str = "Invalid option. Please enter a number between 1 and 4: ";
pub const ITEM_PROMPT: &str = "Enter item name: ";
pub const GOODBYE: &str = "Exiting program. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    ListAll,
    Histogram,
    Exit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Search),
            2 => Ok(MenuChoice::ListAll),
            3 => Ok(MenuChoice::Histogram),
            4 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Accepts `1`..=`4` with surrounding whitespace; anything else is invalid.
pub fn parse_choice(input: &str) -> Result<MenuChoice> {
    let invalid = || GrocerError::InvalidChoice {
        input: input.to_string(),
    };
    let number: u32 = input.trim().parse().map_err(|_| invalid())?;
    MenuChoice::try_from(number).map_err(|_| invalid())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub actions: Vec<MenuChoice>,
    pub invalid_inputs: usize,
    /// 輸入在選擇 Exit 之前就結束
    pub ended_by_eof: bool,
}

/// Runs the menu until Exit is chosen or input runs out.
pub fn run_menu<R: BufRead, W: Write>(
    tracker: &ItemTracker,
    input: &mut R,
    output: &mut W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    loop {
        write!(output, "{}", MENU)?;
        output.flush()?;

        let choice = loop {
            let Some(line) = read_line(input)? else {
                summary.ended_by_eof = true;
                return Ok(summary);
            };
            match parse_choice(&line) {
                Ok(choice) => break choice,
                Err(e) => {
                    tracing::debug!("{}", e);
                    summary.invalid_inputs += 1;
                    write!(output, "{}", INVALID_CHOICE_PROMPT)?;
                    output.flush()?;
                }
            }
        };
        summary.actions.push(choice);

        match choice {
            MenuChoice::Search => {
                write!(output, "{}", ITEM_PROMPT)?;
                output.flush()?;
                let Some(item) = read_line(input)? else {
                    summary.ended_by_eof = true;
                    return Ok(summary);
                };
                writeln!(output, "{}", tracker.search(&item))?;
            }
            MenuChoice::ListAll => write!(output, "{}", tracker.frequencies())?,
            MenuChoice::Histogram => write!(output, "{}", tracker.histogram())?,
            MenuChoice::Exit => {
                writeln!(output, "{}", GOODBYE)?;
                return Ok(summary);
            }
        }
    }
}

/// One line without its terminator, or `None` at end of input.
/// Invalid UTF-8 is replaced rather than treated as a read error.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
