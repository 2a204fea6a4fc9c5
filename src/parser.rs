// parser.rs

use crate::calculator::Calculator;
use crate::error::CalcError;

/// The fixed command keywords, matched against the whole trimmed line.
pub const COMMANDS: [&str; 8] = [
    "help", "history", "clear", "undo", "redo", "save", "load", "exit",
];

pub const HELP_TEXT: &str = "\
Commands:
  help       Show this help
  history    Show calculation history
  clear      Clear history
  undo       Undo last change
  redo       Redo last undone change
  save       Save history to file
  load       Load history from file
  exit       Exit the program

Operations:
  add (+)   sub (-)   mul (*)   div (/)   pow (^)   root
Usage:
  <op> <a> <b>
Example:
  add 2 3";

/// What one processed line tells the caller to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep reading.
    Output(String),
    /// Terminate the loop.
    Exit,
}

/// Process one line: a command keyword, or an operation as `<op> <a> <b>`.
/// Deterministic given the calculator state; performs no I/O beyond what the
/// dispatched action does. Errors are returned, never printed here.
pub fn process_line(calc: &mut Calculator, line: &str) -> Result<Reply, CalcError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CalcError::InvalidInput("Empty input.".into()));
    }

    match line.to_ascii_lowercase().as_str() {
        "help" => return Ok(Reply::Output(HELP_TEXT.to_string())),
        "history" => return Ok(Reply::Output(calc.format_history())),
        "clear" => {
            calc.clear()?;
            return Ok(Reply::Output("Cleared.".to_string()));
        }
        "undo" => {
            let msg = if calc.undo() { "Undone." } else { "Nothing to undo." };
            return Ok(Reply::Output(msg.to_string()));
        }
        "redo" => {
            let msg = if calc.redo() { "Redone." } else { "Nothing to redo." };
            return Ok(Reply::Output(msg.to_string()));
        }
        "save" => {
            calc.save()?;
            return Ok(Reply::Output("Saved.".to_string()));
        }
        "load" => {
            calc.load()?;
            return Ok(Reply::Output("Loaded.".to_string()));
        }
        "exit" => return Ok(Reply::Exit),
        _ => {}
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(CalcError::InvalidInput("Expected: <op> <a> <b>".into()));
    }
    let (a, b) = parse_two_floats(parts[1], parts[2])?;
    let record = calc.calculate(parts[0], a, b)?;
    Ok(Reply::Output(record.result.to_string()))
}

fn parse_two_floats(first: &str, second: &str) -> Result<(f64, f64), CalcError> {
    let invalid = || CalcError::InvalidInput(format!("Invalid number(s): {:?}", [first, second]));
    let a = first.parse::<f64>().map_err(|_| invalid())?;
    let b = second.parse::<f64>().map_err(|_| invalid())?;
    Ok((a, b))
}
