// repl.rs

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as LineConfig, Editor};

use crate::calculator::Calculator;
use crate::completion::CommandCompleter;
use crate::parser::{process_line, Reply};

/// Blocking read-eval-print loop over a `"> "` prompt. This is the sole
/// recovery point: every calculator error is printed as `Error: <message>`
/// and the loop keeps reading. Only `exit` or end of input leaves it.
pub fn run(calc: &mut Calculator) -> anyhow::Result<()> {
    let config = LineConfig::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(CommandCompleter::new()));

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match process_line(calc, &line) {
                    Ok(Reply::Output(out)) => println!("{out}"),
                    Ok(Reply::Exit) => {
                        println!("Bye.");
                        break;
                    }
                    Err(err) => println!("Error: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }
    Ok(())
}
