use rustyline::{DefaultEditor, Result as RlResult, error::ReadlineError};

use crate::{config::Config, interpreter::evaluator::core::Context};

const PROMPT: &str = "> ";

/// Interactive session state.
///
/// Every entered line is one statement; the store persists until `:reset`
/// or the end of the session.
pub struct Repl {
    editor:  DefaultEditor,
    context: Context,
    line:    usize,
}

impl Repl {
    /// Creates a new session with an empty store.
    pub fn new(config: Config) -> RlResult<Self> {
        let editor = DefaultEditor::new()?;
        let mut context = Context::new();
        context.config = config;

        Ok(Self { editor,
                  context,
                  line: 0 })
    }

    /// Runs the session until `:quit` or end of input.
    pub fn run(&mut self) -> RlResult<()> {
        println!("linecalc {}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for help, :quit to exit.\n");

        loop {
            match self.editor.readline(PROMPT) {
                Ok(input) => {
                    let input = input.trim();
                    if input.is_empty() {
                        continue;
                    }

                    // A rejected history entry leaves the session unaffected.
                    self.editor.add_history_entry(input).ok();

                    if input.starts_with(':') {
                        if self.handle_command(input) {
                            break;
                        }
                        continue;
                    }

                    self.line += 1;
                    self.context.execute_line(input, self.line);
                },
                Err(ReadlineError::Interrupted) => println!("^C"),
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Handles a session command. Returns `true` when the session should end.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            ":quit" | ":q" | ":exit" => true,
            ":help" | ":h" => {
                print_help();
                false
            },
            ":reset" => {
                self.context.reset();
                println!("All variables and functions removed.");
                false
            },
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type :help for help.");
                false
            },
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :help, :h       Show this help");
    println!("  :reset          Remove all variables and functions");
    println!("  :quit, :q       Exit");
    println!();
    println!("Statements:");
    println!("  x = 1 + 2       Assign; the kind is inferred on first assignment");
    println!("  y(f)=3          Assign and force the kind (i or f)");
    println!("  sq(n): n*n      Define a function");
    println!("  print x         Show one variable");
    println!("  print           Show all variables");
}
