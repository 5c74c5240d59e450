use invocat::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::highlight::MatchingBracketHighlighter;
use rustyline::validate::MatchingBracketValidator;
use rustyline::{Cmd, Editor, EventHandler, KeyCode, KeyEvent, Modifiers};
use rustyline::{Completer, Helper, Highlighter, Hinter, Validator};
use std::process;

const USAGE: &str = "\
Usage: invocat [OPTIONS] [FILES]...

Evaluate Invocat grammar files, or start an interactive session.

Options:
  -s <seed>          seed the random source with an arbitrary string
  -i, --interactive  open a REPL after evaluating any files
  --help             print this help and exit";

struct Args {
    seed: Option<String>,
    interactive: bool,
    files: Vec<String>,
}

// Exits with status 1 on a malformed argument list.
fn parse_args() -> Args {
    let mut args = Args {
        seed: None,
        interactive: false,
        files: Vec::new(),
    };
    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-s" => match argv.next() {
                Some(seed) => args.seed = Some(seed),
                None => {
                    eprintln!("invocat: option '-s' needs a seed string");
                    eprintln!("{}", USAGE);
                    process::exit(1);
                }
            },
            "-i" | "--interactive" => args.interactive = true,
            "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            flag if flag.starts_with('-') => {
                eprintln!("invocat: unknown option '{}'", flag);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
            path => args.files.push(path.to_string()),
        }
    }
    args
}

fn main() {
    let args = parse_args();

    let mut interpreter = match &args.seed {
        Some(seed) => Interpreter::with_seed(seed),
        None => Interpreter::new(),
    };

    for path in &args.files {
        match interpreter.eval_file(path) {
            Ok(Some(values)) => {
                for value in values {
                    println!("{}", value);
                }
            }
            Ok(None) => {}
            Err(e) => eprintln!("{}: {}", path, e),
        }
    }

    // With no files to evaluate the interpreter starts interactive.
    if args.interactive || args.files.is_empty() {
        if let Err(e) = repl(&mut interpreter) {
            eprintln!("Readline Error: {:?}", e);
            process::exit(1);
        }
    }
}

#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
struct InputValidator {
    #[rustyline(Validator)]
    brackets: MatchingBracketValidator,
    #[rustyline(Highlighter)]
    highlighter: MatchingBracketHighlighter,
}

fn repl(interpreter: &mut Interpreter) -> rustyline::Result<()> {
    println!("Invocat REPL v0.1.0");
    println!("Type 'exit' or press Ctrl-D to quit; '??names' lists bindings.");

    let helper = InputValidator {
        brackets: MatchingBracketValidator::new(),
        highlighter: MatchingBracketHighlighter::new(),
    };
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));
    rl.bind_sequence(
        KeyEvent(KeyCode::Char('s'), Modifiers::CTRL),
        EventHandler::Simple(Cmd::Newline),
    );
    if rl.load_history("invocat_history.txt").is_err() {
        println!("No previous history.");
    }

    loop {
        let readline = rl.readline("invocat> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let trimmed_input = line.trim();
                if trimmed_input.is_empty() {
                    continue;
                }
                if trimmed_input.eq_ignore_ascii_case("exit") {
                    break;
                }
                if trimmed_input.starts_with("??names") {
                    for name in interpreter.names() {
                        println!("{}", name);
                    }
                    continue;
                }

                match interpreter.eval(&line) {
                    Ok(Some(values)) => {
                        for value in values {
                            println!("{}", value);
                        }
                    }
                    Ok(None) => {}
                    Err(parse_err) => {
                        parse_err.pretty_print(&line);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                println!("Interrupted. Type 'exit' or Ctrl-D to quit.");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nExiting.");
                break;
            }
            Err(err) => {
                eprintln!("Readline Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history("invocat_history.txt")
}
