//! recalc - command shell over the reactive cell store.
//!
//! The store itself lives in `recalc-core`; this binary is a thin host that
//! parses commands, calls the public operations, and formats output and
//! errors.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use recalc_core::Spreadsheet;

const HELP: &str = "Commands:
  set <cell> <value>   set a cell to a number, text, or =formula
  get <cell>           print the cell's current value
  undo                 revert the last set
  redo                 replay the last undone set
  help                 show this help
  quit                 exit the shell";

fn print_usage() {
    eprintln!("Usage: recalc [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                 Script to run, one command per line");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <CMDS>   Run semicolon-separated commands and exit");
    eprintln!("  -h, --help             Print help");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut script_file: Option<String> = None;
    let mut command: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires an argument");
                    std::process::exit(1);
                }
                command = Some(args[i].to_string());
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if script_file.is_none() {
                    script_file = Some(args[i].to_string());
                } else {
                    eprintln!("Error: Multiple files specified");
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let mut sheet = Spreadsheet::new();

    if let Some(cmds) = command {
        run_batch(&mut sheet, cmds.split(';'));
    } else if let Some(path) = script_file {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("error: cannot read {}: {}", path, e);
                std::process::exit(1);
            }
        };
        run_batch(&mut sheet, text.lines());
    } else {
        repl(&mut sheet);
    }
}

/// Run commands in order, exiting non-zero on the first failure.
fn run_batch<'a>(sheet: &mut Spreadsheet, commands: impl Iterator<Item = &'a str>) {
    for cmd in commands {
        match run_line(sheet, cmd) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn repl(sheet: &mut Spreadsheet) {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }
        match run_line(sheet, trimmed) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => eprintln!("error: {}", e),
        }
    }
}

/// Execute one command. Returns the text to print, if any.
fn run_line(sheet: &mut Spreadsheet, line: &str) -> Result<Option<String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "set" => {
            let (id, value) = rest
                .split_once(char::is_whitespace)
                .context("usage: set <cell> <value>")?;
            let value = value.trim();
            // Numeric input stays numeric; anything else is text or formula.
            if let Ok(n) = value.parse::<f64>() {
                sheet.set_cell_value(id, n)?;
            } else {
                sheet.set_cell_value(id, value)?;
            }
            Ok(None)
        }
        "get" => {
            if rest.is_empty() {
                bail!("usage: get <cell>");
            }
            Ok(Some(sheet.get_cell_value(rest)?.to_string()))
        }
        "undo" => {
            sheet.undo();
            Ok(None)
        }
        "redo" => {
            sheet.redo();
            Ok(None)
        }
        "help" => Ok(Some(HELP.to_string())),
        _ => bail!("unknown command: {}", cmd),
    }
}
