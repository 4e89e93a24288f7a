/// MMB archive console application

use mmbmanager::{Archive, ImageSlot, ImageStatus, MAX_INDEX};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::path::PathBuf;
use std::process::exit;

/// Archive used when neither `--file` nor `MMB_FILE` is given
const DEFAULT_MMB_FILE: &str = "./BEEB.MMB";

/// Environment variable naming the archive
const MMB_FILE_ENV: &str = "MMB_FILE";

/// Command completer for the REPL
struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl CommandCompleter {
    fn new() -> Self {
        Self {
            commands: vec![
                "erase", "exit", "help", "load", "lock", "ls", "open", "quit", "save", "unlock",
            ],
        }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Only complete the first word (command name)
        let line_to_cursor = &line[..pos];
        if line_to_cursor.contains(' ') {
            return Ok((pos, vec![]));
        }

        let prefix = line_to_cursor.to_lowercase();
        let matches: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(&prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// Command line options
#[derive(Debug, PartialEq)]
struct Options {
    mmb_file: PathBuf,
    help: bool,
    command: Vec<String>,
}

/// Parse `[-h|--help] [-f|--file <path>] [command args...]`
///
/// Options are only recognised before the command word.
fn parse_options(args: &[String], env_file: Option<String>) -> Result<Options, String> {
    let mut mmb_file = env_file
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MMB_FILE));
    let mut help = false;
    let mut iter = args.iter();
    let mut command = Vec::new();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => help = true,
            "-f" | "--file" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("option {} requires an argument", arg))?;
                mmb_file = PathBuf::from(value);
            }
            _ if arg.starts_with("--file=") => {
                mmb_file = PathBuf::from(&arg["--file=".len()..]);
            }
            _ if arg.starts_with("-f") && arg.len() > 2 => {
                mmb_file = PathBuf::from(&arg[2..]);
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("option {} not recognized", arg));
            }
            _ => {
                command.push(arg.clone());
                command.extend(iter.by_ref().cloned());
            }
        }
    }

    Ok(Options {
        mmb_file,
        help,
        command,
    })
}

/// Get the path to the history file
fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|mut p| {
        p.push(".mmbmanager_history");
        p
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_options(&args, std::env::var(MMB_FILE_ENV).ok()) {
        Ok(options) => options,
        Err(message) => {
            println!("{}", message);
            exit(2);
        }
    };

    if options.help {
        print_usage();
        exit(0);
    }

    if options.command.is_empty() {
        run_console(options.mmb_file);
        return;
    }

    let mut archive = match Archive::open(&options.mmb_file) {
        Ok(archive) => archive,
        Err(e) => {
            println!("{}", e);
            exit(2);
        }
    };

    if let Err(message) = execute(&mut archive, &options.command) {
        println!("{}", message);
        exit(2);
    }
}

/// Run the interactive console against `mmb_file`
fn run_console(mmb_file: PathBuf) {
    println!("=== MMBManager ===");
    println!("Interactive console for BBC Micro MMB archives.");
    println!("Type 'help' for available commands\n");

    let mut rl = Editor::new().expect("Failed to create editor");
    rl.set_helper(Some(CommandCompleter::new()));

    if let Some(history_path) = history_path() {
        let _ = rl.load_history(&history_path);
    }

    let mut archive = match Archive::open(&mmb_file) {
        Ok(archive) => {
            println!("Opened: {}", mmb_file.display());
            Some(archive)
        }
        Err(e) => {
            println!("Error: {}", e);
            println!("Use 'open <path>' to open an MMB file.");
            None
        }
    };

    loop {
        let input = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let _ = rl.add_history_entry(input);

        let parts = parse_command_line(input);
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => print_help(),
            "open" => {
                if parts.len() < 2 {
                    println!("Usage: open <path>");
                    continue;
                }
                match Archive::open(&parts[1]) {
                    Ok(opened) => {
                        println!("Opened: {}", parts[1]);
                        archive = Some(opened);
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            _ => match archive.as_mut() {
                Some(archive) => {
                    if let Err(message) = execute(archive, &parts) {
                        println!("{}", message);
                    }
                }
                None => println!("No archive open. Use 'open <path>' first."),
            },
        }
    }

    if let Some(history_path) = history_path() {
        let _ = rl.save_history(&history_path);
    }
    println!("Goodbye!");
}

/// Run one archive command. `parts[0]` is the command word.
fn execute(archive: &mut Archive, parts: &[String]) -> Result<(), String> {
    let args = &parts[1..];

    match parts[0].to_lowercase().as_str() {
        "ls" => {
            let entries = archive
                .catalogue()
                .map_err(|e| format!("Unable to read MMB file.\n{}", e))?;
            for entry in entries {
                println!("{}", entry);
            }
        }
        "save" => {
            if args.len() < 2 {
                return Err("save requires an index and a destination file.".to_string());
            }
            let index = parse_index(&args[0])?;
            slot(archive, index)?
                .save_to_file(&args[1])
                .map_err(|e| format!("Unable to save MMB file.\n{}", e))?;
        }
        "load" => {
            if args.len() < 2 {
                return Err("load requires an index and a source file.".to_string());
            }
            let index = parse_index(&args[0])?;
            let image_name = args.get(2).map(String::as_str);
            let force = args.get(3).is_some_and(|f| parse_force(f));
            slot(archive, index)?
                .load_from_file(&args[1], image_name, force)
                .map_err(|e| format!("Unable to load into MMB file.\n{}", e))?;
        }
        "lock" | "unlock" | "erase" => {
            let command = parts[0].to_lowercase();
            if args.is_empty() {
                return Err(format!("{} requires an index.", command));
            }
            let index = parse_index(&args[0])?;
            let status = match command.as_str() {
                "lock" => ImageStatus::Locked,
                "unlock" => ImageStatus::Unlocked,
                _ => ImageStatus::NotInitialised,
            };
            slot(archive, index)?
                .set_status(status)
                .map_err(|e| format!("Unable to update MMB file.\n{}", e))?;
        }
        "help" => print_help(),
        other => return Err(format!("Unknown command: {}. Type 'help' for commands.", other)),
    }

    Ok(())
}

fn slot(archive: &mut Archive, index: usize) -> Result<&mut ImageSlot, String> {
    archive.get(index).map_err(|e| e.to_string())
}

/// Parse an image index, range checked against the archive
fn parse_index(s: &str) -> Result<usize, String> {
    let index: usize = s
        .parse()
        .map_err(|_| "Index should be numeric.".to_string())?;
    if index > MAX_INDEX {
        return Err(format!("Index should be between 0 and {}", MAX_INDEX));
    }
    Ok(index)
}

/// Interpret the optional force argument of `load`
fn parse_force(s: &str) -> bool {
    matches!(
        s.to_uppercase().as_str(),
        "TRUE" | "1" | "T" | "Y" | "YES"
    )
}

fn parse_command_line(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
            }
            ' ' | '\t' if !in_quotes => {
                if !current.is_empty() {
                    parts.push(current.clone());
                    current.clear();
                }
            }
            _ => {
                current.push(ch);
            }
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

fn print_usage() {
    println!("usage: mmb [-h] [-f <PathToMMBFile>] [command and parameters]");
    println!("optional arguments:");
    println!("  -h, --help        show this help message and exit.");
    println!(
        "  -f, --file        set the path to the MMB file. If omitted then ${} or",
        MMB_FILE_ENV
    );
    println!("                    BEEB.MMB in the current directory is used.");
    println!("With no command an interactive console is started.");
    println!();
    print_help();
}

fn print_help() {
    println!("Available commands:");
    println!("  ls                                 - List all images in the archive");
    println!("  save <index> <file>                - Save the image at <index> to a local file");
    println!("  load <index> <file> [name] [force] - Load a local file into the image at <index>");
    println!("                                       (name defaults to the file name)");
    println!("                                       (force TRUE overwrites images not erased)");
    println!("  lock <index>                       - Mark the image at <index> as locked");
    println!("  unlock <index>                     - Mark the image at <index> as unlocked");
    println!("  erase <index>                      - Mark the image at <index> as erased");
    println!("  open <path>                        - Open another MMB file (console only)");
    println!("  help                               - Show this help");
    println!("  quit, exit                         - Exit (console only)");
}
