//! Simple interactive CLI mode
//!
//! Line-based loop: type a rack to search it, `+WORD` to add, `-WORD` to
//! remove, `list` to show the store, `quit` to exit.

use super::manage::{Edit, apply_edit};
use super::search::run_search;
use crate::error::Result;
use crate::output::{print_edit_outcome, print_search_result, print_word_list};
use crate::service::WordService;
use crate::store::WordStore;
use crate::store::loader::save_to_file;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Edit(Edit),
    List,
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if let Some(word) = line.strip_prefix('+') {
        return Command::Edit(Edit::Add(word.trim().to_string()));
    }
    if let Some(word) = line.strip_prefix('-') {
        return Command::Edit(Edit::Remove(word.trim().to_string()));
    }

    match line.to_lowercase().as_str() {
        "" => Command::Empty,
        "quit" | "q" | "exit" => Command::Quit,
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        _ => Command::Search(line.to_string()),
    }
}

/// Run the interactive mode on stdin
///
/// Edits are written back to `store_path` when one is given; otherwise they
/// last for this session only.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or writing the word list.
pub fn run_simple<S: WordStore>(service: &WordService<S>, store_path: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(service, store_path, stdin.lock())
}

/// Run the interactive mode over any line source
///
/// # Errors
///
/// Returns an error on I/O failure reading input or writing the word list.
pub fn run_simple_with<S, R>(
    service: &WordService<S>,
    store_path: Option<&Path>,
    input: R,
) -> Result<()>
where
    S: WordStore,
    R: BufRead,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Rack Words - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut lines = input.lines();
    loop {
        print!("rack> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };

        match parse_command(&line?) {
            Command::Empty => {}
            Command::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::List => print_word_list(&service.list()),
            Command::Search(letters) => match run_search(service, &letters) {
                Ok(result) => print_search_result(&result, false),
                Err(e) => println!("{} {e}\n", "❌".red()),
            },
            Command::Edit(edit) => match apply_edit(service, &edit) {
                Ok(outcome) => {
                    if let Some(path) = store_path {
                        save_to_file(path, &service.list())?;
                    }
                    print_edit_outcome(&outcome);
                    println!();
                }
                Err(e) => println!("{} {e}\n", "❌".red()),
            },
        }
    }
}

fn print_help() {
    println!("Type seven letters to find every word they spell.");
    println!("  +WORD  add a word      -WORD  remove a word");
    println!("  list   show all words  quit   exit\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::store::loader::{load_from_file, words_from_slice};
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("  arboles "), Command::Search("arboles".into()));
        assert_eq!(parse_command("+roble"), Command::Edit(Edit::Add("roble".into())));
        assert_eq!(
            parse_command("- gato"),
            Command::Edit(Edit::Remove("gato".into()))
        );
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("list"), Command::List);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn session_applies_edits_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let service = WordService::new(MemoryStore::from_words(words_from_slice(&[
            "arbol", "gato",
        ])));

        let input = Cursor::new("+roble\n-gato\narboles\nabc\n+no\nquit\n+ignored\n");
        run_simple_with(&service, Some(path.as_path()), input).unwrap();

        let stored: Vec<String> = service.list().iter().map(ToString::to_string).collect();
        assert_eq!(stored, vec!["ARBOL", "ROBLE"]);
        assert_eq!(load_from_file(&path).unwrap(), service.list());
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let service = WordService::new(MemoryStore::new());
        run_simple_with(&service, None, Cursor::new("+sol\n")).unwrap();
        assert_eq!(service.list().len(), 1);
    }
}
