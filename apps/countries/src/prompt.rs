use std::io::{self, BufRead, Write};

use anyhow::Result;
use client_core::ViewSession;
use shared::filter::CurrencyCategory;

use crate::render::{print_cards, print_regions};

pub const HELP: &str = "\
commands:
  search [text]        filter by name (empty clears)
  region [name]        filter by region (empty clears)
  currency <category>  none | euro | dollar | pound (or ALL, €, $, £)
  clear                reset every filter
  regions              list known regions
  show                 print the current cards
  help                 show this text
  quit                 leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Region(Option<String>),
    Currency(CurrencyCategory),
    Clear,
    Regions,
    Show,
    Help,
    Quit,
}

/// `search` keeps its text exactly as typed after the separating space, like
/// `--query`; other arguments are trimmed.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (verb, raw_rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };
    let rest = raw_rest.trim();

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Search(raw_rest.to_string()),
        "region" | "r" => Command::Region((!rest.is_empty()).then(|| rest.to_string())),
        "currency" | "c" => {
            if rest.is_empty() {
                return Err("currency needs a category".into());
            }
            Command::Currency(rest.parse().map_err(|err| format!("{err}"))?)
        }
        "clear" => Command::Clear,
        "regions" => Command::Regions,
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(command))
}

/// Applies `command` to the session. Returns `false` once the user quits.
pub fn apply_command(session: &mut ViewSession, command: Command) -> bool {
    match command {
        Command::Search(text) => session.set_query(text),
        Command::Region(region) => session.set_region(region),
        Command::Currency(category) => session.set_currency(category),
        Command::Clear => session.clear(),
        Command::Regions | Command::Show | Command::Help => {}
        Command::Quit => return false,
    }
    true
}

pub fn run(session: &mut ViewSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{HELP}");
    print_cards(session);

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}; type 'help' for usage");
                continue;
            }
        };

        match &command {
            Command::Help => println!("{HELP}"),
            Command::Regions => print_regions(session),
            _ => {}
        }
        let changes_view = !matches!(command, Command::Help | Command::Regions | Command::Quit);
        if !apply_command(session, command) {
            break;
        }
        if changes_view {
            print_cards(session);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/prompt_tests.rs"]
mod tests;
