//! Debug console command surface.
//!
//! Hosts that offer a developer console can forward lines to
//! [`parse_command`] and [`execute`] to let users inspect and edit renames
//! while the game is running.  The `card-rename-console` binary runs the same
//! commands over stdin.
//!
//! # Command syntax (for beginners)
//!
//! Words are separated by whitespace; double quotes group words that contain
//! spaces, which matters because card names often do:
//!
//! ```text
//! set "Perfected Strike" 完美打击
//! set Strike_R Heavy Blow          (the remaining words form the name)
//! resolve Strike_R Strike
//! ```
//!
//! | Command               | Effect                                   |
//! |-----------------------|------------------------------------------|
//! | `list`                | print every rename entry                 |
//! | `get <key>`           | print the entry for `key`                |
//! | `set <key> [name...]` | set (or, without a name, remove) a rename|
//! | `remove <key>`        | remove a rename                          |
//! | `clear`               | remove every rename                      |
//! | `reload`              | re-read the file                         |
//! | `batch on\|off`       | enable or disable the batch rule         |
//! | `prefix [text]`       | set the batch prefix (empty if omitted)  |
//! | `suffix [text]`       | set the batch suffix (empty if omitted)  |
//! | `resolve <id> [name]` | show what a card would be renamed to     |
//! | `path`                | show where the file lives                |
//! | `help`                | list commands                            |
//! | `quit` / `exit`       | leave the console                        |

use std::fmt::Write as _;

use card_rename_core::{apply_name, CardRef};
use thiserror::Error;

use crate::application::config_store::{ConfigRepository, ConfigStore, StoreError};

/// One-line summary of every command, printed by `help`.
pub const HELP_TEXT: &str = "\
commands:
  list                    show every rename
  get <key>               show the rename for a card ID or name
  set <key> [name...]     set a rename (no name removes it)
  remove <key>            remove a rename
  clear                   remove every rename
  reload                  re-read the configuration file
  batch on|off            enable or disable the batch rule
  prefix [text]           set the batch prefix
  suffix [text]           set the batch suffix
  resolve <id> [name]     show the name a card would get
  path                    show the configuration file location
  quit                    leave the console";

/// Error type for console parsing and execution.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{command}` takes no arguments")]
    UnexpectedArgument { command: &'static str },
    #[error("expected `on` or `off`, got {0:?}")]
    InvalidToggle(String),
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("could not save: {0}")]
    Store(#[from] StoreError),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Get { key: String },
    Set { key: String, name: Option<String> },
    Remove { key: String },
    Clear,
    Reload,
    Batch { enabled: bool },
    Prefix { text: String },
    Suffix { text: String },
    Resolve { id: String, name: Option<String> },
    Path,
    Help,
    Quit,
}

/// Splits `line` into words, honouring double quotes.
///
/// # Errors
///
/// Returns [`ConsoleError::UnterminatedQuote`] if a quote is never closed.
pub fn tokenize(line: &str) -> Result<Vec<String>, ConsoleError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err(ConsoleError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Parses one console line.
///
/// # Errors
///
/// Returns a [`ConsoleError`] describing why the line is not a valid command.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, ConsoleError> {
    let words = tokenize(line)?;
    let Some((head, args)) = words.split_first() else {
        return Err(ConsoleError::Empty);
    };

    // Remaining words joined back together, for free-text arguments.
    let rest = |from: usize| -> Option<String> {
        (args.len() > from).then(|| args[from..].join(" "))
    };
    let required = |command: &'static str, argument: &'static str| {
        args.first()
            .cloned()
            .ok_or(ConsoleError::MissingArgument { command, argument })
    };
    let no_args = |command: ConsoleCommand, name: &'static str| {
        if args.is_empty() {
            Ok(command)
        } else {
            Err(ConsoleError::UnexpectedArgument { command: name })
        }
    };

    match head.to_lowercase().as_str() {
        "list" => no_args(ConsoleCommand::List, "list"),
        "get" => Ok(ConsoleCommand::Get {
            key: required("get", "key")?,
        }),
        "set" => Ok(ConsoleCommand::Set {
            key: required("set", "key")?,
            name: rest(1),
        }),
        "remove" => Ok(ConsoleCommand::Remove {
            key: required("remove", "key")?,
        }),
        "clear" => no_args(ConsoleCommand::Clear, "clear"),
        "reload" => no_args(ConsoleCommand::Reload, "reload"),
        "batch" => {
            let toggle = required("batch", "toggle (on|off)")?;
            match toggle.to_lowercase().as_str() {
                "on" => Ok(ConsoleCommand::Batch { enabled: true }),
                "off" => Ok(ConsoleCommand::Batch { enabled: false }),
                _ => Err(ConsoleError::InvalidToggle(toggle)),
            }
        }
        "prefix" => Ok(ConsoleCommand::Prefix {
            text: rest(0).unwrap_or_default(),
        }),
        "suffix" => Ok(ConsoleCommand::Suffix {
            text: rest(0).unwrap_or_default(),
        }),
        "resolve" => Ok(ConsoleCommand::Resolve {
            id: required("resolve", "card id")?,
            name: rest(1),
        }),
        "path" => no_args(ConsoleCommand::Path, "path"),
        "help" => Ok(ConsoleCommand::Help),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(ConsoleError::UnknownCommand(other.to_string())),
    }
}

/// Executes `command` against `store` and returns the text to show the user.
///
/// # Errors
///
/// Returns [`ConsoleError::Store`] when a mutation could not be persisted.
pub fn execute<R: ConfigRepository>(
    store: &mut ConfigStore<R>,
    command: ConsoleCommand,
) -> Result<String, ConsoleError> {
    let reply = match command {
        ConsoleCommand::List => {
            let renames = store.all_renames();
            if renames.is_empty() {
                "no renames configured".to_string()
            } else {
                let mut out = format!("{} rename(s):", renames.len());
                for (key, name) in renames.iter() {
                    let _ = write!(out, "\n  {key} -> {name}");
                }
                out
            }
        }
        ConsoleCommand::Get { key } => match store.rename_for(&key) {
            Some(name) => format!("{key} -> {name}"),
            None => format!("no rename for {key}"),
        },
        ConsoleCommand::Set { key, name } => {
            store.set_rename(&key, name.as_deref())?;
            match store.rename_for(&key) {
                Some(name) => format!("{key} -> {name}"),
                None => format!("removed {key}"),
            }
        }
        ConsoleCommand::Remove { key } => {
            store.remove_rename(&key)?;
            format!("removed {key}")
        }
        ConsoleCommand::Clear => {
            store.clear_all()?;
            "cleared all renames".to_string()
        }
        ConsoleCommand::Reload => {
            let count = store.reload().renames.len();
            format!("reloaded {count} rename(s) from {}", store.location())
        }
        ConsoleCommand::Batch { enabled } => {
            let mut rule = store.batch_rule();
            rule.enabled = enabled;
            store.set_batch_rule(rule)?;
            format!("batch rule {}", if enabled { "enabled" } else { "disabled" })
        }
        ConsoleCommand::Prefix { text } => {
            let mut rule = store.batch_rule();
            rule.prefix = text;
            store.set_batch_rule(rule)?;
            format!("batch prefix set to {:?}", store.batch_rule().prefix)
        }
        ConsoleCommand::Suffix { text } => {
            let mut rule = store.batch_rule();
            rule.suffix = text;
            store.set_batch_rule(rule)?;
            format!("batch suffix set to {:?}", store.batch_rule().suffix)
        }
        ConsoleCommand::Resolve { id, name } => {
            let result = apply_name(store.current(), CardRef::new(&id, name.as_deref()));
            match result.new_name {
                Some(new_name) if result.should_add_keyword_tag => {
                    format!("{id}: {new_name} (adds strike tag)")
                }
                Some(new_name) => format!("{id}: {new_name}"),
                None => format!("{id}: unchanged"),
            }
        }
        ConsoleCommand::Path => store.location(),
        ConsoleCommand::Help => HELP_TEXT.to_string(),
        ConsoleCommand::Quit => String::new(),
    };
    Ok(reply)
}
