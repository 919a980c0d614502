//! Command line parsing.

use storefront_domain::ProductId;
use storefront_ui::UiCommand;
use thiserror::Error;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  search <query>   search the catalog
  clear            clear the search and reload
  open <id>        show one product
  back             return to the list
  retry            repeat the current screen's last load
  reload           reload the full list
  help             show this text
  quit             exit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the controller.
    Ui(UiCommand),
    /// Print the help text.
    Help,
    /// Exit the program.
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty.
    #[error("no command given")]
    Empty,

    /// The first word is not a known command.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// `open` needs a numeric product id.
    #[error("invalid product id: {0}")]
    InvalidId(String),
}

/// Parses one line of input.
///
/// The search query is everything after the command word, with
/// surrounding whitespace removed; a blank query is passed on as-is.
///
/// # Errors
///
/// Returns an error for empty lines, unknown commands, and `open` without
/// a valid id.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_lowercase().as_str() {
        "" => return Err(ParseError::Empty),
        "search" | "s" => UiCommand::Search(rest.to_string()),
        "clear" => UiCommand::ClearSearch,
        "open" | "o" => {
            let id = rest
                .parse::<ProductId>()
                .map_err(|_| ParseError::InvalidId(rest.to_string()))?;
            UiCommand::OpenProduct(id)
        }
        "back" | "b" => UiCommand::Back,
        "retry" | "r" => UiCommand::Retry,
        "reload" => UiCommand::LoadAll,
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Command::Ui(command))
}
