//! Console command grammar.

use std::str::FromStr;

/// One line typed at the console prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    /// Paste the entry at a 1-based position through the clipboard.
    Paste(usize),
    /// Append the entry at a 1-based position to the focused control.
    Sticky(usize),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),
    #[error("`{0}` needs an entry number")]
    MissingPosition(&'static str),
    #[error("`{0}` is not an entry number")]
    InvalidPosition(String),
}

impl FromStr for ConsoleCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandParseError::Empty);
        };

        match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "paste" | "p" => position(words.next(), "paste").map(Self::Paste),
            "sticky" | "s" => position(words.next(), "sticky").map(Self::Sticky),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            // A bare number pastes that entry.
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::Paste(n)),
                _ => Err(CommandParseError::Unknown(verb.to_string())),
            },
        }
    }
}

fn position(word: Option<&str>, verb: &'static str) -> Result<usize, CommandParseError> {
    let word = word.ok_or(CommandParseError::MissingPosition(verb))?;
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandParseError::InvalidPosition(word.to_string())),
    }
}

pub const HELP: &str = "\
commands:
  list | ls          show the history
  paste <n> | <n>    paste entry n into the frontmost application
  sticky <n>         append entry n to the focused text field
  clear              forget every entry
  help               show this help
  quit               exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!("list".parse(), Ok(ConsoleCommand::List));
        assert_eq!("  LS ".parse(), Ok(ConsoleCommand::List));
        assert_eq!("paste 3".parse(), Ok(ConsoleCommand::Paste(3)));
        assert_eq!("p 1".parse(), Ok(ConsoleCommand::Paste(1)));
        assert_eq!("sticky 2".parse(), Ok(ConsoleCommand::Sticky(2)));
        assert_eq!("clear".parse(), Ok(ConsoleCommand::Clear));
        assert_eq!("exit".parse(), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn bare_number_pastes() {
        assert_eq!("7".parse(), Ok(ConsoleCommand::Paste(7)));
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(
            "paste 0".parse::<ConsoleCommand>(),
            Err(CommandParseError::InvalidPosition("0".into()))
        );
        assert_eq!(
            "0".parse::<ConsoleCommand>(),
            Err(CommandParseError::Unknown("0".into()))
        );
    }

    #[test]
    fn reports_missing_and_bad_arguments() {
        assert_eq!(
            "sticky".parse::<ConsoleCommand>(),
            Err(CommandParseError::MissingPosition("sticky"))
        );
        assert_eq!(
            "paste two".parse::<ConsoleCommand>(),
            Err(CommandParseError::InvalidPosition("two".into()))
        );
        assert_eq!("".parse::<ConsoleCommand>(), Err(CommandParseError::Empty));
        assert!(matches!(
            "copy 1".parse::<ConsoleCommand>(),
            Err(CommandParseError::Unknown(_))
        ));
    }
}
