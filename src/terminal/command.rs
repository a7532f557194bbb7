use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// 1-based position on the board.
    Card(usize),
    Next,
    Restart,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("type a card number, or 'h' for help")]
    Empty,

    #[error("cards are numbered from 1")]
    ZeroCard,

    #[error("unknown command {0:?}, type 'h' for help")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let word = raw.trim().to_ascii_lowercase();
        match word.as_str() {
            "" => Err(CommandError::Empty),
            "n" | "next" => Ok(Command::Next),
            "r" | "restart" => Ok(Command::Restart),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => match word.parse::<usize>() {
                Ok(0) => Err(CommandError::ZeroCard),
                Ok(position) => Ok(Command::Card(position)),
                Err(_) => Err(CommandError::Unknown(raw.trim().to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_card_numbers_and_words() {
        assert_eq!("7".parse(), Ok(Command::Card(7)));
        assert_eq!("  12 \n".parse(), Ok(Command::Card(12)));
        assert_eq!("N".parse(), Ok(Command::Next));
        assert_eq!("restart".parse(), Ok(Command::Restart));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_blank_zero_and_garbage() {
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("0".parse::<Command>(), Err(CommandError::ZeroCard));
        assert_eq!(
            "flip 3".parse::<Command>(),
            Err(CommandError::Unknown("flip 3".to_string()))
        );
        assert_eq!(
            "-1".parse::<Command>(),
            Err(CommandError::Unknown("-1".to_string()))
        );
    }
}
