//! Commands typed at the session prompt.

use std::str::FromStr;

use dancefloor_core::{Direction, KidType, ParseKidTypeError};

/// A command entered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the selected kid type one cell.
    Move(Direction),
    /// Select the kid type that drives subsequent moves.
    SelectType(KidType),
    /// Restore the starting layout.
    Reset,
    /// Open a catalog puzzle by its one-based number.
    Load(usize),
    /// Print the board and the score.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Text printed by the `help` command.
pub const HELP: &str = "\
commands:
  n, s, e, w        move the selected kid type north, south, east or west
  type <kid-type>   select the kid type that moves (girl-weak, girl-strong,
                    boy-weak, boy-strong, or one of the symbols g G b B)
  reset             restore the starting layout and clear the score
  load <n>          open puzzle <n> of the catalog
  show              print the board and the score
  help              print this list
  quit              leave";

/// Errors that can occur when parsing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseCommandError {
    /// The line was blank.
    #[display("empty command")]
    Empty,
    /// The first word is not a command.
    #[display("unknown command `{name}`")]
    Unknown {
        /// The word that was typed.
        name: String,
    },
    /// The command takes an argument that was not given.
    #[display("`{name}` needs an argument")]
    MissingArgument {
        /// The command name.
        name: &'static str,
    },
    /// The command was given more words than it takes.
    #[display("unexpected argument `{argument}`")]
    UnexpectedArgument {
        /// The first extra word.
        argument: String,
    },
    /// The argument of `type` is not a kid type.
    #[display("{_0}")]
    #[from]
    InvalidKidType(ParseKidTypeError),
    /// The argument of `load` is not a positive number.
    #[display("`{input}` is not a puzzle number")]
    InvalidNumber {
        /// The word that was typed.
        input: String,
    },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(ParseCommandError::Empty)?;
        let lower = name.to_ascii_lowercase();

        let command = match lower.as_str() {
            "type" | "t" => {
                let arg = words
                    .next()
                    .ok_or(ParseCommandError::MissingArgument { name: "type" })?;
                Command::SelectType(arg.parse()?)
            }
            "load" | "l" => {
                let arg = words
                    .next()
                    .ok_or(ParseCommandError::MissingArgument { name: "load" })?;
                match arg.parse::<usize>() {
                    Ok(number) if number > 0 => Command::Load(number),
                    _ => {
                        return Err(ParseCommandError::InvalidNumber {
                            input: arg.to_owned(),
                        });
                    }
                }
            }
            "reset" | "r" => Command::Reset,
            "show" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => match lower.parse::<Direction>() {
                Ok(direction) => Command::Move(direction),
                Err(_) => return Err(ParseCommandError::Unknown { name: name.to_owned() }),
            },
        };

        if let Some(extra) = words.next() {
            return Err(ParseCommandError::UnexpectedArgument {
                argument: extra.to_owned(),
            });
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!("n".parse::<Command>(), Ok(Command::Move(Direction::North)));
        assert_eq!(" S ".parse::<Command>(), Ok(Command::Move(Direction::South)));
        assert_eq!("east".parse::<Command>(), Ok(Command::Move(Direction::East)));
        assert_eq!("W".parse::<Command>(), Ok(Command::Move(Direction::West)));
    }

    #[test]
    fn test_parse_with_arguments() {
        assert_eq!(
            "type girl-strong".parse::<Command>(),
            Ok(Command::SelectType(KidType::GirlStrong))
        );
        assert_eq!("type B".parse::<Command>(), Ok(Command::SelectType(KidType::BoyStrong)));
        assert_eq!("load 3".parse::<Command>(), Ok(Command::Load(3)));
        assert_eq!(
            "type".parse::<Command>(),
            Err(ParseCommandError::MissingArgument { name: "type" })
        );
        assert!(matches!(
            "type parent".parse::<Command>(),
            Err(ParseCommandError::InvalidKidType(_))
        ));
        assert_eq!(
            "load 0".parse::<Command>(),
            Err(ParseCommandError::InvalidNumber {
                input: "0".to_owned()
            })
        );
    }

    #[test]
    fn test_parse_plain_commands() {
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("QUIT".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(ParseCommandError::Unknown {
                name: "dance".to_owned()
            })
        );
        assert_eq!(
            "reset now".parse::<Command>(),
            Err(ParseCommandError::UnexpectedArgument {
                argument: "now".to_owned()
            })
        );
    }
}
