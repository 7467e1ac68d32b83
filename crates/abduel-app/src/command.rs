use std::str::FromStr;

use abduel_core::{Feedback, FeedbackError};

use crate::i18n::Language;

/// A line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    New,
    Reset,
    Guess(String),
    Hint(String),
    Feedback { a: u8, b: u8 },
    /// Opens the correction editor for a one-based round.
    EditRound { round: usize },
    Fix { round: usize, a: u8, b: u8 },
    Cancel,
    Status,
    Records,
    ClearRecords,
    Language(Language),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    #[display("unknown command {command:?}")]
    Unknown { command: String },
    #[display("{command:?} needs more arguments")]
    MissingArgument { command: String },
    #[display("{value:?} is not a number")]
    InvalidNumber { value: String },
    #[display("unknown language {value:?}")]
    InvalidLanguage { value: String },
    #[display("{_0}")]
    InvalidFeedback(FeedbackError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Empty);
        };
        let rest = words.collect::<Vec<_>>();
        let first = rest.first().copied();
        let name = head.to_ascii_lowercase();
        let missing = || CommandError::MissingArgument {
            command: name.clone(),
        };

        let command = match name.as_str() {
            "new" => Self::New,
            "reset" => Self::Reset,
            "guess" | "g" => Self::Guess(first.ok_or_else(missing)?.to_owned()),
            "hint" => Self::Hint(first.ok_or_else(missing)?.to_owned()),
            "fb" | "feedback" => {
                let (a, b) = parse_feedback(&rest).ok_or_else(missing)??;
                Self::Feedback { a, b }
            }
            "fix" => {
                let round = parse_number(first.ok_or_else(missing)?)?;
                match parse_feedback(&rest[1..]) {
                    None => Self::EditRound { round },
                    Some(feedback) => {
                        let (a, b) = feedback?;
                        Self::Fix { round, a, b }
                    }
                }
            }
            "cancel" => Self::Cancel,
            "status" | "s" => Self::Status,
            "records" => Self::Records,
            "clear-records" => Self::ClearRecords,
            "lang" | "language" => {
                let value = first.ok_or_else(missing)?;
                Self::Language(value.parse().map_err(|_| CommandError::InvalidLanguage {
                    value: value.to_owned(),
                })?)
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ if is_code_like(head) => Self::Guess(head.to_owned()),
            _ if is_feedback_like(head) => {
                let feedback = head
                    .parse::<Feedback>()
                    .map_err(CommandError::InvalidFeedback)?;
                Self::Feedback {
                    a: feedback.a(),
                    b: feedback.b(),
                }
            }
            _ => {
                return Err(CommandError::Unknown {
                    command: head.to_owned(),
                });
            }
        };
        Ok(command)
    }
}

fn parse_number<T>(word: &str) -> Result<T, CommandError>
where
    T: FromStr,
{
    word.parse().map_err(|_| CommandError::InvalidNumber {
        value: word.to_owned(),
    })
}

/// Reads `<a> <b>` or `<a>A<b>B`; `None` if `words` is empty.
///
/// Values above 4 are passed through so the game can report them.
fn parse_feedback(words: &[&str]) -> Option<Result<(u8, u8), CommandError>> {
    let result = match words {
        [] => return None,
        [text] => text
            .parse::<Feedback>()
            .map(|feedback| (feedback.a(), feedback.b()))
            .map_err(CommandError::InvalidFeedback),
        [a, b, ..] => parse_number(a).and_then(|a| Ok((a, parse_number(b)?))),
    };
    Some(result)
}

fn is_code_like(word: &str) -> bool {
    word.chars().all(|ch| ch.is_ascii_digit() || ch == '_')
}

fn is_feedback_like(word: &str) -> bool {
    let word = word.to_ascii_lowercase();
    word.ends_with('b') && word.contains('a')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn test_guesses() {
        assert_eq!(parse("0472"), Ok(Command::Guess("0472".to_owned())));
        assert_eq!(parse("guess 12"), Ok(Command::Guess("12".to_owned())));
        assert_eq!(parse("  hint 5678 "), Ok(Command::Hint("5678".to_owned())));
        assert_eq!(parse(""), Ok(Command::Empty));
        assert_eq!(
            parse("guess"),
            Err(CommandError::MissingArgument {
                command: "guess".to_owned()
            })
        );
    }

    #[test]
    fn test_feedback_forms() {
        assert_eq!(parse("1A2B"), Ok(Command::Feedback { a: 1, b: 2 }));
        assert_eq!(parse("0a0b"), Ok(Command::Feedback { a: 0, b: 0 }));
        assert_eq!(parse("fb 3 1"), Ok(Command::Feedback { a: 3, b: 1 }));
        assert_eq!(parse("fb 2a2b"), Ok(Command::Feedback { a: 2, b: 2 }));
        // Range checks are left to the game.
        assert_eq!(parse("fb 5 0"), Ok(Command::Feedback { a: 5, b: 0 }));
        assert!(matches!(
            parse("3A2B"),
            Err(CommandError::InvalidFeedback(FeedbackError::SumTooLarge { .. }))
        ));
        assert_eq!(
            parse("fb x 1"),
            Err(CommandError::InvalidNumber {
                value: "x".to_owned()
            })
        );
    }

    #[test]
    fn test_fix() {
        assert_eq!(parse("fix 2"), Ok(Command::EditRound { round: 2 }));
        assert_eq!(
            parse("fix 2 1 0"),
            Ok(Command::Fix {
                round: 2,
                a: 1,
                b: 0
            })
        );
        assert_eq!(
            parse("fix 1 0A3B"),
            Ok(Command::Fix {
                round: 1,
                a: 0,
                b: 3
            })
        );
    }

    #[test]
    fn test_misc() {
        assert_eq!(parse("lang zh"), Ok(Command::Language(Language::ZhTw)));
        assert_eq!(
            parse("lang klingon"),
            Err(CommandError::InvalidLanguage {
                value: "klingon".to_owned()
            })
        );
        assert_eq!(parse("QUIT"), Ok(Command::Quit));
        assert_eq!(parse("clear-records"), Ok(Command::ClearRecords));
        assert_eq!(
            parse("dance"),
            Err(CommandError::Unknown {
                command: "dance".to_owned()
            })
        );
    }
}
