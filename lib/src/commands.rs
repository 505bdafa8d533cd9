use crate::results::Constraint;
use crate::results::WordleError;
use std::str::FromStr;

/// A parsed line of user input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    /// Browse the remaining candidate words.
    Search,
    /// Narrow the candidate words using the result of a guess.
    Add(Constraint),
}

/// Parses one line of user input.
///
/// Accepted forms are `search` (or `s`), and `add <word> <verdicts>` (or `a ...`), where the
/// word has 5 letters and the verdicts are 5 digits: `0` for absent, `1` for present elsewhere,
/// and `2` for an exact match.
pub fn parse_command(line: &str) -> Result<Command, WordleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["s" | "search"] => Ok(Command::Search),
        ["a" | "add", word, verdicts] => Ok(Command::Add(Constraint::from_strs(word, verdicts)?)),
        _ => Err(WordleError::InvalidCommand),
    }
}

impl FromStr for Command {
    type Err = WordleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_command(line)
    }
}
