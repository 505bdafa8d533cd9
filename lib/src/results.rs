use crate::data::char_ids_to_word;
use crate::data::word_to_char_ids;
use crate::data::WORD_LENGTH;
use std::error::Error;
use std::fmt;
use std::io;

#[cfg(feature = "serde")]
use crate::data::ALPHABET_SIZE;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The feedback given for a single letter of a guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Verdict {
    /// The letter is not in the word, or the word has no more copies of it than were already
    /// marked elsewhere in the same guess.
    Absent = 0,
    /// The letter is in the word, but not at this location.
    Present = 1,
    /// The letter is in the word at exactly this location.
    Exact = 2,
}

impl TryFrom<u8> for Verdict {
    type Error = WordleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Verdict::Absent),
            1 => Ok(Verdict::Present),
            2 => Ok(Verdict::Exact),
            _ => Err(WordleError::UnknownVerdict(value)),
        }
    }
}

/// A single evaluated guess: the guessed word along with the verdict for each of its letters.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConstraint"))]
pub struct Constraint {
    char_ids: [u8; WORD_LENGTH],
    verdicts: [Verdict; WORD_LENGTH],
}

/// The unchecked shape of a serialized [`Constraint`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawConstraint {
    char_ids: [u8; WORD_LENGTH],
    verdicts: [Verdict; WORD_LENGTH],
}

#[cfg(feature = "serde")]
impl TryFrom<RawConstraint> for Constraint {
    type Error = WordleError;

    fn try_from(raw: RawConstraint) -> Result<Self, Self::Error> {
        if let Some(id) = raw.char_ids.iter().find(|id| **id as usize >= ALPHABET_SIZE) {
            return Err(WordleError::UnknownLetterId(*id));
        }
        Ok(Constraint {
            char_ids: raw.char_ids,
            verdicts: raw.verdicts,
        })
    }
}

impl Constraint {
    /// Creates a constraint from an already validated word.
    ///
    /// The word must be exactly [`WORD_LENGTH`] lowercase ASCII letters. Use
    /// [`Constraint::from_strs`] for unvalidated input.
    pub fn new(word: &str, verdicts: [Verdict; WORD_LENGTH]) -> Constraint {
        debug_assert_eq!(word.len(), WORD_LENGTH);
        Constraint {
            char_ids: word_to_char_ids(word),
            verdicts,
        }
    }

    /// Validates and converts raw user text into a constraint.
    ///
    /// The word must be 5 alphabetic characters (it is lowercased), and the verdicts must be 5
    /// digits, each of `0`, `1` or `2`.
    pub fn from_strs(word: &str, verdict_digits: &str) -> Result<Constraint, WordleError> {
        if word.len() != WORD_LENGTH || !word.chars().all(|letter| letter.is_ascii_alphabetic()) {
            return Err(WordleError::InvalidWord);
        }
        if verdict_digits.len() != WORD_LENGTH
            || !verdict_digits.chars().all(|digit| digit.is_ascii_digit())
        {
            return Err(WordleError::InvalidVerdict);
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (verdict, digit) in verdicts.iter_mut().zip(verdict_digits.bytes()) {
            *verdict = Verdict::try_from(digit - b'0')?;
        }
        Ok(Constraint::new(&word.to_ascii_lowercase(), verdicts))
    }

    /// The guessed word.
    pub fn word(&self) -> String {
        char_ids_to_word(&self.char_ids)
    }

    /// The alphabet ids of the guessed word's letters.
    pub fn char_ids(&self) -> &[u8; WORD_LENGTH] {
        &self.char_ids
    }

    /// The verdicts, in the same order as the letters of the guess.
    pub fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.verdicts
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.word())?;
        for verdict in &self.verdicts {
            write!(f, "{}", *verdict as u8)?;
        }
        Ok(())
    }
}

/// Indicates that some input could not be understood.
#[derive(Debug)]
pub enum WordleError {
    /// The command was not one of the known forms, or had the wrong number of tokens.
    InvalidCommand,
    /// The guessed word was not made of exactly 5 alphabetic characters.
    InvalidWord,
    /// The verdicts were not exactly 5 digits.
    InvalidVerdict,
    /// A verdict digit was outside the range `0..=2`.
    UnknownVerdict(u8),
    /// A letter id was outside the alphabet.
    UnknownLetterId(u8),
    /// A word in the word list had the given length instead of 5.
    WordLength(usize),
    /// A word in the word list contained a character outside `a..=z`.
    UnsupportedCharacter(char),
    /// The word list could not be read.
    Io(io::Error),
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordleError::InvalidCommand => write!(f, "Invalid command format"),
            WordleError::InvalidWord => write!(f, "Invalid word format"),
            WordleError::InvalidVerdict => write!(f, "Invalid verdict format"),
            WordleError::UnknownVerdict(_) => write!(f, "Unknown verdict"),
            WordleError::UnknownLetterId(id) => {
                write!(f, "Letter id {} is outside the alphabet", id)
            }
            WordleError::WordLength(length) => {
                write!(f, "Words must have 5 letters, found one with {}", length)
            }
            WordleError::UnsupportedCharacter(letter) => {
                write!(f, "Unsupported character '{}' in word list", letter)
            }
            WordleError::Io(err) => write!(f, "Failed to read words: {}", err),
        }
    }
}

impl Error for WordleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WordleError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for WordleError {
    fn from(err: io::Error) -> Self {
        WordleError::Io(err)
    }
}
