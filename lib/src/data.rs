use crate::results::WordleError;
use std::io::BufRead;
use std::ops::Deref;
use std::rc::Rc;
use std::result::Result;

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// The number of letters in the supported alphabet, `a` to `z`.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the alphabet id (0 to 25) of a lowercase ASCII letter.
#[inline]
pub fn letter_id(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// Returns the lowercase ASCII letter for the given alphabet id.
#[inline]
pub fn letter_from_id(id: u8) -> char {
    debug_assert!((id as usize) < ALPHABET_SIZE);
    (b'a' + id) as char
}

/// Converts the letters in a word to their alphabet ids.
///
/// The word must be exactly [`WORD_LENGTH`] lowercase ASCII letters.
pub fn word_to_char_ids(word: &str) -> [u8; WORD_LENGTH] {
    let mut ids = [0; WORD_LENGTH];
    for (id, letter) in ids.iter_mut().zip(word.bytes()) {
        *id = letter_id(letter) as u8;
    }
    ids
}

/// Converts alphabet ids back into a word.
pub fn char_ids_to_word(ids: &[u8]) -> String {
    ids.iter().map(|id| letter_from_id(*id)).collect()
}

/// Contains all the candidate words for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Rc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Surrounding whitespace is trimmed and blank
    /// lines are skipped. Every word must have exactly 5 letters, all in `a..=z`.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut all_words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            if let Some(word) = WordBank::validate(&line)? {
                all_words.push(Rc::from(word));
            }
        }
        Ok(WordBank { all_words })
    }

    /// Constructs a new `WordBank` from the given words, applying the same rules as
    /// [`WordBank::from_reader`].
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut all_words = Vec::new();
        for word in words {
            if let Some(word) = WordBank::validate(word.as_ref())? {
                all_words.push(Rc::from(word));
            }
        }
        Ok(WordBank { all_words })
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff there are no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    fn validate(line: &str) -> Result<Option<&str>, WordleError> {
        let word = line.trim();
        if word.is_empty() {
            return Ok(None);
        }
        if let Some(letter) = word.chars().find(|letter| !letter.is_ascii_lowercase()) {
            return Err(WordleError::UnsupportedCharacter(letter));
        }
        if word.len() != WORD_LENGTH {
            return Err(WordleError::WordLength(word.len()));
        }
        Ok(Some(word))
    }
}

impl Deref for WordBank {
    type Target = [Rc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

impl From<WordBank> for Vec<Rc<str>> {
    fn from(bank: WordBank) -> Self {
        bank.all_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_ids_cover_alphabet() {
        assert_eq!(letter_id(b'a'), 0);
        assert_eq!(letter_id(b'z'), 25);
        for id in 0..ALPHABET_SIZE as u8 {
            assert_eq!(letter_id(letter_from_id(id) as u8), id as usize);
        }
    }

    #[test]
    fn word_to_char_ids_and_back() {
        let ids = word_to_char_ids("crane");

        assert_eq!(ids, [2, 17, 0, 13, 4]);
        assert_eq!(char_ids_to_word(&ids), "crane");
    }
}
