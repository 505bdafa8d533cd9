use crate::data::letter_id;
use crate::data::ALPHABET_SIZE;
use crate::data::WORD_LENGTH;
use crate::results::Constraint;
use crate::results::Verdict;
use std::iter::zip;

/// What is known about one letter at one location in the word.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum PositionState {
    Unconstrained,
    /// The letter cannot be at this location.
    Forbidden,
    /// The letter must be at this location.
    Forced,
}

/// The most times a letter may appear in the word.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum MaxCount {
    Unbounded,
    BoundedAt(u8),
}

/// Accumulates the restrictions from every constraint seen so far, and checks words against
/// them.
///
/// Contradictory constraints are not detected; they simply leave no word able to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFilter {
    /// The minimum number of times each letter must appear in the word.
    min_count: [u8; ALPHABET_SIZE],
    /// The maximum number of times each letter may appear in the word.
    max_count: [MaxCount; ALPHABET_SIZE],
    /// Per location, per letter state.
    position_mask: [[PositionState; ALPHABET_SIZE]; WORD_LENGTH],
}

impl WordFilter {
    /// Creates a filter that every word satisfies.
    pub fn new() -> WordFilter {
        WordFilter {
            min_count: [0; ALPHABET_SIZE],
            max_count: [MaxCount::Unbounded; ALPHABET_SIZE],
            position_mask: [[PositionState::Unconstrained; ALPHABET_SIZE]; WORD_LENGTH],
        }
    }

    /// Merges the restrictions arising from the given constraint into this filter.
    pub fn add_constraint(&mut self, constraint: &Constraint) {
        let mut local_min_count = [0u8; ALPHABET_SIZE];
        let mut absent_letters: Vec<usize> = Vec::new();

        for (index, (id, verdict)) in zip(constraint.char_ids(), constraint.verdicts()).enumerate()
        {
            let letter = *id as usize;
            match verdict {
                Verdict::Absent => {
                    self.position_mask[index][letter] = PositionState::Forbidden;
                    // Whether the letter is absent everywhere depends on the rest of this guess.
                    absent_letters.push(letter);
                }
                Verdict::Present => {
                    self.position_mask[index][letter] = PositionState::Forbidden;
                    local_min_count[letter] += 1;
                }
                Verdict::Exact => {
                    self.position_mask[index] = [PositionState::Forbidden; ALPHABET_SIZE];
                    self.position_mask[index][letter] = PositionState::Forced;
                    local_min_count[letter] += 1;
                }
            }
        }

        for letter in absent_letters {
            if local_min_count[letter] == 0 {
                for states in &mut self.position_mask {
                    states[letter] = PositionState::Forbidden;
                }
            } else {
                // The word holds exactly as many copies as were marked present or exact. Later
                // constraints replace this bound rather than tightening it.
                self.max_count[letter] = MaxCount::BoundedAt(local_min_count[letter]);
            }
        }

        for (min_count, local) in zip(&mut self.min_count, local_min_count) {
            *min_count = (*min_count).max(local);
        }
    }

    /// Returns `true` iff the given word satisfies every constraint added so far.
    ///
    /// Words of the wrong length, or with characters outside `a..=z`, never match.
    pub fn matches(&self, word: &str) -> bool {
        if word.len() != WORD_LENGTH || !word.bytes().all(|letter| letter.is_ascii_lowercase()) {
            return false;
        }
        let mut counts = [0u8; ALPHABET_SIZE];
        for (states, letter) in zip(&self.position_mask, word.bytes()) {
            let letter = letter_id(letter);
            if states[letter] == PositionState::Forbidden {
                return false;
            }
            counts[letter] += 1;
        }
        zip(&counts, zip(&self.min_count, &self.max_count)).all(|(count, (min, max))| {
            let under_max = match max {
                MaxCount::Unbounded => true,
                MaxCount::BoundedAt(max) => count <= max,
            };
            under_max && count >= min
        })
    }

    /// Returns the words that satisfy this filter, in their original order.
    pub fn apply<S>(&self, words: &[S]) -> Vec<S>
    where
        S: AsRef<str> + Clone,
    {
        words
            .iter()
            .filter(|word| self.matches(word.as_ref()))
            .cloned()
            .collect()
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        WordFilter::new()
    }
}
