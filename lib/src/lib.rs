mod commands;
mod data;
mod restrictions;
mod results;

pub use commands::*;
pub use data::WordBank;
pub use restrictions::WordFilter;
pub use results::*;

/// Lower-level building blocks, such as the alphabet encoding used by [`WordFilter`].
pub mod details {
    pub use crate::data::char_ids_to_word;
    pub use crate::data::letter_from_id;
    pub use crate::data::letter_id;
    pub use crate::data::word_to_char_ids;
    pub use crate::data::ALPHABET_SIZE;
    pub use crate::data::WORD_LENGTH;
}
