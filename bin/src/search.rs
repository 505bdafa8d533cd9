use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::rc::Rc;

/// Asks for a query and prints the candidate words that fuzzily match it, best matches first.
///
/// An empty query lists every candidate. Interrupting the query prompt cancels the search.
pub fn browse(editor: &mut Editor<()>, candidates: &[Rc<str>]) -> rustyline::Result<()> {
    let query = match editor.readline("search> ") {
        Ok(query) => query,
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
        Err(err) => return Err(err),
    };

    let matches = rank(query.trim(), candidates);
    for word in &matches {
        println!("  {}", word);
    }
    println!(
        "{} of {} possible words match.",
        matches.len(),
        candidates.len()
    );
    Ok(())
}

/// Returns the words matching `query`, ordered by how tightly they match. Ties keep their order.
fn rank<'a>(query: &str, candidates: &'a [Rc<str>]) -> Vec<&'a str> {
    let mut scored: Vec<((usize, usize), &str)> = candidates
        .iter()
        .filter_map(|word| fuzzy_score(query, word).map(|score| (score, word.as_ref())))
        .collect();
    scored.sort_by_key(|(score, _)| *score);
    scored.into_iter().map(|(_, word)| word).collect()
}

/// Scores `word` against `query` as `(gaps, first_index)`, lower being better, or returns `None`
/// unless every query letter appears in the word in order.
fn fuzzy_score(query: &str, word: &str) -> Option<(usize, usize)> {
    let mut letters = word.char_indices();
    let mut first = None;
    let mut last = 0;
    let mut num_wanted = 0;
    for wanted in query.chars() {
        let (index, _) = letters.find(|(_, letter)| letter.eq_ignore_ascii_case(&wanted))?;
        first.get_or_insert(index);
        last = index;
        num_wanted += 1;
    }
    match first {
        Some(first) => Some((last + 1 - first - num_wanted, first)),
        None => Some((0, 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<Rc<str>> {
        words.iter().map(|word| Rc::from(*word)).collect()
    }

    #[test]
    fn fuzzy_score_in_order() {
        assert_eq!(fuzzy_score("ae", "crane"), Some((1, 2)));
        assert_eq!(fuzzy_score("ran", "crane"), Some((0, 1)));
        assert_eq!(fuzzy_score("RAN", "crane"), Some((0, 1)));
        assert_eq!(fuzzy_score("", "crane"), Some((0, 0)));
    }

    #[test]
    fn fuzzy_score_missing_or_out_of_order() {
        assert_eq!(fuzzy_score("ea", "crane"), None);
        assert_eq!(fuzzy_score("z", "crane"), None);
        assert_eq!(fuzzy_score("cranes", "crane"), None);
    }

    #[test]
    fn rank_orders_by_tightness() {
        let candidates = words(&["lathe", "heart", "earth", "haste"]);

        assert_eq!(rank("ear", &candidates), vec!["earth", "heart"]);
        assert_eq!(rank("ht", &candidates), vec!["haste", "heart"]);
    }

    #[test]
    fn rank_empty_query_keeps_everything() {
        let candidates = words(&["lathe", "heart", "earth"]);

        assert_eq!(rank("", &candidates), vec!["lathe", "heart", "earth"]);
    }
}
