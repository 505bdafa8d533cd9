use anyhow::{Context, Result};
use clap::Parser;
use rs_wordle_helper::*;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

mod search;

/// Interactive helper that narrows down the possible answers of a Wordle game as you play it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    wordlist: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let words_reader = io::BufReader::new(
        File::open(&args.wordlist)
            .with_context(|| format!("Failed to open {}", args.wordlist.display()))?,
    );
    let word_bank = WordBank::from_reader(words_reader)
        .with_context(|| format!("Failed to load words from {}", args.wordlist.display()))?;
    println!("There are {} possible words.", word_bank.len());
    println!(
        "Commands:\n\n\
           * 'search' or 's' = browse the remaining words\n\
           * 'add <word> <verdicts>' or 'a ...' = narrow the words using a guess, where each\n\
             verdict digit is '0' (not in the word), '1' (elsewhere in the word) or '2' (here).\n\n\
         For example, if the answer was \"spade\" and you guessed \"soapy\", enter \"a soapy 20210\"."
    );

    let mut editor = Editor::<()>::new();
    run_session(&mut editor, word_bank.into())
}

/// What the loop should do after a line of input has been handled.
#[derive(Debug)]
enum Outcome {
    /// Browse the current candidates.
    Search,
    /// A constraint was merged, leaving this many candidates.
    Narrowed(usize),
    /// The line could not be parsed. Nothing was changed.
    Invalid(WordleError),
}

/// Parses one line and applies it to the session state.
///
/// Adding a constraint merges it into `filter` and replaces `candidates` with the words that
/// still match. Other lines leave both untouched.
fn handle_line(line: &str, filter: &mut WordFilter, candidates: &mut Vec<Rc<str>>) -> Outcome {
    match parse_command(line) {
        Ok(Command::Search) => Outcome::Search,
        Ok(Command::Add(constraint)) => {
            filter.add_constraint(&constraint);
            *candidates = filter.apply(candidates.as_slice());
            Outcome::Narrowed(candidates.len())
        }
        Err(err) => Outcome::Invalid(err),
    }
}

/// Reads commands until the input ends or is interrupted, narrowing `candidates` as constraints
/// are added.
fn run_session(editor: &mut Editor<()>, mut candidates: Vec<Rc<str>>) -> Result<()> {
    let mut filter = WordFilter::new();
    loop {
        let line = match editor.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                println!("\nQuitting...");
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read command"),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str());
        }

        match handle_line(&line, &mut filter, &mut candidates) {
            Outcome::Search => {
                search::browse(editor, &candidates).context("Failed to read search query")?
            }
            Outcome::Narrowed(remaining) => println!("{} possible words remain.", remaining),
            Outcome::Invalid(err) => println!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<Rc<str>> {
        words.iter().map(|word| Rc::from(*word)).collect()
    }

    #[test]
    fn add_commands_narrow_candidates() {
        let mut filter = WordFilter::new();
        let mut candidates = words(&["avoid", "paths", "adobe", "audio", "squad"]);

        assert!(matches!(
            handle_line("a crane 00100", &mut filter, &mut candidates),
            Outcome::Narrowed(4)
        ));
        assert_eq!(candidates, words(&["avoid", "paths", "audio", "squad"]));

        assert!(matches!(
            handle_line("add ATMOS 20010", &mut filter, &mut candidates),
            Outcome::Narrowed(2)
        ));
        assert_eq!(candidates, words(&["avoid", "audio"]));
    }

    #[test]
    fn invalid_line_changes_nothing() {
        let mut filter = WordFilter::new();
        let mut candidates = words(&["avoid", "paths", "adobe"]);
        handle_line("a crane 00100", &mut filter, &mut candidates);
        let filter_before = filter.clone();
        let candidates_before = candidates.clone();

        for line in ["", "add", "a crane", "a cr4ne 00100", "a crane 0010", "a crane 00300"] {
            assert!(matches!(
                handle_line(line, &mut filter, &mut candidates),
                Outcome::Invalid(_)
            ));
            assert_eq!(filter, filter_before);
            assert_eq!(candidates, candidates_before);
        }
    }

    #[test]
    fn search_changes_nothing() {
        let mut filter = WordFilter::new();
        let mut candidates = words(&["avoid", "paths"]);

        assert!(matches!(
            handle_line("s", &mut filter, &mut candidates),
            Outcome::Search
        ));
        assert!(matches!(
            handle_line("search", &mut filter, &mut candidates),
            Outcome::Search
        ));
        assert_eq!(filter, WordFilter::new());
        assert_eq!(candidates, words(&["avoid", "paths"]));
    }
}
