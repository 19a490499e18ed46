//! Readers for training and test corpora.

use std::io::BufRead;

use crate::errors::{GondolaError, Result};

/// Separator between the word and the tag on a training line.
const SEPARATOR: &str = " : ";

/// Tokens that terminate a sentence.
pub const TERMINAL_TOKENS: &[&str] = &[".", "?", "!", "-"];

/// Checks whether a token terminates a sentence.
pub fn is_terminal(token: &str) -> bool {
    TERMINAL_TOKENS.contains(&token)
}

/// Splits a training line into its word and tag.
///
/// # Errors
///
/// [`GondolaError::MalformedLine`] will be returned if the line does not
/// split into exactly two fields on `" : "`.
///
/// # Examples
///
/// ```
/// use gondola::parse_train_line;
///
/// assert_eq!(("dog", "NN1"), parse_train_line("dog : NN1").unwrap());
/// assert!(parse_train_line("dog").is_err());
/// ```
pub fn parse_train_line(line: &str) -> Result<(&str, &str)> {
    let mut fields = line.split(SEPARATOR);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(word), Some(tag), None) => Ok((word, tag)),
        _ => Err(GondolaError::malformed_line(line)),
    }
}

/// Reads `"<word> : <tag>"` pairs, one per line.
///
/// Lines are trimmed of surrounding whitespace before splitting.
///
/// # Errors
///
/// [`GondolaError::MalformedLine`] will be returned for a line that does
/// not parse, and [`GondolaError::IoError`] if reading fails.
pub fn read_training_pairs<R>(rdr: R) -> Result<Vec<(String, String)>>
where
    R: BufRead,
{
    let mut pairs = vec![];
    for line in rdr.lines() {
        let line = line?;
        let (word, tag) = parse_train_line(line.trim())?;
        pairs.push((word.to_string(), tag.to_string()));
    }
    Ok(pairs)
}

/// Reads one token per line and groups tokens into sentences.
///
/// A sentence is a run of tokens up to and including a terminal token.
/// Tokens after the last terminal token are dropped.
///
/// # Examples
///
/// ```
/// use gondola::read_test_sentences;
///
/// let sentences = read_test_sentences("Hi\nthere\n.\nunfinished".as_bytes()).unwrap();
/// assert_eq!(
///     vec![vec!["Hi".to_string(), "there".to_string(), ".".to_string()]],
///     sentences
/// );
/// ```
pub fn read_test_sentences<R>(rdr: R) -> Result<Vec<Vec<String>>>
where
    R: BufRead,
{
    let mut sentences = vec![];
    let mut current = vec![];
    for line in rdr.lines() {
        let token = line?;
        let terminal = is_terminal(&token);
        current.push(token);
        if terminal {
            sentences.push(std::mem::take(&mut current));
        }
    }
    Ok(sentences)
}
