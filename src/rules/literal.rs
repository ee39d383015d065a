//! Literal text entry with optional formatting
//!
//! "phrasing <words>" enters any word or phrase verbatim, even ones other
//! rules would otherwise claim ("phrasing space" types the word "space").
//! Formatter words between the trigger and the dictation select the output
//! shape. "phraser" exists so the formatter words themselves, and the word
//! "phrasing", can be entered too.

use crate::format::{format_words, Formatter};
use crate::token::{Token, Utterance};
use std::collections::HashSet;

use super::Action;

const PHRASE_TRIGGER: &str = "phrasing";
const FORMATTER_TRIGGER: &str = "phraser";

fn as_formatter(token: &Token) -> Option<Formatter> {
    token.text.parse().ok()
}

pub fn dispatch(utterance: &Utterance) -> Option<Vec<Action>> {
    let (first, rest) = utterance.tokens.split_first()?;
    match first.text.as_str() {
        PHRASE_TRIGGER => formatted_phrase(rest),
        FORMATTER_TRIGGER => formatted_formatter(rest),
        _ => None,
    }
}

/// "phrasing <fmt>* <dictation>"
///
/// Formatter words are consumed greedily, but the dictation may never be
/// empty: "phrasing title" enters the word "title" with no formatting.
fn formatted_phrase(rest: &[Token]) -> Option<Vec<Action>> {
    if rest.is_empty() {
        return None;
    }

    let mut modes: HashSet<Formatter> = HashSet::new();
    let mut idx = 0;
    while idx + 1 < rest.len() {
        match as_formatter(&rest[idx]) {
            Some(mode) => {
                modes.insert(mode);
                idx += 1;
            }
            None => break,
        }
    }

    let words = Utterance::words_of(&rest[idx..]);
    Some(vec![Action::Insert(format_words(&words, &modes))])
}

/// "phraser <fmt>+" and "phraser <cap>* phrasing"
///
/// The last word is entered literally; the words before it form the mode
/// set. "phraser title cram" enters "Cram".
fn formatted_formatter(rest: &[Token]) -> Option<Vec<Action>> {
    let (last, leading) = rest.split_last()?;

    if last.text == PHRASE_TRIGGER {
        // Only capitalization modes may precede the literal "phrasing"
        let modes: Option<HashSet<Formatter>> = leading
            .iter()
            .map(|t| as_formatter(t).filter(|m| m.is_capitalization()))
            .collect();
        if let Some(modes) = modes {
            let word = vec![last.text.clone()];
            return Some(vec![Action::Insert(format_words(&word, &modes))]);
        }
    }

    // Every word must be a formatter name; the final one is the literal
    if as_formatter(last).is_none() {
        return None;
    }
    let modes: Option<HashSet<Formatter>> = leading.iter().map(as_formatter).collect();
    let modes = modes?;
    let word = vec![last.text.clone()];
    Some(vec![Action::Insert(format_words(&word, &modes))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(line: &str) -> Option<String> {
        let actions = dispatch(&Utterance::parse(line))?;
        match actions.as_slice() {
            [Action::Insert(text)] => Some(text.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_plain_phrase() {
        assert_eq!(insert("phrasing hello there"), Some("hello there".into()));
    }

    #[test]
    fn test_reserved_words_entered_literally() {
        // Other rules would press the spacebar for "space"
        assert_eq!(insert("phrasing space"), Some("space".into()));
    }

    #[test]
    fn test_formatter_word_as_dictation() {
        assert_eq!(insert("phrasing title"), Some("title".into()));
        assert_eq!(insert("phrasing title title"), Some("Title".into()));
    }

    #[test]
    fn test_caps_line_phrase() {
        assert_eq!(
            insert("phrasing caps line this is a test"),
            Some("THIS-IS-A-TEST".into())
        );
    }

    #[test]
    fn test_camel_phrase() {
        assert_eq!(insert("phrasing camel this is a test"), Some("thisIsATest".into()));
    }

    #[test]
    fn test_multiword_token_expands() {
        let utterance = Utterance {
            app: None,
            tokens: vec![
                Token::new("phrasing"),
                Token::new("camel"),
                Token::new("home depot"),
            ],
        };
        let actions = dispatch(&utterance).unwrap();
        assert_eq!(actions, vec![Action::Insert("homeDepot".into())]);
    }

    #[test]
    fn test_phrasing_alone_is_no_match() {
        assert!(dispatch(&Utterance::parse("phrasing")).is_none());
    }

    #[test]
    fn test_phraser_formatter_words() {
        assert_eq!(insert("phraser cram"), Some("cram".into()));
        assert_eq!(insert("phraser title cram"), Some("Cram".into()));
        assert_eq!(insert("phraser caps caps"), Some("CAPS".into()));
    }

    #[test]
    fn test_phraser_phrasing() {
        assert_eq!(insert("phraser phrasing"), Some("phrasing".into()));
        assert_eq!(insert("phraser caps phrasing"), Some("PHRASING".into()));
    }

    #[test]
    fn test_phraser_rejects_non_formatters() {
        assert!(dispatch(&Utterance::parse("phraser hello")).is_none());
        assert!(dispatch(&Utterance::parse("phraser snake phrasing")).is_none());
        assert!(dispatch(&Utterance::parse("phraser")).is_none());
    }
}
