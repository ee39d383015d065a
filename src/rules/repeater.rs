//! Repeating the previous spoken command
//!
//! "repeat three" replays the last dispatch two more times (the original
//! execution already happened once).

use crate::numbers::parse_number;
use crate::token::Utterance;

use super::Action;

// TODO: apply a timeout so a stale command can't be repeated minutes later
pub fn dispatch(utterance: &Utterance) -> Option<Vec<Action>> {
    let (first, rest) = utterance.tokens.split_first()?;
    if first.text != "repeat" {
        return None;
    }

    let count = parse_number(rest)?;
    if count >= 2 {
        Some(vec![Action::Repeat(count - 1)])
    } else {
        // Repeating once or zero times changes nothing; the phrase is still
        // consumed
        Some(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch_line(line: &str) -> Option<Vec<Action>> {
        dispatch(&Utterance::parse(line))
    }

    #[test]
    fn test_repeat_three() {
        assert_eq!(dispatch_line("repeat three"), Some(vec![Action::Repeat(2)]));
    }

    #[test]
    fn test_repeat_multi_digit() {
        assert_eq!(dispatch_line("repeat one two"), Some(vec![Action::Repeat(11)]));
    }

    #[test]
    fn test_repeat_one_is_inert() {
        assert_eq!(dispatch_line("repeat one"), Some(Vec::new()));
        assert_eq!(dispatch_line("repeat oh"), Some(Vec::new()));
    }

    #[test]
    fn test_repeat_without_count_is_no_match() {
        assert!(dispatch_line("repeat").is_none());
        assert!(dispatch_line("repeat please").is_none());
    }

    #[test]
    fn test_other_phrases_ignored() {
        assert!(dispatch_line("three repeat").is_none());
    }
}
