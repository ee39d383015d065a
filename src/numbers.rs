//! Spoken number-word parsing
//!
//! Turns a leading run of digit words ("three four") into an integer for
//! repeat counts and line numbers. Trailing non-number tokens are ignored.

use crate::token::Token;

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Map a token to a single decimal digit, if it names one
///
/// Accepts the digit words, bare digits ("7"), and "oh" for zero. Matching is
/// on the text alone; a number sense annotation neither helps nor hurts.
fn digit_of(token: &Token) -> Option<u64> {
    let text = token.text.as_str();
    if text == "oh" {
        return Some(0);
    }
    if let Some(i) = DIGIT_WORDS.iter().position(|w| *w == text) {
        return Some(i as u64);
    }
    if text.len() == 1 {
        if let Some(d) = text.chars().next().and_then(|c| c.to_digit(10)) {
            return Some(d as u64);
        }
    }
    None
}

/// Parse a leading run of number words into an integer
///
/// Scans from the start and stops at the first token that is not a digit
/// word; what follows is ignored rather than treated as an error. Returns
/// `None` when no digit word leads the sequence. All-zero input ("oh oh oh")
/// is 0. Values larger than `u64::MAX` saturate.
pub fn parse_number(tokens: &[Token]) -> Option<u64> {
    let mut digits = tokens.iter().map_while(digit_of).peekable();
    digits.peek()?;

    let mut value: u64 = 0;
    for d in digits {
        value = value.saturating_mul(10).saturating_add(d);
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Sense;

    fn toks(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_number(&[]), None);
    }

    #[test]
    fn test_stops_at_first_non_number() {
        assert_eq!(parse_number(&toks(&["three", "four", "dog"])), Some(34));
    }

    #[test]
    fn test_all_zeros() {
        assert_eq!(parse_number(&toks(&["oh", "oh", "oh"])), Some(0));
    }

    #[test]
    fn test_leading_zero_stripped() {
        assert_eq!(parse_number(&toks(&["oh", "seven"])), Some(7));
        assert_eq!(parse_number(&toks(&["zero", "zero", "four", "two"])), Some(42));
    }

    #[test]
    fn test_no_leading_number() {
        assert_eq!(parse_number(&toks(&["dog", "three"])), None);
    }

    #[test]
    fn test_bare_digits() {
        assert_eq!(parse_number(&toks(&["1", "2", "3"])), Some(123));
    }

    #[test]
    fn test_mixed_words_and_digits() {
        assert_eq!(parse_number(&toks(&["one", "0", "five"])), Some(105));
    }

    #[test]
    fn test_annotated_number_tokens() {
        let tokens = vec![
            Token::with_sense("three", Sense::Number),
            Token::with_sense("four", Sense::Number),
        ];
        assert_eq!(parse_number(&tokens), Some(34));
    }

    #[test]
    fn test_mid_sequence_truncation_keeps_prefix() {
        assert_eq!(parse_number(&toks(&["nine", "please", "five"])), Some(9));
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let many_nines: Vec<Token> = (0..40).map(|_| Token::new("nine")).collect();
        assert_eq!(parse_number(&many_nines), Some(u64::MAX));
    }
}
