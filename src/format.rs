//! Literal text formatting
//!
//! Applies a set of spoken formatter modes (camelCase, snake_case, kebab,
//! Title Case, UPPERCASE, crammed) to a dictated word list. Modes are a set:
//! presence decides everything, order and repetition never matter.

use std::collections::HashSet;
use std::str::FromStr;

/// A spoken formatting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatter {
    Camel,
    Title,
    Lower,
    Caps,
    Cram,
    Snake,
    Line,
}

impl Formatter {
    pub const ALL: [Formatter; 7] = [
        Formatter::Camel,
        Formatter::Title,
        Formatter::Lower,
        Formatter::Caps,
        Formatter::Cram,
        Formatter::Snake,
        Formatter::Line,
    ];

    /// True for the capitalization modes (camel, title, lower, caps)
    pub fn is_capitalization(self) -> bool {
        matches!(
            self,
            Formatter::Camel | Formatter::Title | Formatter::Lower | Formatter::Caps
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Formatter::Camel => "camel",
            Formatter::Title => "title",
            Formatter::Lower => "lower",
            Formatter::Caps => "caps",
            Formatter::Cram => "cram",
            Formatter::Snake => "snake",
            Formatter::Line => "line",
        }
    }
}

impl FromStr for Formatter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camel" => Ok(Formatter::Camel),
            "title" => Ok(Formatter::Title),
            "lower" => Ok(Formatter::Lower),
            "caps" => Ok(Formatter::Caps),
            "cram" => Ok(Formatter::Cram),
            "snake" => Ok(Formatter::Snake),
            "line" => Ok(Formatter::Line),
            _ => Err(()),
        }
    }
}

/// Capitalize the first letter, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Lowercase only the leading character
fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a dictated word list under a set of formatter modes
///
/// With no modes the words come back space-joined verbatim. Any
/// capitalization mode first lowercases every word, which also undoes
/// auto-capitalization the recognizer baked in ("Home Depot", the pronoun
/// "I"). Separator precedence: line over snake over cram/camel over the
/// default space. `caps` overrides `camel`/`title` entirely; otherwise
/// `camel` or `title` title-case every word and the presence of `camel`
/// lowercases the first word's leading character. An empty word list yields
/// the empty string.
pub fn format_words(words: &[String], modes: &HashSet<Formatter>) -> String {
    let mut words: Vec<String> = if modes.iter().any(|m| m.is_capitalization()) {
        words.iter().map(|w| w.to_lowercase()).collect()
    } else {
        words.to_vec()
    };

    let separator = if modes.contains(&Formatter::Line) {
        "-"
    } else if modes.contains(&Formatter::Snake) {
        "_"
    } else if modes.contains(&Formatter::Cram) || modes.contains(&Formatter::Camel) {
        ""
    } else {
        " "
    };

    if modes.contains(&Formatter::Caps) {
        for w in &mut words {
            *w = w.to_uppercase();
        }
    } else {
        if modes.contains(&Formatter::Camel) || modes.contains(&Formatter::Title) {
            for w in &mut words {
                *w = capitalize(w);
            }
        }
        if modes.contains(&Formatter::Camel) {
            if let Some(first) = words.first_mut() {
                *first = lower_first(first);
            }
        }
    }

    words.join(separator)
}

/// Parse formatter names into a mode set, ignoring duplicates
pub fn mode_set(names: &[&str]) -> HashSet<Formatter> {
    names.iter().filter_map(|n| n.parse().ok()).collect()
}
