//! Recognized-utterance model and wire parsing
//!
//! The host sends one line per recognized phrase. Tokens are space separated
//! and may carry a sense annotation after a backslash ("three\number",
//! "a\determiner"). Recognized punctuation arrives in a three-part form
//! (",\comma\,") whose literal value is the final part.

use std::fmt;

/// Recognizer sense annotation attached to a spoken word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    #[default]
    None,
    Number,
    Letter,
    Determiner,
    Pronoun,
}

impl Sense {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "number" => Sense::Number,
            "letter" => Sense::Letter,
            "determiner" => Sense::Determiner,
            // Some engine versions spell this one inconsistently
            "pronoun" | "pronound" => Sense::Pronoun,
            _ => Sense::None,
        }
    }
}

/// One recognized spoken word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub sense: Sense,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sense: Sense::None,
        }
    }

    pub fn with_sense(text: impl Into<String>, sense: Sense) -> Self {
        Self {
            text: text.into(),
            sense,
        }
    }

    /// Parse a wire token, resolving sense annotations
    ///
    /// Three or more parts means recognized punctuation; the literal value is
    /// the final part. Two parts are a word plus its sense tag.
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('\\').collect();
        match parts.len() {
            0 | 1 => Token::new(raw),
            2 => Token::with_sense(parts[0], Sense::from_tag(parts[1])),
            _ => Token::new(*parts.last().unwrap()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A full recognized phrase, with the frontmost app when the host knows it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Utterance {
    /// Bundle id of the frontmost application, e.g. "com.microsoft.VSCode"
    pub app: Option<String>,
    pub tokens: Vec<Token>,
}

impl Utterance {
    /// Parse one utterance line from the host
    ///
    /// An optional leading "@bundle.id" token names the frontmost app.
    pub fn parse(line: &str) -> Self {
        let mut app = None;
        let mut rest = line.trim();

        if let Some(tagged) = rest.strip_prefix('@') {
            let (bundle, remainder) = match tagged.split_once(char::is_whitespace) {
                Some((b, r)) => (b, r),
                None => (tagged, ""),
            };
            if !bundle.is_empty() {
                app = Some(bundle.to_string());
            }
            rest = remainder.trim();
        }

        let tokens = rest
            .split_whitespace()
            .map(|raw| {
                let mut token = Token::parse(raw);
                token.text = token.text.to_lowercase();
                token
            })
            .collect();

        Self { app, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Plain word list for formatting and text entry
    ///
    /// A single token may expand to several words ("Home Depot").
    pub fn words_of(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .flat_map(|t| t.text.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    /// The utterance's token texts, joined for table lookups
    pub fn phrase(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
