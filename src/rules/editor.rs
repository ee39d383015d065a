//! Per-application editor rules
//!
//! A context is a phrase table bound to an app bundle id; its rules only
//! fire when the host reports that app frontmost. Ships a VS Code context
//! covering navigation, selection, search, and clipboard.

use crate::keys::{Chord, KeyTable};
use crate::numbers::parse_number;
use crate::token::{Token, Utterance};
use std::collections::HashMap;

use super::Action;

pub struct EditorContext {
    bundle: String,
    keymap: HashMap<&'static str, Vec<Chord>>,
}

/// The VS Code context (bundle com.microsoft.VSCode)
pub fn vscode(keys: &KeyTable) -> EditorContext {
    let entries: [(&'static str, &'static str); 14] = [
        // Navigating text
        ("jump word", "alt-right"),
        ("jump left word", "alt-left"),
        // Selecting text
        ("select line", "cmd-right cmd-shift-left"),
        ("select start", "cmd-shift-left"),
        ("select end", "cmd-shift-right"),
        ("select word", "alt-shift-right"),
        ("select left word", "alt-shift-left"),
        ("select right", "shift-right"),
        ("select left", "shift-left"),
        ("select instances", "cmd-shift-l"),
        // Finding text
        ("find", "cmd-f"),
        ("next", "cmd-g"),
        ("previous", "cmd-shift-g"),
        ("last", "cmd-shift-g"),
    ];

    let clipboard: [(&'static str, &'static str); 3] =
        [("cut", "cmd-x"), ("copy", "cmd-c"), ("paste", "cmd-v")];

    let mut keymap = HashMap::new();
    for (phrase, script) in entries.into_iter().chain(clipboard) {
        // Bundled scripts are static; a parse failure is a programming error
        let chords = keys
            .parse_key_script(script)
            .unwrap_or_else(|| panic!("bad bundled key script: {}", script));
        keymap.insert(phrase, chords);
    }

    EditorContext {
        bundle: "com.microsoft.VSCode".to_string(),
        keymap,
    }
}

impl EditorContext {
    pub fn dispatch(&self, utterance: &Utterance, keys: &KeyTable) -> Option<Vec<Action>> {
        if utterance.app.as_deref() != Some(self.bundle.as_str()) {
            return None;
        }

        let tokens = &utterance.tokens;
        let first = tokens.first()?;

        if first.text == "line" {
            if let Some(actions) = self.jump_to_line(&tokens[1..], keys) {
                return Some(actions);
            }
        }

        if tokens.len() > 2 && tokens[0].text == "find" && tokens[1].text == "next" {
            return Some(self.find_next(utterance, keys));
        }

        let phrase = utterance.phrase();
        self.keymap
            .get(phrase.as_str())
            .map(|chords| vec![Action::Keys(chords.clone())])
    }

    /// "line <digits>": open go-to-line, enter the number, confirm, then park
    /// the cursor at the start of the line's text
    fn jump_to_line(&self, rest: &[Token], keys: &KeyTable) -> Option<Vec<Action>> {
        let number = parse_number(rest)?;
        // The zeroth line means the first
        let line = number.max(1);

        Some(vec![
            Action::Keys(keys.parse_key_script("ctrl-g")?),
            Action::Insert(line.to_string()),
            Action::Keys(keys.parse_key_script("enter")?),
            Action::Keys(keys.parse_key_script("cmd-right cmd-left")?),
        ])
    }

    /// "find next <dictation>": search for the words and leave focus in the
    /// document at the match
    fn find_next(&self, utterance: &Utterance, keys: &KeyTable) -> Vec<Action> {
        let words = Utterance::words_of(&utterance.tokens[2..]);
        vec![
            Action::Keys(keys.parse_key_script("escape").unwrap()),
            Action::Keys(keys.parse_key_script("cmd-f").unwrap()),
            Action::Insert(words.join(" ")),
            Action::Keys(keys.parse_key_script("escape").unwrap()),
        ]
    }
}
