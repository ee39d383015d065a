//! Spoken key names, chords, and chord-script parsing
//!
//! Maps the spoken vocabulary for physical keys (alphabet words, symbol
//! names, operation keys) to enigo keys, and parses the dash-joined chord
//! scripts ("cmd-shift-left") used by editor rules and custom commands.

use enigo::Key;
use std::collections::HashMap;
use std::fmt;

/// A holdable modifier key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Cmd,
    Ctrl,
    Shift,
    Alt,
}

impl Modifier {
    pub fn key(self) -> Key {
        match self {
            Modifier::Cmd => Key::Meta,
            Modifier::Ctrl => Key::Control,
            Modifier::Shift => Key::Shift,
            Modifier::Alt => Key::Alt,
        }
    }

    /// Short name used in chord scripts
    pub fn name(self) -> &'static str {
        match self {
            Modifier::Cmd => "cmd",
            Modifier::Ctrl => "ctrl",
            Modifier::Shift => "shift",
            Modifier::Alt => "alt",
        }
    }

    fn from_script_name(name: &str) -> Option<Self> {
        match name {
            "cmd" | "command" => Some(Modifier::Cmd),
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "shift" => Some(Modifier::Shift),
            "alt" | "option" => Some(Modifier::Alt),
            _ => None,
        }
    }
}

/// The non-modifier part of a chord
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChordKey {
    /// A named physical key (Return, LeftArrow, F5, ...)
    Named(Key),
    /// A character key, injected as a unicode keypress
    Char(char),
}

impl ChordKey {
    pub fn key(self) -> Key {
        match self {
            ChordKey::Named(k) => k,
            ChordKey::Char(c) => Key::Unicode(c),
        }
    }
}

/// One keystroke: zero or more held modifiers plus a key
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub mods: Vec<Modifier>,
    pub key: ChordKey,
}

impl Chord {
    pub fn new(mods: Vec<Modifier>, key: ChordKey) -> Self {
        Self { mods, key }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.mods {
            write!(f, "{}-", m.name())?;
        }
        match self.key {
            ChordKey::Char(c) => write!(f, "{}", c),
            ChordKey::Named(k) => write!(f, "{}", format!("{:?}", k).to_lowercase()),
        }
    }
}

/// Spoken-name and script-name key tables
pub struct KeyTable {
    /// Spoken modifier words ("command", "apple", "option", ...)
    holdable: HashMap<&'static str, Modifier>,
    /// Spoken phrases for character keys
    glyphs: HashMap<String, char>,
    /// Spoken phrases for named operation keys
    operations: HashMap<String, Key>,
}

// Spoken alphabet, same order as a-z
const ALPHABET: [&str; 26] = [
    "air", "bat", "cap", "die", "each", "fail", "gone", "harm", "sit", "jury", "crash", "look",
    "mad", "near", "odd", "pit", "quest", "red", "sun", "trap", "urge", "vest", "whale", "box",
    "yes", "zip",
];

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

// Spoken forms for 1..=20, used by the function-key phrases
const SMALL_NUMBERS: [&str; 20] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty",
];

const FUNCTION_KEYS: [Key; 20] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
    Key::F13,
    Key::F14,
    Key::F15,
    Key::F16,
    Key::F17,
    Key::F18,
    Key::F19,
    Key::F20,
];

impl KeyTable {
    pub fn new() -> Self {
        let mut table = Self {
            holdable: HashMap::new(),
            glyphs: HashMap::new(),
            operations: HashMap::new(),
        };
        table.fill_holdable();
        table.fill_glyphs();
        table.fill_operations();
        table
    }

    fn fill_holdable(&mut self) {
        // The fn key is intentionally absent: chords holding it don't inject
        // reliably through the OS input layer.
        for (word, m) in [
            ("command", Modifier::Cmd),
            ("apple", Modifier::Cmd),
            ("control", Modifier::Ctrl),
            ("shift", Modifier::Shift),
            ("alt", Modifier::Alt),
            ("option", Modifier::Alt),
        ] {
            self.holdable.insert(word, m);
        }
    }

    fn glyph(&mut self, phrases: &[&str], c: char) {
        for p in phrases {
            self.glyphs.insert(p.to_string(), c);
        }
    }

    fn op(&mut self, phrases: &[&str], key: Key) {
        for p in phrases {
            self.operations.insert(p.to_string(), key);
        }
    }

    fn fill_glyphs(&mut self) {
        for (i, name) in ALPHABET.iter().enumerate() {
            self.glyphs.insert(name.to_string(), (b'a' + i as u8) as char);
        }

        for d in 0..10u8 {
            let c = (b'0' + d) as char;
            self.glyphs.insert(c.to_string(), c);
            self.glyphs.insert(DIGIT_WORDS[d as usize].to_string(), c);
        }
        self.glyphs.insert("oh".to_string(), '0');

        self.glyph(&["tick", "back tick"], '`');
        self.glyph(&["tilde"], '~');
        self.glyph(&["exclamation", "exclamation point"], '!');
        self.glyph(&["at sign"], '@');
        self.glyph(&["pound", "pound sign", "hash", "hash sign", "number sign"], '#');
        self.glyph(&["dollar", "dollar sign"], '$');
        self.glyph(&["percent", "percent sign"], '%');
        self.glyph(&["caret"], '^');
        self.glyph(&["and sign", "ampersand"], '&');
        self.glyph(&["star", "asterisk", "times", "multiply"], '*');
        self.glyph(&["minus", "dash"], '-');
        self.glyph(&["underscore", "downscore"], '_');
        self.glyph(&["equals", "equals sign"], '=');
        self.glyph(&["plus", "plus sign", "plusign"], '+');
        self.glyph(&["backslash"], '\\');
        self.glyph(&["pipe"], '|');
        self.glyph(&["semi", "semicolon"], ';');
        self.glyph(&["colon"], ':');
        self.glyph(&["quote", "single quote"], '\'');
        self.glyph(&["dubquote", "double quote"], '"');
        self.glyph(&["comma"], ',');
        self.glyph(&["dot", "period", "point"], '.');
        self.glyph(&["slash", "forward slash", "divide"], '/');
        self.glyph(&["question", "question mark"], '?');
        self.glyph(
            &["paren", "parenthesis", "parentheses", "left paren", "left parenthesis"],
            '(',
        );
        self.glyph(&["right paren", "right parenthesis", "right parentheses"], ')');
        self.glyph(
            &["square", "square bracket", "bracket", "left bracket", "left square bracket"],
            '[',
        );
        self.glyph(&["right square", "right square bracket", "right bracket"], ']');
        self.glyph(&["brace", "curly brace", "left brace", "left curly brace"], '{');
        self.glyph(&["right brace", "right curly brace"], '}');
        self.glyph(&["angle", "langle", "less than"], '<');
        self.glyph(&["right angle", "rangle", "greater than"], '>');

        // Keypad phrases fall back to the plain equivalents; enigo has no
        // portable keypad key variants.
        for pad in ["keypad", "number pad", "number key"] {
            for d in 0..10u8 {
                let c = (b'0' + d) as char;
                self.glyphs.insert(format!("{} {}", pad, c), c);
                self.glyphs.insert(format!("{} {}", pad, DIGIT_WORDS[d as usize]), c);
            }
            self.glyphs.insert(format!("{} divide", pad), '/');
            self.glyphs.insert(format!("{} slash", pad), '/');
            self.glyphs.insert(format!("{} multiply", pad), '*');
            self.glyphs.insert(format!("{} star", pad), '*');
            self.glyphs.insert(format!("{} minus", pad), '-');
            self.glyphs.insert(format!("{} dash", pad), '-');
            self.glyphs.insert(format!("{} plus", pad), '+');
            self.glyphs.insert(format!("{} decimal", pad), '.');
            self.glyphs.insert(format!("{} point", pad), '.');
            self.glyphs.insert(format!("{} equals", pad), '=');
        }
    }

    fn fill_operations(&mut self) {
        self.op(&["escape"], Key::Escape);
        self.op(&["backspace", "backward delete"], Key::Backspace);
        self.op(&["tab"], Key::Tab);
        self.op(&["caps lock", "capslock"], Key::CapsLock);
        self.op(&["enter", "return"], Key::Return);
        self.op(&["space", "spacebar"], Key::Space);
        self.op(&["delete", "forward delete"], Key::Delete);
        self.op(&["home"], Key::Home);
        self.op(&["end"], Key::End);
        self.op(&["page up"], Key::PageUp);
        self.op(&["page down"], Key::PageDown);
        self.op(&["up", "up arrow"], Key::UpArrow);
        self.op(&["down", "down arrow"], Key::DownArrow);
        self.op(&["left", "left arrow"], Key::LeftArrow);
        self.op(&["right", "right arrow"], Key::RightArrow);

        for (i, key) in FUNCTION_KEYS.iter().enumerate() {
            for prefix in ["function", "ef"] {
                self.operations.insert(format!("{} {}", prefix, i + 1), *key);
                self.operations
                    .insert(format!("{} {}", prefix, SMALL_NUMBERS[i]), *key);
            }
        }

        for pad in ["keypad", "number pad", "number key"] {
            self.operations.insert(format!("{} enter", pad), Key::Return);
            self.operations.insert(format!("{} return", pad), Key::Return);
        }

        self.op(&["key volume up"], Key::VolumeUp);
        self.op(&["key volume down"], Key::VolumeDown);
        self.op(&["key mute"], Key::VolumeMute);
    }

    /// Look up a spoken key phrase (without modifiers)
    pub fn spoken_key(&self, phrase: &str) -> Option<ChordKey> {
        if let Some(&c) = self.glyphs.get(phrase) {
            return Some(ChordKey::Char(c));
        }
        if let Some(&k) = self.operations.get(phrase) {
            return Some(ChordKey::Named(k));
        }
        None
    }

    /// Match a whole spoken utterance as modifier words followed by one key
    ///
    /// "command shift sit" presses cmd-shift-s; a bare key phrase presses the
    /// key alone. Repeated modifier words collapse. Returns None unless the
    /// trailing phrase names exactly one key.
    pub fn match_spoken(&self, words: &[String]) -> Option<Chord> {
        let mut mods: Vec<Modifier> = Vec::new();
        let mut idx = 0;
        while idx < words.len() {
            match self.holdable.get(words[idx].as_str()) {
                Some(&m) => {
                    if !mods.contains(&m) {
                        mods.push(m);
                    }
                    idx += 1;
                }
                None => break,
            }
        }

        let phrase = words[idx..].join(" ");
        if phrase.is_empty() {
            return None;
        }

        // "shift" and friends double as operation-less utterances we must not
        // swallow; the trailing phrase has to name a real key.
        let key = self.spoken_key(&phrase)?;
        Some(Chord::new(mods, key))
    }

    /// Parse one dash-joined chord script like "cmd-shift-left" or "ctrl-g"
    pub fn parse_chord(&self, spec: &str) -> Option<Chord> {
        let parts: Vec<&str> = spec.split('-').collect();
        let (key_name, mod_names) = parts.split_last()?;
        if key_name.is_empty() {
            return None;
        }

        let mut mods = Vec::new();
        for name in mod_names {
            let m = Modifier::from_script_name(name)?;
            if !mods.contains(&m) {
                mods.push(m);
            }
        }

        Some(Chord::new(mods, script_key(key_name)?))
    }

    /// Parse a space-joined sequence of chord scripts
    ///
    /// "cmd-right cmd-shift-left" presses two chords in order.
    pub fn parse_key_script(&self, script: &str) -> Option<Vec<Chord>> {
        let chords: Option<Vec<Chord>> = script
            .split_whitespace()
            .map(|spec| self.parse_chord(spec))
            .collect();
        chords.filter(|c| !c.is_empty())
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a chord-script key name ("left", "enter", "f5", "g")
fn script_key(name: &str) -> Option<ChordKey> {
    let named = match name {
        "left" => Key::LeftArrow,
        "right" => Key::RightArrow,
        "up" => Key::UpArrow,
        "down" => Key::DownArrow,
        "enter" | "return" => Key::Return,
        "escape" | "esc" => Key::Escape,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "backspace" => Key::Backspace,
        "delete" => Key::Delete,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        _ => {
            if let Some(n) = name.strip_prefix('f').and_then(|n| n.parse::<usize>().ok()) {
                if (1..=20).contains(&n) {
                    return Some(ChordKey::Named(FUNCTION_KEYS[n - 1]));
                }
            }
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            return Some(ChordKey::Char(c));
        }
    };
    Some(ChordKey::Named(named))
}
