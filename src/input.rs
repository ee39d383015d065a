//! Keystroke and text injection using enigo
//!
//! Two ways to enter literal text:
//! - **Direct**: enigo's native text input (default)
//! - **Clipboard**: copy then Cmd/Ctrl+V, restoring the old clipboard

use crate::keys::{Chord, ChordKey, Modifier};
use arboard::Clipboard;
use enigo::{Direction, Enigo, Keyboard, Settings};
use std::thread;
use std::time::Duration;

/// Method for entering literal text
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputMethod {
    #[default]
    Direct,
    Clipboard,
}

impl InputMethod {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "clipboard" => InputMethod::Clipboard,
            _ => InputMethod::Direct,
        }
    }
}

/// Error type for injection failures
#[derive(Debug)]
pub enum InputError {
    Enigo(String),
    Clipboard(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Enigo(msg) => write!(f, "enigo error: {}", msg),
            InputError::Clipboard(msg) => write!(f, "clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for InputError {}

/// Keyboard injection handle
pub struct KeyInjector {
    enigo: Enigo,
    clipboard: Clipboard,
    method: InputMethod,
}

impl KeyInjector {
    pub fn new(method: InputMethod) -> Result<Self, InputError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InputError::Enigo(format!("failed to initialize enigo: {}", e)))?;
        let clipboard = Clipboard::new()
            .map_err(|e| InputError::Clipboard(format!("failed to open clipboard: {}", e)))?;

        Ok(Self {
            enigo,
            clipboard,
            method,
        })
    }

    /// Press one chord: hold modifiers, click the key, release in reverse
    pub fn press_chord(&mut self, chord: &Chord) -> Result<(), InputError> {
        for m in &chord.mods {
            self.enigo
                .key(m.key(), Direction::Press)
                .map_err(|e| InputError::Enigo(format!("failed to press modifier: {}", e)))?;
        }

        if !chord.mods.is_empty() {
            // Let the modifier register before the key click
            thread::sleep(Duration::from_millis(10));
        }

        self.enigo
            .key(chord.key.key(), Direction::Click)
            .map_err(|e| InputError::Enigo(format!("failed to click key: {}", e)))?;

        if !chord.mods.is_empty() {
            thread::sleep(Duration::from_millis(50));
        }

        for m in chord.mods.iter().rev() {
            self.enigo
                .key(m.key(), Direction::Release)
                .map_err(|e| InputError::Enigo(format!("failed to release modifier: {}", e)))?;
        }

        Ok(())
    }

    /// Enter literal text using the configured method
    pub fn insert_text(&mut self, text: &str) -> Result<(), InputError> {
        if text.is_empty() {
            return Ok(());
        }

        match self.method {
            InputMethod::Direct => self.insert_direct(text),
            InputMethod::Clipboard => match self.insert_via_clipboard(text) {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("[INPUT] clipboard method failed: {}, trying direct", e);
                    self.insert_direct(text)
                }
            },
        }
    }

    fn insert_direct(&mut self, text: &str) -> Result<(), InputError> {
        self.enigo
            .text(text)
            .map_err(|e| InputError::Enigo(format!("failed to type text: {}", e)))
    }

    fn insert_via_clipboard(&mut self, text: &str) -> Result<(), InputError> {
        // Preserve whatever the user had on the clipboard (best effort)
        let old_content = self.clipboard.get_text().ok();

        self.clipboard
            .set_text(text)
            .map_err(|e| InputError::Clipboard(format!("failed to set clipboard: {}", e)))?;

        thread::sleep(Duration::from_millis(50));

        let paste = Chord::new(vec![platform_modifier()], ChordKey::Char('v'));
        if let Err(e) = self.press_chord(&paste) {
            if let Some(old) = old_content {
                let _ = self.clipboard.set_text(old);
            }
            return Err(e);
        }

        thread::sleep(Duration::from_millis(100));

        if let Some(old) = old_content {
            let _ = self.clipboard.set_text(old);
        }

        Ok(())
    }
}

/// The platform shortcut modifier (Cmd on macOS, Ctrl elsewhere)
pub fn platform_modifier() -> Modifier {
    #[cfg(target_os = "macos")]
    {
        Modifier::Cmd
    }
    #[cfg(not(target_os = "macos"))]
    {
        Modifier::Ctrl
    }
}
