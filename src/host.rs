//! Host directive protocol
//!
//! Commands the companion cannot perform itself (speech-engine mimicry, menu
//! state, eye-tracking toggles) are forwarded to the host as single stdout
//! lines.

use std::fmt;

/// The host menu item mirroring our recognition state
pub const SPEECH_MENU_ITEM: &str = "!Enable Speech Recognition";

/// One forwarded host command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostDirective {
    /// Feed a phrase to the host speech engine as if it were recognized
    /// ("go to sleep" parks Dragon, "wake up" hands dictation to it)
    Mimic(String),
    /// Set a host menu item's checkmark
    MenuCheck { item: String, checked: bool },
    /// Activate an eye-tracking menu entry
    Eye(String),
}

impl HostDirective {
    pub fn mimic(phrase: &str) -> Self {
        HostDirective::Mimic(phrase.to_string())
    }

    pub fn menu_check(item: &str, checked: bool) -> Self {
        HostDirective::MenuCheck {
            item: item.to_string(),
            checked,
        }
    }

    pub fn eye(menu_path: &str) -> Self {
        HostDirective::Eye(menu_path.to_string())
    }
}

impl fmt::Display for HostDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostDirective::Mimic(phrase) => write!(f, "mimic {}", phrase),
            HostDirective::MenuCheck { item, checked } => {
                write!(f, "menu-check {} {}", item, if *checked { "on" } else { "off" })
            }
            HostDirective::Eye(path) => write!(f, "eye {}", path),
        }
    }
}
