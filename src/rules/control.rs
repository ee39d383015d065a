//! Recognition-control rules
//!
//! These commands stay active while recognition is asleep; they are how the
//! user gets it back. The trigger word is fuzzy-matched because short
//! triggers are the tokens recognizers mangle most.

use crate::fuzzy::matches_trigger;
use crate::host::{HostDirective, SPEECH_MENU_ITEM};
use crate::state::{RecognitionMode, SharedState};
use crate::token::Utterance;

use super::Action;

pub struct ControlRules {
    trigger: String,
}

impl ControlRules {
    pub fn new(trigger: &str) -> Self {
        Self {
            trigger: trigger.to_lowercase(),
        }
    }

    /// Match "<trigger> <command>", applying state changes as a side effect
    pub fn dispatch(&self, utterance: &Utterance, state: &SharedState) -> Option<Vec<Action>> {
        let first = utterance.tokens.first()?;
        if !matches_trigger(&self.trigger, &first.text) {
            return None;
        }

        let rest: Vec<&str> = utterance.tokens[1..].iter().map(|t| t.text.as_str()).collect();
        // "voice" is optional filler: "hark voice sleep" == "hark sleep"
        let rest: &[&str] = match rest.split_first() {
            Some((&"voice", tail)) => tail,
            _ => &rest,
        };

        match rest {
            ["sleep"] => {
                state.set_mode(RecognitionMode::Asleep);
                Some(vec![Action::Host(HostDirective::menu_check(
                    SPEECH_MENU_ITEM,
                    false,
                ))])
            }
            ["wake"] | ["standard", "mode"] => {
                state.set_mode(RecognitionMode::Standard);
                Some(vec![
                    Action::Host(HostDirective::menu_check(SPEECH_MENU_ITEM, true)),
                    // Park Dragon dictation even if it was never handed to
                    Action::Host(HostDirective::mimic("go to sleep")),
                ])
            }
            ["dragon", "mode"] => {
                state.set_mode(RecognitionMode::Dragon);
                Some(vec![
                    Action::Host(HostDirective::menu_check(SPEECH_MENU_ITEM, false)),
                    Action::Host(HostDirective::mimic("wake up")),
                ])
            }
            ["debugging", "on"] => {
                // Debug toggling follows the recognition gate, like the
                // original's listener registration
                if state.is_listening() {
                    state.set_debug(true);
                }
                Some(Vec::new())
            }
            ["debugging", "off"] => {
                if state.is_listening() {
                    state.set_debug(false);
                }
                Some(Vec::new())
            }
            ["show", "log"] => Some(vec![Action::OpenLog]),
            _ => self.eye_control(rest, state),
        }
    }

    fn eye_control(&self, rest: &[&str], state: &SharedState) -> Option<Vec<Action>> {
        let menu = match rest {
            ["calibrate"] | ["calibration"] => "Eye Tracking >> Calibrate",
            ["mouse"] | ["mouse", "control"] => "Eye Tracking >> Control Mouse",
            ["zoom"] | ["zoom", "mouse"] => "Eye Tracking >> Control Mouse (Zoom)",
            ["keyboard"] => "Eye Tracking >> Keyboard",
            ["eye", "debug"] => "Eye Tracking >> Show Debug Overlay",
            ["eye", "camera"] => "Eye Tracking >> Show Camera Overlay",
            _ => return None,
        };

        // Eye toggles respect the recognition gate; the phrase is still
        // consumed so it can't fall through to other rules.
        if state.is_listening() {
            Some(vec![Action::Host(HostDirective::eye(menu))])
        } else {
            Some(Vec::new())
        }
    }
}
