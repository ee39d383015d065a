//! Spoken-rule dispatch
//!
//! Each rule family inspects a recognized utterance and produces tagged
//! actions. Control rules are always heard; everything else only while
//! recognition is enabled. Unmatched utterances produce nothing — ordinary
//! dictation belongs to the host.

mod control;
mod editor;
mod literal;
mod repeater;

pub use control::ControlRules;
pub use editor::EditorContext;

use crate::config::Config;
use crate::host::HostDirective;
use crate::keys::{Chord, KeyTable};
use crate::state::SharedState;
use crate::token::Utterance;
use std::fmt;

/// What a matched rule wants done
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Press key chords in order
    Keys(Vec<Chord>),
    /// Enter literal text
    Insert(String),
    /// Forward a directive to the host
    Host(HostDirective),
    /// Open the event log in a viewer
    OpenLog,
    /// Replay the previous dispatch this many more times
    Repeat(u64),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Keys(chords) => {
                write!(f, "key")?;
                for c in chords {
                    write!(f, " {}", c)?;
                }
                Ok(())
            }
            Action::Insert(text) => write!(f, "insert {:?}", text),
            Action::Host(d) => write!(f, "host {}", d),
            Action::OpenLog => write!(f, "open-log"),
            Action::Repeat(n) => write!(f, "repeat x{}", n),
        }
    }
}

struct CustomRule {
    phrase: String,
    actions: Vec<Action>,
}

/// All registered rule families
pub struct RuleSet {
    keys: KeyTable,
    control: ControlRules,
    editors: Vec<EditorContext>,
    custom: Vec<CustomRule>,
}

impl RuleSet {
    pub fn new(config: &Config) -> Self {
        let keys = KeyTable::new();

        let editors = if config.editor_contexts {
            vec![editor::vscode(&keys)]
        } else {
            Vec::new()
        };

        let custom = config
            .custom
            .iter()
            .filter_map(|c| {
                let actions = parse_custom_action(&keys, &c.action)?;
                Some(CustomRule {
                    phrase: c.phrase.to_lowercase(),
                    actions,
                })
            })
            .collect();

        Self {
            keys,
            control: ControlRules::new(&config.control_word),
            editors,
            custom,
        }
    }

    /// Match one utterance against all rule families
    pub fn dispatch(&self, utterance: &Utterance, state: &SharedState) -> Vec<Action> {
        if utterance.is_empty() {
            return Vec::new();
        }

        // Control rules live outside the sleep gate, like the original's
        // separate context group.
        if let Some(actions) = self.control.dispatch(utterance, state) {
            return actions;
        }

        if !state.is_listening() {
            return Vec::new();
        }

        for ctx in &self.editors {
            if let Some(actions) = ctx.dispatch(utterance, &self.keys) {
                return actions;
            }
        }

        if let Some(actions) = literal::dispatch(utterance) {
            return actions;
        }

        if let Some(actions) = repeater::dispatch(utterance) {
            return actions;
        }

        let phrase = utterance.phrase();
        for rule in &self.custom {
            if rule.phrase == phrase {
                return rule.actions.clone();
            }
        }

        let words = Utterance::words_of(&utterance.tokens);
        if let Some(chord) = self.keys.match_spoken(&words) {
            return vec![Action::Keys(vec![chord])];
        }

        Vec::new()
    }
}

/// Parse a config action string ("key:cmd-space", "insert:...", "mimic:...")
fn parse_custom_action(keys: &KeyTable, action: &str) -> Option<Vec<Action>> {
    if let Some(script) = action.strip_prefix("key:") {
        match keys.parse_key_script(script) {
            Some(chords) => return Some(vec![Action::Keys(chords)]),
            None => {
                eprintln!("[RULES] ignoring custom command with bad key script: {}", script);
                return None;
            }
        }
    }
    if let Some(text) = action.strip_prefix("insert:") {
        return Some(vec![Action::Insert(text.to_string())]);
    }
    if let Some(phrase) = action.strip_prefix("mimic:") {
        return Some(vec![Action::Host(HostDirective::mimic(phrase))]);
    }
    eprintln!("[RULES] ignoring custom command with unknown action: {}", action);
    None
}

/// Dispatch session: tracks the previous dispatch so "repeat" can replay it
pub struct Session {
    rules: RuleSet,
    state: SharedState,
    last: Vec<Action>,
}

impl Session {
    pub fn new(rules: RuleSet, state: SharedState) -> Self {
        Self {
            rules,
            state,
            last: Vec::new(),
        }
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Dispatch one utterance line, expanding repeat requests
    pub fn process(&mut self, line: &str) -> Vec<Action> {
        let utterance = Utterance::parse(line);
        let actions = self.rules.dispatch(&utterance, &self.state);

        if let [Action::Repeat(times)] = actions.as_slice() {
            let mut replay = Vec::new();
            for _ in 0..*times {
                replay.extend(self.last.iter().cloned());
            }
            // The replayed dispatch stays `last`, so repeats don't stack
            return replay;
        }

        if !actions.is_empty() {
            self.last = actions.clone();
        }
        actions
    }
}

/// Print the spoken-command reference
pub fn print_reference(control_word: &str) {
    eprintln!(
        "
╭──────────────────────────────────────────────────────────────╮
│                     SPOKEN COMMANDS                          │
├──────────────────────────────────────────────────────────────┤
│ CONTROL (prefix with '{control_word}')
│   {control_word} sleep / wake            Recognition off/on
│   {control_word} dragon mode             Hand off to Dragon
│   {control_word} standard mode           Take recognition back
│   {control_word} debugging on / off      Event logging
│   {control_word} show log                Open the event log
│   {control_word} calibrate / mouse / keyboard / eye debug ...
├──────────────────────────────────────────────────────────────┤
│ KEYS                                                         │
│   air bat cap ... zip              a-z                       │
│   zero..nine / oh                  0-9                       │
│   comma, dash, dollar sign, ...    symbol keys               │
│   enter, tab, escape, page up ...  operation keys            │
│   command shift sun                chords (cmd-shift-s)      │
├──────────────────────────────────────────────────────────────┤
│ LITERAL TEXT                                                 │
│   phrasing <words>                 enter words verbatim      │
│   phrasing camel <words>           thisIsATest               │
│   phrasing caps line <words>       THIS-IS-A-TEST            │
│   phraser title cram               'Cram' (formatter words)  │
├──────────────────────────────────────────────────────────────┤
│ EDITING (VS Code)                                            │
│   line three four                  jump to line 34           │
│   select line / word / instances   selection                 │
│   find next <words>                search                    │
├──────────────────────────────────────────────────────────────┤
│ OTHER                                                        │
│   repeat three                     repeat last command       │
╰──────────────────────────────────────────────────────────────╯
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{RecognitionMode, RecognitionState};

    fn session() -> Session {
        let config = Config::default();
        Session::new(RuleSet::new(&config), RecognitionState::new())
    }

    #[test]
    fn test_unmatched_dictation_is_ignored() {
        let mut s = session();
        assert!(s.process("the quick brown fox").is_empty());
    }

    #[test]
    fn test_key_rule_dispatch() {
        let mut s = session();
        let actions = s.process("command shift sun");
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], Action::Keys(chords) if chords.len() == 1));
    }

    #[test]
    fn test_sleep_gates_ordinary_rules() {
        let mut s = session();
        assert!(!s.process("hark sleep").is_empty());
        assert_eq!(s.state().mode(), RecognitionMode::Asleep);

        // Keys and literal entry are gated while asleep
        assert!(s.process("command shift sun").is_empty());
        assert!(s.process("phrasing hello there").is_empty());

        // Control rules still work
        assert!(!s.process("hark wake").is_empty());
        assert!(!s.process("command shift sun").is_empty());
    }

    #[test]
    fn test_repeat_replays_last_dispatch() {
        let mut s = session();
        let first = s.process("enter");
        assert_eq!(first.len(), 1);

        let replay = s.process("repeat three");
        assert_eq!(replay.len(), 2);
        assert_eq!(replay[0], first[0]);
        assert_eq!(replay[1], first[0]);
    }

    #[test]
    fn test_repeat_does_not_stack() {
        let mut s = session();
        s.process("enter");
        let first_replay = s.process("repeat three");
        assert_eq!(first_replay.len(), 2);

        // A second repeat replays the original dispatch, not the replay
        let second_replay = s.process("repeat two");
        assert_eq!(second_replay.len(), 1);
    }

    #[test]
    fn test_repeat_of_nothing_is_nothing() {
        let mut s = session();
        assert!(s.process("repeat three").is_empty());
    }

    #[test]
    fn test_custom_command() {
        let mut config = Config::default();
        config.custom.push(crate::config::CustomCommand {
            phrase: "Open Spotlight".into(),
            action: "key:cmd-space".into(),
        });
        let mut s = Session::new(RuleSet::new(&config), RecognitionState::new());

        let actions = s.process("open spotlight");
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], Action::Keys(_)));
    }

    #[test]
    fn test_custom_insert_command() {
        let mut config = Config::default();
        config.custom.push(crate::config::CustomCommand {
            phrase: "sign off".into(),
            action: "insert:Best regards".into(),
        });
        let mut s = Session::new(RuleSet::new(&config), RecognitionState::new());

        let actions = s.process("sign off");
        assert_eq!(actions, vec![Action::Insert("Best regards".into())]);
    }

    #[test]
    fn test_invalid_custom_action_is_skipped() {
        let mut config = Config::default();
        config.custom.push(crate::config::CustomCommand {
            phrase: "broken".into(),
            action: "key:not-a-real-chord".into(),
        });
        let mut s = Session::new(RuleSet::new(&config), RecognitionState::new());
        assert!(s.process("broken").is_empty());
    }

    #[test]
    fn test_editor_rules_require_matching_app() {
        let mut s = session();
        // No app context: "line three four" is not an editor command, and
        // "line" is not a key phrase, so nothing matches.
        assert!(s.process("line three four").is_empty());
        assert!(!s.process("@com.microsoft.VSCode line three four").is_empty());
    }

    #[test]
    fn test_editor_contexts_can_be_disabled() {
        let config = Config {
            editor_contexts: false,
            ..Config::default()
        };
        let mut s = Session::new(RuleSet::new(&config), RecognitionState::new());
        assert!(s.process("@com.microsoft.VSCode line three four").is_empty());
    }
}
