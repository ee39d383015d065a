//! End-to-end dispatch: raw utterance lines in, planned actions out

use hark::config::Config;
use hark::host::HostDirective;
use hark::rules::{Action, RuleSet, Session};
use hark::state::{RecognitionMode, RecognitionState};

fn session() -> Session {
    Session::new(RuleSet::new(&Config::default()), RecognitionState::new())
}

fn inserted(actions: &[Action]) -> Option<&str> {
    match actions {
        [Action::Insert(text)] => Some(text),
        _ => None,
    }
}

#[test]
fn formatted_literal_entry() {
    let mut s = session();
    assert_eq!(
        inserted(&s.process("phrasing this is a test")),
        Some("this is a test")
    );
    assert_eq!(
        inserted(&s.process("phrasing caps line this is a test")),
        Some("THIS-IS-A-TEST")
    );
    assert_eq!(
        inserted(&s.process("phrasing camel this is a test")),
        Some("thisIsATest")
    );
    assert_eq!(
        inserted(&s.process("phrasing camel snake this is a test")),
        Some("this_Is_A_Test")
    );
}

#[test]
fn annotated_tokens_format_like_plain_ones() {
    let mut s = session();
    assert_eq!(
        inserted(&s.process("phrasing snake a\\determiner bird")),
        Some("a_bird")
    );
}

#[test]
fn line_jump_parses_spoken_digits() {
    let mut s = session();
    let actions = s.process("@com.microsoft.VSCode line three four");
    assert_eq!(actions.len(), 4);
    assert_eq!(actions[1], Action::Insert("34".into()));

    // Numbers stop at the first non-digit word; nothing matches here because
    // "line" needs a leading number word
    assert!(s.process("@com.microsoft.VSCode line nowhere").is_empty());
}

#[test]
fn editor_rules_need_their_app() {
    let mut s = session();
    assert!(s.process("@com.apple.Terminal select instances").is_empty());
    assert!(!s.process("@com.microsoft.VSCode select instances").is_empty());
}

#[test]
fn spoken_chords_press_keys() {
    let mut s = session();
    let actions = s.process("control air");
    match actions.as_slice() {
        [Action::Keys(chords)] => {
            assert_eq!(chords.len(), 1);
            assert_eq!(chords[0].to_string(), "ctrl-a");
        }
        other => panic!("unexpected actions: {:?}", other),
    }
}

#[test]
fn sleep_wake_cycle_controls_dispatch() {
    let mut s = session();

    let asleep = s.process("hark sleep");
    assert_eq!(
        asleep,
        vec![Action::Host(HostDirective::menu_check(
            "!Enable Speech Recognition",
            false
        ))]
    );
    assert_eq!(s.state().mode(), RecognitionMode::Asleep);

    // Everything but control rules is inert while asleep
    assert!(s.process("phrasing hello").is_empty());
    assert!(s.process("enter").is_empty());
    assert!(s.process("@com.microsoft.VSCode select line").is_empty());

    let awake = s.process("hark wake");
    assert!(awake.contains(&Action::Host(HostDirective::mimic("go to sleep"))));
    assert_eq!(s.state().mode(), RecognitionMode::Standard);
    assert!(!s.process("enter").is_empty());
}

#[test]
fn dragon_roundtrip() {
    let mut s = session();

    let handoff = s.process("hark dragon mode");
    assert!(handoff.contains(&Action::Host(HostDirective::mimic("wake up"))));
    assert_eq!(s.state().mode(), RecognitionMode::Dragon);

    let back = s.process("hark standard mode");
    assert!(back.contains(&Action::Host(HostDirective::mimic("go to sleep"))));
    assert_eq!(s.state().mode(), RecognitionMode::Standard);
}

#[test]
fn repeat_replays_previous_command() {
    let mut s = session();

    let select = s.process("@com.microsoft.VSCode select word");
    assert_eq!(select.len(), 1);

    let replay = s.process("repeat three");
    assert_eq!(replay, vec![select[0].clone(), select[0].clone()]);
}

#[test]
fn repeat_count_strips_leading_zeros() {
    let mut s = session();
    s.process("enter");
    let replay = s.process("repeat oh three");
    assert_eq!(replay.len(), 2);
}

#[test]
fn unmatched_dictation_produces_nothing() {
    let mut s = session();
    assert!(s.process("just some ordinary dictation").is_empty());
    assert!(s.process("").is_empty());
}

#[test]
fn custom_commands_from_config() {
    let mut config = Config::default();
    config.custom.push(hark::config::CustomCommand {
        phrase: "park the engine".into(),
        action: "mimic:go to sleep".into(),
    });
    let mut s = Session::new(RuleSet::new(&config), RecognitionState::new());

    let actions = s.process("park the engine");
    assert_eq!(actions, vec![Action::Host(HostDirective::mimic("go to sleep"))]);
}
