//! Voice-command layer for a dictation host
//!
//! The host runtime owns speech recognition; hark owns interpretation. One
//! recognized utterance arrives per line (tokens space separated, sense
//! annotations after a backslash, an optional leading @bundle-id naming the
//! frontmost app) and is matched against spoken rule tables: physical-key
//! phrases, literal text entry with formatters, a command repeater,
//! per-application editor rules, and recognition-control commands.
//! Matches become keystrokes, inserted text, or directives forwarded to the
//! host.

pub mod config;
pub mod eventlog;
pub mod format;
pub mod fuzzy;
pub mod host;
pub mod input;
pub mod keys;
pub mod numbers;
pub mod rules;
pub mod state;
pub mod token;
