//! Shared recognition state
//!
//! One `Arc`'d struct of atomics instead of scattered flags or module
//! globals. Dispatch and the executor both read it; control rules write it.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Recognition modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecognitionMode {
    /// Normal operation: all rules active
    Standard = 0,
    /// Asleep: only control rules are heard
    Asleep = 1,
    /// Handed off to Dragon dictation: only control rules are heard
    Dragon = 2,
}

impl From<u8> for RecognitionMode {
    fn from(v: u8) -> Self {
        match v {
            1 => RecognitionMode::Asleep,
            2 => RecognitionMode::Dragon,
            _ => RecognitionMode::Standard,
        }
    }
}

impl fmt::Display for RecognitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionMode::Standard => write!(f, "standard"),
            RecognitionMode::Asleep => write!(f, "asleep"),
            RecognitionMode::Dragon => write!(f, "dragon"),
        }
    }
}

/// Runtime state shared across dispatch and execution
pub struct RecognitionState {
    /// Current recognition mode (stored as u8)
    mode: AtomicU8,
    /// Echo dispatch events to the log file
    pub debug_enabled: AtomicBool,
}

impl RecognitionState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            mode: AtomicU8::new(RecognitionMode::Standard as u8),
            debug_enabled: AtomicBool::new(false),
        })
    }

    pub fn mode(&self) -> RecognitionMode {
        RecognitionMode::from(self.mode.load(Ordering::SeqCst))
    }

    pub fn set_mode(&self, mode: RecognitionMode) {
        self.mode.store(mode as u8, Ordering::SeqCst);
    }

    /// True when ordinary (non-control) rules should be processed
    pub fn is_listening(&self) -> bool {
        self.mode() == RecognitionMode::Standard
    }

    pub fn set_debug(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn debug(&self) -> bool {
        self.debug_enabled.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for RecognitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecognitionState")
            .field("mode", &self.mode())
            .field("debug", &self.debug())
            .finish()
    }
}

/// Type alias for shared state
pub type SharedState = Arc<RecognitionState>;
