use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Trigger word for control commands ("hark sleep", "hark wake", ...)
    #[serde(default = "default_control_word")]
    pub control_word: String,

    /// Literal text entry method: "direct" or "clipboard"
    #[serde(default = "default_input_method")]
    pub input_method: String,

    /// Event log location; defaults to ~/.hark/hark.log
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Enable the bundled per-application contexts (VS Code)
    #[serde(default = "default_editor_contexts")]
    pub editor_contexts: bool,

    /// Extra phrase -> action commands
    #[serde(default)]
    pub custom: Vec<CustomCommand>,
}

/// A user-defined spoken command
///
/// Action strings: "key:cmd-shift-t" (chord script), "insert:some text",
/// "mimic:wake up" (forwarded to the host engine).
#[derive(Debug, Deserialize, Clone)]
pub struct CustomCommand {
    pub phrase: String,
    pub action: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            control_word: default_control_word(),
            input_method: default_input_method(),
            log_path: None,
            editor_contexts: default_editor_contexts(),
            custom: Vec::new(),
        }
    }
}

fn default_control_word() -> String {
    "hark".into()
}

fn default_input_method() -> String {
    "direct".into()
}

fn default_editor_contexts() -> bool {
    true
}

impl Config {
    /// Load config.toml from the working directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(path) {
            Ok(s) => match toml::from_str(&s) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[CONFIG] {} is invalid ({}), using defaults", path.display(), e);
                    Config::default()
                }
            },
            Err(e) => {
                eprintln!("[CONFIG] failed to read {} ({}), using defaults", path.display(), e);
                Config::default()
            }
        }
    }
}
