//! hark binary: stdin utterances in, keystrokes and host directives out

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hark::config::Config;
use hark::eventlog::EventLog;
use hark::input::{InputMethod, KeyInjector};
use hark::rules::{self, Action, RuleSet, Session};
use hark::state::RecognitionState;

#[derive(Parser)]
#[command(name = "hark")]
struct Cli {
    /// Print planned actions instead of injecting keystrokes
    #[arg(long)]
    dry_run: bool,

    /// Echo dispatch decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (default: ./config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the spoken-command reference
    Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if matches!(cli.command, Some(Command::Commands)) {
        rules::print_reference(&config.control_word);
        return Ok(());
    }

    let state = RecognitionState::new();
    let mut session = Session::new(RuleSet::new(&config), Arc::clone(&state));
    let mut log = EventLog::new(
        config
            .log_path
            .clone()
            .unwrap_or_else(EventLog::default_path),
    );

    let mut injector = if cli.dry_run {
        None
    } else {
        let method = InputMethod::from_str(&config.input_method);
        Some(KeyInjector::new(method).context("initializing keyboard injection")?)
    };

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        })
        .context("installing ctrl-c handler")?;
    }

    if cli.verbose {
        eprintln!(
            "[HARK] listening on stdin (control word: {:?}, {})",
            config.control_word,
            if cli.dry_run { "dry run" } else { "injecting" }
        );
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !running.load(Ordering::SeqCst) {
            break;
        }
        let line = line.context("reading utterance from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let actions = session.process(&line);

        if cli.verbose {
            eprintln!("[DISPATCH] {:?} -> {} action(s)", line.trim(), actions.len());
        }

        if state.debug() {
            let planned: Vec<String> = actions.iter().map(|a| a.to_string()).collect();
            if let Err(e) = log.record(&format!("{:?} -> [{}]", line.trim(), planned.join(", "))) {
                eprintln!("[LOG] {}", e);
            }
        }

        execute(&actions, injector.as_mut(), &log, cli.dry_run);
    }

    Ok(())
}

/// Carry out dispatched actions
///
/// Injection failures are reported and skipped; one bad keystroke must not
/// take the whole session down.
fn execute(actions: &[Action], mut injector: Option<&mut KeyInjector>, log: &EventLog, dry_run: bool) {
    for action in actions {
        match action {
            Action::Keys(chords) => {
                if let Some(injector) = injector.as_deref_mut() {
                    for chord in chords {
                        if let Err(e) = injector.press_chord(chord) {
                            eprintln!("[INPUT] {}", e);
                            break;
                        }
                    }
                } else if dry_run {
                    println!("plan {}", action);
                }
            }
            Action::Insert(text) => {
                if let Some(injector) = injector.as_deref_mut() {
                    if let Err(e) = injector.insert_text(text) {
                        eprintln!("[INPUT] {}", e);
                    }
                } else if dry_run {
                    println!("plan {}", action);
                }
            }
            Action::Host(directive) => {
                println!("{}", directive);
                let _ = io::stdout().flush();
            }
            Action::OpenLog => {
                if let Err(e) = log.open_viewer() {
                    eprintln!("[LOG] {}", e);
                }
            }
            // Sessions expand repeats before execution
            Action::Repeat(_) => {}
        }
    }
}
