//! Astral-style CLI output formatting.
//!
//! Human output goes to stdout with colored symbols; `--json` switches every
//! helper to one JSON object per line (`{"type": ..., "payload": ...}`) so
//! scan output can be piped. Logs never go through here.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream, Style};
use serde_json::json;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Style `value` when the stream supports color (or `--color always`).
fn paint(value: impl Display, stream: Stream, style: Style) -> String {
    value
        .if_supports_color(stream, |v| v.style(style))
        .to_string()
}

fn out(value: impl Display, style: Style) -> String {
    paint(value, Stream::Stdout, style)
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig, color: &ColorChoice) {
    write_config(config);
    match color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {
            if config.json {
                owo_colors::set_override(false);
            }
        }
    }
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    emit("header", || json!({ "app": "propedge", "version": version }), true, || {
        println!(
            "{} {}",
            out("propedge", Style::new().bold()),
            out(version, Style::new().dimmed())
        );
    });
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit("field", || json!({ "label": label, "value": value }), true, || {
        println!("  {:<14} {}", out(label, Style::new().dimmed()), value);
    });
}

/// Route one message: a JSON record in `--json` mode, else `human` unless
/// quiet mode hides it.
fn emit(
    kind: &str,
    payload: impl FnOnce() -> serde_json::Value,
    hide_when_quiet: bool,
    human: impl FnOnce(),
) {
    let config = read_config();
    if config.json {
        emit_json_line(kind, payload());
    } else if !(hide_when_quiet && config.quiet) {
        human();
    }
}

/// Print a success line.
pub fn success(message: &str) {
    emit("success", || json!({ "message": message }), true, || {
        println!("  {} {}", out("✓", Style::new().green()), message);
    });
}

/// Print a warning line. Shown even in quiet mode.
pub fn warning(message: &str) {
    emit("warning", || json!({ "message": message }), false, || {
        println!("  {} {}", out("⚠", Style::new().yellow()), message);
    });
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", paint("×", Stream::Stderr, Style::new().red()), message);
    }
}

/// Print a section header.
pub fn section(title: &str) {
    emit("section", || json!({ "title": title }), true, || {
        println!();
        println!("{}", out(title, Style::new().bold()));
    });
}

/// Print a note.
pub fn note(message: &str) {
    emit("note", || json!({ "message": message }), true, || {
        println!("  {}", out(message, Style::new().dimmed()));
    });
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    emit("hint", || json!({ "message": message }), true, || {
        println!(
            "  {}: {}",
            out("hint", Style::new().cyan().dimmed()),
            out(message, Style::new().dimmed())
        );
    });
}

/// Print multiple lines of content, each indented. Used for rendered tables.
pub fn lines(content: &str) {
    emit("lines", || json!({ "content": content }), true, || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Emit one typed JSON record (`{"type": kind, "payload": ...}`).
///
/// No-op outside JSON mode.
pub fn record(kind: &str, payload: serde_json::Value) {
    if is_json() {
        emit_json_line(kind, payload);
    }
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner.
///
/// Returns a hidden progress bar in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let config = read_config();
    if config.json || config.quiet {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    let style = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success checkmark.
///
/// JSON mode only clears the (hidden) spinner; progress is not a record.
pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    let config = read_config();
    if config.json || config.quiet {
        pb.finish_and_clear();
    } else {
        pb.finish_with_message(format!("{} {}", out("✓", Style::new().green()), message));
    }
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &indicatif::ProgressBar, message: &str) {
    if is_json() {
        pb.finish_and_clear();
    } else {
        pb.finish_with_message(format!("{} {}", out("×", Style::new().red()), message));
    }
}
