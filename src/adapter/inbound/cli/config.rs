//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use super::diagnostic;
use super::paths::{self, DEFAULT_CONFIG};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::odds_api::API_KEY_ENV;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../propedge.toml.example");

/// Execute `config init`.
pub fn execute_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG));
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note("1. Point [reference] snapshot at your reference lines");
    output::note(&format!("2. Set {API_KEY_ENV} (or add it to .env)"));
    output::note(&format!("3. Run: propedge scan -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let (config, source) = paths::load_config(path)?;
    let source = source.map_or_else(
        || "(built-in defaults)".to_string(),
        |path| path.display().to_string(),
    );

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source,
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", &source);

    output::section("Scan");
    output::field("Threshold", format!("{}%", config.scan.threshold));
    let books: Vec<&str> = config.scan.supported_books.iter().map(|b| b.as_str()).collect();
    output::field("Books", books.join(", "));

    output::section("Reference");
    match &config.reference.snapshot {
        Some(snapshot) => output::field("Snapshot", snapshot.display()),
        None => output::warning("No reference snapshot configured"),
    }

    output::section("Odds API");
    output::field("Base URL", &config.odds_api.base_url);
    output::field("Sport", &config.odds_api.sport);
    output::field("Regions", &config.odds_api.regions);
    output::field(
        "Timeout",
        format!(
            "{}ms (connect {}ms)",
            config.odds_api.http.timeout_ms, config.odds_api.http.connect_timeout_ms
        ),
    );
    if std::env::var(API_KEY_ENV).is_ok_and(|key| !key.trim().is_empty()) {
        output::success(&format!("API key loaded from {API_KEY_ENV}"));
    } else {
        output::warning(&format!("{API_KEY_ENV} not set"));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    if output::verbosity() > 0 {
        let rendered =
            toml::to_string_pretty(&config).map_err(|err| ConfigError::InvalidValue {
                field: "config",
                reason: err.to_string(),
            })?;
        output::section("TOML");
        output::lines(&rendered);
    }

    Ok(())
}

/// Execute `config validate`.
///
/// Parse errors with a location are rendered as a source snippet before the
/// error is returned.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    output::section("Config Validation");
    let Some(path) = paths::resolve_config(path) else {
        output::note(&format!("No {DEFAULT_CONFIG} found; built-in defaults apply"));
        output::success("Defaults are valid");
        return Ok(());
    };
    output::field("Path", path.display());

    let content = fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
    match Config::parse_toml(&content) {
        Ok(config) => {
            output::success("Config file is valid");
            if config.reference.snapshot.is_none() {
                output::warning("No reference snapshot configured; scans will find no data");
            }
            output::field("Next", format!("propedge scan -c {}", path.display()));
            Ok(())
        }
        Err(Error::Config(ConfigError::Parse(err))) => {
            if !output::is_json() {
                let name = path.display().to_string();
                if let Some(report) = diagnostic::ConfigError::from_toml(&name, &content, &err) {
                    let report = report.with_help("see propedge.toml.example for every key");
                    eprintln!("{:?}", miette::Report::new(report));
                }
            }
            Err(ConfigError::Parse(err).into())
        }
        Err(err) => Err(err),
    }
}
