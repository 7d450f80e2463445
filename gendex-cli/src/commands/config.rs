//! `gendex config` subcommands: show, path, set.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gendex_api::{Settings, setting_sources, settings_path};

use crate::CliError;

/// Show effective settings and where each value came from.
pub(crate) fn run_config_show(
    settings: &Settings,
    api_url_flag: Option<&str>,
) -> Result<(), CliError> {
    let path = settings_path();
    let sources = setting_sources();

    log::info!(
        "{}",
        "gendex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    // Config file status
    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    // The --api-url flag is applied after loading, so it wins over every
    // source the library reports.
    let api_source = match api_url_flag {
        Some(_) => "--api-url flag".to_string(),
        None => sources.api_url.to_string(),
    };

    let rows = [
        ("api_url", settings.api_url.clone(), api_source),
        (
            "max_in_flight",
            settings.max_in_flight.to_string(),
            sources.max_in_flight.to_string(),
        ),
    ];

    for (name, value, source) in rows {
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            value,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match settings_path() {
        Some(path) => {
            log::info!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::config("Could not determine config directory")),
    }
}

/// Persist one setting to the config file.
///
/// The base is the file contents alone, so env or flag overrides active
/// in this shell never get written to disk.
pub(crate) fn run_config_set(key: &str, value: &str) -> Result<(), CliError> {
    let mut settings = settings_path()
        .and_then(|p| Settings::from_file(&p))
        .unwrap_or_default();

    match key {
        "api_url" => {
            let url = value.trim_end_matches('/');
            if url.is_empty() {
                return Err(CliError::config("api_url cannot be empty"));
            }
            settings.api_url = url.to_string();
        }
        "max_in_flight" => {
            let n: usize = value.parse().map_err(|_| {
                CliError::config(format!(
                    "max_in_flight must be a number, got \"{}\"",
                    value
                ))
            })?;
            if n == 0 {
                return Err(CliError::config("max_in_flight must be at least 1"));
            }
            settings.max_in_flight = n;
        }
        other => {
            return Err(CliError::config(format!(
                "Unknown setting \"{}\" (expected api_url or max_in_flight)",
                other
            )));
        }
    }

    let path = settings.save()?;
    log::info!(
        "{} Saved {} to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        key.if_supports_color(Stdout, |t| t.cyan()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
