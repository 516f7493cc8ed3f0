//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use std::str::FromStr;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [monitor] section
    if let Some(section) = ini.section(Some("monitor")) {
        if let Some(v) = section.get("debounce_ms") {
            config.monitor.debounce_ms = parse_number(
                v,
                "monitor",
                "debounce_ms",
                "must be a non-negative integer (milliseconds)",
            )?;
        }
        if let Some(v) = section.get("acquire_timeout_secs") {
            config.monitor.acquire_timeout_secs = parse_positive(
                v,
                "monitor",
                "acquire_timeout_secs",
                "must be a positive integer (seconds)",
            )?;
        }
        if let Some(v) = section.get("permission_timeout_secs") {
            config.monitor.permission_timeout_secs = parse_positive(
                v,
                "monitor",
                "permission_timeout_secs",
                "must be a positive integer (seconds)",
            )?;
        }
        if let Some(v) = section.get("high_accuracy") {
            config.monitor.high_accuracy = parse_bool(v);
        }
        if let Some(v) = section.get("maximum_age_ms") {
            config.monitor.maximum_age_ms = parse_number(
                v,
                "monitor",
                "maximum_age_ms",
                "must be a non-negative integer (milliseconds)",
            )?;
        }
        if let Some(v) = section.get("channel_capacity") {
            config.monitor.channel_capacity = parse_positive(
                v,
                "monitor",
                "channel_capacity",
                "must be a positive integer",
            )?;
        }
    }

    // [zones] section
    if let Some(section) = ini.section(Some("zones")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.zones.file = expand_tilde(v);
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn parse_number<T: FromStr>(
    value: &str,
    section: &str,
    key: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        })
}

fn parse_positive<T>(
    value: &str,
    section: &str,
    key: &str,
    reason: &str,
) -> Result<T, ConfigFileError>
where
    T: FromStr + PartialOrd + Default,
{
    let parsed: T = parse_number(value, section, key, reason)?;
    if parsed <= T::default() {
        return Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        });
    }
    Ok(parsed)
}

/// Parse a boolean value from a string.
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
