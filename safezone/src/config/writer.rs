//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[monitor]
; Minimum milliseconds between two alerts of the same zone kind (default: 2000)
; A change of kind (e.g. safe -> restricted) always alerts immediately
debounce_ms = {}
; Seconds to wait for the first position fix before failing (default: 20)
acquire_timeout_secs = {}
; Seconds to wait for a location permission answer (default: 30)
permission_timeout_secs = {}
; Request precise positions while watching (default: true)
high_accuracy = {}
; Oldest cached position accepted, in milliseconds (default: 0 = always fresh)
maximum_age_ms = {}
; Buffered updates/alerts per subscriber before the oldest are dropped (default: 64)
channel_capacity = {}

[zones]
; Zone definition file. One [zone.<id>] section per zone:
;   kind        - restricted or safe
;   label       - display name
;   description - free text
;   vertices    - lat,lng | lat,lng | lat,lng (at least 3)
file = {}

[logging]
; Log file path (truncated on each start)
file = {}
"#,
        config.monitor.debounce_ms,
        config.monitor.acquire_timeout_secs,
        config.monitor.permission_timeout_secs,
        config.monitor.high_accuracy,
        config.monitor.maximum_age_ms,
        config.monitor.channel_capacity,
        path_to_string(&config.zones.file),
        path_to_string(&config.logging.file),
    )
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
