//! Configuration for SafeZone.
//!
//! Two INI files are involved:
//!
//! - `~/.safezone/config.ini` - engine settings ([`ConfigFile`])
//! - a zone definition file, by default `~/.safezone/zones.ini`
//!   ([`load_zones`])
//!
//! Missing settings fall back to defaults; invalid values are reported with
//! the section and key that caused them.
//!
//! # Example
//!
//! ```
//! use safezone::config::{parse_zones_str, ConfigFile};
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.monitor.debounce_ms, 2000);
//!
//! let registry = parse_zones_str(
//!     "[zone.pier]\nkind = safe\nvertices = 0,0 | 0,1 | 1,1 | 1,0\n",
//! )
//! .unwrap();
//! assert_eq!(registry.len(), 1);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;
mod zones;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, MonitorSettings, ZonesSettings};
pub use zones::{
    load_zones, parse_zones, parse_zones_str, ZoneFileError, VERTEX_SEPARATOR,
    ZONE_SECTION_PREFIX,
};
