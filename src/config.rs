//! Configuration
//!
//! Settings resolve in order: built-in defaults, then the config file, then
//! CLI flags. The config file lives at `~/.classdesk/config.json` unless a
//! path is given with `--config`. Every field is optional.

use crate::domain::Tab;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Shortest accepted tick interval
pub const MIN_TICK_MS: u64 = 50;

/// Longest accepted tick interval (one hour)
pub const MAX_TICK_MS: u64 = 3_600_000;

const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "classdesk.log";

/// Contents of config.json (sparse)
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// The file written by `classdesk init-config`
    pub fn template() -> Self {
        Self {
            tick_ms: Some(DEFAULT_TICK_MS),
            seed_data: Some(true),
            start_tab: Some("assignments".to_string()),
            log_level: Some("info".to_string()),
            log_file: None,
        }
    }
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub tick_ms: Option<u64>,
    pub no_seed: bool,
    pub start_tab: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Final settings with every value filled in
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tick_ms: u64,
    pub seed_data: bool,
    pub start_tab: Tab,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Settings {
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms)
    }

    /// How much one tick takes off a timer
    pub fn tick_unit(&self) -> chrono::Duration {
        // Clamped so the cast cannot wrap negative
        chrono::Duration::milliseconds(self.tick_ms.min(MAX_TICK_MS) as i64)
    }
}

/// Directory holding the config and log files (~/.classdesk)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".classdesk"))
}

/// Path to the default config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Load a config file. A missing file yields the empty config.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();

    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Write the config template to `path`, refusing to overwrite unless `force`
pub fn write_default_config<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&FileConfig::template())?;
    atomic_write(path, &json)
}

/// Atomically write content to a file via a temp file in the same directory
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Unknown log level '{}'. Use off, error, warn, info, debug or trace", level))
}

fn parse_tab(name: &str) -> Result<Tab> {
    Tab::from_name(name).with_context(|| {
        format!("Unknown tab '{}'. Use assignments, reading, notes or timers", name)
    })
}

/// Collapse defaults, file config and CLI overrides into final settings
pub fn resolve(file: &FileConfig, cli: &Overrides, default_log_file: PathBuf) -> Result<Settings> {
    let tick_ms = cli.tick_ms.or(file.tick_ms).unwrap_or(DEFAULT_TICK_MS);
    if tick_ms < MIN_TICK_MS {
        anyhow::bail!("Tick interval must be at least {}ms, got {}ms", MIN_TICK_MS, tick_ms);
    }
    if tick_ms > MAX_TICK_MS {
        anyhow::bail!("Tick interval must be at most {}ms, got {}ms", MAX_TICK_MS, tick_ms);
    }

    let seed_data = !cli.no_seed && file.seed_data.unwrap_or(true);

    let start_tab = match cli.start_tab.as_deref().or(file.start_tab.as_deref()) {
        Some(name) => parse_tab(name)?,
        None => Tab::default(),
    };

    let log_level = match cli.log_level.as_deref().or(file.log_level.as_deref()) {
        Some(level) => parse_level(level)?,
        None => LevelFilter::Info,
    };

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| file.log_file.clone())
        .unwrap_or(default_log_file);

    Ok(Settings {
        tick_ms,
        seed_data,
        start_tab,
        log_level,
        log_file,
    })
}

/// Default log file location (~/.classdesk/classdesk.log)
pub fn default_log_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn log_path() -> PathBuf {
        PathBuf::from("/tmp/classdesk-test.log")
    }

    #[test]
    fn test_defaults() {
        let settings = resolve(&FileConfig::default(), &Overrides::default(), log_path()).unwrap();
        assert_eq!(
            settings,
            Settings {
                tick_ms: 1000,
                seed_data: true,
                start_tab: Tab::Assignments,
                log_level: LevelFilter::Info,
                log_file: log_path(),
            }
        );
        assert_eq!(settings.tick_unit(), chrono::Duration::seconds(1));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            tick_ms: Some(500),
            seed_data: Some(true),
            start_tab: Some("notes".to_string()),
            log_level: Some("warn".to_string()),
            log_file: None,
        };
        let cli = Overrides {
            tick_ms: Some(250),
            no_seed: true,
            start_tab: Some("Timers".to_string()),
            log_level: None,
            log_file: Some(PathBuf::from("/tmp/other.log")),
        };

        let settings = resolve(&file, &cli, log_path()).unwrap();
        assert_eq!(settings.tick_ms, 250);
        assert!(!settings.seed_data);
        assert_eq!(settings.start_tab, Tab::Timers);
        assert_eq!(settings.log_level, LevelFilter::Warn);
        assert_eq!(settings.log_file, PathBuf::from("/tmp/other.log"));
    }

    #[test]
    fn test_file_disables_seed() {
        let file = FileConfig {
            seed_data: Some(false),
            ..FileConfig::default()
        };
        let settings = resolve(&file, &Overrides::default(), log_path()).unwrap();
        assert!(!settings.seed_data);
    }

    #[test]
    fn test_rejects_bad_values() {
        let tiny_tick = Overrides {
            tick_ms: Some(1),
            ..Overrides::default()
        };
        assert!(resolve(&FileConfig::default(), &tiny_tick, log_path()).is_err());

        for huge in [MAX_TICK_MS + 1, 1 << 63, u64::MAX] {
            let huge_tick = Overrides {
                tick_ms: Some(huge),
                ..Overrides::default()
            };
            assert!(resolve(&FileConfig::default(), &huge_tick, log_path()).is_err());

            let huge_file = FileConfig {
                tick_ms: Some(huge),
                ..FileConfig::default()
            };
            assert!(resolve(&huge_file, &Overrides::default(), log_path()).is_err());
        }

        let bad_tab = Overrides {
            start_tab: Some("editor".to_string()),
            ..Overrides::default()
        };
        assert!(resolve(&FileConfig::default(), &bad_tab, log_path()).is_err());

        let bad_level = Overrides {
            log_level: Some("loud".to_string()),
            ..Overrides::default()
        };
        assert!(resolve(&FileConfig::default(), &bad_level, log_path()).is_err());
    }

    #[test]
    fn test_longest_tick_counts_timers_down() {
        let cli = Overrides {
            tick_ms: Some(MAX_TICK_MS),
            ..Overrides::default()
        };
        let settings = resolve(&FileConfig::default(), &cli, log_path()).unwrap();
        assert_eq!(settings.tick_unit(), chrono::Duration::hours(1));

        let mut timer = crate::domain::Timer::new("Essay", chrono::Duration::seconds(30));
        timer.tick(settings.tick_unit());
        assert!(timer.is_finished());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path().join("config.json")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "tick_ms": 2000 }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.tick_ms, Some(2000));
        assert_eq!(config.seed_data, None);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_config(&path).is_err());

        fs::write(&path, r#"{ "tick": 5 }"#).unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_write_default_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        write_default_config(&path, false).unwrap();
        assert_eq!(load_config(&path).unwrap(), FileConfig::template());

        // Refuses to clobber without force
        assert!(write_default_config(&path, false).is_err());
        write_default_config(&path, true).unwrap();
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");

        atomic_write(&path, "Original content").unwrap();
        atomic_write(&path, "Updated content").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Updated content");
    }
}
