use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".roster";
pub const DATA_ENV_VAR: &str = "ROSTER_DATA";

/// Project context for roster operations
pub struct RosterContext {
    /// Directory holding `.roster/`, or the starting directory when none exists yet
    pub project_root: PathBuf,
    /// Path to .roster directory
    pub roster_dir: PathBuf,
    /// Path to config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: Option<RosterConfig>,
}

/// Configuration stored in .roster/config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSettings {
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> String {
    "data/roster.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { color: default_color() }
    }
}

fn default_color() -> bool {
    true
}

impl RosterContext {
    /// Find and load roster context from current directory or ancestors
    pub fn find() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::find_from(&current_dir)
    }

    /// Find roster context starting from the given directory
    pub fn find_from(start: &Path) -> Result<Self> {
        let project_root = Self::find_project_root(start).unwrap_or_else(|| start.to_path_buf());
        Self::from_root(project_root)
    }

    /// Create context from a known project root
    pub fn from_root(project_root: PathBuf) -> Result<Self> {
        let roster_dir = project_root.join(CONFIG_DIR);
        let config_path = roster_dir.join("config.toml");

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).context("Failed to read config.toml")?;
            let config: RosterConfig = toml::from_str(&content).context("Failed to parse config.toml")?;
            Some(config)
        } else {
            None
        };

        Ok(Self {
            project_root,
            roster_dir,
            config_path,
            config,
        })
    }

    /// Nearest ancestor of `start` (inclusive) that has a `.roster` directory
    fn find_project_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Check if roster is initialized in this project
    pub fn is_initialized(&self) -> bool {
        self.roster_dir.exists() && self.config_path.exists()
    }

    /// Whether the configuration allows colored output
    pub fn color_enabled(&self) -> bool {
        self.config.as_ref().is_none_or(|c| c.display.color)
    }

    /// Resolve the data file: explicit flag, then `ROSTER_DATA`, then config, then the default.
    ///
    /// Relative paths are taken from the project root.
    pub fn data_file(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        let raw = match std::env::var(DATA_ENV_VAR) {
            Ok(from_env) => {
                debug!("data file taken from {DATA_ENV_VAR}");
                from_env
            }
            Err(_) => {
                let configured = self
                    .config
                    .as_ref()
                    .map_or_else(default_data_file, |c| c.roster.data_file.clone());
                expand_env(&configured)?
            }
        };

        let path = PathBuf::from(raw);
        Ok(if path.is_absolute() {
            path
        } else {
            self.project_root.join(path)
        })
    }
}

/// Expand a value written entirely as `${VAR}`; anything else is returned unchanged.
pub fn expand_env(value: &str) -> Result<String> {
    if let Some(var_name) = value.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        std::env::var(var_name).with_context(|| format!("Environment variable {var_name} not set"))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.roster.data_file, "data/roster.json");
        assert!(config.display.color);
    }

    #[test]
    fn test_config_serialization() {
        let config = RosterConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("data_file"));
        assert!(toml_str.contains("color"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RosterConfig = toml::from_str("[display]\ncolor = false\n").unwrap();
        assert_eq!(config.roster.data_file, "data/roster.json");
        assert!(!config.display.color);
    }

    #[test]
    fn test_finds_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();
        std::fs::write(
            dir.path().join(CONFIG_DIR).join("config.toml"),
            "[roster]\ndata_file = \"students.json\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = RosterContext::find_from(&nested).unwrap();
        assert_eq!(ctx.project_root, dir.path());
        assert!(ctx.is_initialized());
        assert_eq!(ctx.config.unwrap().roster.data_file, "students.json");
    }

    #[test]
    fn test_uninitialized_context_uses_start_dir() {
        let dir = TempDir::new().unwrap();
        let ctx = RosterContext::find_from(dir.path()).unwrap();
        assert_eq!(ctx.project_root, dir.path());
        assert!(!ctx.is_initialized());
        assert!(ctx.color_enabled());
    }

    #[test]
    #[serial]
    fn test_data_file_precedence() {
        let dir = TempDir::new().unwrap();
        let ctx = RosterContext::from_root(dir.path().to_path_buf()).unwrap();

        unsafe { std::env::remove_var(DATA_ENV_VAR) };
        assert_eq!(ctx.data_file(None).unwrap(), dir.path().join("data/roster.json"));

        unsafe { std::env::set_var(DATA_ENV_VAR, "/tmp/elsewhere.json") };
        assert_eq!(ctx.data_file(None).unwrap(), PathBuf::from("/tmp/elsewhere.json"));

        let explicit = Path::new("/tmp/explicit.json");
        assert_eq!(ctx.data_file(Some(explicit)).unwrap(), explicit);

        unsafe { std::env::remove_var(DATA_ENV_VAR) };
    }

    #[test]
    #[serial]
    fn test_expand_env() {
        unsafe { std::env::set_var("ROSTER_TEST_PATH", "/srv/roster.json") };
        assert_eq!(expand_env("${ROSTER_TEST_PATH}").unwrap(), "/srv/roster.json");
        assert_eq!(expand_env("plain.json").unwrap(), "plain.json");
        unsafe { std::env::remove_var("ROSTER_TEST_PATH") };
        assert!(expand_env("${ROSTER_TEST_PATH}").is_err());
    }
}
