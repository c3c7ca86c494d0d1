//! File-based configuration sources
//!
//! `FileSource` reads an explicit path (or stdin for `-`); `XdgSource` reads
//! `hoard.toml` from the per-user config directory.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::format::ConfigFormat;
use super::traits::{ConfigError, ConfigResult, ConfigSource};
use super::types::HoardConfig;

/// Path placeholder meaning "read the config from standard input"
pub const STDIN_PLACEHOLDER: &str = "-";

/// File name looked up in the per-user config directory
pub const DEFAULT_CONFIG_FILE_NAME: &str = "hoard.toml";

/// Read and decode a config file
///
/// The extension picks the format to try first when it is one of `toml`,
/// `yaml`, `yml` or `json`. If that fails, or there is no such extension,
/// the content decides. Errors from the extension's format take precedence.
pub fn load_config_file(path: &Path) -> ConfigResult<HoardConfig> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;
    decode(&content, ConfigFormat::from_path(path), &path.display().to_string())
}

fn decode(content: &str, format: Option<ConfigFormat>, origin: &str) -> ConfigResult<HoardConfig> {
    if content.trim().is_empty() {
        return Err(ConfigError::Empty(origin.to_string()));
    }
    match format {
        Some(format) => format
            .decode(content)
            .or_else(|e| HoardConfig::from_str_detected(content).map_err(|_| e)),
        None => HoardConfig::from_str_detected(content),
    }
}

/// Write generated config text, refusing to replace an existing file unless
/// `overwrite` is set
pub fn write_config_file(path: &Path, content: &str, overwrite: bool) -> ConfigResult<()> {
    if path.exists() && !overwrite {
        return Err(ConfigError::FileExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Config read from a caller-supplied path
///
/// # Example
///
/// ```no_run
/// use hoard_core::config::{ConfigSource, FileSource};
///
/// let config = FileSource::new("/etc/hoard/hoard.yaml").load()?;
/// # Ok::<(), hoard_core::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = if path.as_os_str() == STDIN_PLACEHOLDER {
            "config from STDIN".to_string()
        } else {
            format!("config file at '{}'", path.display())
        };
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this source reads standard input rather than a file
    pub fn reads_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PLACEHOLDER
    }
}

impl ConfigSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> ConfigResult<HoardConfig> {
        if self.reads_stdin() {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return decode(&content, None, &self.name);
        }
        load_config_file(&self.path)
    }
}

/// Config read from the platform's per-user config directory
///
/// On Linux this is `$XDG_CONFIG_HOME/hoard.toml` (usually
/// `~/.config/hoard.toml`). A missing file yields [`ConfigError::Absent`],
/// which the cascade passes over silently.
#[derive(Debug, Clone)]
pub struct XdgSource {
    path: Option<PathBuf>,
    name: String,
}

impl XdgSource {
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    fn with_path(path: Option<PathBuf>) -> Self {
        let name = match &path {
            Some(path) => format!("XDG base dir config at '{}'", path.display()),
            None => "XDG base dir config".to_string(),
        };
        Self { path, name }
    }

    /// Look in a specific directory instead of the platform default
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_path(Some(dir.as_ref().join(DEFAULT_CONFIG_FILE_NAME)))
    }

    /// Where `hoard config --init` writes and this source reads
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for XdgSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for XdgSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> ConfigResult<HoardConfig> {
        let path = self.path.as_deref().ok_or(ConfigError::NoConfigDir)?;
        load_config_file(path).map_err(|e| match e {
            ConfigError::NotFound(path) => ConfigError::Absent(path),
            other => other,
        })
    }
}
