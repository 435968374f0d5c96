use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};

pub const CONFIG_FILE_NAME: &str = "vsort.toml";

/// settings from vsort.toml, every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {

    /// tracing filter directive, VSORT_LOG takes precedence
    pub log: Option<String>,

    pub sort: SortConfig,

    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub descending: bool,
    pub skip_invalid: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            descending: true,
            skip_invalid: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {

    /// versions shown per group, 0 shows all
    pub max_items: usize,
}

impl Config {

    pub fn from_reader<R: Read>(mut read: R) -> Result<Config> {
        let mut contents = String::new();
        read.read_to_string(&mut contents)?;
        toml::from_str::<Config>(&contents).context("failed to parse config")
    }

    pub fn from_path(path: &Utf8Path) -> Result<Config> {
        let read = BufReader::new(File::open(path).with_context(|| format!("failed to open config file {path}"))?);
        Self::from_reader(read).with_context(|| format!("in config file {path}"))
    }

    /// Load the given config file, or the first one found by
    /// [find_config_file], or fall back to defaults.
    pub fn load(path: Option<&Utf8Path>) -> Result<Config> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file()?,
        };
        match path {
            Some(path) => Self::from_path(&path),
            None => Ok(Config::default()),
        }
    }
}

/// search for the config file
/// 1. vsort.toml next to the executable
/// 2. vsort.toml in the current directory
pub fn find_config_file() -> Result<Option<Utf8PathBuf>> {

    let candidates = [
        std::env::current_exe()?.with_file_name(CONFIG_FILE_NAME),
        std::env::current_dir()?.join(CONFIG_FILE_NAME),
    ];

    for path in candidates {
        if path.is_file() {
            let path = Utf8PathBuf::from_path_buf(path)
                .map_err(|p| anyhow::anyhow!("config path is not utf8: {}", p.display()))?;
            return Ok(Some(path));
        }
    }

    Ok(None)
}
