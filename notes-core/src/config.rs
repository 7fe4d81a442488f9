use crate::note::DEFAULT_MAX_TEXT_LEN;
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Default cap on the number of stored notes.
pub const DEFAULT_MAX_NOTES: usize = 50;
/// Default backing file, relative to the working directory.
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Flat file holding one note per line.
    pub notes_file: PathBuf,
    /// Adding fails once the store holds this many notes. Also the number of lines honoured on load.
    pub max_notes: usize,
    /// Note text is silently cut to this many characters.
    pub max_text_len: usize,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    notes_file: Option<PathBuf>,
    max_notes: Option<usize>,
    max_text_len: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_file: PathBuf::from(DEFAULT_NOTES_FILE),
            max_notes: DEFAULT_MAX_NOTES,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A missing or unreadable config file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|err| {
            tracing::warn!("ignoring config file: {err:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    /// Same as [`Config::load`], with the backing file replaced when `notes_file` is given.
    pub fn load_with_override(notes_file: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(path) = notes_file {
            config.notes_file = path;
        }
        Ok(config)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            notes_file: file_config.notes_file.unwrap_or(defaults.notes_file),
            max_notes: file_config
                .max_notes
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_notes),
            max_text_len: file_config
                .max_text_len
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_text_len),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("notes").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("notes").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
