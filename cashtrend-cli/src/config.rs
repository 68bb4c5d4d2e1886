use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// Cash on hand CSV to analyze when `--csv` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Flat report file the finding is written to (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Append to the report file instead of truncating it
    pub append: bool,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            path: None,
            append: true,
        }
    }
}

/// Where and how to write the rendered finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget {
    pub path: PathBuf,
    pub append: bool,
}

impl Config {
    /// `--csv` wins over the config file. There is no fallback path.
    pub fn resolve_input(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        match flag.or_else(|| self.input.csv.clone()) {
            Some(p) => Ok(p),
            None => bail!("no input CSV: pass --csv <path> or set [input] csv in the config file"),
        }
    }

    pub fn resolve_report(&self, output: Option<PathBuf>, overwrite: bool) -> Option<ReportTarget> {
        output
            .or_else(|| self.report.path.clone())
            .map(|path| ReportTarget {
                path,
                append: self.report.append && !overwrite,
            })
    }
}

/// `--config` if given, else `config.toml` under the cashtrend home.
/// `None` when neither is available.
pub fn config_path(explicit: Option<&Path>, home: Option<PathBuf>) -> Option<PathBuf> {
    match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => home.map(|h| h.join("config.toml")),
    }
}

/// No path, or a path with no file behind it, means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        tracing::debug!("no config location, using defaults");
        return Ok(Config::default());
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Write a default config unless one exists. Returns the status line.
pub fn init_config(path: &Path) -> Result<String> {
    if path.exists() {
        return Ok(format!("Config already exists: {}", path.display()));
    }
    save_config(path, &Config::default())?;
    Ok(format!("Wrote {}", path.display()))
}
