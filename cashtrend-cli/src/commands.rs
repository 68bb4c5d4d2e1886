//! Subcommand bodies. Each returns the text destined for stdout.

use anyhow::{Context, Result};
use cashtrend_core::{analyze, classify, DeltaSeries};
use cashtrend_ingest::load_series;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::output;

fn load(cfg: &Config, csv: Option<PathBuf>) -> Result<DeltaSeries> {
    let csv_path = cfg.resolve_input(csv)?;
    load_series(&csv_path).with_context(|| format!("loading {}", csv_path.display()))
}

/// Load, classify and render. Writes the report file when one is configured.
pub fn report(
    cfg: &Config,
    csv: Option<PathBuf>,
    output_path: Option<PathBuf>,
    overwrite: bool,
    json: bool,
) -> Result<String> {
    let series = load(cfg, csv)?;
    let finding = analyze(&series);
    tracing::debug!(scenario = %finding.scenario, lines = finding.lines.len(), "rendered finding");

    let text = if json {
        serde_json::to_string_pretty(&finding).context("serialize finding")?
    } else {
        output::terminal_text(&finding)
    };

    if let Some(target) = cfg.resolve_report(output_path, overwrite) {
        output::write_report(&target, &finding)?;
    }
    Ok(text)
}

pub fn classify_only(cfg: &Config, csv: Option<PathBuf>) -> Result<String> {
    let series = load(cfg, csv)?;
    Ok(format!("{} ({} deltas)", classify(&series), series.len()))
}

pub fn show_config(path: Option<&Path>, cfg: &Config) -> Result<String> {
    let location = path.map_or_else(|| "(defaults, no config file)".to_string(), |p| p.display().to_string());
    let body = toml::to_string_pretty(cfg).context("serialize config")?;
    Ok(format!("# {location}\n{body}"))
}
