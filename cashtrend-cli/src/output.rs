use anyhow::{Context, Result};
use cashtrend_core::Finding;
use std::fs::OpenOptions;
use std::io::Write;

use crate::config::ReportTarget;

/// Write the rendered finding to a flat report file.
pub fn write_report(target: &ReportTarget, finding: &Finding) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(target.append)
        .truncate(!target.append)
        .open(&target.path)
        .with_context(|| format!("open {}", target.path.display()))?;

    file.write_all(finding.render().as_bytes())
        .with_context(|| format!("write {}", target.path.display()))?;

    tracing::info!(
        path = %target.path.display(),
        lines = finding.lines.len(),
        append = target.append,
        "wrote report"
    );
    Ok(())
}

/// Terminal form: trailing newlines trimmed.
pub fn terminal_text(finding: &Finding) -> String {
    finding.render().trim_end_matches('\n').to_string()
}
