use std::path::PathBuf;

/// `$HOME/.cashtrend`, or `None` when `HOME` is unset (cron, systemd units).
pub fn cashtrend_home() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(".cashtrend"))
}
