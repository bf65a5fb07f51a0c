use crate::domain::errors::OpsError;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OsRelease {
    pub id: String,
    pub id_like: Vec<String>,
    pub pretty_name: Option<String>,
}

impl OsRelease {
    pub fn is_debian_family(&self) -> bool {
        self.id == "debian" || self.id_like.iter().any(|l| l == "debian")
    }

    pub fn describe(&self) -> String {
        self.pretty_name.clone().unwrap_or_else(|| {
            if self.id.is_empty() {
                "unknown".to_string()
            } else {
                self.id.clone()
            }
        })
    }
}

pub fn parse_os_release(raw: &str) -> OsRelease {
    let mut out = OsRelease::default();
    for line in raw.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        match key.trim() {
            "ID" => out.id = value.to_ascii_lowercase(),
            "ID_LIKE" => {
                out.id_like = value
                    .split_whitespace()
                    .map(|s| s.to_ascii_lowercase())
                    .collect()
            }
            "PRETTY_NAME" => out.pretty_name = Some(value.to_string()),
            _ => {}
        }
    }
    out
}

pub fn read_os_release(path: &Path) -> Result<OsRelease, OpsError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "os-release unreadable");
        OpsError::UnsupportedPlatform(format!("cannot read {}", path.display()))
    })?;
    Ok(parse_os_release(&raw))
}

/// Second field of the `Uid:` line in `/proc/<pid>/status` is the effective uid.
pub fn parse_effective_uid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|l| l.strip_prefix("Uid:"))
        .and_then(|rest| rest.split_whitespace().nth(1))
        .and_then(|v| v.parse().ok())
}

pub fn effective_uid() -> Option<u32> {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|s| parse_effective_uid(&s))
}

pub fn is_elevated() -> bool {
    effective_uid() == Some(0)
}

/// Gate for the mutating subcommands: root first, then platform.
pub fn preflight(os_release: &Path) -> Result<(), OpsError> {
    if !is_elevated() {
        return Err(OpsError::NotElevated);
    }
    let release = read_os_release(os_release)?;
    if !release.is_debian_family() {
        return Err(OpsError::UnsupportedPlatform(release.describe()));
    }
    tracing::debug!(os = %release.describe(), "preflight passed");
    Ok(())
}
