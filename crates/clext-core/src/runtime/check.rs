//! Detection of git and the package manager binaries

use crate::config::PackageManager;
use std::process::Command;

/// Probe result for an external binary
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str) -> RuntimeInfo {
    let output = Command::new(name).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if git is available. Git is a hard prerequisite: templates are
/// fetched via sparse checkout.
pub fn check_git() -> RuntimeInfo {
    probe("git")
}

/// Check if the selected package manager is available. Advisory only: the
/// install step fails on its own if the binary is really absent.
pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    probe(package_manager.command())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_missing_binary() {
        let info = probe("definitely-not-a-real-binary-name");
        assert!(!info.available);
        assert!(info.version.is_none());
    }

    #[test]
    fn test_probe_reports_name() {
        let info = check_package_manager(PackageManager::Pnpm);
        assert_eq!(info.name, "pnpm");
    }
}
