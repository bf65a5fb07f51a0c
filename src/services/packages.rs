use crate::domain::errors::OpsError;
use crate::services::process::{CommandSpec, Runner};

/// Port over the host's system package manager.
pub trait PackageManager {
    fn refresh_index(&self) -> Result<(), OpsError>;
    fn is_installed(&self, package: &str) -> Result<bool, OpsError>;
    fn install(&self, package: &str) -> Result<(), OpsError>;
}

/// `apt-get` for changes, `dpkg-query` for lookups.
pub struct Apt<'a> {
    runner: &'a dyn Runner,
}

impl<'a> Apt<'a> {
    pub fn new(runner: &'a dyn Runner) -> Self {
        Self { runner }
    }

    fn apt_get(&self) -> CommandSpec {
        CommandSpec::new("apt-get").env("DEBIAN_FRONTEND", "noninteractive")
    }
}

impl PackageManager for Apt<'_> {
    fn refresh_index(&self) -> Result<(), OpsError> {
        self.runner.run(&self.apt_get().arg("update"))
    }

    fn is_installed(&self, package: &str) -> Result<bool, OpsError> {
        let out = self.runner.capture(
            &CommandSpec::new("dpkg-query")
                .args(["-W", "-f=${Status}"])
                .arg(package),
        )?;
        Ok(out.success && dpkg_status_installed(&out.stdout))
    }

    fn install(&self, package: &str) -> Result<(), OpsError> {
        self.runner
            .run(&self.apt_get().args(["install", "-y"]).arg(package))
    }
}

/// `dpkg-query` prints `<want> <error> <state>`, e.g. `install ok installed`
/// or `deinstall ok config-files`; only the state word matters.
pub fn dpkg_status_installed(status: &str) -> bool {
    status.split_whitespace().nth(2) == Some("installed")
}

/// Check-then-install every package; returns the names that were installed.
pub fn ensure_packages(
    pm: &dyn PackageManager,
    packages: &[String],
) -> Result<Vec<String>, OpsError> {
    let mut installed = Vec::new();
    for package in packages {
        if pm.is_installed(package)? {
            tracing::debug!(package = %package, "already installed");
            continue;
        }
        tracing::info!(package = %package, "installing");
        pm.install(package)?;
        installed.push(package.clone());
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::{dpkg_status_installed, ensure_packages};
    use crate::services::testing::FakePackages;

    #[test]
    fn dpkg_status_parsing() {
        assert!(dpkg_status_installed("install ok installed"));
        assert!(dpkg_status_installed("hold ok installed"));
        assert!(!dpkg_status_installed("deinstall ok config-files"));
        assert!(!dpkg_status_installed("unknown ok not-installed"));
        assert!(!dpkg_status_installed(""));
    }

    #[test]
    fn only_missing_packages_are_installed() {
        let pm = FakePackages::with_installed(&["git", "curl"]);
        let wanted = vec!["git".to_string(), "libssl-dev".to_string(), "curl".to_string()];
        let installed = ensure_packages(&pm, &wanted).expect("ensure packages");
        assert_eq!(installed, vec!["libssl-dev".to_string()]);
        assert_eq!(pm.install_calls(), vec!["libssl-dev".to_string()]);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let pm = FakePackages::with_installed(&[]);
        let wanted = vec!["git".to_string()];
        ensure_packages(&pm, &wanted).expect("first pass");
        let again = ensure_packages(&pm, &wanted).expect("second pass");
        assert!(again.is_empty());
        assert_eq!(pm.install_calls().len(), 1);
    }
}
