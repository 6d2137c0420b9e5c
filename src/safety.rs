use std::path::{Path, PathBuf};

/// Refuses deletion of paths whose removal would damage the system or the account.
pub struct SafetyChecker {
    home: Option<PathBuf>,
    protected_paths: Vec<&'static str>,
}

impl SafetyChecker {
    pub fn new(home: Option<PathBuf>) -> Self {
        Self {
            home,
            protected_paths: vec![
                "/System",
                "/usr",
                "/bin",
                "/sbin",
                "/etc",
                "/var/db",
                "/private/var/db",
            ],
        }
    }

    pub fn is_protected(&self, path: &Path) -> bool {
        if path.parent().is_none() {
            return true;
        }
        if self.home.as_deref() == Some(path) {
            return true;
        }
        self.protected_paths
            .iter()
            .any(|protected| path.starts_with(protected))
    }
}

impl Default for SafetyChecker {
    fn default() -> Self {
        Self::new(dirs::home_dir())
    }
}
