pub mod catalog;
pub mod locations;
pub mod project;

pub use catalog::default_registry;
pub use locations::{Gather, Location, LocationProbe};
pub use project::{ArtifactMatcher, ProjectArtifactProbe};

use crate::plugin::FileItem;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

/// Directory names never descended into during home-tree walks.
const SKIPPED_DIR_NAMES: &[&str] = &["Library", "System", ".Trash", "Applications"];

const PROJECT_MARKERS: &[&str] = &[
    "package.json",
    "Cargo.toml",
    "pom.xml",
    "build.gradle",
    "Makefile",
    "CMakeLists.txt",
];

/// Sum of all non-directory entries below `path`. Unreadable entries count as zero.
pub fn calculate_dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| !m.is_dir())
        .map(|m| m.len())
        .sum()
}

/// Fresh size of a file or directory, with whether it is a directory.
/// `None` when the path does not exist.
pub fn measure_path(path: &Path) -> Option<(u64, bool)> {
    let meta = fs::symlink_metadata(path).ok()?;
    if meta.is_dir() {
        Some((calculate_dir_size(path), true))
    } else {
        Some((meta.len(), false))
    }
}

/// Immediate children of `dir`, each sized, largest first.
pub fn list_directory(dir: &Path) -> io::Result<Vec<FileItem>> {
    let entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();

    let mut items: Vec<FileItem> = entries
        .par_iter()
        .filter_map(|entry| {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let (size, is_dir) = measure_path(&path)?;
            Some(FileItem::new(path, name, size).with_dir(is_dir))
        })
        .collect();

    sort_by_size(&mut items);
    Ok(items)
}

pub fn sort_by_size(items: &mut [FileItem]) {
    items.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));
}

pub fn should_skip_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| SKIPPED_DIR_NAMES.contains(&n))
        .unwrap_or(false)
}

pub fn is_project_dir(dir: &Path) -> bool {
    PROJECT_MARKERS.iter().any(|m| dir.join(m).exists())
}

pub fn age_in_days(modified: SystemTime) -> u32 {
    let modified: DateTime<Utc> = modified.into();
    Utc::now()
        .signed_duration_since(modified)
        .num_days()
        .max(0) as u32
}

pub fn modified_age_days(path: &Path) -> Option<u32> {
    fs::symlink_metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(age_in_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_dir_size_sums_nested_files() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a"), vec![0u8; 30])?;
        fs::create_dir_all(dir.path().join("sub/deeper"))?;
        fs::write(dir.path().join("sub/b"), vec![0u8; 40])?;
        fs::write(dir.path().join("sub/deeper/c"), vec![0u8; 30])?;
        assert_eq!(calculate_dir_size(dir.path()), 100);
        Ok(())
    }

    #[test]
    fn test_dir_size_of_missing_path_is_zero() {
        assert_eq!(calculate_dir_size(Path::new("/definitely/not/here")), 0);
    }

    #[test]
    fn test_measure_path() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("f");
        fs::write(&file, vec![0u8; 12])?;
        assert_eq!(measure_path(&file), Some((12, false)));
        assert_eq!(measure_path(dir.path()), Some((12, true)));
        assert_eq!(measure_path(&dir.path().join("gone")), None);
        Ok(())
    }

    #[test]
    fn test_listing_is_sorted_by_size() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("file"), vec![0u8; 30])?;
        fs::create_dir(dir.path().join("dir"))?;
        fs::write(dir.path().join("dir/x"), vec![0u8; 50])?;
        fs::write(dir.path().join("dir/y"), vec![0u8; 20])?;

        let items = list_directory(dir.path())?;
        let summary: Vec<_> = items.iter().map(|i| (i.name.as_str(), i.size, i.is_dir)).collect();
        assert_eq!(summary, vec![("dir", 70, true), ("file", 30, false)]);
        Ok(())
    }

    #[test]
    fn test_listing_missing_dir_fails() {
        assert!(list_directory(Path::new("/definitely/not/here")).is_err());
    }

    #[test]
    fn test_skip_rules() {
        assert!(should_skip_dir(Path::new("/home/me/Library")));
        assert!(should_skip_dir(Path::new("/home/me/.Trash")));
        assert!(!should_skip_dir(Path::new("/home/me/code")));
    }

    #[test]
    fn test_project_dir_detection() -> Result<()> {
        let dir = tempdir()?;
        assert!(!is_project_dir(dir.path()));
        fs::write(dir.path().join("Cargo.toml"), "[package]")?;
        assert!(is_project_dir(dir.path()));
        Ok(())
    }

    #[test]
    fn test_age_in_days() {
        let ten_days = SystemTime::now() - Duration::from_secs(10 * 86_400 + 60);
        assert_eq!(age_in_days(ten_days), 10);
        assert_eq!(age_in_days(SystemTime::now() + Duration::from_secs(3600)), 0);
    }

    #[cfg(unix)]
    mod access_errors {
        use super::super::*;
        use crate::plugin::{CategoryProbe, ProbeContext};
        use crate::scanner::project::is_node_modules;
        use anyhow::Result;
        use std::os::unix::fs::{symlink, PermissionsExt};
        use std::path::PathBuf;
        use tempfile::tempdir;

        /// Makes `path` unreadable until dropped.
        struct Locked(PathBuf);

        impl Locked {
            fn new(path: PathBuf) -> Result<Self> {
                fs::set_permissions(&path, fs::Permissions::from_mode(0o000))?;
                Ok(Self(path))
            }

            /// Root ignores permission bits, so the lock has no effect there.
            fn holds(&self) -> bool {
                fs::read_dir(&self.0).is_err()
            }
        }

        impl Drop for Locked {
            fn drop(&mut self) {
                let _ = fs::set_permissions(&self.0, fs::Permissions::from_mode(0o755));
            }
        }

        #[test]
        fn test_broken_symlink_does_not_stop_sizing() -> Result<()> {
            let dir = tempdir()?;
            fs::write(dir.path().join("real"), vec![0u8; 10])?;
            let link = dir.path().join("dangling");
            symlink(dir.path().join("gone"), &link)?;

            let link_len = fs::symlink_metadata(&link)?.len();
            assert_eq!(calculate_dir_size(dir.path()), 10 + link_len);
            assert_eq!(measure_path(&link), Some((link_len, false)));

            let names: Vec<_> = list_directory(dir.path())?.into_iter().map(|i| i.name).collect();
            assert_eq!(names.len(), 2);
            assert!(names.contains(&"dangling".to_string()));
            Ok(())
        }

        #[test]
        fn test_unreadable_subtree_gives_partial_size() -> Result<()> {
            let dir = tempdir()?;
            fs::create_dir_all(dir.path().join("open"))?;
            fs::write(dir.path().join("open/a"), vec![0u8; 20])?;
            fs::create_dir_all(dir.path().join("sealed"))?;
            fs::write(dir.path().join("sealed/b"), vec![0u8; 30])?;
            let lock = Locked::new(dir.path().join("sealed"))?;
            if !lock.holds() {
                return Ok(());
            }

            assert_eq!(calculate_dir_size(dir.path()), 20);

            let listing: Vec<_> = list_directory(dir.path())?
                .into_iter()
                .map(|i| (i.name, i.size, i.is_dir))
                .collect();
            assert_eq!(
                listing,
                vec![("open".to_string(), 20, true), ("sealed".to_string(), 0, true)]
            );
            assert!(list_directory(&dir.path().join("sealed")).is_err());
            Ok(())
        }

        #[test]
        fn test_location_scan_skips_unreadable_entries() -> Result<()> {
            let dir = tempdir()?;
            fs::create_dir_all(dir.path().join("com.app"))?;
            fs::write(dir.path().join("com.app/blob"), vec![0u8; 64])?;
            fs::create_dir_all(dir.path().join("com.locked"))?;
            fs::write(dir.path().join("com.locked/blob"), vec![0u8; 64])?;
            symlink(dir.path().join("nowhere"), dir.path().join("com.dangling"))?;
            let lock = Locked::new(dir.path().join("com.locked"))?;
            if !lock.holds() {
                return Ok(());
            }

            let category = LocationProbe::new("Cache Files")
                .location(Location::children(dir.path().to_path_buf()))
                .location(Location::whole(dir.path().join("com.locked"), "Locked"));
            let result = category.scan(&ProbeContext::default());
            assert!(result.items().iter().any(|i| i.name == "com.app" && i.size == 64));
            assert!(result.items().iter().all(|i| !i.name.starts_with("com.locked")));
            assert!(result.items().iter().all(|i| i.name != "Locked"));
            Ok(())
        }

        #[test]
        fn test_artifact_walk_survives_unreadable_dirs() -> Result<()> {
            let home = tempdir()?;
            let nm = home.path().join("code/web/node_modules");
            fs::create_dir_all(&nm)?;
            fs::write(nm.join("index.js"), vec![0u8; 40])?;
            fs::create_dir_all(home.path().join("private/app/node_modules"))?;
            fs::write(home.path().join("private/app/node_modules/x.js"), vec![0u8; 15])?;
            let lock = Locked::new(home.path().join("private"))?;
            if !lock.holds() {
                return Ok(());
            }

            let category = ProjectArtifactProbe::new("Node Modules", home.path().to_path_buf(), "📦", is_node_modules);
            let result = category.scan(&ProbeContext::default());
            assert_eq!(result.items().len(), 1);
            assert_eq!(result.items()[0].path, nm);
            assert_eq!(result.total(), 40);
            Ok(())
        }
    }
}
