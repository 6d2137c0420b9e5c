use super::{calculate_dir_size, is_project_dir, should_skip_dir, LocationProbe};
use crate::plugin::{CategoryProbe, FileItem, ProbeContext, ScanResult};
use crate::utils::relative_label;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Decides whether a directory named `name` at `path` is an artifact.
pub type ArtifactMatcher = fn(path: &Path, name: &str) -> bool;

/// Walks a whole tree looking for ecosystem artifact directories by name.
///
/// Matched directories are reported as one item and never descended into.
/// Well-known fixed caches of the same ecosystem can ride along via `fixed`.
#[derive(Clone)]
pub struct ProjectArtifactProbe {
    category: String,
    root: PathBuf,
    glyph: &'static str,
    matcher: ArtifactMatcher,
    show_dir_name: bool,
    fixed: LocationProbe,
}

impl ProjectArtifactProbe {
    pub fn new(category: &str, root: PathBuf, glyph: &'static str, matcher: ArtifactMatcher) -> Self {
        Self {
            category: category.to_string(),
            root,
            glyph,
            matcher,
            show_dir_name: false,
            fixed: LocationProbe::new(category),
        }
    }

    /// Label items as `<glyph> <project> (<dir name>)` instead of `<glyph> <project>`.
    pub fn show_dir_name(mut self) -> Self {
        self.show_dir_name = true;
        self
    }

    pub fn with_fixed(mut self, fixed: LocationProbe) -> Self {
        self.fixed = fixed;
        self
    }

    fn label(&self, path: &Path, name: &str) -> String {
        let project = path.parent().unwrap_or(path);
        let rel = relative_label(&self.root, project);
        if self.show_dir_name {
            format!("{} {} ({})", self.glyph, rel, name)
        } else {
            format!("{} {}", self.glyph, rel)
        }
    }

    fn walk(&self, ctx: &ProbeContext, result: &mut ScanResult) {
        let mut it = WalkDir::new(&self.root).into_iter();
        loop {
            let entry = match it.next() {
                None => break,
                Some(Err(_)) => continue,
                Some(Ok(entry)) => entry,
            };
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if should_skip_dir(path) || ctx.is_excluded(path) {
                it.skip_current_dir();
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !(self.matcher)(path, &name) {
                continue;
            }

            let size = calculate_dir_size(path);
            if size > 0 {
                let label = self.label(path, &name);
                ctx.progress
                    .report(&self.category, &path.display().to_string(), size);
                result.push(FileItem::new(path.to_path_buf(), label, size).with_dir(true));
            }
            it.skip_current_dir();
        }
    }
}

impl CategoryProbe for ProjectArtifactProbe {
    fn category(&self) -> &str {
        &self.category
    }

    fn scan(&self, ctx: &ProbeContext) -> ScanResult {
        let mut result = ScanResult::new(&self.category);
        for location in self.fixed.locations() {
            self.fixed.gather_into(location, ctx, &mut result);
        }
        self.walk(ctx, &mut result);
        result
    }
}

const PYTHON_DIRS: &[&str] = &[
    "__pycache__",
    "venv",
    ".venv",
    "env",
    ".env",
    "virtualenv",
    ".pytest_cache",
    ".tox",
    ".mypy_cache",
];

const BUILD_DIRS: &[&str] = &[
    "dist",
    "build",
    "out",
    ".next",
    ".nuxt",
    ".output",
    "coverage",
    ".nyc_output",
    ".parcel-cache",
    "tmp",
    "temp",
];

pub fn is_node_modules(_path: &Path, name: &str) -> bool {
    name == "node_modules"
}

pub fn is_python_artifact(_path: &Path, name: &str) -> bool {
    PYTHON_DIRS.contains(&name)
}

pub fn is_cargo_target(path: &Path, name: &str) -> bool {
    name == "target"
        && path
            .parent()
            .map(|p| p.join("Cargo.toml").exists())
            .unwrap_or(false)
}

pub fn is_build_output(path: &Path, name: &str) -> bool {
    BUILD_DIRS.contains(&name) && path.parent().map(is_project_dir).unwrap_or(false)
}
