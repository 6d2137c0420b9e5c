use super::{calculate_dir_size, measure_path, modified_age_days};
use crate::plugin::{CategoryProbe, FileItem, ProbeContext, ScanResult};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// How findings are collected from one location.
#[derive(Clone)]
pub enum Gather {
    /// Every immediate child is one item, named `<prefix><child name>`.
    Children { prefix: String, dirs_only: bool },
    /// The location itself is one item.
    Whole { label: String },
    /// Every regular file below whose name satisfies the matcher.
    Files { matcher: fn(&str) -> bool },
}

#[derive(Clone)]
pub struct Location {
    pub path: PathBuf,
    pub gather: Gather,
}

impl Location {
    pub fn children(path: PathBuf) -> Self {
        Self::prefixed_children(path, "")
    }

    pub fn prefixed_children(path: PathBuf, prefix: &str) -> Self {
        Self {
            path,
            gather: Gather::Children {
                prefix: prefix.to_string(),
                dirs_only: false,
            },
        }
    }

    pub fn child_dirs(path: PathBuf, prefix: &str) -> Self {
        Self {
            path,
            gather: Gather::Children {
                prefix: prefix.to_string(),
                dirs_only: true,
            },
        }
    }

    pub fn whole(path: PathBuf, label: &str) -> Self {
        Self {
            path,
            gather: Gather::Whole {
                label: label.to_string(),
            },
        }
    }

    pub fn files(path: PathBuf, matcher: fn(&str) -> bool) -> Self {
        Self {
            path,
            gather: Gather::Files { matcher },
        }
    }
}

/// Probe over a fixed list of well-known locations.
#[derive(Clone)]
pub struct LocationProbe {
    category: String,
    locations: Vec<Location>,
    min_size: u64,
    keep_empty: bool,
    older_than_days: Option<u32>,
}

impl LocationProbe {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            locations: Vec::new(),
            min_size: 1,
            keep_empty: false,
            older_than_days: None,
        }
    }

    pub fn location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Items smaller than this are not reported.
    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = bytes.max(1);
        self
    }

    /// Report zero-byte entries too.
    pub fn keep_empty(mut self) -> Self {
        self.keep_empty = true;
        self
    }

    /// Only entries last modified more than `days` ago, tagged with their age.
    pub fn older_than(mut self, days: u32) -> Self {
        self.older_than_days = Some(days);
        self
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Collects one location's findings into `result`.
    pub(crate) fn gather_into(&self, location: &Location, ctx: &ProbeContext, result: &mut ScanResult) {
        if !location.path.exists() || ctx.is_excluded(&location.path) {
            return;
        }

        match &location.gather {
            Gather::Children { prefix, dirs_only } => {
                let Ok(entries) = fs::read_dir(&location.path) else {
                    return;
                };
                for entry in entries.filter_map(|e| e.ok()) {
                    let path = entry.path();
                    if ctx.is_excluded(&path) {
                        continue;
                    }
                    let Some((size, is_dir)) = measure_path(&path) else {
                        continue;
                    };
                    if *dirs_only && !is_dir {
                        continue;
                    }
                    let name = format!("{}{}", prefix, entry.file_name().to_string_lossy());
                    self.offer(result, ctx, path, name, size, is_dir);
                }
            }
            Gather::Whole { label } => {
                let size = calculate_dir_size(&location.path);
                let is_dir = location.path.is_dir();
                self.offer(result, ctx, location.path.clone(), label.clone(), size, is_dir);
            }
            Gather::Files { matcher } => {
                for entry in WalkDir::new(&location.path)
                    .into_iter()
                    .filter_entry(|e| !ctx.is_excluded(e.path()))
                    .filter_map(|e| e.ok())
                {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let name = entry.file_name().to_string_lossy().to_string();
                    if !matcher(&name) {
                        continue;
                    }
                    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                    self.offer(result, ctx, entry.path().to_path_buf(), name, size, false);
                }
            }
        }
    }

    fn offer(
        &self,
        result: &mut ScanResult,
        ctx: &ProbeContext,
        path: PathBuf,
        name: String,
        size: u64,
        is_dir: bool,
    ) {
        if size < self.min_size && !(self.keep_empty && size == 0) {
            return;
        }

        let mut item = FileItem::new(path, name, size).with_dir(is_dir);
        if let Some(days) = self.older_than_days {
            match modified_age_days(&item.path) {
                Some(age) if age > days => item = item.with_age_days(age),
                _ => return,
            }
        }

        ctx.progress
            .report(&self.category, &item.path.display().to_string(), item.size);
        result.push(item);
    }
}

impl CategoryProbe for LocationProbe {
    fn category(&self) -> &str {
        &self.category
    }

    fn scan(&self, ctx: &ProbeContext) -> ScanResult {
        let mut result = ScanResult::new(&self.category);
        for location in &self.locations {
            self.gather_into(location, ctx, &mut result);
        }
        result
    }
}

pub fn is_log_file(name: &str) -> bool {
    name.contains(".log")
}
