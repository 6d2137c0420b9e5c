use super::traits::{CategoryProbe, ProbeContext, ScanResult};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanProfile {
    /// Caches, logs and trash only.
    Quick,
    /// Fixed, well-known cache locations.
    Broad,
    /// Walks the whole home tree for ecosystem artifacts.
    Deep,
}

impl ScanProfile {
    pub fn label(&self) -> &'static str {
        match self {
            ScanProfile::Quick => "Quick Clean",
            ScanProfile::Broad => "Full System Scan",
            ScanProfile::Deep => "Dev Scan",
        }
    }
}

struct RegisteredProbe {
    probe: Arc<dyn CategoryProbe>,
    profiles: &'static [ScanProfile],
}

/// Ordered, declarative list of probes and the profiles they belong to.
#[derive(Default)]
pub struct ProbeRegistry {
    entries: Vec<RegisteredProbe>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, probe: impl CategoryProbe + 'static, profiles: &'static [ScanProfile]) {
        self.entries.push(RegisteredProbe {
            probe: Arc::new(probe),
            profiles,
        });
    }

    pub fn probes_for(&self, profile: ScanProfile) -> Vec<Arc<dyn CategoryProbe>> {
        self.entries
            .iter()
            .filter(|e| e.profiles.contains(&profile))
            .map(|e| Arc::clone(&e.probe))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aggregated, non-empty category results of one scan run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    categories: BTreeMap<String, ScanResult>,
    grand_total: u64,
}

impl Snapshot {
    /// Inserts a result under its category name. Empty totals are dropped.
    pub fn insert(&mut self, result: ScanResult) -> bool {
        if result.total() == 0 {
            return false;
        }
        self.categories.insert(result.category.clone(), result);
        self.recompute_grand_total();
        true
    }

    pub fn get(&self, category: &str) -> Option<&ScanResult> {
        self.categories.get(category)
    }

    /// Categories in display order (alphabetical).
    pub fn categories(&self) -> impl Iterator<Item = &ScanResult> {
        self.categories.values()
    }

    pub fn names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    pub fn item_count(&self) -> usize {
        self.categories.values().map(|c| c.items().len()).sum()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Applies successful deletions to every category, since probes may
    /// overlap. Returns the bytes removed from the grand total.
    pub fn apply_removals(&mut self, removed: &[(PathBuf, u64)]) -> u64 {
        let before = self.grand_total;
        for result in self.categories.values_mut() {
            result.apply_removals(removed);
        }
        self.recompute_grand_total();
        before.saturating_sub(self.grand_total)
    }

    /// Drops categories left without items; returns their names.
    pub fn remove_empty(&mut self) -> Vec<String> {
        let empty: Vec<String> = self
            .categories
            .iter()
            .filter(|(_, c)| c.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        for name in &empty {
            self.categories.remove(name);
        }
        self.recompute_grand_total();
        empty
    }

    fn recompute_grand_total(&mut self) {
        self.grand_total = self.categories.values().map(|c| c.total()).sum();
    }
}

/// Lock-guarded snapshot shared by the probe workers of one scan.
#[derive(Default)]
pub struct ScanAccumulator {
    inner: Mutex<Snapshot>,
}

impl ScanAccumulator {
    pub fn record(&self, result: ScanResult) {
        let mut snapshot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let category = result.category.clone();
        if !snapshot.insert(result) {
            tracing::debug!(%category, "probe found nothing");
        }
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs every probe on its own thread and waits for all of them.
pub fn run_scan(probes: &[Arc<dyn CategoryProbe>], ctx: &ProbeContext) -> Snapshot {
    let accumulator = ScanAccumulator::default();
    let started = Instant::now();

    thread::scope(|scope| {
        let handles: Vec<_> = probes
            .iter()
            .map(|probe| {
                let accumulator = &accumulator;
                scope.spawn(move || {
                    let probe_started = Instant::now();
                    let result = probe.scan(ctx);
                    tracing::info!(
                        category = probe.category(),
                        items = result.items().len(),
                        bytes = result.total(),
                        elapsed_ms = probe_started.elapsed().as_millis() as u64,
                        "probe finished"
                    );
                    accumulator.record(result);
                })
            })
            .collect();

        for (handle, probe) in handles.into_iter().zip(probes) {
            if handle.join().is_err() {
                tracing::error!(category = probe.category(), "probe panicked");
            }
        }
    });

    let snapshot = accumulator.into_snapshot();
    tracing::info!(
        categories = snapshot.len(),
        bytes = snapshot.grand_total(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scan complete"
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::traits::FileItem;
    use std::time::Duration;

    struct FixedProbe {
        category: &'static str,
        sizes: Vec<u64>,
        delay: Duration,
    }

    impl FixedProbe {
        fn new(category: &'static str, sizes: &[u64]) -> Self {
            Self {
                category,
                sizes: sizes.to_vec(),
                delay: Duration::ZERO,
            }
        }

        fn slow(mut self, millis: u64) -> Self {
            self.delay = Duration::from_millis(millis);
            self
        }
    }

    impl CategoryProbe for FixedProbe {
        fn category(&self) -> &str {
            self.category
        }

        fn scan(&self, _ctx: &ProbeContext) -> ScanResult {
            thread::sleep(self.delay);
            let mut result = ScanResult::new(self.category);
            for (i, size) in self.sizes.iter().enumerate() {
                let path = PathBuf::from(format!("/{}/{}", self.category, i));
                result.push(FileItem::new(path, format!("{i}"), *size));
            }
            result
        }
    }

    struct PanickingProbe;

    impl CategoryProbe for PanickingProbe {
        fn category(&self) -> &str {
            "Broken"
        }

        fn scan(&self, _ctx: &ProbeContext) -> ScanResult {
            panic!("probe blew up");
        }
    }

    #[test]
    fn test_zero_total_categories_are_dropped() {
        let probes: Vec<Arc<dyn CategoryProbe>> = vec![
            Arc::new(FixedProbe::new("A", &[100])),
            Arc::new(FixedProbe::new("B", &[])),
            Arc::new(FixedProbe::new("C", &[50])),
        ];
        let snapshot = run_scan(&probes, &ProbeContext::default());
        assert_eq!(snapshot.names(), vec!["A".to_string(), "C".to_string()]);
        assert_eq!(snapshot.grand_total(), 150);
    }

    #[test]
    fn test_result_independent_of_finish_order() {
        for (slow_empty, slow_full) in [(0, 30), (30, 0)] {
            let probes: Vec<Arc<dyn CategoryProbe>> = vec![
                Arc::new(FixedProbe::new("Empty", &[]).slow(slow_empty)),
                Arc::new(FixedProbe::new("Full", &[100, 150, 250]).slow(slow_full)),
            ];
            let snapshot = run_scan(&probes, &ProbeContext::default());
            assert_eq!(snapshot.len(), 1);
            assert_eq!(snapshot.get("Full").map(|r| r.total()), Some(500));
        }
    }

    #[test]
    fn test_totals_are_consistent() {
        let probes: Vec<Arc<dyn CategoryProbe>> = vec![
            Arc::new(FixedProbe::new("X", &[1, 2, 3])),
            Arc::new(FixedProbe::new("Y", &[10, 20])),
        ];
        let snapshot = run_scan(&probes, &ProbeContext::default());
        let sum: u64 = snapshot.categories().map(|c| c.total()).sum();
        assert_eq!(snapshot.grand_total(), sum);
        for category in snapshot.categories() {
            let items: u64 = category.items().iter().map(|i| i.size).sum();
            assert_eq!(category.total(), items);
        }
    }

    #[test]
    fn test_panicking_probe_does_not_abort_scan() {
        let probes: Vec<Arc<dyn CategoryProbe>> = vec![
            Arc::new(PanickingProbe),
            Arc::new(FixedProbe::new("Fine", &[42])),
        ];
        let snapshot = run_scan(&probes, &ProbeContext::default());
        assert_eq!(snapshot.grand_total(), 42);
    }

    #[test]
    fn test_registry_filters_by_profile() {
        let mut registry = ProbeRegistry::new();
        registry.register(FixedProbe::new("Cache Files", &[1]), &[ScanProfile::Quick, ScanProfile::Broad]);
        registry.register(FixedProbe::new("Node Modules", &[1]), &[ScanProfile::Deep]);

        let quick: Vec<_> = registry
            .probes_for(ScanProfile::Quick)
            .iter()
            .map(|p| p.category().to_string())
            .collect();
        assert_eq!(quick, vec!["Cache Files"]);
        assert_eq!(registry.probes_for(ScanProfile::Deep).len(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_snapshot_removals_keep_grand_total() {
        let mut snapshot = Snapshot::default();
        snapshot.insert(ScanResult::with_items(
            "A",
            vec![FileItem::new(PathBuf::from("/a/1"), "1", 10)],
        ));
        snapshot.insert(ScanResult::with_items(
            "B",
            vec![FileItem::new(PathBuf::from("/b/1"), "1", 5)],
        ));
        assert_eq!(snapshot.apply_removals(&[(PathBuf::from("/a/1"), 10)]), 10);
        assert_eq!(snapshot.grand_total(), 5);
        assert_eq!(snapshot.remove_empty(), vec!["A".to_string()]);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_removal_reaches_overlapping_categories() {
        let mut snapshot = Snapshot::default();
        snapshot.insert(ScanResult::with_items(
            "Cache Files",
            vec![
                FileItem::new(PathBuf::from("/c/Homebrew"), "Homebrew", 1000).with_dir(true),
                FileItem::new(PathBuf::from("/c/pip"), "pip", 30).with_dir(true),
            ],
        ));
        snapshot.insert(ScanResult::with_items(
            "Homebrew Cache",
            vec![FileItem::new(PathBuf::from("/c/Homebrew/downloads"), "downloads", 1000).with_dir(true)],
        ));
        assert_eq!(snapshot.grand_total(), 2030);

        snapshot.apply_removals(&[(PathBuf::from("/c/Homebrew"), 1000)]);
        assert_eq!(snapshot.get("Homebrew Cache").map(|r| r.total()), Some(0));
        assert_eq!(snapshot.grand_total(), 30);
        assert_eq!(snapshot.remove_empty(), vec!["Homebrew Cache".to_string()]);
        assert_eq!(snapshot.names(), vec!["Cache Files".to_string()]);
    }

    #[test]
    fn test_nested_removal_shrinks_other_category_ancestor() {
        let mut snapshot = Snapshot::default();
        snapshot.insert(ScanResult::with_items(
            "Cache Files",
            vec![FileItem::new(PathBuf::from("/c/Homebrew"), "Homebrew", 1000).with_dir(true)],
        ));
        snapshot.insert(ScanResult::with_items(
            "Homebrew Cache",
            vec![
                FileItem::new(PathBuf::from("/c/Homebrew/downloads"), "downloads", 800).with_dir(true),
                FileItem::new(PathBuf::from("/c/Homebrew/api"), "api", 200).with_dir(true),
            ],
        ));

        snapshot.apply_removals(&[(PathBuf::from("/c/Homebrew/downloads"), 800)]);
        assert_eq!(snapshot.get("Cache Files").map(|r| r.total()), Some(200));
        assert_eq!(snapshot.get("Homebrew Cache").map(|r| r.total()), Some(200));
        assert_eq!(snapshot.grand_total(), 400);
    }
}
