pub mod registry;
pub mod traits;

pub use registry::{run_scan, ProbeRegistry, ScanAccumulator, ScanProfile, Snapshot};
pub use traits::{
    prune_removed, CategoryProbe, FileItem, ProbeContext, ProgressSink, ScanProgress, ScanResult,
};
