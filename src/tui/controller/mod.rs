pub mod common;
pub mod detail;
pub mod menu;
pub mod results;

pub use common::{handle_disk_usage_key, DiskUsageContext};
pub use detail::{handle_detail_key, DetailContext};
pub use menu::{handle_menu_key, MenuContext};
pub use results::{handle_results_key, ResultsContext};

use crate::plugin::{FileItem, ScanProfile};
use std::path::PathBuf;

/// Work a key press asks for that runs outside the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartScan(ScanProfile),
    ShowDiskUsage,
    Explore(PathBuf),
    Relist(PathBuf),
    DeleteOne(FileItem),
    DeleteMarked,
    CleanCategory(String),
    Quit,
}
