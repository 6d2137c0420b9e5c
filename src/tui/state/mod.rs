pub mod app_state;
pub mod disk;
pub mod modes;
pub mod results;
pub mod scan;

pub use app_state::App;
pub use disk::{DiskUsageRow, DiskUsageState};
pub use modes::{AppMode, MenuEntry};
pub use results::{GoUp, ResultModel};
pub use scan::{
    AppEvent, CleanProgress, CleanStatus, DeletionOrigin, ListingKind, ListingRequest, ScanStatus,
};
