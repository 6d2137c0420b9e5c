use crate::plugin::ScanProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Menu,
    Scanning,
    Results,
    Detail,
    Cleaning,
    DiskUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    FullScan,
    DevScan,
    QuickClean,
    DiskUsage,
    Exit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 5] = [
        MenuEntry::FullScan,
        MenuEntry::DevScan,
        MenuEntry::QuickClean,
        MenuEntry::DiskUsage,
        MenuEntry::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::FullScan => "🔍 Full System Scan",
            MenuEntry::DevScan => "💻 Dev Scan",
            MenuEntry::QuickClean => "⚡ Quick Clean",
            MenuEntry::DiskUsage => "📊 Disk Usage Report",
            MenuEntry::Exit => "🚪 Exit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuEntry::FullScan => "Caches, logs, trash, old downloads, Xcode and Homebrew",
            MenuEntry::DevScan => "Walks your home folder for node_modules, venvs, target dirs and tool caches",
            MenuEntry::QuickClean => "Caches, logs and trash only (a lighter Full System Scan)",
            MenuEntry::DiskUsage => "Mounted filesystems and free space",
            MenuEntry::Exit => "Leave homesweep",
        }
    }

    pub fn profile(self) -> Option<ScanProfile> {
        match self {
            MenuEntry::FullScan => Some(ScanProfile::Broad),
            MenuEntry::DevScan => Some(ScanProfile::Deep),
            MenuEntry::QuickClean => Some(ScanProfile::Quick),
            MenuEntry::DiskUsage | MenuEntry::Exit => None,
        }
    }
}
