/// One mounted filesystem as reported by `df`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskUsageRow {
    pub filesystem: String,
    pub size: String,
    pub used: String,
    pub avail: String,
    pub capacity: String,
    pub mount: String,
}

#[derive(Debug, Default)]
pub struct DiskUsageState {
    pub rows: Vec<DiskUsageRow>,
    pub selected: usize,
    pub loading: bool,
}
