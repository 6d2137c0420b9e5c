use crate::error::{SweepError, SweepResult};
use crate::tui::state::{AppEvent, DiskUsageRow};
use crate::utils::truncate_right;
use std::process::Command;
use std::sync::mpsc::Sender;
use std::thread;

const FILESYSTEM_MAX_CHARS: usize = 25;
const FILESYSTEM_KEEP_CHARS: usize = 22;

/// Runs `df` in the background; the rows arrive as `AppEvent::DiskUsage`.
pub fn start_disk_usage(events: Sender<AppEvent>) {
    thread::spawn(move || {
        let result = run_df().map_err(|e| {
            tracing::warn!("disk usage report failed: {e}");
            e.to_string()
        });
        let _ = events.send(AppEvent::DiskUsage(result));
    });
}

pub fn run_df() -> SweepResult<Vec<DiskUsageRow>> {
    let output = Command::new("df")
        .args(["-h", "-P"])
        .output()
        .map_err(|e| SweepError::DiskUsageCommand(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(SweepError::DiskUsageCommand(if stderr.is_empty() {
            format!("df exited with {}", output.status)
        } else {
            stderr
        }));
    }

    parse_df(&String::from_utf8_lossy(&output.stdout))
}

/// Parses `df -h` output, skipping the header line.
///
/// Columns are located around the first `NN%` token so that filesystem names
/// and mount points containing spaces survive. Inode columns printed by the
/// BSD variant without `-P` are skipped.
pub fn parse_df(output: &str) -> SweepResult<Vec<DiskUsageRow>> {
    let rows: Vec<DiskUsageRow> = output.lines().skip(1).filter_map(parse_df_line).collect();
    if rows.is_empty() {
        return Err(SweepError::DiskUsageEmpty);
    }
    Ok(rows)
}

fn parse_df_line(line: &str) -> Option<DiskUsageRow> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let cap = fields.iter().position(|f| is_percent(f))?;
    if cap < 4 {
        return None;
    }

    let mut mount_start = cap + 1;
    if fields.len() > cap + 4 && is_percent(fields[cap + 3]) {
        mount_start = cap + 4;
    }
    let mount = fields.get(mount_start..)?.join(" ");
    if mount.is_empty() {
        return None;
    }

    let filesystem = fields[..cap - 3].join(" ");
    Some(DiskUsageRow {
        filesystem: truncate_right(&filesystem, FILESYSTEM_MAX_CHARS, FILESYSTEM_KEEP_CHARS),
        size: fields[cap - 3].to_string(),
        used: fields[cap - 2].to_string(),
        avail: fields[cap - 1].to_string(),
        capacity: fields[cap].to_string(),
        mount,
    })
}

fn is_percent(field: &str) -> bool {
    field
        .strip_suffix('%')
        .map(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}
