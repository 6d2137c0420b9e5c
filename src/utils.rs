use byte_unit::{Byte, UnitType};
use std::path::Path;

pub fn format_size(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Decimal);
    format!("{:.1}", adjusted)
}

/// Path relative to `base` for display, falling back to the full path.
pub fn relative_label(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

/// Keeps the tail of long strings so the interesting part of a path stays visible.
pub fn truncate_left(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars || max_chars < 4 {
        return text.to_string();
    }
    let tail: String = text.chars().skip(count - (max_chars - 3)).collect();
    format!("...{}", tail)
}

pub fn truncate_right(text: &str, max_chars: usize, keep: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(keep).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_small_sizes_in_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(999), "999 B");
    }

    #[test]
    fn test_format_large_size_uses_unit() {
        let text = format_size(5_000_000);
        assert!(text.starts_with("5.0"));
        assert!(text.ends_with('B'));
    }

    #[test]
    fn test_relative_label() {
        let home = PathBuf::from("/home/me");
        assert_eq!(
            relative_label(&home, &home.join("code/app/node_modules")),
            "code/app/node_modules"
        );
        assert_eq!(relative_label(&home, Path::new("/opt/x")), "/opt/x");
    }

    #[test]
    fn test_truncate_left_keeps_tail() {
        assert_eq!(truncate_left("abcdefghij", 7), "...ghij");
        assert_eq!(truncate_left("short", 10), "short");
    }

    #[test]
    fn test_truncate_right_keeps_head() {
        let name = "a-really-long-filesystem-name-here";
        assert_eq!(truncate_right(name, 25, 22), "a-really-long-filesyst...");
        assert_eq!(truncate_right("disk1s1", 25, 22), "disk1s1");
    }
}
