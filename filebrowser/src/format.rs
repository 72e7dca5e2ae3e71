//! Text for the listing columns

use chrono::{DateTime, Local};
use fscore::{Entry, EntryKind};
use std::time::SystemTime;

pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 { format!("{} B", bytes) }
    else if bytes < 1024 * 1024 { format!("{:.1} KB", bytes as f64 / 1024.0) }
    else if bytes < 1024 * 1024 * 1024 { format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0)) }
    else { format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0)) }
}

pub fn format_time(time: SystemTime) -> String {
    let dt: DateTime<Local> = time.into();
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Size column text. Directories show a dash.
pub fn size_column(entry: &Entry) -> String {
    match entry.kind {
        EntryKind::File => format_size(entry.size),
        EntryKind::Directory => "—".into(),
        EntryKind::Other => String::new(),
    }
}

pub fn modified_column(entry: &Entry) -> String {
    entry.modified.map(format_time).unwrap_or_default()
}

pub fn entry_icon(entry: &Entry) -> &'static str {
    match entry.kind {
        EntryKind::Directory => "📁",
        EntryKind::Other => "🔗",
        EntryKind::File => {
            let ext = entry.display.rsplit_once('.').map(|(_, e)| e.to_lowercase()).unwrap_or_default();
            match ext.as_str() {
                "txt" | "md" => "📝",
                "png" | "jpg" | "jpeg" | "bmp" | "gif" => "🖼",
                "mp3" | "wav" | "flac" | "ogg" => "🎵",
                "rs" | "py" | "js" | "c" | "h" | "toml" | "json" => "📜",
                "zip" | "tar" | "gz" => "📦",
                _ => "📄",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind, size: u64) -> Entry {
        Entry { name: name.into(), display: name.to_string(), kind, size, modified: None }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_columns() {
        let dir = entry("d", EntryKind::Directory, 0);
        assert_eq!(size_column(&dir), "—");
        assert_eq!(modified_column(&dir), "");

        let file = entry("a.txt", EntryKind::File, 12);
        assert_eq!(size_column(&file), "12 B");
    }

    #[test]
    fn test_format_time_shape() {
        let s = format_time(SystemTime::now());
        assert_eq!(s.len(), "2024-01-01 00:00".len());
        assert_eq!(&s[4..5], "-");
    }

    #[test]
    fn test_icons() {
        assert_eq!(entry_icon(&entry("d", EntryKind::Directory, 0)), "📁");
        assert_eq!(entry_icon(&entry("NOTE.TXT", EntryKind::File, 0)), "📝");
        assert_eq!(entry_icon(&entry("Makefile", EntryKind::File, 0)), "📄");
    }
}
