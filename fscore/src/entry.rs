//! Directory listing

use crate::error::{BrowseError, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// What a directory entry is, as seen without following symlinks
/// for the final component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, sockets, devices, or entries whose type could not be read.
    Other,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
            EntryKind::Other => "item",
        }
    }

    pub(crate) fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One row of a listing. Re-derived on every listing; carries no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The name on disk. Commands use this one.
    pub name: OsString,
    /// `name` for the screen, see [`display_name`].
    pub display: String,
    pub kind: EntryKind,
    /// Size in bytes, 0 for anything that is not a regular file.
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// The immediate children of one directory at the time it was read.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub dir: PathBuf,
    pub entries: Vec<Entry>,
    /// Set when a later re-read failed and these entries are the previous ones.
    pub stale: bool,
}

impl Listing {
    /// Display names, in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.display.as_str())
    }

    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&Entry> {
        let name = name.as_ref();
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn position(&self, name: impl AsRef<OsStr>) -> Option<usize> {
        let name = name.as_ref();
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read the immediate children of `dir`. Hidden entries are included.
///
/// Per-entry metadata failures degrade that entry instead of failing the
/// whole listing; only an unreadable directory is an error.
pub fn list_dir(dir: &Path) -> Result<Listing> {
    let rd = fs::read_dir(dir).map_err(|e| BrowseError::io(dir, e))?;

    let mut entries = Vec::new();
    for item in rd {
        let item = item.map_err(|e| BrowseError::io(dir, e))?;
        let name = item.file_name();
        let display = display_name(&name);

        let kind = item
            .file_type()
            .map(EntryKind::from_file_type)
            .unwrap_or(EntryKind::Other);

        // Only stat regular files; directories show no size or date
        let (size, modified) = if kind == EntryKind::File {
            let meta = item.metadata().ok();
            let size = meta.as_ref().map(|m| m.len()).unwrap_or(0);
            let modified = meta.as_ref().and_then(|m| m.modified().ok());
            (size, modified)
        } else {
            (0, None)
        };

        entries.push(Entry { name, display, kind, size, modified });
    }
    sort_entries(&mut entries);

    debug!(dir = %dir.display(), count = entries.len(), "listed directory");
    Ok(Listing { dir: dir.to_path_buf(), entries, stale: false })
}

/// Directories first, then case-insensitive by name.
fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.kind
            .is_dir()
            .cmp(&a.kind.is_dir())
            .then_with(|| a.display.to_lowercase().cmp(&b.display.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Readable form of an on-disk name. Bytes that are not UTF-8 are written
/// as `\xNN`, so two names that differ only there still look different.
pub fn display_name(name: &OsStr) -> String {
    match name.to_str() {
        Some(s) => s.to_string(),
        None => escape_invalid_utf8(name),
    }
}

#[cfg(unix)]
fn escape_invalid_utf8(name: &OsStr) -> String {
    use std::fmt::Write;
    use std::os::unix::ffi::OsStrExt;

    let mut rest = name.as_bytes();
    let mut out = String::with_capacity(rest.len());
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, bad) = rest.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let skip = e.error_len().unwrap_or(bad.len());
                for byte in &bad[..skip] {
                    let _ = write!(out, "\\x{:02x}", byte);
                }
                rest = &bad[skip..];
            }
        }
    }
}

#[cfg(not(unix))]
fn escape_invalid_utf8(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let listing = list_dir(dir.path()).expect("listing failed");
        assert!(listing.is_empty());
        assert!(!listing.stale);
        assert_eq!(listing.dir, dir.path());
    }

    #[test]
    fn test_lists_exact_children_without_recursion() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("inner.txt"), "").unwrap();

        let listing = list_dir(dir.path()).expect("listing failed");
        let names: HashSet<&str> = listing.names().collect();
        assert_eq!(names, HashSet::from(["a.txt", ".hidden", "sub"]));
        assert_eq!(listing.len(), 3);
    }

    #[test]
    fn test_directories_sort_first() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("Alpha.txt"), "").unwrap();
        fs::write(dir.path().join("beta.txt"), "").unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();

        let listing = list_dir(dir.path()).expect("listing failed");
        let names: Vec<&str> = listing.names().collect();
        assert_eq!(names, vec!["zeta", "Alpha.txt", "beta.txt"]);
    }

    #[test]
    fn test_file_metadata() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("five.txt"), "12345").unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();

        let listing = list_dir(dir.path()).expect("listing failed");
        let file = listing.get("five.txt").expect("file missing");
        assert_eq!(file.kind, EntryKind::File);
        assert_eq!(file.size, 5);
        assert!(file.modified.is_some());

        let d = listing.get("d").expect("dir missing");
        assert_eq!(d.kind, EntryKind::Directory);
        assert_eq!(d.size, 0);
        assert_eq!(listing.position("d"), Some(0));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("nope");
        match list_dir(&missing) {
            Err(BrowseError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_stay_distinct() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("failed to create temp dir");
        let first = OsStr::from_bytes(b"x\xff");
        let second = OsStr::from_bytes(b"x\xfe");
        // some filesystems refuse names that are not UTF-8
        if fs::write(dir.path().join(first), "1").is_err() {
            return;
        }
        fs::write(dir.path().join(second), "2").unwrap();

        let listing = list_dir(dir.path()).expect("listing failed");
        let names: HashSet<&str> = listing.names().collect();
        assert_eq!(names, HashSet::from(["x\\xff", "x\\xfe"]));
        assert_eq!(listing.get(first).map(|e| e.size), Some(1));
        assert_eq!(listing.get(second).map(|e| e.display.as_str()), Some("x\\xfe"));
    }

    #[cfg(unix)]
    #[test]
    fn test_display_name_escapes_only_bad_bytes() {
        use std::os::unix::ffi::OsStrExt;

        assert_eq!(display_name(OsStr::new("plain")), "plain");
        assert_eq!(display_name(OsStr::from_bytes(b"caf\xc3\xa9\x80!")), "caf\u{e9}\\x80!");
    }
}
