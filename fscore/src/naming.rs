//! Entry name validation and the new-file naming policy

use crate::entry::display_name;
use crate::error::{BrowseError, Result};
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Extension given to new files under [`FileNaming::AppendTxt`].
pub const DEFAULT_EXTENSION: &str = "txt";

/// How a typed name becomes the name of a newly created file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileNaming {
    /// Append `.txt` when the typed name has no extension.
    #[default]
    AppendTxt,
    /// Use the name exactly as typed.
    Verbatim,
}

impl FileNaming {
    /// Validate `typed` and apply the policy.
    pub fn file_name(self, typed: &str) -> Result<String> {
        let name = validate_name(typed)?;
        match self {
            FileNaming::Verbatim => Ok(name.to_string()),
            FileNaming::AppendTxt => {
                if Path::new(name).extension().is_some() {
                    Ok(name.to_string())
                } else {
                    Ok(format!("{}.{}", name, DEFAULT_EXTENSION))
                }
            }
        }
    }
}

/// Trim a typed `name` and make sure it is a single path component.
pub fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    let invalid = trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains(std::path::MAIN_SEPARATOR)
        || trimmed.contains('\0');
    if invalid {
        return Err(BrowseError::InvalidName { name: name.to_string() });
    }
    Ok(trimmed)
}

/// Check a name picked from a listing. It is used exactly as given, so
/// `"a "` and `"a"` stay different entries.
pub fn validate_entry_name(name: &OsStr) -> Result<&OsStr> {
    let mut parts = Path::new(name).components();
    match (parts.next(), parts.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(name),
        _ => Err(BrowseError::InvalidName { name: display_name(name) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_txt() {
        let p = FileNaming::AppendTxt;
        assert_eq!(p.file_name("note").unwrap(), "note.txt");
        assert_eq!(p.file_name("  note ").unwrap(), "note.txt");
        assert_eq!(p.file_name("readme.md").unwrap(), "readme.md");
        // a leading dot is a hidden name, not an extension
        assert_eq!(p.file_name(".env").unwrap(), ".env.txt");
    }

    #[test]
    fn test_verbatim() {
        let p = FileNaming::Verbatim;
        assert_eq!(p.file_name("note").unwrap(), "note");
        assert_eq!(p.file_name("Makefile").unwrap(), "Makefile");
    }

    #[test]
    fn test_rejects_paths_and_empties() {
        for bad in ["", "   ", ".", "..", "a/b", "../x"] {
            assert!(
                matches!(validate_name(bad), Err(BrowseError::InvalidName { .. })),
                "{:?} should be rejected",
                bad
            );
        }
        assert_eq!(validate_name("ok name").unwrap(), "ok name");
    }

    #[test]
    fn test_entry_names_are_not_trimmed() {
        assert_eq!(validate_entry_name(OsStr::new("a ")).unwrap(), OsStr::new("a "));
        assert_eq!(validate_entry_name(OsStr::new(" .env")).unwrap(), OsStr::new(" .env"));
        for bad in ["", ".", "..", "a/b", "a/", "./a"] {
            assert!(
                matches!(validate_entry_name(OsStr::new(bad)), Err(BrowseError::InvalidName { .. })),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
