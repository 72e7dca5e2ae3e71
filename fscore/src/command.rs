//! Command values produced by the presentation layer and the outcomes
//! the controller hands back.

use crate::entry::EntryKind;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// The entry the user picked, if any, by its name on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<OsString>);

impl Selection {
    pub fn none() -> Self {
        Selection(None)
    }

    pub fn of(name: impl Into<OsString>) -> Self {
        Selection(Some(name.into()))
    }

    pub fn name(&self) -> Option<&OsStr> {
        self.0.as_deref()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<OsString>> for Selection {
    fn from(name: Option<OsString>) -> Self {
        Selection(name)
    }
}

/// A pending delete minted by [`Controller`](crate::Controller) after the
/// entry was resolved. Only a confirmed target can be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub(crate) dir: PathBuf,
    pub(crate) name: OsString,
    pub(crate) display: String,
    pub(crate) kind: EntryKind,
}

impl DeleteTarget {
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The yes/no question shown before deleting.
    pub fn prompt(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("Delete directory '{}'?", self.display),
            _ => format!("Delete file '{}'?", self.display),
        }
    }
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    /// Enter a listed entry, by its name on disk.
    Navigate(OsString),
    NavigateUp,
    NavigateTo(PathBuf),
    CreateFile(String),
    CreateDirectory(String),
    View(Selection),
    Edit(Selection),
    RequestDelete(Selection),
    Delete(DeleteTarget),
}

/// What a successful command produced. Names here are display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The current directory was (re)listed, possibly after moving.
    Listed,
    /// Nothing happened, e.g. navigating into a file.
    Unchanged,
    Created { name: String, kind: EntryKind },
    Content { name: String, text: String },
    Launched { name: String },
    ConfirmDelete(DeleteTarget),
    Deleted { name: String, kind: EntryKind },
}

impl Outcome {
    /// Success message worth an info notice, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            Outcome::Created { name, kind } => {
                Some(format!("{} '{}' created successfully.", kind_word(*kind), name))
            }
            Outcome::Deleted { name, kind } => {
                Some(format!("{} '{}' deleted successfully.", kind_word(*kind), name))
            }
            _ => None,
        }
    }
}

fn kind_word(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "Directory",
        _ => "File",
    }
}
