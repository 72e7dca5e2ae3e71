//! fscore: the directory browser's filesystem side
//!
//! A [`Controller`] holds the current directory and turns [`Command`]s into
//! plain `std::fs` calls. It has no GUI dependency; the app crate renders
//! whatever [`Outcome`] or [`BrowseError`] comes back.

pub mod command;
pub mod controller;
pub mod entry;
pub mod error;
pub mod launcher;
pub mod naming;

pub use command::{Command, DeleteTarget, Outcome, Selection};
pub use controller::Controller;
pub use entry::{display_name, list_dir, Entry, EntryKind, Listing};
pub use error::{BrowseError, Result};
pub use launcher::{Launcher, SystemLauncher};
pub use naming::FileNaming;
