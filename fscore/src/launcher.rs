//! Hand-off to the operating system's default application

use std::path::Path;

/// Opens a file with whatever the desktop associates it with.
///
/// Implementations return once the launch has been attempted; the launched
/// program is never waited on.
#[cfg_attr(test, mockall::automock)]
pub trait Launcher {
    fn open(&self, path: &Path) -> std::io::Result<()>;
}

/// Launcher backed by the `open` crate (xdg-open, `open`, `start`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) -> std::io::Result<()> {
        open::that(path)
    }
}
