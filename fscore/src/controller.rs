//! The directory browser controller.
//!
//! Owns the current directory and its latest listing. Every user action
//! arrives as a [`Command`] and leaves as an [`Outcome`] or a
//! [`BrowseError`]; nothing here knows about windows or widgets.

use crate::command::{Command, DeleteTarget, Outcome, Selection};
use crate::entry::{display_name, list_dir, EntryKind, Listing};
use crate::error::{BrowseError, Result};
use crate::launcher::{Launcher, SystemLauncher};
use crate::naming::{validate_entry_name, validate_name, FileNaming};
use std::ffi::OsStr;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct Controller {
    current_dir: PathBuf,
    listing: Listing,
    naming: FileNaming,
    launcher: Box<dyn Launcher>,
}

impl Controller {
    /// Start browsing at `start`, which must be an existing directory.
    pub fn open(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref();
        let dir = start.canonicalize().map_err(|e| BrowseError::io(start, e))?;
        if !dir.is_dir() {
            return Err(BrowseError::io(
                dir,
                std::io::Error::new(ErrorKind::Other, "not a directory"),
            ));
        }
        let listing = list_dir(&dir)?;
        info!(dir = %dir.display(), "browsing");
        Ok(Self {
            current_dir: dir,
            listing,
            naming: FileNaming::default(),
            launcher: Box::new(SystemLauncher),
        })
    }

    pub fn with_launcher(mut self, launcher: impl Launcher + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    pub fn with_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn naming(&self) -> FileNaming {
        self.naming
    }

    /// Run one command. Errors are logged here and returned for display.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(?command, "execute");
        let result = match command {
            Command::Refresh => self.refresh(),
            Command::Navigate(name) => self.navigate(&name),
            Command::NavigateUp => self.navigate_up(),
            Command::NavigateTo(path) => self.navigate_to(&path),
            Command::CreateFile(name) => self.create_file(&name),
            Command::CreateDirectory(name) => self.create_directory(&name),
            Command::View(selection) => self.view(&selection),
            Command::Edit(selection) => self.edit(&selection),
            Command::RequestDelete(selection) => self.request_delete(&selection),
            Command::Delete(target) => self.delete(&target),
        };
        if let Err(ref e) = result {
            warn!(error = %e, "command failed");
        }
        result
    }

    /// Re-read the current directory. On failure the previous entries are
    /// kept and flagged stale.
    pub fn refresh(&mut self) -> Result<Outcome> {
        match list_dir(&self.current_dir) {
            Ok(listing) => {
                self.listing = listing;
                Ok(Outcome::Listed)
            }
            Err(e) => {
                self.listing.stale = true;
                Err(e)
            }
        }
    }

    /// Descend into the child `name` if it is a directory.
    pub fn navigate(&mut self, name: impl AsRef<OsStr>) -> Result<Outcome> {
        let name = validate_entry_name(name.as_ref())?;
        let path = self.current_dir.join(name);
        if !path.is_dir() {
            debug!(?name, "not a directory, staying put");
            return Ok(Outcome::Unchanged);
        }
        self.change_dir(path)
    }

    pub fn navigate_up(&mut self) -> Result<Outcome> {
        match self.current_dir.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.change_dir(parent)
            }
            None => Ok(Outcome::Unchanged),
        }
    }

    /// Jump to `path`; relative paths resolve against the current directory.
    pub fn navigate_to(&mut self, path: &Path) -> Result<Outcome> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        };
        if !path.is_dir() {
            return Ok(Outcome::Unchanged);
        }
        let path = path.canonicalize().map_err(|e| BrowseError::io(&path, e))?;
        self.change_dir(path)
    }

    /// List `dir` first so a failure leaves the current directory untouched.
    fn change_dir(&mut self, dir: PathBuf) -> Result<Outcome> {
        let listing = list_dir(&dir)?;
        info!(dir = %dir.display(), "entered directory");
        self.current_dir = dir;
        self.listing = listing;
        Ok(Outcome::Listed)
    }

    pub fn create_file(&mut self, typed: &str) -> Result<Outcome> {
        let name = self.naming.file_name(typed)?;
        let path = self.current_dir.join(&name);
        if exists(&path)? {
            return Err(BrowseError::AlreadyExists { name });
        }
        // create_new never truncates, so a racing creator is reported too
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => BrowseError::AlreadyExists { name: name.clone() },
                _ => BrowseError::io(&path, e),
            })?;
        info!(path = %path.display(), "created file");
        self.refresh_after_change();
        Ok(Outcome::Created { name, kind: EntryKind::File })
    }

    pub fn create_directory(&mut self, typed: &str) -> Result<Outcome> {
        let name = validate_name(typed)?.to_string();
        let path = self.current_dir.join(&name);
        if exists(&path)? {
            return Err(BrowseError::AlreadyExists { name });
        }
        fs::create_dir(&path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => BrowseError::AlreadyExists { name: name.clone() },
            _ => BrowseError::io(&path, e),
        })?;
        info!(path = %path.display(), "created directory");
        self.refresh_after_change();
        Ok(Outcome::Created { name, kind: EntryKind::Directory })
    }

    /// Read the selected file's full text. Invalid UTF-8 is replaced.
    pub fn view(&self, selection: &Selection) -> Result<Outcome> {
        let (name, path) = self.selected_file(selection)?;
        let bytes = fs::read(&path).map_err(|e| BrowseError::io(&path, e))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        debug!(path = %path.display(), bytes = bytes.len(), "read file");
        Ok(Outcome::Content { name, text })
    }

    /// Open the selected file in the system's default application.
    pub fn edit(&self, selection: &Selection) -> Result<Outcome> {
        let (name, path) = self.selected_file(selection)?;
        self.launcher
            .open(&path)
            .map_err(|source| BrowseError::LaunchFailed { path: path.clone(), source })?;
        info!(path = %path.display(), "handed off to default application");
        Ok(Outcome::Launched { name })
    }

    /// Resolve the selection into a target the user must confirm.
    pub fn request_delete(&mut self, selection: &Selection) -> Result<Outcome> {
        let name = selection
            .name()
            .ok_or(BrowseError::NotAFile { name: None })?;
        let name = validate_entry_name(name)?.to_os_string();
        match kind_of(&self.current_dir.join(&name), &name) {
            Ok(kind) => Ok(Outcome::ConfirmDelete(DeleteTarget {
                dir: self.current_dir.clone(),
                display: display_name(&name),
                name,
                kind,
            })),
            Err(e) => {
                // the listing still shows something that is gone
                if matches!(e, BrowseError::NotFound { .. }) {
                    self.refresh_after_change();
                }
                Err(e)
            }
        }
    }

    /// Remove a confirmed target. Directories must be empty. The listing is
    /// re-read whether or not the removal worked.
    pub fn delete(&mut self, target: &DeleteTarget) -> Result<Outcome> {
        let result = remove_target(target);
        self.refresh_after_change();
        result
    }

    fn selected_file(&self, selection: &Selection) -> Result<(String, PathBuf)> {
        let name = selection
            .name()
            .ok_or(BrowseError::NotAFile { name: None })?;
        let not_a_file = || BrowseError::NotAFile { name: Some(display_name(name)) };
        let name = validate_entry_name(name).map_err(|_| not_a_file())?;
        let path = self.current_dir.join(name);
        if !path.is_file() {
            return Err(not_a_file());
        }
        Ok((display_name(name), path))
    }

    /// Re-read after the directory changed; a failure only marks the view stale.
    fn refresh_after_change(&mut self) {
        if let Err(e) = self.refresh() {
            warn!(error = %e, "listing is stale after change");
        }
    }
}

fn remove_target(target: &DeleteTarget) -> Result<Outcome> {
    let path = target.dir.join(&target.name);
    // The entry may have changed since the prompt was shown
    let kind = kind_of(&path, &target.name)?;
    if kind != target.kind {
        return Err(BrowseError::NotFound { name: target.display.clone() });
    }

    match kind {
        EntryKind::Directory => {
            let mut children = fs::read_dir(&path).map_err(|e| BrowseError::io(&path, e))?;
            if children.next().is_some() {
                return Err(BrowseError::DirectoryNotEmpty { name: target.display.clone() });
            }
            fs::remove_dir(&path).map_err(|e| remove_dir_error(&path, &target.display, e))?;
        }
        EntryKind::File | EntryKind::Other => {
            fs::remove_file(&path).map_err(|e| BrowseError::io(&path, e))?;
        }
    }
    info!(path = %path.display(), kind = kind.label(), "deleted");
    Ok(Outcome::Deleted { name: target.display.clone(), kind })
}

/// Something may be created between the emptiness check and the removal.
fn remove_dir_error(path: &Path, display: &str, e: io::Error) -> BrowseError {
    match e.kind() {
        ErrorKind::DirectoryNotEmpty => BrowseError::DirectoryNotEmpty { name: display.to_string() },
        ErrorKind::NotFound => BrowseError::NotFound { name: display.to_string() },
        _ => BrowseError::io(path, e),
    }
}

fn kind_of(path: &Path, name: &OsStr) -> Result<EntryKind> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Ok(EntryKind::from_file_type(meta.file_type())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(BrowseError::NotFound { name: display_name(name) })
        }
        Err(e) => Err(BrowseError::io(path, e)),
    }
}

fn exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BrowseError::io(path, e)),
    }
}
