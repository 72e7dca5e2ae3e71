mod app;
mod format;

use app::BrowserApp;
use clap::Parser;
use eframe::NativeOptions;
use fscore::{Controller, FileNaming};
use std::path::PathBuf;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// A minimal desktop file browser
#[derive(Parser, Debug)]
#[command(name = "filebrowser", version, about)]
struct Args {
    /// Directory to start in (defaults to the working directory)
    dir: Option<PathBuf>,

    /// Create files with exactly the typed name instead of appending .txt
    #[arg(long)]
    verbatim_names: bool,
}

fn main() -> eframe::Result<()> {
    init_tracing();
    let args = Args::parse();

    let naming = if args.verbatim_names { FileNaming::Verbatim } else { FileNaming::AppendTxt };
    let controller = match open_controller(args.dir) {
        Ok(c) => c.with_naming(naming),
        Err(e) => {
            error!(error = %e, "cannot open a starting directory");
            std::process::exit(1);
        }
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 460.0])
            .with_title("files"),
        ..Default::default()
    };
    eframe::run_native("files", options, Box::new(move |cc| {
        uicore::BrowserTheme::default().apply(&cc.egui_ctx);
        Box::new(BrowserApp::new(controller))
    }))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Open the requested directory, falling back to the working directory.
fn open_controller(dir: Option<PathBuf>) -> fscore::Result<Controller> {
    if let Some(dir) = dir {
        match Controller::open(&dir) {
            Ok(c) => return Ok(c),
            Err(e) => warn!(error = %e, "falling back to the working directory"),
        }
    }
    Controller::open(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_args() {
        let args = Args::parse_from(["filebrowser", "/tmp", "--verbatim-names"]);
        assert_eq!(args.dir, Some(PathBuf::from("/tmp")));
        assert!(args.verbatim_names);

        let args = Args::parse_from(["filebrowser"]);
        assert_eq!(args.dir, None);
        assert!(!args.verbatim_names);
    }

    #[test]
    fn test_open_controller_falls_back() {
        let dir = tempdir().expect("failed to create temp dir");
        let c = open_controller(Some(dir.path().join("missing"))).expect("fallback");
        let cwd = std::env::current_dir().unwrap().canonicalize().unwrap();
        assert_eq!(c.current_dir(), cwd);

        let c = open_controller(Some(dir.path().to_path_buf())).expect("open");
        assert_eq!(c.current_dir(), dir.path().canonicalize().unwrap());
    }
}
