//! Walks the browser through a short session using only commands.

use fscore::{BrowseError, Command, Controller, FileNaming, Outcome, Selection};
use std::collections::HashSet;
use tempfile::tempdir;

fn names(c: &Controller) -> HashSet<String> {
    c.listing().names().map(str::to_string).collect()
}

#[test]
fn create_navigate_view_delete() {
    let dir = tempdir().expect("failed to create temp dir");
    let root = dir.path().canonicalize().expect("canonicalize");
    let mut c = Controller::open(&root).expect("open controller");
    assert!(c.listing().is_empty());

    c.execute(Command::CreateDirectory("sub".into())).unwrap();
    assert_eq!(names(&c), HashSet::from(["sub".to_string()]));

    c.execute(Command::Navigate("sub".into())).unwrap();
    assert_eq!(c.current_dir(), root.join("sub"));

    c.execute(Command::CreateFile("note".into())).unwrap();
    assert_eq!(names(&c), HashSet::from(["note.txt".to_string()]));

    let content = c.execute(Command::View(Selection::of("note.txt"))).unwrap();
    assert_eq!(content, Outcome::Content { name: "note.txt".into(), text: String::new() });

    // navigating into the file changes nothing
    assert_eq!(c.execute(Command::Navigate("note.txt".into())).unwrap(), Outcome::Unchanged);
    assert_eq!(c.current_dir(), root.join("sub"));

    c.execute(Command::NavigateUp).unwrap();
    let target = match c.execute(Command::RequestDelete(Selection::of("sub"))).unwrap() {
        Outcome::ConfirmDelete(target) => target,
        other => panic!("expected confirmation, got {:?}", other),
    };
    let err = c.execute(Command::Delete(target)).unwrap_err();
    assert!(matches!(err, BrowseError::DirectoryNotEmpty { .. }));
    assert!(root.join("sub").join("note.txt").is_file());
}

#[test]
fn verbatim_naming_keeps_typed_name() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut c = Controller::open(dir.path())
        .expect("open controller")
        .with_naming(FileNaming::Verbatim);

    c.execute(Command::CreateFile("note".into())).unwrap();
    assert_eq!(names(&c), HashSet::from(["note".to_string()]));
}
