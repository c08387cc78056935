use compdbgen::discovery;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn touch(root: &TempDir, relative: &str) -> PathBuf {
    let path = root.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(&path).unwrap();
    writeln!(f, "int x;").unwrap();
    path
}

#[test]
fn test_find_source_files_recursive() {
    let td = TempDir::new().unwrap();
    let a = touch(&td, "a.c");
    let b = touch(&td, "sub/deeper/b.m");
    touch(&td, "sub/notes.txt");
    touch(&td, "sub/b.h");

    let files = discovery::find_source_files(td.path(), &[".c", ".m"]).unwrap();
    assert_eq!(files, vec![a, b]);
}

#[test]
fn test_find_source_files_respects_suffix_set() {
    let td = TempDir::new().unwrap();
    let a = touch(&td, "main.c");
    touch(&td, "platform/macos.m");

    let files = discovery::find_source_files(td.path(), &[".c"]).unwrap();
    assert_eq!(files, vec![a]);
}

#[test]
fn test_empty_directory_yields_nothing() {
    let td = TempDir::new().unwrap();
    let files = discovery::find_source_files(td.path(), &[".c"]).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let td = TempDir::new().unwrap();
    let missing = td.path().join("engine/src");
    let err = discovery::find_source_files(&missing, &[".c"]).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
