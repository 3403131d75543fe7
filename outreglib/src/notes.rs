//! Table notes stored next to the table file.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::OutregError;
use crate::Result;

/// Path of the notes file for `table_path`.
///
/// `tables/table_1.tex` maps to `tables/table_1_notes.tex`; a path without
/// an extension just gets `_notes` appended.
pub fn notes_path(table_path: impl AsRef<Path>) -> PathBuf {
    let table_path = table_path.as_ref();
    let mut file_name = table_path
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    file_name.push("_notes");
    if let Some(ext) = table_path.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    table_path.with_file_name(file_name)
}

/// Write `notes` verbatim to the notes file for `table_path`.
///
/// Any existing notes file is overwritten.
pub fn write_notes(notes: &str, table_path: impl AsRef<Path>) -> Result<()> {
    let path = notes_path(table_path);
    debug!("writing {} bytes of notes to {}", notes.len(), path.display());

    std::fs::write(&path, notes).map_err(|e| OutregError::NotesWrite { path, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_notes_path_keeps_extension() {
        assert_eq!(notes_path("table1.tex"), PathBuf::from("table1_notes.tex"));
        assert_eq!(
            notes_path("out/tables/t2.txt"),
            PathBuf::from("out/tables/t2_notes.txt")
        );
    }

    #[test]
    fn test_notes_path_without_extension() {
        assert_eq!(notes_path("out/table"), PathBuf::from("out/table_notes"));
    }

    #[test]
    fn test_notes_path_multiple_dots() {
        assert_eq!(
            notes_path("table.v2.tex"),
            PathBuf::from("table.v2_notes.tex")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_notes_path_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let table = Path::new("out").join(OsStr::from_bytes(b"t\xff1.tex"));
        let notes = notes_path(&table);

        assert_eq!(notes.parent(), Some(Path::new("out")));
        assert_eq!(
            notes.file_name().unwrap().as_bytes(),
            b"t\xff1_notes.tex".as_slice()
        );
    }

    #[test]
    fn test_write_notes() {
        let dir = tempdir().unwrap();
        write_notes("hello", dir.path().join("table1.tex")).unwrap();

        let written = fs::read_to_string(dir.path().join("table1_notes.tex")).unwrap();
        assert_eq!(written, "hello");
        // The table itself is never touched
        assert!(!dir.path().join("table1.tex").exists());
    }

    #[test]
    fn test_write_notes_overwrites() {
        let dir = tempdir().unwrap();
        let table = dir.path().join("t.tex");
        write_notes("first draft", &table).unwrap();
        write_notes("final", &table).unwrap();

        let written = fs::read_to_string(dir.path().join("t_notes.tex")).unwrap();
        assert_eq!(written, "final");
    }

    #[test]
    fn test_write_notes_missing_directory() {
        let dir = tempdir().unwrap();
        let table = dir.path().join("no/such/dir/t.tex");
        let err = write_notes("x", table).unwrap_err();
        assert!(matches!(err, OutregError::NotesWrite { .. }));
    }
}
