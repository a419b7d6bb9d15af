//! Directory enumeration and page construction.
//!
//! One invocation resolves the root once, reads its direct children, and
//! assembles the whole page before anything is written. Either a complete
//! document reaches stdout or nothing does.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::domain::entry::{Entry, EntryKind};
use crate::page::{ListItem, Page};

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("root does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },
    #[error("root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    #[error("failed to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("path is not valid UTF-8: {path:?}")]
    NonUtf8Path { path: OsString },
    #[error("failed to serialize page: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write to stdout: {0}")]
    Stdout(#[from] io::Error),
}

/// Lists `root` and writes the resulting page to stdout.
///
/// # Errors
/// Returns an error if the root cannot be resolved or listed, or if the
/// document cannot be written. No partial output is produced.
pub fn run(root: &Path, show_hidden: bool) -> Result<(), BrowseError> {
    let page = build_page(root, show_hidden)?;
    write_page(&page)
}

/// Resolves `root`, lists its direct children, and assembles the page.
///
/// # Errors
/// Returns an error if `root` does not resolve to a listable directory or
/// a path cannot be represented as UTF-8.
pub fn build_page(root: &Path, show_hidden: bool) -> Result<Page, BrowseError> {
    let root = resolve_root(root)?;
    let entries = list_entries(Path::new(&root), show_hidden)?;
    let items = entries
        .into_iter()
        .map(|entry| ListItem::for_entry(entry, &root))
        .collect();
    Ok(Page::list(items))
}

/// Canonicalizes the root into the single absolute form every path field
/// of the output derives from.
fn resolve_root(root: &Path) -> Result<String, BrowseError> {
    let resolved = fs::canonicalize(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BrowseError::RootNotFound {
            path: root.to_path_buf(),
        },
        _ => BrowseError::ReadDir {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !resolved.is_dir() {
        return Err(BrowseError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    resolved
        .into_os_string()
        .into_string()
        .map_err(|path| BrowseError::NonUtf8Path { path })
}

/// Lists the direct children of `root`, sorted by base name.
///
/// With `show_hidden` unset, entries whose name starts with `.` are
/// dropped before sorting. A child whose file type cannot be read (it
/// disappeared after enumeration, or the check was denied) is skipped
/// with a warning rather than aborting the listing.
///
/// # Errors
/// Returns an error if the directory cannot be enumerated or a child name
/// is not valid UTF-8.
pub fn list_entries(root: &Path, show_hidden: bool) -> Result<Vec<Entry>, BrowseError> {
    let read_dir_error = |source| BrowseError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for child in fs::read_dir(root).map_err(read_dir_error)? {
        let child = child.map_err(read_dir_error)?;
        let name = child
            .file_name()
            .into_string()
            .map_err(|path| BrowseError::NonUtf8Path { path })?;

        if !show_hidden && name.starts_with('.') {
            continue;
        }

        let kind = match child.file_type() {
            Ok(file_type) if file_type.is_file() => EntryKind::File,
            Ok(_) => EntryKind::DirectoryLike,
            Err(error) => {
                warn!("skipping {name}: {error}");
                continue;
            }
        };

        let path = root
            .join(&name)
            .into_os_string()
            .into_string()
            .map_err(|path| BrowseError::NonUtf8Path { path })?;

        entries.push(Entry { name, path, kind });
    }

    entries.sort_by(|first, second| first.name.cmp(&second.name));

    Ok(entries)
}

/// Writes the page to stdout as one JSON document plus a trailing newline.
fn write_page(page: &Page) -> Result<(), BrowseError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer(&mut handle, page)?;
    handle.write_all(b"\n")?;
    Ok(())
}
