//! Wire types for the launcher page document.
//!
//! The JSON shapes here are a compatibility surface consumed by the host
//! launcher. Field names, field order, and the fixed titles are part of
//! the contract.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::domain::entry::{Entry, EntryKind};

/// Keyboard shortcut offered for the copy-path action.
const COPY_PATH_SHORTCUT: &str = "ctrl+y";

/// A single page document sent to the launcher on stdout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub items: Vec<ListItem>,
}

/// Page discriminator understood by the launcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    List,
}

impl Page {
    /// Wraps already-ordered items into a list page.
    pub fn list(items: Vec<ListItem>) -> Self {
        Self {
            kind: PageKind::List,
            items,
        }
    }
}

/// One row of a list page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub title: String,
    pub accessories: Vec<String>,
    pub actions: Vec<Action>,
}

impl ListItem {
    /// Builds the launcher item for one directory entry.
    ///
    /// Action order is part of the output contract: the kind-specific
    /// opener first, then Edit, Copy Path, Delete File. Every path field
    /// reuses the entry's single resolved path.
    pub fn for_entry(entry: Entry, root: &str) -> Self {
        let opener = match entry.kind {
            EntryKind::File => Action::OpenFile {
                url: format!("file://{}", entry.path),
            },
            EntryKind::DirectoryLike => Action::BrowseDirectory {
                root: entry.path.clone(),
            },
        };

        Self {
            title: entry.name,
            accessories: vec![root.to_string()],
            actions: vec![
                opener,
                Action::EditFile {
                    file: entry.path.clone(),
                },
                Action::CopyPath {
                    text: entry.path.clone(),
                },
                Action::DeleteFile { path: entry.path },
            ],
        }
    }
}

/// A described operation the launcher can offer for an entry.
///
/// Actions are descriptions only; nothing here is executed by this
/// program. Titles, command names, and the copy shortcut are fixed by
/// the wire schema and live in the serializer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Open a regular file via its `file://` URL.
    OpenFile { url: String },
    /// Push another listing of `root`.
    BrowseDirectory { root: String },
    /// Open the entry in the host's editor.
    EditFile { file: String },
    /// Copy the entry's absolute path.
    CopyPath { text: String },
    /// Ask the host to delete the entry.
    DeleteFile { path: String },
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::OpenFile { url } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "open-url")?;
                map.serialize_entry("url", url)?;
                map.serialize_entry("title", "Open File")?;
                map.end()
            }
            Self::BrowseDirectory { root } => {
                run_command(serializer, "browse-files", "Browse Directory", "root", root)
            }
            Self::EditFile { file } => run_command(serializer, "edit-file", "Edit", "file", file),
            Self::CopyPath { text } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("type", "copy-text")?;
                map.serialize_entry("title", "Copy Path")?;
                map.serialize_entry("text", text)?;
                map.serialize_entry("shortcut", COPY_PATH_SHORTCUT)?;
                map.end()
            }
            Self::DeleteFile { path } => {
                run_command(serializer, "delete-file", "Delete File", "path", path)
            }
        }
    }
}

/// Serializes one `run-command` action with a single `with` parameter.
fn run_command<S>(
    serializer: S,
    command: &str,
    title: &str,
    param: &str,
    value: &str,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(4))?;
    map.serialize_entry("type", "run-command")?;
    map.serialize_entry("command", command)?;
    map.serialize_entry("title", title)?;
    map.serialize_entry("with", &BTreeMap::from([(param, value)]))?;
    map.end()
}
