/// A single direct child of the listing root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Base name of the entry (e.g., `readme.txt`).
    pub name: String,
    /// Canonical absolute path, resolved once against the root.
    pub path: String,
    /// Classification driving the lead action of the entry's item.
    pub kind: EntryKind,
}

/// File-vs-everything-else classification of an entry.
///
/// The file type is read without following symlinks, so a symlink counts
/// as `DirectoryLike` even when it points at a regular file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// Anything else: directory, symlink, or special file.
    DirectoryLike,
}
