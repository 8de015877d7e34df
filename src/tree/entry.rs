//! In-memory directory hierarchy

/// What kind of filesystem object an [`Entry`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One node of the hierarchy.
///
/// Entries own their children outright, so the hierarchy is always a tree.
/// `size` is whatever the filesystem reported for the object itself; for
/// directories that is platform metadata, not the sum of the children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    kind: EntryKind,
    size: u64,
    children: Vec<Entry>,
}

impl Entry {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size,
            children: Vec::new(),
        }
    }

    pub fn dir(name: impl Into<String>, size: u64, children: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Child entries. Always empty for files.
    pub fn children(&self) -> &[Entry] {
        &self.children
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_has_no_children() {
        let f = Entry::file("a.txt", 3);
        assert!(!f.is_dir());
        assert_eq!(f.kind(), EntryKind::File);
        assert!(f.children().is_empty());
        assert_eq!(f.size(), 3);
    }

    #[test]
    fn test_dir_keeps_children_in_order() {
        let d = Entry::dir(
            "src",
            4096,
            vec![Entry::file("z.rs", 1), Entry::file("a.rs", 2)],
        );
        assert!(d.is_dir());
        let names: Vec<_> = d.children().iter().map(Entry::name).collect();
        assert_eq!(names, ["z.rs", "a.rs"]);
    }
}
