//! Connector glyphs, prefix fragments and size labels

use crate::tree::Entry;

/// Connector for a sibling that has more siblings after it.
pub const BRANCH: &str = "├───";
/// Connector for the last sibling.
pub const LAST_BRANCH: &str = "└───";
/// Prefix fragment under an ancestor that has later siblings.
pub const PIPE_INDENT: &str = "│\t";
/// Prefix fragment under an ancestor that was the last sibling.
pub const BLANK_INDENT: &str = "\t";

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Copy `prefixes` and append the fragment for a child of a node at
/// position `is_last`. The caller's slice is never touched, so sibling
/// branches cannot see each other's indentation.
pub fn child_prefixes<'a>(prefixes: &[&'a str], is_last: bool) -> Vec<&'a str> {
    let mut next = Vec::with_capacity(prefixes.len() + 1);
    next.extend_from_slice(prefixes);
    next.push(if is_last { BLANK_INDENT } else { PIPE_INDENT });
    next
}

/// Size annotation shown after file names: `(42b)`, or `(empty)` for zero bytes.
pub fn size_label(size: u64) -> String {
    if size > 0 {
        format!("({}b)", size)
    } else {
        "(empty)".to_string()
    }
}

/// Siblings in display order: ascending by name, compared byte-wise.
pub fn sorted_siblings(entries: &[Entry]) -> Vec<&Entry> {
    let mut siblings: Vec<&Entry> = entries.iter().collect();
    siblings.sort_by(|a, b| a.name().cmp(b.name()));
    siblings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector() {
        assert_eq!(connector(false), "├───");
        assert_eq!(connector(true), "└───");
    }

    #[test]
    fn test_size_label() {
        assert_eq!(size_label(0), "(empty)");
        assert_eq!(size_label(42), "(42b)");
        assert_eq!(size_label(1_048_576), "(1048576b)");
    }

    #[test]
    fn test_child_prefixes_leave_parent_untouched() {
        let parent = vec![PIPE_INDENT];
        let left = child_prefixes(&parent, false);
        let right = child_prefixes(&parent, true);

        assert_eq!(parent, ["│\t"]);
        assert_eq!(left, ["│\t", "│\t"]);
        assert_eq!(right, ["│\t", "\t"]);
    }

    #[test]
    fn test_sorted_siblings_byte_order() {
        let entries = vec![
            Entry::file("b", 1),
            Entry::file("B", 1),
            Entry::dir("a", 0, Vec::new()),
            Entry::file("_x", 1),
        ];
        let names: Vec<_> = sorted_siblings(&entries).into_iter().map(Entry::name).collect();
        assert_eq!(names, ["B", "_x", "a", "b"]);
    }
}
