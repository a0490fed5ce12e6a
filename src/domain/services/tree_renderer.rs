//! Tree rendering
//!
//! Draws a job tree the way directory listings are usually drawn:
//!
//! ```text
//! └── MAIN
//!     ├── PICK
//!     │   └── GRIP
//!     └── PLACE
//! ```
//!
//! Every entry except the last at its level gets the branch connector and
//! passes a vertical bar down to its descendants; the last gets the corner
//! connector and passes blank indentation down.

use crate::domain::entities::{ChildMap, JobTree};

/// Connector set used when drawing a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeGlyphs {
    /// Entry with more siblings below it
    pub branch: &'static str,
    /// Last entry at its level
    pub corner: &'static str,
    /// Indent under an entry that has more siblings
    pub pipe: &'static str,
    /// Indent under a last entry
    pub blank: &'static str,
}

impl TreeGlyphs {
    pub const fn unicode() -> Self {
        Self {
            branch: "├── ",
            corner: "└── ",
            pipe: "│   ",
            blank: "    ",
        }
    }

    pub const fn ascii() -> Self {
        Self {
            branch: "|-- ",
            corner: "`-- ",
            pipe: "|   ",
            blank: "    ",
        }
    }

    pub fn for_unicode(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for TreeGlyphs {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Render a child map, one line per entry, depth-first.
///
/// An empty map renders no lines.
pub fn render_children(children: &ChildMap, glyphs: &TreeGlyphs) -> Vec<String> {
    let mut lines = Vec::new();
    render_level(children, "", glyphs, &mut lines);
    lines
}

/// Render a whole tree with the root as the single top-level entry.
pub fn render_tree(tree: &JobTree, glyphs: &TreeGlyphs) -> Vec<String> {
    let mut lines = vec![format!("{}{}", glyphs.corner, tree.root())];
    render_level(tree.children(), glyphs.blank, glyphs, &mut lines);
    lines
}

fn render_level(children: &ChildMap, prefix: &str, glyphs: &TreeGlyphs, lines: &mut Vec<String>) {
    let last = children.len().saturating_sub(1);
    for (i, (name, grandchildren)) in children.iter().enumerate() {
        let is_last = i == last;
        let connector = if is_last { glyphs.corner } else { glyphs.branch };
        lines.push(format!("{}{}{}", prefix, connector, name));

        let extension = if is_last { glyphs.blank } else { glyphs.pipe };
        render_level(grandchildren, &format!("{}{}", prefix, extension), glyphs, lines);
    }
}
