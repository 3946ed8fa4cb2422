// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tree Rendering Primitives
//!
//! Every inventory element is a [`TreeNode`]: it knows its own one-line
//! label and, if it is a composite, which children hang below it. Rendering
//! is a provided method, so leaf and composite types share one algorithm.
//!
//! # Format
//!
//! ```text
//! Network: lab
//! +-Host: a
//! | \-10.0.0.1
//! \-Host: b
//!   \-10.0.0.2
//! ```
//!
//! - Each line is `prefix + connector + label`
//! - Connector is [`BRANCH`] for non-last siblings, [`LAST_BRANCH`] for the last
//! - Children of a non-last node get [`PIPE`] appended to the prefix, children
//!   of a last node get [`BLANK`]
//! - A root line has neither prefix nor connector

pub mod container;

pub use container::Container;

/// Connector for a sibling that has siblings after it
pub const BRANCH: &str = "+-";

/// Connector for the final sibling in a group
pub const LAST_BRANCH: &str = "\\-";

/// Continuation under a non-terminal branch
pub const PIPE: &str = "| ";

/// Continuation under a terminal branch
pub const BLANK: &str = "  ";

/// Capability shared by every node of an inventory tree
pub trait TreeNode {
    /// Single-line description without glyphs or trailing newline
    fn label(&self) -> String;

    /// Direct children in render order. Leaves have none.
    fn children(&self) -> Vec<&dyn TreeNode> {
        Vec::new()
    }

    /// Render this node and its subtree, one newline-terminated line per node
    fn render(&self, prefix: &str, is_last: bool, is_root: bool) -> String {
        let mut out = String::new();
        self.render_into(&mut out, prefix, is_last, is_root);
        out
    }

    /// Append the rendered subtree to `out`
    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool, is_root: bool) {
        let child_prefix = if is_root {
            out.push_str(&self.label());
            String::new()
        } else {
            out.push_str(prefix);
            out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
            out.push_str(&self.label());
            format!("{}{}", prefix, if is_last { BLANK } else { PIPE })
        };
        out.push('\n');

        let children = self.children();
        let count = children.len();
        for (idx, child) in children.into_iter().enumerate() {
            child.render_into(out, &child_prefix, idx + 1 == count, false);
        }
    }

    /// Render as a standalone tree rooted at this node, trailing whitespace trimmed
    fn render_tree(&self) -> String {
        let mut out = self.render("", true, true);
        out.truncate(out.trim_end().len());
        out
    }
}
