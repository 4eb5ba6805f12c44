// ABOUTME: Panel record registered by the host for layout participation.
// ABOUTME: The id encodes the panel's position in the split tree.

use serde::{Deserialize, Serialize};

use crate::Bounds;

/// A leaf rectangle the user sees as a tab/content area.
///
/// Each char of `id` is the child index chosen at that tree depth, so `"01"`
/// is child `1` of group `"0"`. The layout engine mutates `bounds` in place
/// but never creates or destroys panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    #[serde(flatten)]
    pub bounds: Bounds,
}

impl Panel {
    pub fn new(id: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }

    /// Tree depth of the panel, i.e. the number of symbols in its id
    pub fn depth(&self) -> usize {
        self.id.chars().count()
    }

    /// Whether this panel sits somewhere below the group `prefix`
    pub fn in_group(&self, prefix: &str) -> bool {
        self.id.starts_with(prefix)
    }
}
