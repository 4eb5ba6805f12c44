// ABOUTME: Resize handles between adjacent sibling panels.
// ABOUTME: Computes handle geometry and builds the full handle set for a panel list.

use serde::{Deserialize, Serialize};
use tabz_core::{Bounds, LayoutSettings, Panel};

use crate::hierarchy::Hierarchy;

/// Index of a handle in the set produced by `build_handles`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleId(pub usize);

/// A draggable line between two sibling groups.
///
/// `bounds` has zero size on the split axis and the full extent of the group
/// on the other axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    /// True when the handle separates left/right panels
    pub vertical: bool,
    #[serde(flatten)]
    pub bounds: Bounds,
}

impl Handle {
    /// Coordinate of the handle line on its split axis
    pub fn position(&self) -> f32 {
        self.bounds.start(self.vertical)
    }

    /// Start and end of the handle along the orthogonal axis
    pub fn span(&self) -> (f32, f32) {
        (
            self.bounds.start(!self.vertical),
            self.bounds.end(!self.vertical),
        )
    }

    pub(crate) fn set_position(&mut self, position: f32) {
        if self.vertical {
            self.bounds.left = position;
        } else {
            self.bounds.top = position;
        }
    }
}

/// Handle sitting on the trailing edge of one sibling group.
///
/// `group_panel_bounds` are the bounds of every panel in the (non-last)
/// sibling; the handle goes where that sibling ends and spans its full
/// orthogonal extent.
pub fn create_resize_handle(group_panel_bounds: &[Bounds], vertical: bool) -> Handle {
    let sibling = Bounds::union(group_panel_bounds).unwrap_or_default();
    let bounds = if vertical {
        Bounds::new(sibling.right(), sibling.top, 0.0, sibling.height)
    } else {
        Bounds::new(sibling.left, sibling.bottom(), sibling.width, 0.0)
    };
    Handle { vertical, bounds }
}

/// Build one handle per adjacent sibling pair across the whole tree.
///
/// Groups are visited parent first; within a group the last child gets no
/// handle, so `k` children yield `k - 1` handles.
pub fn build_handles(panels: &[Panel], settings: &LayoutSettings) -> Vec<Handle> {
    let tree = Hierarchy::build(panels);
    let mut handles = Vec::new();

    for id in tree.preorder() {
        let group = tree.node(id);
        let vertical = settings.vertical_at(group.depth);
        let Some((_, leading)) = group.children.split_last() else {
            continue;
        };
        for &child in leading {
            let bounds = tree.member_bounds(child, panels);
            handles.push(create_resize_handle(&bounds, vertical));
        }
    }

    tracing::debug!(
        "Built {} resize handles for {} panels",
        handles.len(),
        panels.len()
    );
    handles
}
