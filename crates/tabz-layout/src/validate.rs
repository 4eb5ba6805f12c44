// ABOUTME: Host-side validation of a registered panel set.
// ABOUTME: Catches malformed ids and broken tilings before the engine runs.

use std::collections::HashSet;

use tabz_core::{LayoutSettings, Panel};

use crate::hierarchy::Hierarchy;
use crate::LayoutError;

/// Check that `panels` form a well-shaped prefix tree that tiles its surface.
///
/// The engine never calls this itself; it copes with any panel set without
/// panicking. Hosts call it when registering panels to catch their own bugs.
pub fn validate_panel_set(
    panels: &[Panel],
    settings: &LayoutSettings,
) -> Result<(), LayoutError> {
    let mut seen = HashSet::new();
    for panel in panels {
        if panel.id.is_empty() {
            return Err(LayoutError::EmptyId);
        }
        if !seen.insert(panel.id.as_str()) {
            return Err(LayoutError::DuplicateId(panel.id.clone()));
        }
        let b = &panel.bounds;
        let finite = [b.left, b.top, b.width, b.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || b.width <= 0.0 || b.height <= 0.0 {
            return Err(LayoutError::DegenerateBounds(panel.id.clone()));
        }
    }

    for panel in panels {
        if let Some(descendant) = panels
            .iter()
            .find(|other| other.id.len() > panel.id.len() && other.in_group(&panel.id))
        {
            return Err(LayoutError::PanelIsGroup {
                panel: panel.id.clone(),
                descendant: descendant.id.clone(),
            });
        }
    }

    Hierarchy::build(panels).check_tiling(panels, settings)
}
