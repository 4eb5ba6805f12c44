// ABOUTME: Applies one drag step of a handle to the panels around it.
// ABOUTME: Moves exactly one edge of each affected panel so siblings keep tiling.

use tabz_core::{Bounds, LayoutSettings, Panel};

use crate::collision::affected_panels;
use crate::solver::check_and_resize_handles;
use crate::{Handle, HandleId, RenderSink};

/// What a single resize step changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResizeOutcome {
    /// Handles that moved or stretched, dragged handle first
    pub moved_handles: Vec<HandleId>,
    /// Indices of panels whose bounds were updated
    pub resized_panels: Vec<usize>,
    /// Applied movement of the dragged handle
    pub dx: f32,
    pub dy: f32,
}

/// Drag `handle` towards `proposed` and redistribute space among the panels it touches.
///
/// Affected panels are found before the handle moves. Each of them then
/// absorbs the applied delta on exactly one side: the side touching the
/// handle moves onto the handle's new line while the far edge stays put.
pub fn on_item_resize(
    panels: &mut [Panel],
    handles: &mut [Handle],
    handle: HandleId,
    proposed: Bounds,
    surface: Bounds,
    settings: &LayoutSettings,
    sink: &mut impl RenderSink,
) -> ResizeOutcome {
    let Some(before) = handles.get(handle.0).copied() else {
        tracing::warn!("Ignoring resize of unknown handle {:?}", handle);
        return ResizeOutcome::default();
    };
    let affected = affected_panels(panels, &before);

    let moved_handles =
        check_and_resize_handles(handles, handle, proposed, surface, settings.min_panel_size);
    for &id in &moved_handles {
        sink.update_handle(id, &handles[id.0]);
    }

    let after = handles[handle.0].bounds;
    let dx = after.left - before.bounds.left;
    let dy = after.top - before.bounds.top;
    let mut outcome = ResizeOutcome {
        moved_handles,
        resized_panels: Vec::new(),
        dx,
        dy,
    };
    if dx == 0.0 && dy == 0.0 {
        return outcome;
    }

    for index in affected {
        let panel = &mut panels[index];
        let bounds = &mut panel.bounds;
        // The moved edge is set to the handle line itself rather than shifted
        // by the delta, so edges and handles cannot drift apart over many drags.
        if before.vertical {
            let grows_right = if dx < 0.0 {
                bounds.left < after.left
            } else {
                bounds.left + bounds.width < after.left
            };
            if grows_right {
                bounds.width = after.left - bounds.left;
            } else {
                bounds.width = bounds.right() - after.left;
                bounds.left = after.left;
            }
        } else {
            let grows_down = if dy < 0.0 {
                bounds.top < after.top
            } else {
                bounds.top + bounds.height < after.top
            };
            if grows_down {
                bounds.height = after.top - bounds.top;
            } else {
                bounds.height = bounds.bottom() - after.top;
                bounds.top = after.top;
            }
        }
        sink.update_item(panel);
        outcome.resized_panels.push(index);
    }

    tracing::debug!(
        "Handle {:?} moved by ({}, {}), resized {} panels",
        handle,
        dx,
        dy,
        outcome.resized_panels.len()
    );
    outcome
}
