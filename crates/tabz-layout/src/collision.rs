// ABOUTME: Geometric adjacency between handles and panels.
// ABOUTME: Decides which panels must change size when a handle moves.

use tabz_core::{approx_eq, ranges_overlap, Panel};

use crate::Handle;

/// Whether `panel` abuts `handle` and shares part of its orthogonal span.
///
/// Only bounds are consulted, so panels from different branches of the tree
/// that touch the same handle line are all reported.
pub fn check_collision(handle: &Handle, panel: &Panel, vertical: bool) -> bool {
    let line = handle.bounds.start(vertical);
    let bounds = &panel.bounds;

    let abuts = approx_eq(bounds.start(vertical), line) || approx_eq(bounds.end(vertical), line);
    abuts
        && ranges_overlap(
            bounds.start(!vertical),
            bounds.end(!vertical),
            handle.bounds.start(!vertical),
            handle.bounds.end(!vertical),
        )
}

/// Indices of every panel colliding with `handle`
pub fn affected_panels(panels: &[Panel], handle: &Handle) -> Vec<usize> {
    panels
        .iter()
        .enumerate()
        .filter(|(_, panel)| check_collision(handle, panel, handle.vertical))
        .map(|(i, _)| i)
        .collect()
}
