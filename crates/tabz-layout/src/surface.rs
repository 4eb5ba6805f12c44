// ABOUTME: Proportional re-derivation of the layout after a surface resize.
// ABOUTME: Scales panel and handle bounds from the old surface into the new one.

use tabz_core::{Bounds, Panel};

use crate::Handle;

/// Map `bounds` from `from` into `to`, keeping relative position and size.
///
/// Each edge is mapped on its own and sizes are taken from the mapped edges,
/// so rectangles sharing an edge before scaling still share it exactly.
pub fn scale_bounds(bounds: &Bounds, from: &Bounds, to: &Bounds) -> Bounds {
    let sx = to.width / from.width;
    let sy = to.height / from.height;
    let x = |v: f32| to.left + (v - from.left) * sx;
    let y = |v: f32| to.top + (v - from.top) * sy;
    let (left, top) = (x(bounds.left), y(bounds.top));
    Bounds::new(left, top, x(bounds.right()) - left, y(bounds.bottom()) - top)
}

/// Rescale every panel and handle from surface `from` to surface `to`.
///
/// Returns false and leaves everything untouched when `from` has no area,
/// since there is nothing to scale relative to.
pub fn rescale(
    panels: &mut [Panel],
    handles: &mut [Handle],
    from: &Bounds,
    to: &Bounds,
) -> bool {
    if from.width <= 0.0 || from.height <= 0.0 {
        tracing::warn!("Cannot rescale layout from empty surface {:?}", from);
        return false;
    }
    for panel in panels.iter_mut() {
        panel.bounds = scale_bounds(&panel.bounds, from, to);
    }
    for handle in handles.iter_mut() {
        handle.bounds = scale_bounds(&handle.bounds, from, to);
    }
    true
}
