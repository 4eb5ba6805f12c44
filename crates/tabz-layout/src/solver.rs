// ABOUTME: Constraint solving for a dragged handle.
// ABOUTME: Clamps the drag, applies it and drags perpendicular handles along.

use tabz_core::{approx_eq, ranges_overlap, tolerance, Bounds};

use crate::{Handle, HandleId};

/// Move `dragged` towards `proposed` within the allowed range.
///
/// The handle stays at least `min_size` away from the surface edges and from
/// every parallel handle sharing part of its span, so handles never cross and
/// no panel drops below `min_size`. When the room between those limits is too
/// small the handle is parked halfway between them.
///
/// Returns the dragged handle first, then each perpendicular handle whose end
/// was attached to the old line and has been stretched to follow it.
pub fn check_and_resize_handles(
    handles: &mut [Handle],
    dragged: HandleId,
    proposed: Bounds,
    surface: Bounds,
    min_size: f32,
) -> Vec<HandleId> {
    let Some(current) = handles.get(dragged.0).copied() else {
        tracing::warn!("Resize requested for unknown handle {:?}", dragged);
        return Vec::new();
    };
    let vertical = current.vertical;
    let previous = current.position();
    let (span_start, span_end) = current.span();

    let target = proposed.start(vertical);
    if !target.is_finite() || approx_eq(target, previous) {
        return vec![dragged];
    }

    let mut lower = surface.start(vertical);
    let mut upper = surface.end(vertical);
    for (i, other) in handles.iter().enumerate() {
        if i == dragged.0 || other.vertical != vertical {
            continue;
        }
        let (start, end) = other.span();
        if !ranges_overlap(start, end, span_start, span_end) {
            continue;
        }
        let line = other.position();
        if approx_eq(line, previous) {
            continue;
        }
        if line < previous {
            lower = lower.max(line);
        } else {
            upper = upper.min(line);
        }
    }

    let (min, max) = (lower + min_size, upper - min_size);
    let position = if min <= max {
        target.clamp(min, max)
    } else {
        (lower + upper) / 2.0
    };
    if position != target {
        tracing::debug!(
            "Clamped handle {:?} drag from {} to {} (allowed {}..{})",
            dragged,
            target,
            position,
            min,
            max
        );
    }

    let delta = position - previous;
    handles[dragged.0].set_position(position);
    let mut moved = vec![dragged];
    if delta == 0.0 {
        return moved;
    }

    for (i, other) in handles.iter_mut().enumerate() {
        if other.vertical == vertical {
            continue;
        }
        let line = other.position();
        if line <= span_start + tolerance(line, span_start)
            || line >= span_end - tolerance(line, span_end)
        {
            continue;
        }
        let bounds = &mut other.bounds;
        let attached = if approx_eq(bounds.start(vertical), previous) {
            move_start(bounds, vertical, position);
            true
        } else if approx_eq(bounds.end(vertical), previous) {
            move_end(bounds, vertical, position);
            true
        } else {
            false
        };
        if attached {
            moved.push(HandleId(i));
        }
    }

    moved
}

/// Move the leading edge onto `position`, keeping the trailing edge
fn move_start(bounds: &mut Bounds, vertical: bool, position: f32) {
    if vertical {
        bounds.width = bounds.right() - position;
        bounds.left = position;
    } else {
        bounds.height = bounds.bottom() - position;
        bounds.top = position;
    }
}

/// Move the trailing edge onto `position`, keeping the leading edge
fn move_end(bounds: &mut Bounds, vertical: bool, position: f32) {
    if vertical {
        bounds.width = position - bounds.left;
    } else {
        bounds.height = position - bounds.top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(x: f32, top: f32, height: f32) -> Handle {
        Handle {
            vertical: true,
            bounds: Bounds::new(x, top, 0.0, height),
        }
    }

    fn horizontal(y: f32, left: f32, width: f32) -> Handle {
        Handle {
            vertical: false,
            bounds: Bounds::new(left, y, width, 0.0),
        }
    }

    fn to_x(x: f32) -> Bounds {
        Bounds::new(x, 0.0, 0.0, 0.0)
    }

    fn to_y(y: f32) -> Bounds {
        Bounds::new(0.0, y, 0.0, 0.0)
    }

    const SURFACE: Bounds = Bounds::new(0.0, 0.0, 300.0, 200.0);

    #[test]
    fn free_drag_is_applied_verbatim() {
        let mut handles = vec![vertical(100.0, 0.0, 200.0)];
        let moved = check_and_resize_handles(&mut handles, HandleId(0), to_x(120.0), SURFACE, 20.0);
        assert_eq!(moved, vec![HandleId(0)]);
        assert_eq!(handles[0].position(), 120.0);
    }

    #[test]
    fn drag_stops_short_of_surface_edges() {
        let mut handles = vec![vertical(100.0, 0.0, 200.0)];
        check_and_resize_handles(&mut handles, HandleId(0), to_x(-50.0), SURFACE, 20.0);
        assert_eq!(handles[0].position(), 20.0);
        check_and_resize_handles(&mut handles, HandleId(0), to_x(900.0), SURFACE, 20.0);
        assert_eq!(handles[0].position(), 280.0);
    }

    #[test]
    fn drag_never_crosses_a_parallel_handle() {
        let mut handles = vec![vertical(100.0, 0.0, 200.0), vertical(200.0, 0.0, 200.0)];
        check_and_resize_handles(&mut handles, HandleId(0), to_x(250.0), SURFACE, 20.0);
        assert_eq!(handles[0].position(), 180.0);
        assert_eq!(handles[1].position(), 200.0);

        check_and_resize_handles(&mut handles, HandleId(1), to_x(10.0), SURFACE, 20.0);
        assert_eq!(handles[1].position(), 200.0);
    }

    #[test]
    fn parallel_handle_outside_span_does_not_limit() {
        // Second handle only splits the bottom half, so the top-half handle may pass it.
        let mut handles = vec![vertical(100.0, 0.0, 100.0), vertical(150.0, 100.0, 100.0)];
        check_and_resize_handles(&mut handles, HandleId(0), to_x(250.0), SURFACE, 20.0);
        assert_eq!(handles[0].position(), 250.0);
    }

    #[test]
    fn cramped_surface_parks_handle_between_limits() {
        let surface = Bounds::new(0.0, 0.0, 30.0, 100.0);
        let mut handles = vec![vertical(15.0, 0.0, 100.0)];
        check_and_resize_handles(&mut handles, HandleId(0), to_x(5.0), surface, 20.0);
        assert_eq!(handles[0].position(), 15.0);
    }

    #[test]
    fn drag_to_current_position_moves_nothing() {
        let mut handles = vec![vertical(100.0, 0.0, 200.0), horizontal(120.0, 100.0, 200.0)];
        let before = handles.clone();
        let current = handles[0].bounds;
        let moved = check_and_resize_handles(&mut handles, HandleId(0), current, SURFACE, 20.0);
        assert_eq!(moved, vec![HandleId(0)]);
        assert_eq!(handles, before);
    }

    #[test]
    fn non_finite_target_is_ignored() {
        let mut handles = vec![vertical(100.0, 0.0, 200.0)];
        check_and_resize_handles(&mut handles, HandleId(0), to_x(f32::NAN), SURFACE, 20.0);
        assert_eq!(handles[0].position(), 100.0);
    }

    #[test]
    fn unknown_handle_is_a_no_op() {
        let mut handles = vec![vertical(100.0, 0.0, 200.0)];
        let moved = check_and_resize_handles(&mut handles, HandleId(3), to_x(50.0), SURFACE, 20.0);
        assert!(moved.is_empty());
        assert_eq!(handles[0].position(), 100.0);
    }

    #[test]
    fn perpendicular_handles_follow_the_line() {
        let mut handles = vec![
            vertical(100.0, 0.0, 200.0),
            horizontal(120.0, 100.0, 200.0),
            horizontal(60.0, 0.0, 100.0),
            vertical(180.0, 0.0, 120.0),
        ];
        let moved = check_and_resize_handles(&mut handles, HandleId(0), to_x(130.0), SURFACE, 20.0);
        assert_eq!(moved, vec![HandleId(0), HandleId(1), HandleId(2)]);
        assert_eq!(handles[1].bounds, Bounds::new(130.0, 120.0, 170.0, 0.0));
        assert_eq!(handles[2].bounds, Bounds::new(0.0, 60.0, 130.0, 0.0));
        assert_eq!(handles[3].position(), 180.0);
    }

    #[test]
    fn horizontal_drag_stretches_vertical_handles_ending_on_it() {
        let mut handles = vec![
            vertical(100.0, 0.0, 200.0),
            horizontal(120.0, 100.0, 200.0),
            vertical(180.0, 0.0, 120.0),
        ];
        let moved = check_and_resize_handles(&mut handles, HandleId(1), to_y(50.0), SURFACE, 20.0);
        assert_eq!(moved, vec![HandleId(1), HandleId(2)]);
        assert_eq!(handles[1].position(), 50.0);
        assert_eq!(handles[2].bounds, Bounds::new(180.0, 0.0, 0.0, 50.0));
        assert_eq!(handles[0].bounds, Bounds::new(100.0, 0.0, 0.0, 200.0));
    }
}
