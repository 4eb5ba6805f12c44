// ABOUTME: Rectangle value type shared by panels, handles and the surface.
// ABOUTME: Provides edge accessors, unions and tolerant comparisons.

use serde::{Deserialize, Serialize};

/// Absolute floor of the tolerance used when comparing edges.
pub const EDGE_TOLERANCE: f32 = 1e-3;

/// Tolerance per unit of coordinate magnitude, so edges far from the origin
/// still compare equal after a few rounding steps.
pub const RELATIVE_TOLERANCE: f32 = 1e-5;

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Leading edge along the axis a handle of the given orientation moves on
    pub fn start(&self, vertical: bool) -> f32 {
        if vertical {
            self.left
        } else {
            self.top
        }
    }

    /// Trailing edge along the axis a handle of the given orientation moves on
    pub fn end(&self, vertical: bool) -> f32 {
        if vertical {
            self.right()
        } else {
            self.bottom()
        }
    }

    /// Size along the axis a handle of the given orientation moves on
    pub fn extent(&self, vertical: bool) -> f32 {
        if vertical {
            self.width
        } else {
            self.height
        }
    }

    /// Smallest rectangle covering every input, or None for an empty input
    pub fn union<'a>(all: impl IntoIterator<Item = &'a Bounds>) -> Option<Bounds> {
        let mut iter = all.into_iter();
        let first = *iter.next()?;
        let (mut left, mut top, mut right, mut bottom) =
            (first.left, first.top, first.right(), first.bottom());
        for b in iter {
            left = left.min(b.left);
            top = top.min(b.top);
            right = right.max(b.right());
            bottom = bottom.max(b.bottom());
        }
        Some(Bounds::new(left, top, right - left, bottom - top))
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Component-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Bounds) -> bool {
        approx_eq(self.left, other.left)
            && approx_eq(self.top, other.top)
            && approx_eq(self.width, other.width)
            && approx_eq(self.height, other.height)
    }
}

/// Allowed difference between two coordinates of the given magnitudes
pub fn tolerance(a: f32, b: f32) -> f32 {
    EDGE_TOLERANCE.max(RELATIVE_TOLERANCE * a.abs().max(b.abs()))
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= tolerance(a, b)
}

/// True when the open intervals [a0, a1) and [b0, b1) share a positive length
pub fn ranges_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> bool {
    a0 < b1 - tolerance(a0, b1) && b0 < a1 - tolerance(b0, a1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_all_rects() {
        let rects = [
            Bounds::new(0.0, 0.0, 50.0, 40.0),
            Bounds::new(50.0, 0.0, 30.0, 40.0),
            Bounds::new(0.0, 40.0, 80.0, 60.0),
        ];
        let u = Bounds::union(&rects).unwrap();
        assert!(u.approx_eq(&Bounds::new(0.0, 0.0, 80.0, 100.0)));
    }

    #[test]
    fn union_of_nothing_is_none() {
        let none: [Bounds; 0] = [];
        assert!(Bounds::union(&none).is_none());
    }

    #[test]
    fn axis_accessors_follow_orientation() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.start(true), 10.0);
        assert_eq!(b.end(true), 40.0);
        assert_eq!(b.extent(true), 30.0);
        assert_eq!(b.start(false), 20.0);
        assert_eq!(b.end(false), 60.0);
        assert_eq!(b.extent(false), 40.0);
    }

    #[test]
    fn tolerance_grows_with_coordinate_magnitude() {
        assert_eq!(tolerance(0.0, 10.0), EDGE_TOLERANCE);
        // One f32 step apart near 8631 px.
        assert!(approx_eq(8631.162, 8631.161));
        assert!(!approx_eq(100.0, 100.01));
        assert!(!approx_eq(14000.0, 14001.0));
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        assert!(!ranges_overlap(0.0, 50.0, 50.0, 100.0));
        assert!(ranges_overlap(0.0, 50.0, 49.0, 100.0));
        assert!(ranges_overlap(0.0, 100.0, 25.0, 75.0));
        assert!(!ranges_overlap(0.0, 8631.162, 8631.161, 14000.0));
    }
}
