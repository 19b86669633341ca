//! Basic geometric types used by the lineage layout.
//!
//! All coordinates are `f32`. A [`Point`] placed by the layout is the center
//! of a node box, so [`Point::to_bounds`] spreads a [`Size`] evenly around it.

use serde::Serialize;

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Gaps left between neighbouring node boxes.
///
/// `horizontal` separates consecutive levels, `vertical` separates siblings
/// stacked within one level.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spacing {
    horizontal: f32,
    vertical: f32,
}

impl Spacing {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the gap between two levels
    pub fn horizontal(self) -> f32 {
        self.horizontal
    }

    /// Returns the gap between two nodes of the same level
    pub fn vertical(self) -> f32 {
        self.vertical
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the smallest bounds containing both `self` and `other`
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true if the two bounds share any interior area
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_to_bounds_is_centered() {
        let bounds = Point::new(10.0, -4.0).to_bounds(Size::new(20.0, 8.0));

        assert_approx_eq!(f32, bounds.min_x(), 0.0);
        assert_approx_eq!(f32, bounds.max_x(), 20.0);
        assert_approx_eq!(f32, bounds.min_y(), -8.0);
        assert_approx_eq!(f32, bounds.max_y(), 0.0);
    }

    #[test]
    fn test_bounds_merge() {
        let a = Point::new(0.0, 0.0).to_bounds(Size::new(2.0, 2.0));
        let b = Point::new(10.0, 5.0).to_bounds(Size::new(2.0, 2.0));
        let merged = a.merge(&b);

        assert_approx_eq!(f32, merged.min_x(), -1.0);
        assert_approx_eq!(f32, merged.min_y(), -1.0);
        assert_approx_eq!(f32, merged.width(), 12.0);
        assert_approx_eq!(f32, merged.height(), 7.0);
    }

    #[test]
    fn test_bounds_overlap_excludes_touching_edges() {
        let size = Size::new(10.0, 10.0);
        let a = Point::new(0.0, 0.0).to_bounds(size);
        let touching = Point::new(0.0, 10.0).to_bounds(size);
        let crossing = Point::new(5.0, 5.0).to_bounds(size);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
    }

    #[test]
    fn test_point_serializes_as_xy_object() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    }
}
