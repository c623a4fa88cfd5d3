//! Classifies window-local points against the resize margins.

use crate::{Point, Size, Thickness};

/// The part of a borderless window a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Client,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Returns which resize edge or corner `point` hits.
///
/// `point` is relative to the window's top-left corner. Edges with a
/// zero margin never hit, so a snapped window only resizes along the
/// edges that still have room to grow.
pub fn hit_test(point: Point, size: Size, border: Thickness) -> Hit {
    let left = point.x < border.left;
    let right = point.x >= size.width - border.right;
    let top = point.y < border.top;
    let bottom = point.y >= size.height - border.bottom;

    match (left, right, top, bottom) {
        (true, _, true, _) => Hit::TopLeft,
        (_, true, true, _) => Hit::TopRight,
        (true, _, _, true) => Hit::BottomLeft,
        (_, true, _, true) => Hit::BottomRight,
        (true, ..) => Hit::Left,
        (_, true, ..) => Hit::Right,
        (_, _, true, _) => Hit::Top,
        (.., true) => Hit::Bottom,
        _ => Hit::Client,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size {
        width: 800,
        height: 600,
    };

    #[test]
    fn interior_point_is_client() {
        // Act / Assert
        assert_eq!(
            hit_test(Point::new(400, 300), SIZE, Thickness::uniform(6)),
            Hit::Client
        );
    }

    #[test]
    fn edges_and_corners_are_classified() {
        // Arrange
        let border = Thickness::uniform(6);

        // Act / Assert
        assert_eq!(hit_test(Point::new(2, 300), SIZE, border), Hit::Left);
        assert_eq!(hit_test(Point::new(797, 300), SIZE, border), Hit::Right);
        assert_eq!(hit_test(Point::new(400, 0), SIZE, border), Hit::Top);
        assert_eq!(hit_test(Point::new(400, 599), SIZE, border), Hit::Bottom);
        assert_eq!(hit_test(Point::new(0, 0), SIZE, border), Hit::TopLeft);
        assert_eq!(hit_test(Point::new(799, 0), SIZE, border), Hit::TopRight);
        assert_eq!(hit_test(Point::new(0, 599), SIZE, border), Hit::BottomLeft);
        assert_eq!(hit_test(Point::new(799, 599), SIZE, border), Hit::BottomRight);
    }

    #[test]
    fn zero_margin_edges_never_hit() {
        // Arrange: left-snapped window, only the right edge resizes.
        let border = Thickness::new(0, 0, 6, 0);

        // Act / Assert
        assert_eq!(hit_test(Point::new(0, 0), SIZE, border), Hit::Client);
        assert_eq!(hit_test(Point::new(0, 599), SIZE, border), Hit::Client);
        assert_eq!(hit_test(Point::new(798, 0), SIZE, border), Hit::Right);
    }
}
