//! Monitor geometry.
//!
//! A [`MonitorArea`] describes the monitor a window currently sits on:
//! its full display bounds, its work area (display minus taskbar and
//! docked toolbars), and how far the work area is pushed in from the
//! display's top-left corner. Areas are built fresh for every message
//! because a window can cross monitors mid-drag.

use serde::Serialize;

use crate::Point;

/// An axis-aligned region in virtual-screen coordinates.
///
/// `width` and `height` are always the absolute edge differences, so a
/// region built from inverted edges still reports non-negative sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Builds a region from its four edges (Win32 `RECT` order).
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: (right - left).abs(),
            height: (bottom - top).abs(),
        }
    }
}

/// Display region, work region, and the work region's offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitorArea {
    /// Full monitor bounds.
    pub display: Region,
    /// Monitor bounds excluding the taskbar and docked toolbars.
    pub work: Region,
    /// Absolute displacement of the work area's top-left corner from the
    /// display's, i.e. the thickness of a taskbar docked left or top.
    pub offset: Point,
}

impl MonitorArea {
    pub fn new(display: Region, work: Region) -> Self {
        Self {
            display,
            work,
            offset: Point::new(
                (work.left - display.left).abs(),
                (work.top - display.top).abs(),
            ),
        }
    }

    /// Horizontal space taken by docked UI (a left or right taskbar).
    pub fn taskbar_width(&self) -> i32 {
        self.display.width - self.work.width
    }

    /// Vertical space taken by docked UI (a top or bottom taskbar).
    pub fn taskbar_height(&self) -> i32 {
        self.display.height - self.work.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_sizes_are_absolute_edge_differences() {
        // Arrange / Act
        let region = Region::from_edges(1920, 1080, 0, 0);

        // Assert
        assert_eq!(region.width, 1920);
        assert_eq!(region.height, 1080);
    }

    #[test]
    fn offset_is_taskbar_thickness_on_leading_edges() {
        // Arrange
        let display = Region::from_edges(0, 0, 1920, 1080);
        let work = Region::from_edges(48, 30, 1920, 1080);

        // Act
        let area = MonitorArea::new(display, work);

        // Assert
        assert_eq!(area.offset, Point::new(48, 30));
        assert_eq!(area.taskbar_width(), 48);
        assert_eq!(area.taskbar_height(), 30);
    }

    #[test]
    fn offset_is_never_negative_on_secondary_monitor() {
        // Arrange: monitor left of the primary, taskbar on the left.
        let display = Region::from_edges(-1920, 0, 0, 1080);
        let work = Region::from_edges(-1872, 0, 0, 1080);

        // Act
        let area = MonitorArea::new(display, work);

        // Assert
        assert_eq!(area.offset, Point::new(48, 0));
        assert_eq!(area.work.width, 1872);
    }

    #[test]
    fn bottom_taskbar_leaves_zero_offset() {
        // Arrange
        let display = Region::from_edges(0, 0, 1920, 1080);
        let work = Region::from_edges(0, 0, 1920, 1040);

        // Act
        let area = MonitorArea::new(display, work);

        // Assert
        assert_eq!(area.offset, Point::new(0, 0));
        assert_eq!(area.taskbar_height(), 40);
        assert_eq!((area.work.width, area.work.height), (1920, 1040));
    }
}
