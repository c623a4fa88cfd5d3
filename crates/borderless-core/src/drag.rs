//! Geometry for dragging a maximized window back to its normal size.
//!
//! When the user grabs the title bar of a maximized window and starts
//! moving, the window shrinks back to its restore size. The new left
//! edge is picked so the title bar stays under the cursor at the same
//! relative spot instead of jumping.

use crate::{MonitorArea, Point, Rect};

/// Horizontal placement of the draggable title bar inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TitleBar {
    /// Distance from the window's left edge to the title bar's.
    pub left_margin: i32,
    pub width: i32,
}

/// Which horizontal zone the cursor was in when un-maximizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragZone {
    /// Close to the monitor's leading edge: pin the window there.
    Leading,
    /// In the middle: keep the cursor's relative spot in the title bar.
    Interpolated,
    /// Close to the monitor's trailing edge: pin the window there.
    Trailing,
}

/// Result of [`unmaximize_origin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unmaximize {
    pub origin: Point,
    pub zone: DragZone,
}

/// Computes the top-left corner for a window leaving the maximized
/// state under the cursor.
///
/// `cursor` is in screen coordinates. `restore` holds the window's
/// pre-maximize bounds. `shadow_radius` is subtracted from both axes so
/// the visible frame, not the transparent shadow halo, lines up with the
/// work area.
pub fn unmaximize_origin(
    cursor: Point,
    area: &MonitorArea,
    restore: Rect,
    title_bar: TitleBar,
    shadow_radius: i32,
) -> Unmaximize {
    let work = area.work;
    let right_margin = work.width - title_bar.width - title_bar.left_margin;
    let restore_bar_width = restore.width - title_bar.left_margin - right_margin;

    let left_bound = work.left + restore.width - right_margin;
    let right_bound = work.left + work.width - restore.width;

    let (left, zone) = if cursor.x < left_bound {
        (work.left, DragZone::Leading)
    } else if cursor.x < right_bound {
        // Cursor position inside the maximized title bar, as a fraction
        // of its width, mapped onto the restored title bar.
        let in_bar = cursor.x - work.left - title_bar.left_margin;
        let scaled = if title_bar.width > 0 {
            (f64::from(restore_bar_width) * f64::from(in_bar) / f64::from(title_bar.width)).round()
                as i32
        } else {
            0
        };
        (
            cursor.x - title_bar.left_margin - scaled,
            DragZone::Interpolated,
        )
    } else {
        (right_bound, DragZone::Trailing)
    };

    Unmaximize {
        origin: Point::new(left - shadow_radius, work.top - shadow_radius),
        zone,
    }
}
