//! Resize-border computation.
//!
//! A borderless window resizes through invisible margins along its
//! edges. An edge that touches the monitor or virtual-screen boundary
//! gets no margin, so a window flush against the screen never exposes a
//! resize strip that lies outside the visible area.

use serde::Serialize;

use crate::{MonitorArea, Rect, Size};

/// Per-edge widths, used for resize margins and the shadow border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Thickness {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Thickness {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn uniform(width: i32) -> Self {
        Self {
            left: width,
            top: width,
            right: width,
            bottom: width,
        }
    }

    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Computes which edges of `bounds` accept resize-drag input.
///
/// Left and top compare against the work-area offset; right and bottom
/// compare against the virtual-screen extent plus any taskbar thickness.
/// Both comparisons are inclusive, so an edge exactly on the boundary
/// gets zero width.
pub fn compute(
    bounds: Rect,
    area: &MonitorArea,
    virtual_screen: Size,
    border_width: i32,
) -> Thickness {
    let edge = |flush: bool| if flush { 0 } else { border_width };

    Thickness {
        left: edge(bounds.x <= area.offset.x),
        top: edge(bounds.y <= area.offset.y),
        right: edge(bounds.right() + area.taskbar_width() >= virtual_screen.width),
        bottom: edge(bounds.bottom() + area.taskbar_height() >= virtual_screen.height),
    }
}
