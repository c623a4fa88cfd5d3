//! Window messages the chrome reacts to.
//!
//! Platform crates decode their raw message stream into these variants
//! and hand them to [`Chrome::dispatch`](crate::Chrome::dispatch).
//! Anything the chrome does not care about becomes [`ChromeMessage::Other`].

use crate::{Point, Rect};

/// `SWP_NOSIZE`: the size part of a position change is ignored.
pub const SWP_NOSIZE: u32 = 0x0001;

/// `SWP_NOMOVE`: the position part of a position change is ignored.
pub const SWP_NOMOVE: u32 = 0x0002;

/// What kind of resize a size notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    /// Settled into a normal (non-minimized, non-maximized) size.
    Restored,
    Minimized,
    Maximized,
    /// Notifications about other windows being shown or hidden.
    Other(u32),
}

impl SizeKind {
    /// Maps the `WM_SIZE` `wParam` value.
    pub fn from_raw(value: u32) -> Self {
        match value {
            0 => Self::Restored,
            1 => Self::Minimized,
            2 => Self::Maximized,
            other => Self::Other(other),
        }
    }
}

/// Splits a packed `WM_SIZE` `lParam` into `(width, height)`.
///
/// Width is the low word and height the high word, both unsigned.
pub fn split_size(lparam: isize) -> (i32, i32) {
    let packed = lparam as usize;
    let width = (packed & 0xFFFF) as i32;
    let height = ((packed >> 16) & 0xFFFF) as i32;
    (width, height)
}

/// Mutable answer to a maximize-bounds query (`MINMAXINFO`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinMaxInfo {
    pub max_size: Point,
    pub max_position: Point,
    pub min_track_size: Point,
    pub max_track_size: Point,
}

/// A pending or completed position change (`WINDOWPOS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPos {
    pub x: i32,
    pub y: i32,
    pub cx: i32,
    pub cy: i32,
    pub flags: u32,
}

impl WindowPos {
    /// Whether the change carries a new position.
    pub fn moves(&self) -> bool {
        self.flags & SWP_NOMOVE == 0
    }

    /// Whether the change carries a new size.
    pub fn resizes(&self) -> bool {
        self.flags & SWP_NOSIZE == 0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.cx, self.cy)
    }
}

/// A decoded window message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeMessage {
    /// The window was resized or changed state.
    Size {
        kind: SizeKind,
        width: i32,
        height: i32,
    },

    /// The host asks where and how large a maximized window should be.
    /// The handler writes its answer into the payload.
    GetMinMaxInfo(MinMaxInfo),

    /// The window is about to move or resize.
    PosChanging(WindowPos),

    /// The window has moved or resized.
    PosChanged(WindowPos),

    /// A message code the chrome does not handle.
    Other(u32),
}
