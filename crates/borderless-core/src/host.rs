use crate::{MonitorArea, Point, Rect, ShadowStyle, Size, Thickness};

/// A boxed error type for platform operations.
///
/// Geometry handling never fails loudly; this is only used where the
/// platform layer creates or hooks windows.
pub type ChromeResult<T> = Result<T, Box<dyn std::error::Error>>;

/// The state a window is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// The window surface the chrome reads and mutates.
///
/// Each platform crate (e.g. `borderless-windows`) wraps its native
/// window in an implementation of this trait. Every method takes `&self`:
/// the native move loop runs nested inside a drag handler and keeps
/// delivering position messages, so implementations must tolerate being
/// called reentrantly.
pub trait HostWindow {
    /// Native handle, used to resolve the window's monitor.
    fn handle(&self) -> usize;

    fn state(&self) -> WindowState;

    fn set_state(&self, state: WindowState);

    /// Current position and size in screen pixels.
    fn bounds(&self) -> Rect;

    fn set_left(&self, left: i32);

    fn set_top(&self, top: i32);

    fn set_size(&self, width: i32, height: i32);

    /// Last known normal-state bounds, kept by the host while the window
    /// is minimized, maximized, or snapped.
    fn restore_bounds(&self) -> Rect;

    /// Smallest size the user may resize the window to.
    fn min_size(&self) -> Size;

    /// Writes the invisible resize margins.
    fn set_resize_border(&self, thickness: Thickness);

    /// The attached shadow effect, if any.
    fn shadow(&self) -> Option<ShadowStyle>;

    fn set_shadow(&self, style: ShadowStyle);

    /// Shows or hides the attached shadow.
    fn set_shadow_visible(&self, visible: bool);

    /// Writes the visible border that carries the shadow halo.
    fn set_border_thickness(&self, thickness: Thickness);

    fn opacity(&self) -> f64;

    fn set_opacity(&self, opacity: f64);

    /// Whether the window can be drawn translucent.
    fn allows_transparency(&self) -> bool;

    /// Converts a window-relative point to screen coordinates.
    fn client_to_screen(&self, point: Point) -> Point;

    /// Runs the host's interactive move loop. Blocks until the user
    /// releases the mouse.
    fn drag_move(&self);

    fn close(&self);
}

/// Looks up monitor geometry for a window.
pub trait MonitorResolver {
    /// Returns the area of the monitor nearest to the window, or `None`
    /// when the platform cannot resolve it (e.g. the handle is not
    /// realized yet).
    fn nearest(&self, handle: usize) -> Option<MonitorArea>;

    /// Size of the bounding box of all connected monitors.
    fn virtual_screen(&self) -> Size;
}

/// Read-only view of a chrome's snap flags.
pub trait ChromeState {
    /// Whether the window is snapped to a side or spans monitors.
    fn is_snapped(&self) -> bool;

    /// Whether the next drag event is being swallowed after a
    /// double-click maximize.
    fn is_maximizing(&self) -> bool;

    /// Width of each resize margin on a floating window.
    fn resize_border_width(&self) -> i32;
}
