//! The snap/drag state machine.
//!
//! [`Chrome`] reacts to decoded window messages and title-bar mouse
//! input to give a borderless window native snap, maximize, and resize
//! behaviour. Its states follow from the host's window state and the
//! snapped flag: normal, normal-snapped, and maximized. Minimized
//! windows are left alone.

use std::cell::Cell;

use crate::config::Config;
use crate::drag::{self, TitleBar};
use crate::message::{ChromeMessage, MinMaxInfo, SizeKind, WindowPos};
use crate::{
    ChromeState, HostWindow, MonitorArea, MonitorResolver, Point, Rect, ShadowStyle, Size,
    Thickness, WindowState, border, log_debug, shadow,
};

/// The two flags a chrome keeps for the lifetime of its window.
///
/// Stored in cells because handlers run reentrantly: the native move
/// loop started by a drag keeps dispatching position messages.
#[derive(Debug, Default)]
pub struct SnapState {
    snapped: Cell<bool>,
    maximizing: Cell<bool>,
}

/// A mouse move over the draggable title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEvent {
    /// Whether the primary button is held.
    pub button_pressed: bool,
    /// Cursor position relative to the window.
    pub cursor: Point,
    pub title_bar: TitleBar,
}

/// Returns whether a restored window of this size was snapped by the
/// host rather than resized by the user.
///
/// Covers side snaps (full work-area height) and windows spanning all
/// monitors in either axis. Comparisons are exact: one pixel short of
/// the work-area height counts as an ordinary resize.
pub fn is_snapped_size(width: i32, height: i32, area: &MonitorArea, screen: Size) -> bool {
    height == area.work.height || width == screen.width || height == screen.height
}

/// Custom window chrome for one window.
#[derive(Debug)]
pub struct Chrome<M> {
    monitors: M,
    state: SnapState,
    resize_border_width: i32,
    shadow: ShadowStyle,
    /// Opacity multiplier while dragging, `None` to keep the window opaque.
    drag_fade: Option<f64>,
}

impl<M: MonitorResolver> Chrome<M> {
    pub fn new(monitors: M, config: &Config) -> Self {
        Self::with_shadow(monitors, config, ShadowStyle::from_config(&config.shadow))
    }

    /// Builds a chrome whose shadow differs from the configured one, for
    /// hosts that draw the shadow themselves.
    ///
    /// The resize margins and the un-maximize correction follow
    /// `shadow.blur_radius`, not the radius in `config`.
    pub fn with_shadow(monitors: M, config: &Config, shadow: ShadowStyle) -> Self {
        Self {
            monitors,
            state: SnapState::default(),
            resize_border_width: config.resize.width_around(shadow.blur_radius),
            shadow,
            drag_fade: config
                .drag
                .transparency
                .then_some(config.drag.opacity_factor),
        }
    }

    #[cfg(test)]
    pub(crate) fn monitors(&self) -> &M {
        &self.monitors
    }

    /// Puts a freshly created window into its floating look: shadow on,
    /// resize margins on every edge, no flags set.
    pub fn attach<H: HostWindow + ?Sized>(&self, host: &H) {
        self.state.snapped.set(false);
        self.state.maximizing.set(false);
        shadow::enable(host, &self.shadow);
        self.enable_resize_border(host);
    }

    /// Routes a window message. Returns `true` when the message was
    /// answered and the host should not apply its default handling.
    pub fn dispatch<H: HostWindow + ?Sized>(&self, host: &H, message: &mut ChromeMessage) -> bool {
        match message {
            ChromeMessage::Size {
                kind: SizeKind::Restored,
                width,
                height,
            } => {
                self.on_restored(host, *width, *height);
                false
            }
            ChromeMessage::Size {
                kind: SizeKind::Maximized,
                ..
            } => {
                self.on_maximized(host);
                false
            }
            ChromeMessage::GetMinMaxInfo(info) => self.on_min_max_info(host, info),
            ChromeMessage::PosChanging(pos) | ChromeMessage::PosChanged(pos) => {
                self.on_pos_changed(host, pos);
                false
            }
            ChromeMessage::Size { .. } | ChromeMessage::Other(_) => false,
        }
    }

    /// Handles a mouse move over the title bar.
    ///
    /// With the button held, a maximized window first shrinks back under
    /// the cursor, then the host's move loop takes over. The event right
    /// after a double-click maximize is swallowed. Always reports the
    /// event as handled.
    pub fn on_drag<H: HostWindow + ?Sized>(&self, host: &H, event: &DragEvent) -> bool {
        if event.button_pressed && !self.state.maximizing.get() {
            if host.state() == WindowState::Maximized {
                self.unmaximize_under_cursor(host, event);
            }
            self.drag(host);
        }

        self.state.maximizing.set(false);
        true
    }

    /// Handles a double click on the title bar.
    ///
    /// A snapped window goes back to its pre-snap bounds. Anything else
    /// toggles between normal and maximized; maximizing arms the guard
    /// that swallows the stray move event following the click.
    pub fn restore_or_maximize<H: HostWindow + ?Sized>(&self, host: &H) {
        if self.state.snapped.get() {
            let restore = host.restore_bounds();
            host.set_top(restore.y);
            host.set_left(restore.x);
            host.set_size(restore.width, restore.height);
            host.set_state(WindowState::Normal);
            log_debug!("restored snapped window 0x{:X} to {restore:?}", host.handle());
            return;
        }

        host.set_state(toggled(host.state()));
        self.state
            .maximizing
            .set(host.state() == WindowState::Maximized);
    }

    pub fn minimize<H: HostWindow + ?Sized>(&self, host: &H) {
        host.set_state(WindowState::Minimized);
    }

    /// Caption-button maximize. Unlike the double click this never arms
    /// the drag guard.
    pub fn toggle_maximize<H: HostWindow + ?Sized>(&self, host: &H) {
        host.set_state(toggled(host.state()));
    }

    pub fn close<H: HostWindow + ?Sized>(&self, host: &H) {
        host.close();
    }

    fn on_restored<H: HostWindow + ?Sized>(&self, host: &H, width: i32, height: i32) {
        let Some(area) = self.monitor_area(host) else {
            return;
        };
        let screen = self.monitors.virtual_screen();
        let was_snapped = self.state.snapped.get();

        if is_snapped_size(width, height, &area, screen) {
            self.state.snapped.set(true);
            shadow::disable(host);

            let bounds = host.bounds();
            self.update_resize_border(host, &area, Rect::new(bounds.x, bounds.y, width, height));

            if !was_snapped {
                log_debug!("window 0x{:X} snapped at {width}x{height}", host.handle());
            }
        } else {
            self.state.snapped.set(false);
            shadow::enable(host, &self.shadow);
            self.enable_resize_border(host);

            if was_snapped {
                log_debug!("window 0x{:X} unsnapped at {width}x{height}", host.handle());
            }
        }
    }

    fn on_maximized<H: HostWindow + ?Sized>(&self, host: &H) {
        shadow::disable(host);
        host.set_resize_border(Thickness::ZERO);
        log_debug!("window 0x{:X} maximized", host.handle());
    }

    /// Maximized windows fill the work area of their own monitor.
    fn on_min_max_info<H: HostWindow + ?Sized>(&self, host: &H, info: &mut MinMaxInfo) -> bool {
        let Some(area) = self.monitor_area(host) else {
            return false;
        };

        let min = host.min_size();
        info.max_position = area.offset;
        info.max_size = Point::new(area.work.width, area.work.height);
        info.min_track_size = Point::new(min.width, min.height);
        true
    }

    /// Keeps a snapped window's resize margins in step while it moves.
    fn on_pos_changed<H: HostWindow + ?Sized>(&self, host: &H, pos: &WindowPos) {
        if !pos.moves() || !self.state.snapped.get() {
            return;
        }
        let Some(area) = self.monitor_area(host) else {
            return;
        };

        let bounds = if pos.resizes() {
            pos.bounds()
        } else {
            let current = host.bounds();
            Rect::new(pos.x, pos.y, current.width, current.height)
        };
        self.update_resize_border(host, &area, bounds);
    }

    fn unmaximize_under_cursor<H: HostWindow + ?Sized>(&self, host: &H, event: &DragEvent) {
        let Some(area) = self.monitor_area(host) else {
            return;
        };

        let cursor = host.client_to_screen(event.cursor);
        let result = drag::unmaximize_origin(
            cursor,
            &area,
            host.restore_bounds(),
            event.title_bar,
            self.shadow.blur_radius,
        );

        host.set_left(result.origin.x);
        host.set_top(result.origin.y);
        host.set_state(WindowState::Normal);
        log_debug!(
            "window 0x{:X} dragged out of maximize ({:?}) to {:?}",
            host.handle(),
            result.zone,
            result.origin
        );
    }

    fn drag<H: HostWindow + ?Sized>(&self, host: &H) {
        let opacity = host.opacity();
        let faded = match self.drag_fade {
            Some(factor) if host.allows_transparency() => {
                host.set_opacity(opacity * factor);
                true
            }
            _ => false,
        };

        host.drag_move();

        if faded {
            host.set_opacity(opacity);
        }
    }

    fn monitor_area<H: HostWindow + ?Sized>(&self, host: &H) -> Option<MonitorArea> {
        let area = self.monitors.nearest(host.handle());
        if area.is_none() {
            log_debug!("no monitor for window 0x{:X}, skipping", host.handle());
        }
        area
    }

    fn update_resize_border<H: HostWindow + ?Sized>(&self, host: &H, area: &MonitorArea, bounds: Rect) {
        let screen = self.monitors.virtual_screen();
        host.set_resize_border(border::compute(
            bounds,
            area,
            screen,
            self.resize_border_width,
        ));
    }

    fn enable_resize_border<H: HostWindow + ?Sized>(&self, host: &H) {
        host.set_resize_border(Thickness::uniform(self.resize_border_width));
    }
}

impl<M> ChromeState for Chrome<M> {
    fn is_snapped(&self) -> bool {
        self.state.snapped.get()
    }

    fn is_maximizing(&self) -> bool {
        self.state.maximizing.get()
    }

    fn resize_border_width(&self) -> i32 {
        self.resize_border_width
    }
}

fn toggled(state: WindowState) -> WindowState {
    if state == WindowState::Maximized {
        WindowState::Normal
    } else {
        WindowState::Maximized
    }
}

#[cfg(test)]
#[path = "chrome_tests.rs"]
mod tests;
