//! In-memory host window and monitor resolver for unit tests.

use std::cell::{Cell, RefCell};

use crate::{
    HostWindow, MonitorArea, MonitorResolver, Point, Rect, Region, ShadowStyle, Size, Thickness,
    WindowState,
};

/// One 1920x1080 monitor with a 40px bottom taskbar.
pub(crate) struct FixedMonitors {
    pub(crate) area: Option<MonitorArea>,
    pub(crate) screen: Size,
    pub(crate) queries: Cell<u32>,
}

impl FixedMonitors {
    pub(crate) fn single() -> Self {
        Self {
            area: Some(MonitorArea::new(
                Region::from_edges(0, 0, 1920, 1080),
                Region::from_edges(0, 0, 1920, 1040),
            )),
            screen: Size::new(1920, 1080),
            queries: Cell::new(0),
        }
    }

    /// A resolver whose monitor lookup always fails.
    pub(crate) fn unresolvable() -> Self {
        Self {
            area: None,
            ..Self::single()
        }
    }
}

impl MonitorResolver for FixedMonitors {
    fn nearest(&self, _handle: usize) -> Option<MonitorArea> {
        self.queries.set(self.queries.get() + 1);
        self.area
    }

    fn virtual_screen(&self) -> Size {
        self.screen
    }
}

/// Mimics a host window: maximizing remembers the normal bounds and
/// moving a maximized window edits those remembered bounds.
pub(crate) struct FakeWindow {
    state: Cell<WindowState>,
    bounds: Cell<Rect>,
    restore: Cell<Rect>,
    maximized: Rect,
    min: Size,
    resize_border: Cell<Thickness>,
    border: Cell<Thickness>,
    shadow: Cell<Option<ShadowStyle>>,
    shadow_attaches: Cell<u32>,
    shadow_visible: Cell<bool>,
    opacity: Cell<f64>,
    transparent: Cell<bool>,
    drags: Cell<u32>,
    drag_opacity: Cell<Option<f64>>,
    drag_hook: RefCell<Option<Box<dyn Fn()>>>,
    closed: Cell<bool>,
}

impl FakeWindow {
    pub(crate) fn normal(x: i32, y: i32, width: i32, height: i32) -> Self {
        let bounds = Rect::new(x, y, width, height);
        Self {
            state: Cell::new(WindowState::Normal),
            bounds: Cell::new(bounds),
            restore: Cell::new(bounds),
            maximized: Rect::new(0, 0, 1920, 1040),
            min: Size::new(200, 100),
            resize_border: Cell::new(Thickness::ZERO),
            border: Cell::new(Thickness::ZERO),
            shadow: Cell::new(None),
            shadow_attaches: Cell::new(0),
            shadow_visible: Cell::new(false),
            opacity: Cell::new(1.0),
            transparent: Cell::new(false),
            drags: Cell::new(0),
            drag_opacity: Cell::new(None),
            drag_hook: RefCell::new(None),
            closed: Cell::new(false),
        }
    }

    /// A window the host snapped to `bounds`, remembering `before`.
    pub(crate) fn snapped(bounds: Rect, before: Rect) -> Self {
        let window = Self::normal(bounds.x, bounds.y, bounds.width, bounds.height);
        window.restore.set(before);
        window
    }

    pub(crate) fn resize_border(&self) -> Thickness {
        self.resize_border.get()
    }

    pub(crate) fn border_thickness(&self) -> Thickness {
        self.border.get()
    }

    pub(crate) fn shadow_attach_count(&self) -> u32 {
        self.shadow_attaches.get()
    }

    pub(crate) fn shadow_visible(&self) -> bool {
        self.shadow_visible.get()
    }

    pub(crate) fn drag_count(&self) -> u32 {
        self.drags.get()
    }

    pub(crate) fn opacity_during_drag(&self) -> Option<f64> {
        self.drag_opacity.get()
    }

    pub(crate) fn set_transparent(&self, transparent: bool) {
        self.transparent.set(transparent);
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Runs `hook` from inside the next move loops, like a host
    /// delivering messages mid-drag.
    pub(crate) fn on_drag_move(&self, hook: impl Fn() + 'static) {
        *self.drag_hook.borrow_mut() = Some(Box::new(hook));
    }

    /// Bounds the host would restore to, whichever state it is in.
    fn normal_bounds(&self) -> Rect {
        if self.state.get() == WindowState::Normal {
            self.bounds.get()
        } else {
            self.restore.get()
        }
    }

    fn edit_normal_bounds(&self, edit: impl FnOnce(&mut Rect)) {
        let mut rect = self.normal_bounds();
        edit(&mut rect);
        if self.state.get() == WindowState::Normal {
            self.bounds.set(rect);
        } else {
            self.restore.set(rect);
        }
    }
}

impl HostWindow for FakeWindow {
    fn handle(&self) -> usize {
        0x1234
    }

    fn state(&self) -> WindowState {
        self.state.get()
    }

    fn set_state(&self, state: WindowState) {
        let previous = self.state.get();
        if previous == state {
            return;
        }
        if previous == WindowState::Normal {
            self.restore.set(self.bounds.get());
        }
        match state {
            WindowState::Normal => self.bounds.set(self.restore.get()),
            WindowState::Maximized => self.bounds.set(self.maximized),
            WindowState::Minimized => {}
        }
        self.state.set(state);
    }

    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn set_left(&self, left: i32) {
        self.edit_normal_bounds(|r| r.x = left);
    }

    fn set_top(&self, top: i32) {
        self.edit_normal_bounds(|r| r.y = top);
    }

    fn set_size(&self, width: i32, height: i32) {
        self.edit_normal_bounds(|r| {
            r.width = width;
            r.height = height;
        });
    }

    fn restore_bounds(&self) -> Rect {
        self.restore.get()
    }

    fn min_size(&self) -> Size {
        self.min
    }

    fn set_resize_border(&self, thickness: Thickness) {
        self.resize_border.set(thickness);
    }

    fn shadow(&self) -> Option<ShadowStyle> {
        self.shadow.get()
    }

    fn set_shadow(&self, style: ShadowStyle) {
        self.shadow_attaches.set(self.shadow_attaches.get() + 1);
        self.shadow.set(Some(style));
    }

    fn set_shadow_visible(&self, visible: bool) {
        self.shadow_visible.set(visible);
    }

    fn set_border_thickness(&self, thickness: Thickness) {
        self.border.set(thickness);
    }

    fn opacity(&self) -> f64 {
        self.opacity.get()
    }

    fn set_opacity(&self, opacity: f64) {
        self.opacity.set(opacity);
    }

    fn allows_transparency(&self) -> bool {
        self.transparent.get()
    }

    fn client_to_screen(&self, point: Point) -> Point {
        let bounds = self.bounds.get();
        Point::new(bounds.x + point.x, bounds.y + point.y)
    }

    fn drag_move(&self) {
        self.drags.set(self.drags.get() + 1);
        self.drag_opacity.set(Some(self.opacity.get()));
        if let Some(hook) = self.drag_hook.borrow().as_ref() {
            hook();
        }
    }

    fn close(&self) {
        self.closed.set(true);
    }
}
