use std::cell::Cell;
use std::mem;

use borderless_core::{
    HostWindow, Point, Rect, ShadowStyle, Size, Thickness, WindowState, log_debug, log_warn,
};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Dwm::DwmExtendFrameIntoClientArea;
use windows::Win32::Graphics::Gdi::ClientToScreen;
use windows::Win32::UI::Controls::MARGINS;
use windows::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GetCursorPos, GetLayeredWindowAttributes, GetWindowLongPtrW,
    GetWindowPlacement, GetWindowRect, HTCAPTION, IsIconic, IsZoomed, LWA_ALPHA, PostMessageW,
    SET_WINDOW_POS_FLAGS, SW_MAXIMIZE, SW_MINIMIZE, SW_RESTORE, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOSIZE, SWP_NOZORDER,
    SendMessageW, SetLayeredWindowAttributes, SetWindowPlacement, SetWindowPos, ShowWindow,
    WINDOWPLACEMENT, WM_CLOSE, WM_NCLBUTTONDOWN, WS_EX_LAYERED,
};

use crate::monitor;

/// A borderless window on the Windows platform, wrapping a Win32 `HWND`.
///
/// Position and state go straight to the OS. The resize margins and the
/// shadow live here, because Win32 has no such properties: the hook
/// reads the margins back when answering `WM_NCHITTEST`.
///
/// The shadow is the one DWM draws outside the window, so the window has
/// no halo band of its own. Pair it with `ShadowStyle::compositor()`.
#[derive(Debug)]
pub struct Win32Window {
    hwnd: HWND,
    min_size: Size,
    resize_border: Cell<Thickness>,
    shadow: Cell<Option<ShadowStyle>>,
    shadow_visible: Cell<Option<bool>>,
}

impl Win32Window {
    pub fn new(hwnd: HWND, min_size: Size) -> Self {
        Self {
            hwnd,
            min_size,
            resize_border: Cell::new(Thickness::ZERO),
            shadow: Cell::new(None),
            shadow_visible: Cell::new(None),
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// The margins last written by the chrome.
    pub fn resize_border(&self) -> Thickness {
        self.resize_border.get()
    }

    fn placement(&self) -> Option<WINDOWPLACEMENT> {
        let mut placement = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        // SAFETY: length is set as the API requires.
        unsafe { GetWindowPlacement(self.hwnd, &mut placement) }.ok()?;
        Some(placement)
    }

    /// Edits the remembered normal bounds of a maximized or minimized
    /// window, so the next restore lands there.
    fn edit_normal_bounds(&self, edit: impl FnOnce(&mut Rect)) {
        let Some(mut placement) = self.placement() else {
            log_warn!("no placement for window 0x{:X}", self.handle());
            return;
        };
        let origin = monitor::primary_work_origin();
        let rc = placement.rcNormalPosition;
        let mut rect = Rect::new(
            rc.left + origin.x,
            rc.top + origin.y,
            rc.right - rc.left,
            rc.bottom - rc.top,
        );
        edit(&mut rect);
        placement.rcNormalPosition = RECT {
            left: rect.x - origin.x,
            top: rect.y - origin.y,
            right: rect.right() - origin.x,
            bottom: rect.bottom() - origin.y,
        };
        // SAFETY: placement was filled by GetWindowPlacement.
        let _ = unsafe { SetWindowPlacement(self.hwnd, &placement) };
    }

    fn set_pos(&self, rect: Rect, flags: SET_WINDOW_POS_FLAGS) {
        // SAFETY: SetWindowPos with a valid HWND is safe.
        let _ = unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                flags | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        };
    }

    fn is_layered(&self) -> bool {
        // SAFETY: reads the extended style of a valid HWND.
        let ex_style = unsafe { GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) } as u32;
        ex_style & WS_EX_LAYERED.0 == WS_EX_LAYERED.0
    }
}

impl HostWindow for Win32Window {
    fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    fn state(&self) -> WindowState {
        // SAFETY: simple state queries.
        unsafe {
            if IsIconic(self.hwnd).as_bool() {
                WindowState::Minimized
            } else if IsZoomed(self.hwnd).as_bool() {
                WindowState::Maximized
            } else {
                WindowState::Normal
            }
        }
    }

    fn set_state(&self, state: WindowState) {
        let cmd = match state {
            WindowState::Normal => SW_RESTORE,
            WindowState::Minimized => SW_MINIMIZE,
            WindowState::Maximized => SW_MAXIMIZE,
        };
        // SAFETY: ShowWindow with a valid HWND is safe.
        unsafe {
            let _ = ShowWindow(self.hwnd, cmd);
        }
    }

    fn bounds(&self) -> Rect {
        let mut rc = RECT::default();
        // SAFETY: GetWindowRect writes into a local RECT.
        if unsafe { GetWindowRect(self.hwnd, &mut rc) }.is_err() {
            return Rect::default();
        }
        Rect::new(rc.left, rc.top, rc.right - rc.left, rc.bottom - rc.top)
    }

    fn set_left(&self, left: i32) {
        if self.state() == WindowState::Normal {
            let current = self.bounds();
            self.set_pos(Rect::new(left, current.y, 0, 0), SWP_NOSIZE);
        } else {
            self.edit_normal_bounds(|r| r.x = left);
        }
    }

    fn set_top(&self, top: i32) {
        if self.state() == WindowState::Normal {
            let current = self.bounds();
            self.set_pos(Rect::new(current.x, top, 0, 0), SWP_NOSIZE);
        } else {
            self.edit_normal_bounds(|r| r.y = top);
        }
    }

    fn set_size(&self, width: i32, height: i32) {
        if self.state() == WindowState::Normal {
            self.set_pos(Rect::new(0, 0, width, height), SWP_NOMOVE);
        } else {
            self.edit_normal_bounds(|r| {
                r.width = width;
                r.height = height;
            });
        }
    }

    fn restore_bounds(&self) -> Rect {
        let Some(placement) = self.placement() else {
            return self.bounds();
        };
        let origin = monitor::primary_work_origin();
        let rc = placement.rcNormalPosition;
        Rect::new(
            rc.left + origin.x,
            rc.top + origin.y,
            rc.right - rc.left,
            rc.bottom - rc.top,
        )
    }

    fn min_size(&self) -> Size {
        self.min_size
    }

    fn set_resize_border(&self, thickness: Thickness) {
        self.resize_border.set(thickness);
    }

    fn shadow(&self) -> Option<ShadowStyle> {
        self.shadow.get()
    }

    fn set_shadow(&self, style: ShadowStyle) {
        self.shadow.set(Some(style));
    }

    /// DWM draws the shadow as long as some frame is extended into the
    /// client area.
    fn set_shadow_visible(&self, visible: bool) {
        if self.shadow_visible.replace(Some(visible)) == Some(visible) {
            return;
        }
        let margins = if !visible {
            MARGINS::default()
        } else {
            MARGINS {
                cxLeftWidth: 0,
                cxRightWidth: 0,
                cyTopHeight: 1,
                cyBottomHeight: 0,
            }
        };
        // SAFETY: margins outlives the call.
        let _ = unsafe { DwmExtendFrameIntoClientArea(self.hwnd, &margins) };
    }

    // The DWM shadow sits outside the window; there is no halo to size.
    fn set_border_thickness(&self, _thickness: Thickness) {}

    fn opacity(&self) -> f64 {
        if !self.is_layered() {
            return 1.0;
        }
        let mut alpha = 255u8;
        // SAFETY: only the alpha out-parameter is requested.
        let ok = unsafe { GetLayeredWindowAttributes(self.hwnd, None, Some(&mut alpha as *mut u8), None) };
        if ok.is_err() {
            return 1.0;
        }
        f64::from(alpha) / 255.0
    }

    fn set_opacity(&self, opacity: f64) {
        if !self.is_layered() {
            return;
        }
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        // SAFETY: the window has WS_EX_LAYERED.
        let _ = unsafe { SetLayeredWindowAttributes(self.hwnd, COLORREF(0), alpha, LWA_ALPHA) };
    }

    fn allows_transparency(&self) -> bool {
        self.is_layered()
    }

    fn client_to_screen(&self, point: Point) -> Point {
        let mut pt = POINT {
            x: point.x,
            y: point.y,
        };
        // SAFETY: converts a local POINT in place.
        let _ = unsafe { ClientToScreen(self.hwnd, &mut pt) };
        Point::new(pt.x, pt.y)
    }

    /// Hands the mouse to the system move loop as if the native caption
    /// had been pressed. Returns once the button is released.
    fn drag_move(&self) {
        let mut cursor = POINT::default();
        // SAFETY: GetCursorPos writes into a local POINT.
        let _ = unsafe { GetCursorPos(&mut cursor) };
        let packed = ((cursor.y as u16 as isize) << 16) | (cursor.x as u16 as isize);

        log_debug!("move loop start for 0x{:X}", self.handle());
        // SAFETY: the window is owned by this thread; SendMessageW blocks
        // until the move loop exits.
        unsafe {
            let _ = ReleaseCapture();
            SendMessageW(
                self.hwnd,
                WM_NCLBUTTONDOWN,
                Some(WPARAM(HTCAPTION as usize)),
                Some(LPARAM(packed)),
            );
        }
        log_debug!("move loop end for 0x{:X}", self.handle());
    }

    fn close(&self) {
        // SAFETY: posting to a window owned by this thread. WM_CLOSE lets
        // the window run its own shutdown.
        unsafe {
            let _ = PostMessageW(Some(self.hwnd), WM_CLOSE, WPARAM(0), LPARAM(0));
        }
    }
}
