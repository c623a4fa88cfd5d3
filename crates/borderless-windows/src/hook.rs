use std::rc::Rc;

use borderless_core::{
    Chrome, ChromeResult, Config, Hit, HostWindow, Point, ShadowStyle, hit_test, log_debug,
};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass};
use windows::Win32::UI::WindowsAndMessaging::{
    HTBOTTOM, HTBOTTOMLEFT, HTBOTTOMRIGHT, HTCLIENT, HTLEFT, HTRIGHT, HTTOP, HTTOPLEFT,
    HTTOPRIGHT, WM_NCCALCSIZE, WM_NCHITTEST,
};

use crate::message;
use crate::{Win32Monitors, Win32Window};

const SUBCLASS_ID: usize = 0xB0DE;

/// A window together with the chrome that drives it.
#[derive(Debug)]
pub struct ChromeWindow {
    pub chrome: Chrome<Win32Monitors>,
    pub window: Win32Window,
}

impl ChromeWindow {
    pub fn new(chrome: Chrome<Win32Monitors>, window: Win32Window) -> Self {
        Self { chrome, window }
    }

    /// Pairs `window` with a chrome that expects the DWM shadow: no halo
    /// band, whatever blur radius the config asks for.
    pub fn create(window: Win32Window, config: &Config) -> Self {
        let chrome = Chrome::with_shadow(Win32Monitors, config, ShadowStyle::compositor());
        Self::new(chrome, window)
    }
}

/// Keeps a chrome hooked into its window's message pipeline.
///
/// The subclass holds one strong reference to the `ChromeWindow`.
/// Dropping the handle unhooks the window and releases that reference,
/// so the chrome never sees a message after its owner lets go.
#[derive(Debug)]
pub struct HookHandle {
    hwnd: HWND,
    target: *const ChromeWindow,
}

impl HookHandle {
    /// Subclasses `target.window` so its messages reach `target.chrome`.
    pub fn install(target: Rc<ChromeWindow>) -> ChromeResult<Self> {
        let hwnd = target.window.hwnd();
        let raw = Rc::into_raw(target);

        // SAFETY: raw stays valid until Drop reclaims it.
        let ok = unsafe { SetWindowSubclass(hwnd, Some(subclass_proc), SUBCLASS_ID, raw as usize) };
        if !ok.as_bool() {
            // SAFETY: the subclass was not installed, so nothing else owns raw.
            drop(unsafe { Rc::from_raw(raw) });
            return Err(format!("failed to hook window 0x{:X}", hwnd.0 as usize).into());
        }

        log_debug!("hooked window 0x{:X}", hwnd.0 as usize);
        Ok(Self { hwnd, target: raw })
    }
}

impl Drop for HookHandle {
    fn drop(&mut self) {
        // SAFETY: removing an already-gone subclass is a no-op. After the
        // removal no message can reach the data, so the Rc is ours again.
        unsafe {
            let _ = RemoveWindowSubclass(self.hwnd, Some(subclass_proc), SUBCLASS_ID);
            drop(Rc::from_raw(self.target));
        }
        log_debug!("unhooked window 0x{:X}", self.hwnd.0 as usize);
    }
}

/// Answers a message from the chrome, or `None` to let the default
/// procedure see it.
///
/// # Safety
///
/// `lparam` must be the value the system passed with `msg`.
unsafe fn handle(target: &ChromeWindow, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<LRESULT> {
    match msg {
        // The whole window is client area; the chrome draws its own frame.
        WM_NCCALCSIZE if wparam.0 != 0 => Some(LRESULT(0)),
        WM_NCHITTEST => {
            let cursor = message::cursor_from_lparam(lparam);
            let bounds = target.window.bounds();
            let local = Point::new(cursor.x - bounds.x, cursor.y - bounds.y);
            let hit = hit_test(local, bounds.size(), target.window.resize_border());
            Some(LRESULT(hit_code(hit) as isize))
        }
        _ => {
            // SAFETY: forwarded from the caller.
            let mut decoded = unsafe { message::decode(msg, wparam, lparam) };
            if !target.chrome.dispatch(&target.window, &mut decoded) {
                return None;
            }
            // SAFETY: forwarded from the caller.
            unsafe { message::write_back(&decoded, lparam) };
            Some(LRESULT(0))
        }
    }
}

fn hit_code(hit: Hit) -> u32 {
    match hit {
        Hit::Client => HTCLIENT,
        Hit::Left => HTLEFT,
        Hit::Right => HTRIGHT,
        Hit::Top => HTTOP,
        Hit::Bottom => HTBOTTOM,
        Hit::TopLeft => HTTOPLEFT,
        Hit::TopRight => HTTOPRIGHT,
        Hit::BottomLeft => HTBOTTOMLEFT,
        Hit::BottomRight => HTBOTTOMRIGHT,
    }
}

unsafe extern "system" fn subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _id: usize,
    ref_data: usize,
) -> LRESULT {
    let answered = {
        // SAFETY: ref_data is the pointer HookHandle::install registered,
        // alive while the subclass is installed. The borrow ends before
        // the default procedure runs, which may unhook the window.
        let target = unsafe { &*(ref_data as *const ChromeWindow) };
        // SAFETY: msg and lparam come straight from the system.
        unsafe { handle(target, msg, wparam, lparam) }
    };

    match answered {
        Some(result) => result,
        // SAFETY: standard subclass fallthrough.
        None => unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) },
    }
}

#[cfg(test)]
mod tests {
    use borderless_core::{ChromeState, Size};

    use super::*;

    fn detached(config: &Config) -> ChromeWindow {
        ChromeWindow::create(Win32Window::new(HWND::default(), Size::new(200, 100)), config)
    }

    #[test]
    fn created_chrome_ignores_configured_halo() {
        // Arrange
        let mut config = Config::default();
        config.resize.include_shadow = true;
        config.shadow.blur_radius = 10;

        // Act
        let target = detached(&config);

        // Assert
        assert_eq!(target.chrome.resize_border_width(), config.resize.width);
    }

    #[test]
    fn hit_codes_cover_every_edge() {
        // Assert
        assert_eq!(hit_code(Hit::Client), HTCLIENT);
        assert_eq!(hit_code(Hit::TopLeft), HTTOPLEFT);
        assert_eq!(hit_code(Hit::BottomRight), HTBOTTOMRIGHT);
        assert_eq!(hit_code(Hit::Left), HTLEFT);
    }
}
