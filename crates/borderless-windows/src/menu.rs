use borderless_core::menu::{self, ItemChange};
use borderless_core::{HostWindow, Point, log_debug};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    DeleteMenu, EnableMenuItem, GetSystemMenu, MF_BYCOMMAND, MF_ENABLED, MF_GRAYED, PostMessageW,
    TPM_LEFTALIGN, TPM_RETURNCMD, TrackPopupMenuEx, WM_SYSCOMMAND,
};

use crate::Win32Window;

/// Shows the window's system menu just below `click` (screen
/// coordinates) and forwards the chosen command to the window.
pub fn show_system_menu(window: &Win32Window, click: Point) {
    let hwnd = window.hwnd();
    // SAFETY: the system menu belongs to the window and lives as long as it.
    let hmenu = unsafe { GetSystemMenu(hwnd, false) };
    if hmenu.is_invalid() {
        return;
    }

    for change in menu::prepare(window.state()) {
        // SAFETY: hmenu is the window's own system menu.
        unsafe {
            match change {
                ItemChange::Gray(cmd) => {
                    let _ = EnableMenuItem(hmenu, cmd, MF_BYCOMMAND | MF_GRAYED);
                }
                ItemChange::Enable(cmd) => {
                    let _ = EnableMenuItem(hmenu, cmd, MF_BYCOMMAND | MF_ENABLED);
                }
                ItemChange::Remove(cmd) => {
                    let _ = DeleteMenu(hmenu, cmd, MF_BYCOMMAND);
                }
            }
        }
    }

    let at = menu::anchor(click);
    // SAFETY: modal popup owned by hwnd; returns the command id.
    let result = unsafe {
        TrackPopupMenuEx(hmenu, (TPM_LEFTALIGN | TPM_RETURNCMD).0, at.x, at.y, hwnd, None)
    };

    let Some(cmd) = menu::chosen_command(result.0) else {
        return;
    };
    log_debug!("system menu command 0x{cmd:X} for 0x{:X}", window.handle());
    // SAFETY: posting to our own window.
    unsafe {
        let _ = PostMessageW(Some(hwnd), WM_SYSCOMMAND, WPARAM(cmd as usize), LPARAM(0));
    }
}
