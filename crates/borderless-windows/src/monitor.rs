use std::mem;

use borderless_core::{MonitorArea, MonitorResolver, Point, Region, Size};
use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITOR_DEFAULTTOPRIMARY, MONITORINFO,
    MonitorFromPoint, MonitorFromWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN,
};

/// Resolves monitors through `MonitorFromWindow`.
///
/// Always asks for the nearest monitor, never the primary, so a window
/// dragged across monitors gets the geometry of the one it is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Monitors;

impl MonitorResolver for Win32Monitors {
    fn nearest(&self, handle: usize) -> Option<MonitorArea> {
        if handle == 0 {
            return None;
        }
        // SAFETY: MonitorFromWindow only reads the handle; an invalid
        // one yields a null monitor, which area_for_monitor rejects.
        let monitor = unsafe { MonitorFromWindow(HWND(handle as *mut _), MONITOR_DEFAULTTONEAREST) };
        area_for_monitor(monitor)
    }

    fn virtual_screen(&self) -> Size {
        // SAFETY: GetSystemMetrics is a plain query.
        unsafe {
            Size::new(
                GetSystemMetrics(SM_CXVIRTUALSCREEN),
                GetSystemMetrics(SM_CYVIRTUALSCREEN),
            )
        }
    }
}

/// Queries display and work regions for a monitor handle.
pub fn area_for_monitor(monitor: HMONITOR) -> Option<MonitorArea> {
    if monitor.is_invalid() {
        return None;
    }

    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with
    // monitor dimensions. We set cbSize as required by the API.
    if !unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
        return None;
    }

    Some(MonitorArea::new(region(info.rcMonitor), region(info.rcWork)))
}

/// Top-left corner of the primary monitor's work area.
///
/// Window placement rectangles are relative to this point rather than
/// to the screen origin.
pub fn primary_work_origin() -> Point {
    // SAFETY: MonitorFromPoint with MONITOR_DEFAULTTOPRIMARY always
    // returns a monitor handle.
    let monitor = unsafe { MonitorFromPoint(POINT::default(), MONITOR_DEFAULTTOPRIMARY) };
    area_for_monitor(monitor)
        .map(|area| Point::new(area.work.left, area.work.top))
        .unwrap_or_default()
}

fn region(rc: RECT) -> Region {
    Region::from_edges(rc.left, rc.top, rc.right, rc.bottom)
}
