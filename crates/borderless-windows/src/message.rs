use borderless_core::message::{MinMaxInfo, SizeKind, WindowPos, split_size};
use borderless_core::{ChromeMessage, Point};
use windows::Win32::Foundation::{LPARAM, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    MINMAXINFO, WINDOWPOS, WM_GETMINMAXINFO, WM_SIZE, WM_WINDOWPOSCHANGED, WM_WINDOWPOSCHANGING,
};

/// Translates a raw window message into a `ChromeMessage`.
///
/// Messages the chrome does not handle, and pointer payloads that are
/// null, become `ChromeMessage::Other`.
///
/// # Safety
///
/// For `WM_GETMINMAXINFO` and `WM_WINDOWPOS*`, `lparam` must be the
/// pointer the system passed with the message.
pub unsafe fn decode(msg: u32, wparam: WPARAM, lparam: LPARAM) -> ChromeMessage {
    match msg {
        WM_SIZE => {
            let (width, height) = split_size(lparam.0);
            ChromeMessage::Size {
                kind: SizeKind::from_raw(wparam.0 as u32),
                width,
                height,
            }
        }
        WM_GETMINMAXINFO => {
            let ptr = lparam.0 as *const MINMAXINFO;
            if ptr.is_null() {
                return ChromeMessage::Other(msg);
            }
            // SAFETY: non-null MINMAXINFO supplied by the system.
            let mmi = unsafe { &*ptr };
            ChromeMessage::GetMinMaxInfo(MinMaxInfo {
                max_size: point(mmi.ptMaxSize),
                max_position: point(mmi.ptMaxPosition),
                min_track_size: point(mmi.ptMinTrackSize),
                max_track_size: point(mmi.ptMaxTrackSize),
            })
        }
        WM_WINDOWPOSCHANGING | WM_WINDOWPOSCHANGED => {
            let ptr = lparam.0 as *const WINDOWPOS;
            if ptr.is_null() {
                return ChromeMessage::Other(msg);
            }
            // SAFETY: non-null WINDOWPOS supplied by the system.
            let wp = unsafe { &*ptr };
            let pos = WindowPos {
                x: wp.x,
                y: wp.y,
                cx: wp.cx,
                cy: wp.cy,
                flags: wp.flags.0,
            };
            if msg == WM_WINDOWPOSCHANGING {
                ChromeMessage::PosChanging(pos)
            } else {
                ChromeMessage::PosChanged(pos)
            }
        }
        other => ChromeMessage::Other(other),
    }
}

/// Copies an answered maximize-bounds query back into the system's
/// `MINMAXINFO`. Other variants are left alone.
///
/// # Safety
///
/// `lparam` must be the `WM_GETMINMAXINFO` pointer the message was
/// decoded from.
pub unsafe fn write_back(message: &ChromeMessage, lparam: LPARAM) {
    let ChromeMessage::GetMinMaxInfo(info) = message else {
        return;
    };
    let ptr = lparam.0 as *mut MINMAXINFO;
    if ptr.is_null() {
        return;
    }
    // SAFETY: non-null, writable MINMAXINFO supplied by the system.
    let mmi = unsafe { &mut *ptr };
    mmi.ptMaxSize = win32_point(info.max_size);
    mmi.ptMaxPosition = win32_point(info.max_position);
    mmi.ptMinTrackSize = win32_point(info.min_track_size);
    mmi.ptMaxTrackSize = win32_point(info.max_track_size);
}

/// Signed cursor coordinates packed into a mouse message `lParam`.
pub fn cursor_from_lparam(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xFFFF) as u16 as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32;
    Point::new(x, y)
}

fn point(p: POINT) -> Point {
    Point::new(p.x, p.y)
}

fn win32_point(p: Point) -> POINT {
    POINT { x: p.x, y: p.y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_coordinates_are_signed() {
        // Arrange: x = -20 on a monitor left of the primary, y = 15.
        let lparam = LPARAM((15 << 16) | (-20i32 as u16 as isize));

        // Act
        let cursor = cursor_from_lparam(lparam);

        // Assert
        assert_eq!(cursor, Point::new(-20, 15));
    }

    #[test]
    fn decode_size_message() {
        // Arrange
        let lparam = LPARAM((1040 << 16) | 960);

        // Act
        let message = unsafe { decode(WM_SIZE, WPARAM(0), lparam) };

        // Assert
        assert_eq!(
            message,
            ChromeMessage::Size {
                kind: SizeKind::Restored,
                width: 960,
                height: 1040
            }
        );
    }

    #[test]
    fn decode_min_max_info_round_trips_answer() {
        // Arrange
        let mut mmi = MINMAXINFO::default();
        let lparam = LPARAM(&mut mmi as *mut MINMAXINFO as isize);
        let mut message = unsafe { decode(WM_GETMINMAXINFO, WPARAM(0), lparam) };
        if let ChromeMessage::GetMinMaxInfo(info) = &mut message {
            info.max_size = Point::new(1920, 1040);
        }

        // Act
        unsafe { write_back(&message, lparam) };

        // Assert
        assert_eq!(mmi.ptMaxSize.x, 1920);
        assert_eq!(mmi.ptMaxSize.y, 1040);
    }

    #[test]
    fn null_pointer_payload_is_ignored() {
        // Act
        let message = unsafe { decode(WM_WINDOWPOSCHANGED, WPARAM(0), LPARAM(0)) };

        // Assert
        assert_eq!(message, ChromeMessage::Other(WM_WINDOWPOSCHANGED));
    }
}
