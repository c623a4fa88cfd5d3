//! A sample borderless window driven by the chrome.
//!
//! The window paints its own title bar: an icon on the left, a caption
//! area that drags and double-clicks like a native one, and minimize,
//! maximize, and close buttons on the right.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use borderless_core::menu::{self as menu_rules, IconAction, MouseButton};
use borderless_core::{
    ChromeResult, ChromeState, Config, DragEvent, HostWindow, Point, Size, TitleBar, log_info,
};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, COLOR_WINDOW, CreateSolidBrush, DT_CENTER, DT_LEFT, DT_SINGLELINE, DT_VCENTER,
    DeleteObject, DrawTextW, EndPaint, FillRect, GetSysColorBrush, HDC, InvalidateRect,
    PAINTSTRUCT, SetBkMode, SetTextColor, TRANSPARENT,
};
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CS_DBLCLKS, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW,
    DestroyWindow, DispatchMessageW, GetClientRect, GetMessageW, IDC_ARROW, LWA_ALPHA, LoadCursorW,
    MSG, PostQuitMessage, RegisterClassW, SW_SHOW, SWP_FRAMECHANGED, SWP_NOMOVE, SWP_NOSIZE,
    SWP_NOZORDER, SetLayeredWindowAttributes, SetWindowPos, ShowWindow, TranslateMessage,
    WINDOW_EX_STYLE, WM_CLOSE, WM_DESTROY, WM_LBUTTONDBLCLK, WM_LBUTTONDOWN, WM_LBUTTONUP,
    WM_MBUTTONDOWN, WM_MOUSEMOVE, WM_PAINT, WM_RBUTTONUP, WM_SIZE, WNDCLASSW, WS_CAPTION,
    WS_EX_LAYERED, WS_MAXIMIZEBOX, WS_MINIMIZEBOX, WS_POPUP, WS_SYSMENU, WS_THICKFRAME,
};
use windows::core::{PCWSTR, w};

use crate::{ChromeWindow, HookHandle, Win32Window, menu, message};

const CLASS_NAME: PCWSTR = w!("BorderlessDemo");
const TITLE: &str = "Borderless";

const TITLE_HEIGHT: i32 = 32;
const ICON_WIDTH: i32 = 32;
const BUTTON_WIDTH: i32 = 46;

const MK_LBUTTON: usize = 0x0001;

const TITLE_BAR_COLOR: COLORREF = COLORREF(0x0020_2020);
const ICON_COLOR: COLORREF = COLORREF(0x00D8_B400);
const TEXT_COLOR: COLORREF = COLORREF(0x00FF_FFFF);

static REGISTER_CLASS: Once = Once::new();

thread_local! {
    static TARGET: RefCell<Option<Rc<ChromeWindow>>> = const { RefCell::new(None) };
    static HOOK: RefCell<Option<HookHandle>> = const { RefCell::new(None) };
}

/// Part of the window a mouse event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Icon,
    Caption,
    Minimize,
    Maximize,
    Close,
    Body,
}

fn zone(point: Point, width: i32) -> Zone {
    if point.y < 0 || point.y >= TITLE_HEIGHT {
        return Zone::Body;
    }
    if point.x < ICON_WIDTH {
        return Zone::Icon;
    }
    match (width - point.x - 1) / BUTTON_WIDTH {
        0 => Zone::Close,
        1 => Zone::Maximize,
        2 => Zone::Minimize,
        _ => Zone::Caption,
    }
}

fn title_bar(width: i32) -> TitleBar {
    TitleBar {
        left_margin: ICON_WIDTH,
        width: (width - ICON_WIDTH - 3 * BUTTON_WIDTH).max(0),
    }
}

/// Opens the demo window and runs its message loop until it closes.
pub fn run(config: &Config) -> ChromeResult<()> {
    // SAFETY: called once before any window exists; failure means the
    // awareness was already set by a manifest.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
    ensure_class_registered();

    let ex_style = if config.drag.transparency {
        WS_EX_LAYERED
    } else {
        WINDOW_EX_STYLE::default()
    };
    let style = WS_POPUP | WS_THICKFRAME | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX | WS_MAXIMIZEBOX;
    let title: Vec<u16> = TITLE.encode_utf16().chain(Some(0)).collect();

    // SAFETY: the class is registered and the title is NUL-terminated.
    let hwnd = unsafe {
        CreateWindowExW(
            ex_style,
            CLASS_NAME,
            PCWSTR(title.as_ptr()),
            style,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            960,
            600,
            None,
            None,
            None,
            None,
        )?
    };

    let hook = match attach(hwnd, config) {
        Ok(hook) => hook,
        Err(e) => {
            // SAFETY: the window was created above and nothing else owns it.
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            return Err(e);
        }
    };
    HOOK.with_borrow_mut(|h| *h = Some(hook));

    let result = show_and_pump(hwnd);

    // The window may have failed before WM_CLOSE; unhook it either way.
    drop(HOOK.with_borrow_mut(Option::take));
    drop(TARGET.with_borrow_mut(Option::take));
    result
}

/// Gives a freshly created window its chrome and hooks it up.
fn attach(hwnd: HWND, config: &Config) -> ChromeResult<HookHandle> {
    if config.drag.transparency {
        // SAFETY: layered windows stay invisible until given an alpha.
        unsafe { SetLayeredWindowAttributes(hwnd, COLORREF(0), 255, LWA_ALPHA)? };
    }

    let window = Win32Window::new(
        hwnd,
        Size::new(config.window.min_width, config.window.min_height),
    );
    let target = Rc::new(ChromeWindow::create(window, config));
    target.chrome.attach(&target.window);

    let hook = HookHandle::install(Rc::clone(&target))?;
    TARGET.with_borrow_mut(|t| *t = Some(target));
    Ok(hook)
}

fn show_and_pump(hwnd: HWND) -> ChromeResult<()> {
    // SAFETY: recomputes the frame now that WM_NCCALCSIZE is answered.
    unsafe {
        SetWindowPos(
            hwnd,
            None,
            0,
            0,
            0,
            0,
            SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER,
        )?;
        let _ = ShowWindow(hwnd, SW_SHOW);
    }
    log_info!("demo window 0x{:X} open", hwnd.0 as usize);

    let mut msg = MSG::default();
    // SAFETY: standard message pump on the thread that owns the window.
    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        // SAFETY: msg was filled by GetMessageW.
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    log_info!("demo window closed");
    Ok(())
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        // SAFETY: loads a shared system cursor.
        let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default();
        let wc = WNDCLASSW {
            style: CS_DBLCLKS | CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(demo_wnd_proc),
            hCursor: cursor,
            lpszClassName: CLASS_NAME,
            ..Default::default()
        };
        // SAFETY: wc and the static class name outlive the call.
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

fn current() -> Option<Rc<ChromeWindow>> {
    TARGET.with_borrow(|t| t.clone())
}

unsafe extern "system" fn demo_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_PAINT => {
            paint(hwnd);
            LRESULT(0)
        }
        WM_MOUSEMOVE | WM_LBUTTONDOWN | WM_LBUTTONDBLCLK | WM_LBUTTONUP | WM_RBUTTONUP
        | WM_MBUTTONDOWN => {
            let handled = current().is_some_and(|target| on_mouse(&target, msg, wparam, lparam));
            if handled {
                LRESULT(0)
            } else {
                // SAFETY: default handling for our own window's message.
                unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
            }
        }
        WM_SIZE => {
            // SAFETY: plain invalidation. A resize may change the snap state
            // shown in the caption.
            unsafe {
                let _ = InvalidateRect(Some(hwnd), None, true);
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }
        }
        WM_CLOSE => {
            drop(HOOK.with_borrow_mut(Option::take));
            // SAFETY: unhooked above, so the chrome sees no teardown messages.
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            LRESULT(0)
        }
        WM_DESTROY => {
            drop(TARGET.with_borrow_mut(Option::take));
            // SAFETY: ends the pump in `show_and_pump`.
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        // SAFETY: default handling for our own window's message.
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/// Routes a mouse message over the title bar to the chrome. Returns
/// `false` for anything outside it.
fn on_mouse(target: &ChromeWindow, msg: u32, wparam: WPARAM, lparam: LPARAM) -> bool {
    let (chrome, window) = (&target.chrome, &target.window);
    let cursor = message::cursor_from_lparam(lparam);
    let width = window.bounds().width;

    match (msg, zone(cursor, width)) {
        (WM_MOUSEMOVE, Zone::Caption) => {
            let event = DragEvent {
                button_pressed: wparam.0 & MK_LBUTTON != 0,
                cursor,
                title_bar: title_bar(width),
            };
            chrome.on_drag(window, &event)
        }
        (WM_LBUTTONDBLCLK, Zone::Caption) => {
            chrome.restore_or_maximize(window);
            true
        }
        (WM_RBUTTONUP, Zone::Caption) => {
            menu::show_system_menu(window, window.client_to_screen(cursor));
            true
        }
        (WM_LBUTTONDOWN | WM_LBUTTONDBLCLK | WM_RBUTTONUP | WM_MBUTTONDOWN, Zone::Icon) => {
            let (button, clicks) = match msg {
                WM_LBUTTONDOWN => (MouseButton::Left, 1),
                WM_LBUTTONDBLCLK => (MouseButton::Left, 2),
                WM_RBUTTONUP => (MouseButton::Right, 1),
                _ => (MouseButton::Middle, 1),
            };
            match menu_rules::icon_click(button, clicks) {
                IconAction::ShowMenu => {
                    menu::show_system_menu(window, window.client_to_screen(cursor));
                }
                IconAction::Close => chrome.close(window),
                IconAction::Nothing => {}
            }
            true
        }
        (WM_LBUTTONUP, Zone::Minimize) => {
            chrome.minimize(window);
            true
        }
        (WM_LBUTTONUP, Zone::Maximize) => {
            chrome.toggle_maximize(window);
            true
        }
        (WM_LBUTTONUP, Zone::Close) => {
            chrome.close(window);
            true
        }
        _ => false,
    }
}

fn paint(hwnd: HWND) {
    let mut ps = PAINTSTRUCT::default();
    // SAFETY: paired with EndPaint below; GDI objects created here are
    // deleted before returning.
    unsafe {
        let hdc = BeginPaint(hwnd, &mut ps);
        let mut client = RECT::default();
        let _ = GetClientRect(hwnd, &mut client);

        FillRect(hdc, &client, GetSysColorBrush(COLOR_WINDOW));

        let bar = RECT {
            bottom: TITLE_HEIGHT,
            ..client
        };
        fill(hdc, &bar, TITLE_BAR_COLOR);

        let icon = RECT {
            left: 8,
            top: 8,
            right: ICON_WIDTH - 8,
            bottom: TITLE_HEIGHT - 8,
        };
        fill(hdc, &icon, ICON_COLOR);

        SetBkMode(hdc, TRANSPARENT);
        SetTextColor(hdc, TEXT_COLOR);

        let mut caption = RECT {
            left: ICON_WIDTH + 4,
            ..bar
        };
        let text = current()
            .map_or_else(|| TITLE.to_string(), |target| caption_text(&target.chrome));
        draw_text(hdc, &text, &mut caption, false);

        for (i, glyph) in ["\u{2715}", "\u{25A1}", "\u{2014}"].iter().enumerate() {
            let right = client.right - BUTTON_WIDTH * i as i32;
            let mut button = RECT {
                left: right - BUTTON_WIDTH,
                top: 0,
                right,
                bottom: TITLE_HEIGHT,
            };
            draw_text(hdc, glyph, &mut button, true);
        }

        let _ = EndPaint(hwnd, &ps);
    }
}

/// Title text, tagged with the chrome's snap state.
fn caption_text(state: &dyn ChromeState) -> String {
    if state.is_snapped() {
        format!("{TITLE} (snapped)")
    } else {
        TITLE.to_string()
    }
}

fn fill(hdc: HDC, rect: &RECT, color: COLORREF) {
    // SAFETY: the brush is deleted right after use.
    unsafe {
        let brush = CreateSolidBrush(color);
        FillRect(hdc, rect, brush);
        let _ = DeleteObject(brush.into());
    }
}

fn draw_text(hdc: HDC, text: &str, rect: &mut RECT, centered: bool) {
    let mut wide: Vec<u16> = text.encode_utf16().collect();
    let align = if centered { DT_CENTER } else { DT_LEFT };
    // SAFETY: wide and rect outlive the call.
    unsafe {
        DrawTextW(hdc, &mut wide, rect, align | DT_VCENTER | DT_SINGLELINE);
    }
}
