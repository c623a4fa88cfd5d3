//! System menu decisions.
//!
//! The platform crate owns the actual popup call; this module decides
//! when to show it, how to prepare its items for the current window
//! state, and what its return value means.

use crate::{Point, WindowState};

/// `SC_SIZE` system command.
pub const SC_SIZE: u32 = 0xF000;
/// `SC_MOVE` system command.
pub const SC_MOVE: u32 = 0xF010;
/// `SC_MAXIMIZE` system command.
pub const SC_MAXIMIZE: u32 = 0xF030;
/// `SC_CLOSE` system command.
pub const SC_CLOSE: u32 = 0xF060;

/// Vertical distance between the click and the menu's top edge.
pub const MENU_OFFSET: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What a click on the window icon should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAction {
    ShowMenu,
    Close,
    Nothing,
}

/// Maps a click on the window icon to an action.
///
/// Double-clicking the icon closes the window, like on a native frame.
pub fn icon_click(button: MouseButton, click_count: u32) -> IconAction {
    match (button, click_count) {
        (MouseButton::Right, _) => IconAction::ShowMenu,
        (MouseButton::Left, 2) => IconAction::Close,
        (MouseButton::Left, _) => IconAction::ShowMenu,
        (MouseButton::Middle, _) => IconAction::Nothing,
    }
}

/// A change to apply to a system menu item before showing the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemChange {
    Gray(u32),
    Enable(u32),
    Remove(u32),
}

/// Item changes for a window in `state`.
///
/// Size stays in the menu but grayed, since removing it would also
/// disable keyboard resizing. Move is removed; dragging goes through the
/// custom title bar.
pub fn prepare(state: WindowState) -> [ItemChange; 3] {
    let maximize = if state == WindowState::Maximized {
        ItemChange::Gray(SC_MAXIMIZE)
    } else {
        ItemChange::Enable(SC_MAXIMIZE)
    };

    [ItemChange::Gray(SC_SIZE), ItemChange::Remove(SC_MOVE), maximize]
}

/// Screen position of the menu for a click at `click`.
pub fn anchor(click: Point) -> Point {
    Point::new(click.x, click.y + MENU_OFFSET)
}

/// Interprets the popup's return value. Zero means the menu was
/// dismissed or failed.
pub fn chosen_command(result: i32) -> Option<u32> {
    u32::try_from(result).ok().filter(|&cmd| cmd != 0)
}
