pub mod border;
pub mod chrome;
pub mod config;
pub mod drag;
pub mod hit_test;
pub mod host;
pub mod log;
pub mod menu;
pub mod message;
pub mod monitor;
pub mod rect;
pub mod shadow;

#[cfg(test)]
mod testing;

pub use border::Thickness;
pub use chrome::{Chrome, DragEvent};
pub use config::Config;
pub use drag::TitleBar;
pub use hit_test::{Hit, hit_test};
pub use host::{ChromeResult, ChromeState, HostWindow, MonitorResolver, WindowState};
pub use message::ChromeMessage;
pub use monitor::{MonitorArea, Region};
pub use rect::{Point, Rect, Size};
pub use shadow::{Color, ShadowStyle};
