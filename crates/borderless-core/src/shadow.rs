//! Drop-shadow toggling.
//!
//! A floating window shows a soft shadow whose blur radius also becomes
//! the window's border thickness, so the transparent halo and the hit
//! test margins line up. Snapped and maximized windows hide the shadow
//! by zeroing that border; the effect object itself is kept so toggling
//! never reallocates it.

use crate::config::ShadowConfig;
use crate::{HostWindow, Thickness};

/// RGB shadow color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

const DEPTH: i32 = 3;
const DIRECTION: i32 = 315;
const OPACITY: f64 = 0.5;

/// Parameters of the shadow effect attached to a window.
///
/// Only the blur radius is configurable. Depth, direction, opacity, and
/// color are fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub blur_radius: i32,
    /// Distance of the shadow from the window, in pixels.
    pub depth: i32,
    /// Direction of the shadow in degrees (315 = bottom right).
    pub direction: i32,
    pub opacity: f64,
    pub color: Color,
}

impl ShadowStyle {
    pub fn with_radius(blur_radius: i32) -> Self {
        Self {
            blur_radius,
            depth: DEPTH,
            direction: DIRECTION,
            opacity: OPACITY,
            color: Color::BLACK,
        }
    }

    pub fn from_config(config: &ShadowConfig) -> Self {
        Self::with_radius(config.blur_radius)
    }

    /// A shadow the window manager draws outside the window's bounds.
    ///
    /// There is no transparent halo inside the window, so it takes no
    /// border and dragging out of maximize needs no radius correction.
    pub fn compositor() -> Self {
        Self::with_radius(0)
    }
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self::from_config(&ShadowConfig::default())
    }
}

/// Attaches the shadow if the window has none yet, then mirrors its blur
/// radius into the window's border thickness.
///
/// An already attached effect is reused as-is, so repeated calls never
/// stack effects.
pub fn enable<H: HostWindow + ?Sized>(host: &H, style: &ShadowStyle) {
    let effect = match host.shadow() {
        Some(effect) => effect,
        None => {
            host.set_shadow(*style);
            *style
        }
    };

    host.set_border_thickness(Thickness::uniform(effect.blur_radius));
    host.set_shadow_visible(true);
}

/// Hides the shadow by zeroing the border thickness.
pub fn disable<H: HostWindow + ?Sized>(host: &H) {
    host.set_border_thickness(Thickness::ZERO);
    host.set_shadow_visible(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeWindow;

    #[test]
    fn enable_attaches_effect_and_mirrors_radius() {
        // Arrange
        let window = FakeWindow::normal(200, 200, 800, 600);
        let style = ShadowStyle {
            blur_radius: 12,
            ..ShadowStyle::default()
        };

        // Act
        enable(&window, &style);

        // Assert
        assert_eq!(window.shadow(), Some(style));
        assert_eq!(window.border_thickness(), Thickness::uniform(12));
        assert_eq!(window.shadow_attach_count(), 1);
    }

    #[test]
    fn enable_twice_keeps_single_effect() {
        // Arrange
        let window = FakeWindow::normal(200, 200, 800, 600);
        let style = ShadowStyle::default();

        // Act
        enable(&window, &style);
        enable(&window, &style);

        // Assert
        assert_eq!(window.shadow_attach_count(), 1);
    }

    #[test]
    fn disable_zeroes_border_but_keeps_effect() {
        // Arrange
        let window = FakeWindow::normal(200, 200, 800, 600);
        enable(&window, &ShadowStyle::default());

        // Act
        disable(&window);
        disable(&window);

        // Assert
        assert_eq!(window.border_thickness(), Thickness::ZERO);
        assert!(window.shadow().is_some());
    }

    #[test]
    fn compositor_shadow_toggles_without_a_halo() {
        // Arrange
        let window = FakeWindow::normal(200, 200, 800, 600);
        let style = ShadowStyle::compositor();

        // Act
        enable(&window, &style);
        let shown = window.shadow_visible();
        disable(&window);

        // Assert
        assert!(shown);
        assert!(!window.shadow_visible());
        assert_eq!(style.blur_radius, 0);
        assert_eq!(window.border_thickness(), Thickness::ZERO);
        assert_eq!(window.shadow_attach_count(), 1);
    }

    #[test]
    fn config_only_sets_the_radius() {
        // Arrange
        let config = ShadowConfig { blur_radius: 14 };

        // Act
        let style = ShadowStyle::from_config(&config);

        // Assert
        assert_eq!(style.blur_radius, 14);
        assert_eq!(style.depth, 3);
        assert_eq!(style.direction, 315);
        assert_eq!(style.color, Color::BLACK);
    }
}
