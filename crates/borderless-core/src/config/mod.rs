mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Borderless.
///
/// Loaded from `~/.config/borderless/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Invisible resize margins.
    pub resize: ResizeConfig,
    /// Drop shadow around floating windows.
    pub shadow: ShadowConfig,
    /// Title-bar drag behaviour.
    pub drag: DragConfig,
    /// Window size limits.
    pub window: WindowConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Resize margin settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Width in pixels of each resize margin.
    pub width: i32,
    /// Widen the margins by the shadow blur radius so the whole halo
    /// around the window resizes.
    pub include_shadow: bool,
}

/// Drop shadow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Blur radius in pixels; also the transparent border around the window.
    pub blur_radius: i32,
}

/// Drag settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Fade the window while it is being dragged, if it supports transparency.
    pub transparency: bool,
    /// Opacity multiplier applied during the drag (0.1–1.0).
    pub opacity_factor: f64,
}

/// Window size limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub min_width: i32,
    pub min_height: i32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: 6,
            include_shadow: false,
        }
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            blur_radius: 10,
        }
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            transparency: true,
            opacity_factor: 0.5,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_width: 200,
            min_height: 100,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Prevents negative margins, drag fades that hide the window, and
    /// shadow radii large enough to swallow it.
    pub fn validate(&mut self) {
        self.resize.width = self.resize.width.clamp(0, 32);
        self.shadow.blur_radius = self.shadow.blur_radius.clamp(0, 64);
        self.drag.opacity_factor = self.drag.opacity_factor.clamp(0.1, 1.0);
        self.window.min_width = self.window.min_width.max(0);
        self.window.min_height = self.window.min_height.max(0);
    }

    /// Effective resize margin width, including the shadow when configured.
    pub fn resize_border_width(&self) -> i32 {
        self.resize.width_around(self.shadow.blur_radius)
    }
}

impl ResizeConfig {
    /// Margin width next to a shadow halo of `blur_radius` pixels.
    pub fn width_around(&self, blur_radius: i32) -> i32 {
        if self.include_shadow {
            self.width + blur_radius
        } else {
            self.width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.resize.width, 6);
        assert_eq!(config.shadow.blur_radius, 10);
        assert_eq!(config.window.min_width, 200);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[resize]\nwidth = 8\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.resize.width, 8);
        assert!(!config.resize.include_shadow);
        assert_eq!(config.shadow.blur_radius, 10);
    }

    #[test]
    fn validate_clamps_extreme_values() {
        // Arrange
        let mut config = Config {
            resize: ResizeConfig {
                width: -4,
                ..Default::default()
            },
            shadow: ShadowConfig { blur_radius: 500 },
            drag: DragConfig {
                opacity_factor: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };

        // Act
        config.validate();

        // Assert
        assert_eq!(config.resize.width, 0);
        assert_eq!(config.shadow.blur_radius, 64);
        assert!((config.drag.opacity_factor - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn shadow_inflates_resize_border_when_enabled() {
        // Arrange
        let mut config = Config::default();

        // Act
        let plain = config.resize_border_width();
        config.resize.include_shadow = true;
        let inflated = config.resize_border_width();

        // Assert
        assert_eq!(plain, 6);
        assert_eq!(inflated, 16);
    }

    #[test]
    fn zero_halo_never_inflates_resize_border() {
        // Arrange
        let resize = ResizeConfig {
            include_shadow: true,
            ..Default::default()
        };

        // Act / Assert
        assert_eq!(resize.width_around(0), 6);
        assert_eq!(resize.width_around(4), 10);
    }
}
