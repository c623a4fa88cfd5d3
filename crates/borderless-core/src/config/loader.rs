use std::path::PathBuf;

use super::Config;

/// Returns the config directory: `~/.config/borderless/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("borderless"))
}

/// Returns the config file path: `~/.config/borderless/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently yields defaults; anything else is reported
/// on stderr before falling back.
pub fn load() -> Config {
    let exists = config_path().is_some_and(|p| p.exists());
    if !exists {
        return Config::default();
    }

    match try_load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Parses and validates config text.
fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validates_after_reading() {
        // Arrange
        let toml_str = "[shadow]\nblur_radius = 900\n";

        // Act
        let config = parse(toml_str).unwrap();

        // Assert
        assert_eq!(config.shadow.blur_radius, 64);
    }

    #[test]
    fn parse_rejects_wrong_types() {
        // Act
        let result = parse("[resize]\nwidth = \"wide\"\n");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn config_path_ends_with_config_toml() {
        // Act / Assert
        if let Some(path) = config_path() {
            assert!(path.ends_with("borderless/config.toml"));
        }
    }
}
