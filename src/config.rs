//! Configuration file support
//!
//! Loads settings from the file named by `$NETKIT_OVERLAY_CONFIG`, or
//! `~/.netkit-overlay.toml` (`%USERPROFILE%\.netkit-overlay.toml` on
//! Windows). Every key is optional.
//!
//! Example:
//! ```toml
//! [engine]
//! size_limit = 1048576
//! max_matches = 5000
//!
//! [overlay]
//! pad_trailing_newline = true
//!
//! [theme]
//! Keyword = { fg = "magenta", bold = true }
//! MatchPrimary = { fg = "black", bg = "bright-yellow" }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::syntax::{Color, Style, TokenType};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "NETKIT_OVERLAY_CONFIG";

const CONFIG_FILE_NAME: &str = ".netkit-overlay.toml";

/// Live matcher limits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Compiled program size limit in bytes
    pub size_limit: usize,
    /// Lazy DFA cache size limit in bytes
    pub dfa_size_limit: usize,
    /// Stop enumerating after this many matches
    pub max_matches: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size_limit: 10 * (1 << 20),
            dfa_size_limit: 2 * (1 << 20),
            max_matches: None,
        }
    }
}

/// Overlay rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Append `\n` to the rendered layer when the value lacks one
    pub pad_trailing_newline: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            pad_trailing_newline: true,
        }
    }
}

/// A style override as written in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct StyleSpec {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    italic: bool,
    underline: bool,
    reverse: bool,
}

impl StyleSpec {
    fn to_style(&self) -> Result<Style> {
        Ok(Style {
            fg: parse_color(self.fg.as_deref())?,
            bg: parse_color(self.bg.as_deref())?,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            reverse: self.reverse,
        })
    }
}

fn parse_color(name: Option<&str>) -> Result<Color> {
    match name {
        None => Ok(Color::Default),
        Some(name) => Color::from_name(name).ok_or_else(|| HighlightError::UnknownColor(name.to_string())),
    }
}

/// Terminal styles per token type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    overrides: HashMap<TokenType, Style>,
}

impl Theme {
    /// Style for a token, falling back to its default style
    pub fn style_for(&self, token: TokenType) -> Style {
        self.overrides
            .get(&token)
            .copied()
            .unwrap_or_else(|| token.default_style())
    }

    /// Override the style of one token type
    pub fn set(&mut self, token: TokenType, style: Style) {
        self.overrides.insert(token, style);
    }
}

/// Raw file layout
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    engine: EngineConfig,
    overlay: OverlayConfig,
    theme: HashMap<String, StyleSpec>,
}

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub engine: EngineConfig,
    pub overlay: OverlayConfig,
    pub theme: Theme,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }
    }

    /// Load configuration, falling back to defaults
    ///
    /// A missing file is not an error. A malformed one is logged and
    /// ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded overlay config");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid overlay config");
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;

        let mut theme = Theme::default();
        for (name, spec) in &file.theme {
            let token = TokenType::from_name(name).ok_or_else(|| HighlightError::UnknownToken(name.clone()))?;
            theme.set(token, spec.to_style()?);
        }

        Ok(Config {
            engine: file.engine,
            overlay: file.overlay,
            theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.overlay.pad_trailing_newline);
        assert_eq!(config.engine.max_matches, None);
    }

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
[engine]
size_limit = 4096
max_matches = 100

[overlay]
pad_trailing_newline = false

[theme]
Keyword = { fg = "bright-red", bold = true }
MatchPrimary = { bg = "Yellow" }
        "#;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.engine.size_limit, 4096);
        assert_eq!(config.engine.dfa_size_limit, EngineConfig::default().dfa_size_limit);
        assert_eq!(config.engine.max_matches, Some(100));
        assert!(!config.overlay.pad_trailing_newline);
        assert_eq!(
            config.theme.style_for(TokenType::Keyword),
            Style::fg(Color::BrightRed).with_bold()
        );
        assert_eq!(config.theme.style_for(TokenType::MatchPrimary), Style::bg(Color::Yellow));
        // Untouched tokens keep their defaults
        assert_eq!(config.theme.style_for(TokenType::String), TokenType::String.default_style());
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = Config::parse("[theme]\nBogus = { fg = \"red\" }").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownToken(name) if name == "Bogus"));
    }

    #[test]
    fn test_unknown_color_rejected() {
        let err = Config::parse("[theme]\nString = { fg = \"mauve\" }").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownColor(name) if name == "mauve"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::parse("[engine\nsize_limit = ").unwrap_err();
        assert!(matches!(err, HighlightError::Config(_)));
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("netkit-overlay-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = write_temp("file.toml", "[overlay]\npad_trailing_newline = false\n");
        let config = Config::load_from(&path).unwrap();
        assert!(!config.overlay.pad_trailing_newline);
        fs::remove_file(path).unwrap();
    }

    // Only this test touches the environment variable
    #[test]
    fn test_load_uses_env_override_and_falls_back() {
        let good = write_temp("env.toml", "[engine]\nmax_matches = 7\n");
        std::env::set_var(CONFIG_ENV, &good);
        assert_eq!(Config::config_path(), Some(good.clone()));
        assert_eq!(Config::load().engine.max_matches, Some(7));

        // Malformed file: defaults
        let bad = write_temp("bad.toml", "[engine\n");
        std::env::set_var(CONFIG_ENV, &bad);
        assert_eq!(Config::load(), Config::default());

        // Missing file: defaults
        std::env::set_var(CONFIG_ENV, "/definitely/not/here.toml");
        assert_eq!(Config::load(), Config::default());

        std::env::remove_var(CONFIG_ENV);
        fs::remove_file(good).unwrap();
        fs::remove_file(bad).unwrap();
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, HighlightError::Io(_)));
    }
}
