//! Theme system with semantic color roles.
//!
//! A [`Theme`] is a named, immutable [`Palette`] of color roles that
//! formatters and widgets reference by semantic meaning (`primary`,
//! `background2`) rather than raw values. Exactly one theme is active at a
//! time; installing a theme replaces the old one as a whole value, never
//! partially.
//!
//! Every role is required. Themes deserialized from user files are rejected
//! when a role is missing, and [`Theme::validate`] rejects color values that
//! are neither hex nor ANSI — startup is the place to fail, not render time.
//!
//! # Example
//!
//! ```rust
//! use ticked::{Role, Theme};
//!
//! let theme = Theme::everforest_dark_hard_hc();
//! assert_eq!(theme.get(Role::Primary).0, "#b0ce8c");
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::color::Color;

/// Semantic color roles every theme must define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Darkest background shade.
    Background1,
    /// Middle background shade.
    Background2,
    /// Lightest background shade.
    Background3,
    /// Primary text color.
    Foreground1,
    /// Secondary text color.
    Foreground2,
    /// Muted text color.
    Foreground3,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Magenta,
    Cyan,
    /// Main accent color for highlights and titles.
    Primary,
    /// Secondary accent color.
    Secondary,
}

impl Role {
    /// All roles, in palette declaration order.
    pub const ALL: [Role; 16] = [
        Role::Background1,
        Role::Background2,
        Role::Background3,
        Role::Foreground1,
        Role::Foreground2,
        Role::Foreground3,
        Role::Red,
        Role::Orange,
        Role::Yellow,
        Role::Green,
        Role::Blue,
        Role::Purple,
        Role::Magenta,
        Role::Cyan,
        Role::Primary,
        Role::Secondary,
    ];

    /// The role's name as it appears in theme files.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Background1 => "background1",
            Role::Background2 => "background2",
            Role::Background3 => "background3",
            Role::Foreground1 => "foreground1",
            Role::Foreground2 => "foreground2",
            Role::Foreground3 => "foreground3",
            Role::Red => "red",
            Role::Orange => "orange",
            Role::Yellow => "yellow",
            Role::Green => "green",
            Role::Blue => "blue",
            Role::Purple => "purple",
            Role::Magenta => "magenta",
            Role::Cyan => "cyan",
            Role::Primary => "primary",
            Role::Secondary => "secondary",
        }
    }

    /// Parse a role from its file-format name.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full set of role colors for a theme.
///
/// All fields are required; deserialization fails on a missing role, which is
/// how themes loaded from user files get their completeness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background1: Color,
    pub background2: Color,
    pub background3: Color,
    pub foreground1: Color,
    pub foreground2: Color,
    pub foreground3: Color,
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub purple: Color,
    pub magenta: Color,
    pub cyan: Color,
    pub primary: Color,
    pub secondary: Color,
}

impl Palette {
    /// Returns the color for a role.
    pub fn get(&self, role: Role) -> &Color {
        match role {
            Role::Background1 => &self.background1,
            Role::Background2 => &self.background2,
            Role::Background3 => &self.background3,
            Role::Foreground1 => &self.foreground1,
            Role::Foreground2 => &self.foreground2,
            Role::Foreground3 => &self.foreground3,
            Role::Red => &self.red,
            Role::Orange => &self.orange,
            Role::Yellow => &self.yellow,
            Role::Green => &self.green,
            Role::Blue => &self.blue,
            Role::Purple => &self.purple,
            Role::Magenta => &self.magenta,
            Role::Cyan => &self.cyan,
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
        }
    }

    /// Check that every role holds a usable color value.
    ///
    /// # Errors
    /// Returns [`ThemeError::InvalidColor`] for the first role whose value is
    /// neither a hex string nor an ANSI index.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for role in Role::ALL {
            let color = self.get(role);
            if !color.is_valid() {
                return Err(ThemeError::InvalidColor {
                    role,
                    value: color.0.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Errors from theme role lookup and validation.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A string-keyed lookup named a role no theme defines.
    #[error("unknown theme role `{0}`")]
    UnknownRole(String),

    /// A role holds a value that is neither hex nor ANSI.
    #[error("role `{role}` has invalid color value `{value}`")]
    InvalidColor { role: Role, value: String },
}

/// Errors from loading a theme from a file.
#[derive(Debug, Error)]
pub enum ThemeLoadError {
    #[error("failed to read theme file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse theme JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse theme TOML")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported theme file format `{0}`")]
    UnsupportedFormat(String),

    #[error("theme failed validation")]
    Invalid(#[from] ThemeError),
}

/// A named, immutable palette of semantic color roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    #[serde(flatten)]
    palette: Palette,
}

impl Theme {
    /// Creates a theme from a name and palette.
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette,
        }
    }

    /// The theme's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme's palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the color for a role. Typed lookup never fails.
    pub fn get(&self, role: Role) -> Color {
        self.palette.get(role).clone()
    }

    /// Returns the color for a role named by string, as user configuration
    /// files reference roles.
    ///
    /// # Errors
    /// Returns [`ThemeError::UnknownRole`] when the name matches no role.
    pub fn resolve(&self, name: &str) -> Result<Color, ThemeError> {
        let role =
            Role::from_name(name).ok_or_else(|| ThemeError::UnknownRole(name.to_string()))?;
        Ok(self.get(role))
    }

    /// Check that every role holds a usable color value.
    ///
    /// # Errors
    /// Returns [`ThemeError`] if any role fails format validation.
    pub fn validate(&self) -> Result<(), ThemeError> {
        self.palette.validate()?;
        debug!(theme.name = %self.name, "Theme validated");
        Ok(())
    }

    /// Load a theme from JSON text.
    ///
    /// # Errors
    /// Returns [`ThemeLoadError`] if parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, ThemeLoadError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme from TOML text.
    ///
    /// # Errors
    /// Returns [`ThemeLoadError`] if parsing or validation fails.
    pub fn from_toml(toml: &str) -> Result<Self, ThemeLoadError> {
        let theme: Theme = toml::from_str(toml)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme from a file, inferring the format from the extension.
    ///
    /// # Errors
    /// Returns [`ThemeLoadError`] if reading, parsing, or validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            Some(ext) => Err(ThemeLoadError::UnsupportedFormat(ext.into())),
            None => Err(ThemeLoadError::UnsupportedFormat("unknown".into())),
        }
    }

    // ========================
    // Built-in themes
    // ========================

    /// Everforest Dark Hard, high-contrast variant.
    ///
    /// Background shades keep the stock Everforest atmosphere; foregrounds
    /// and the core palette are brightened for readability.
    pub fn everforest_dark_hard_hc() -> Self {
        Self::new(
            "everforest-dark-hard-hc",
            Palette {
                background1: Color::from("#272e33"),
                background2: Color::from("#2e383c"),
                background3: Color::from("#374145"),
                foreground1: Color::from("#e8e4cf"),
                foreground2: Color::from("#cfcab5"),
                foreground3: Color::from("#b3b09b"),
                red: Color::from("#f08080"),
                orange: Color::from("#e6a97a"),
                yellow: Color::from("#e6c37f"),
                green: Color::from("#b0ce8c"),
                blue: Color::from("#8cd1c8"),
                purple: Color::from("#dda6c1"),
                magenta: Color::from("#dda6c1"),
                cyan: Color::from("#91d0a6"),
                primary: Color::from("#b0ce8c"),
                secondary: Color::from("#8cd1c8"),
            },
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::everforest_dark_hard_hc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_resolvable() {
        let theme = Theme::everforest_dark_hard_hc();
        for role in Role::ALL {
            let color = theme.resolve(role.as_str()).unwrap();
            assert!(color.is_valid(), "role {role} has invalid color");
        }
    }

    #[test]
    fn test_unknown_role_errors() {
        let theme = Theme::default();
        let err = theme.resolve("tertiary").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownRole(name) if name == "tertiary"));
    }

    #[test]
    fn test_everforest_accents() {
        let theme = Theme::everforest_dark_hard_hc();
        assert_eq!(theme.get(Role::Primary).0, "#b0ce8c");
        assert_eq!(theme.get(Role::Secondary).0, "#8cd1c8");
        assert_eq!(theme.get(Role::Green), theme.get(Role::Primary));
    }

    #[test]
    fn test_validation_rejects_bad_color() {
        let mut theme = Theme::everforest_dark_hard_hc();
        theme.palette.primary = Color::from("chartreuse");
        let err = theme.validate().unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidColor {
                role: Role::Primary,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_role_rejected_on_load() {
        // No `secondary` key.
        let json = r##"{
            "name": "partial",
            "background1": "#111111", "background2": "#222222", "background3": "#333333",
            "foreground1": "#dddddd", "foreground2": "#cccccc", "foreground3": "#bbbbbb",
            "red": "#ff0000", "orange": "#ff8800", "yellow": "#ffff00",
            "green": "#00ff00", "blue": "#0000ff", "purple": "#8800ff",
            "magenta": "#ff00ff", "cyan": "#00ffff", "primary": "#00ff00"
        }"##;
        assert!(matches!(
            Theme::from_json(json),
            Err(ThemeLoadError::Json(_))
        ));
    }

    #[test]
    fn test_roundtrip_toml() {
        let theme = Theme::everforest_dark_hard_hc();
        let toml = toml::to_string(&theme).unwrap();
        let back = Theme::from_toml(&toml).unwrap();
        assert_eq!(back, theme);
    }
}
