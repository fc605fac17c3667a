//! # Overlay Configuration
//!
//! Settings for the overlay GUI that a host application usually keeps in a
//! file next to its own configuration: log level, color schemas, fonts for the
//! raster backend and the FPS counter window.
//!
//! ```toml
//! log_level = "info"
//! default_schema = "night"
//! fps_update_interval_secs = 1.0
//! fonts = ["fonts/DejaVuSans.ttf"]
//!
//! [[schemas]]
//! name = "night"
//! [schemas.colors]
//! bg = [20, 20, 30]
//! text = [230, 230, 230]
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::schema::{ColorSchemas, Palette, Role, SCHEMA_BLUE};

// Re-export from the config module for compatibility
pub use crate::config::{Config, ConfigError};

/// # Color Schema Configuration
///
/// A palette registered in addition to the built-in ones. Roles left out fall
/// back to white when drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Schema name; reusing a built-in name replaces that palette
    pub name: String,
    /// Role name (`bg`, `hover`, `line`, `text`, `textbg`, `off`, `on`) to RGB
    #[serde(default)]
    pub colors: BTreeMap<String, [u8; 3]>,
}

impl SchemaConfig {
    /// Create an empty schema configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: BTreeMap::new(),
        }
    }

    /// Set the color for `role`
    #[must_use]
    pub fn with_color(mut self, role: Role, rgb: [u8; 3]) -> Self {
        self.colors.insert(role.as_str().to_string(), rgb);
        self
    }

    /// Convert to a palette
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] if a role name is unknown.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let entries = self
            .colors
            .iter()
            .map(|(role, rgb)| {
                role.parse::<Role>()
                    .map(|role| (role, *rgb))
                    .map_err(|e| ConfigError::Invalid(format!("schema '{}': {e}", self.name)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Palette::from_entries(entries))
    }
}

/// # GUI Configuration
///
/// Top-level configuration for the overlay and the binaries hosting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Log filter used when the host initialises logging
    pub log_level: String,
    /// Schema active after start-up
    pub default_schema: String,
    /// Window length of the FPS counter in seconds
    pub fps_update_interval_secs: f32,
    /// Font files for the raster backend; the first one is face `0`
    pub fonts: Vec<String>,
    /// Additional color schemas
    pub schemas: Vec<SchemaConfig>,
}

impl GuiConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            default_schema: SCHEMA_BLUE.to_string(),
            fps_update_interval_secs: 1.0,
            fonts: Vec::new(),
            schemas: Vec::new(),
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the schema active after start-up
    #[must_use]
    pub fn with_default_schema(mut self, name: impl Into<String>) -> Self {
        self.default_schema = name.into();
        self
    }

    /// Set the FPS counter window
    #[must_use]
    pub fn with_fps_update_interval(mut self, seconds: f32) -> Self {
        self.fps_update_interval_secs = seconds;
        self
    }

    /// Add a font file
    #[must_use]
    pub fn with_font(mut self, path: impl Into<String>) -> Self {
        self.fonts.push(path.into());
        self
    }

    /// Add a color schema
    #[must_use]
    pub fn with_schema(mut self, schema: SchemaConfig) -> Self {
        self.schemas.push(schema);
        self
    }

    /// FPS counter window as a duration
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] unless the interval is a positive number of
    /// seconds that fits in a [`Duration`].
    pub fn fps_update_interval(&self) -> Result<Duration, ConfigError> {
        let secs = self.fps_update_interval_secs;
        match Duration::try_from_secs_f32(secs) {
            Ok(interval) if !interval.is_zero() => Ok(interval),
            _ => Err(ConfigError::Invalid(format!(
                "fps_update_interval_secs must be a positive duration, got {secs}"
            ))),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] for an FPS interval that is not a positive
    /// duration, an unnamed or malformed schema, or a default schema that is
    /// neither built in nor configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fps_update_interval()?;

        for schema in &self.schemas {
            if schema.name.is_empty() {
                return Err(ConfigError::Invalid("schema name cannot be empty".to_string()));
            }
            schema.palette()?;
        }

        let known = ColorSchemas::new().contains(&self.default_schema)
            || self.schemas.iter().any(|schema| schema.name == self.default_schema);
        if !known {
            return Err(ConfigError::Invalid(format!(
                "default_schema '{}' is not defined",
                self.default_schema
            )));
        }

        Ok(())
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for GuiConfig {}
