//! Color schemas
//!
//! A schema is a named palette mapping semantic widget roles to colors. The
//! registry holds every known schema and exactly one active one.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use image::Rgb;

use crate::ui::GuiError;

/// Built-in blue schema (active by default)
pub const SCHEMA_BLUE: &str = "blue";
/// Built-in red schema
pub const SCHEMA_RED: &str = "red";
/// Built-in green schema
pub const SCHEMA_GREEN: &str = "green";
/// Built-in yellow schema
pub const SCHEMA_YELLOW: &str = "yellow";

/// Returned for roles a palette does not define
pub const FALLBACK_COLOR: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Semantic role a color plays in a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Widget background
    Bg,
    /// Widget background while the cursor hovers it
    Hover,
    /// Borders
    Line,
    /// Caption text
    Text,
    /// Label background
    TextBg,
    /// Checkbox indicator while unchecked
    Off,
    /// Checkbox indicator while checked
    On,
}

impl Role {
    /// Every role
    pub const ALL: [Self; 7] = [
        Self::Bg,
        Self::Hover,
        Self::Line,
        Self::Text,
        Self::TextBg,
        Self::Off,
        Self::On,
    ];

    /// Name used in configuration files
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Hover => "hover",
            Self::Line => "line",
            Self::Text => "text",
            Self::TextBg => "textbg",
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown color role '{s}'"))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-to-color mapping; roles may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<Role, Rgb<u8>>,
}

impl Palette {
    /// Build a palette from `(role, [r, g, b])` pairs
    pub fn from_entries(entries: impl IntoIterator<Item = (Role, [u8; 3])>) -> Self {
        Self {
            colors: entries
                .into_iter()
                .map(|(role, rgb)| (role, Rgb(rgb)))
                .collect(),
        }
    }

    /// Color for `role`, if defined
    pub fn get(&self, role: Role) -> Option<Rgb<u8>> {
        self.colors.get(&role).copied()
    }

    /// Define or replace the color for `role`
    pub fn set(&mut self, role: Role, color: Rgb<u8>) {
        self.colors.insert(role, color);
    }
}

fn builtin(bg: u32, hover: u32, textbg: u32, off: u32, on: u32) -> Palette {
    let rgb = |hex: u32| [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8];
    Palette::from_entries([
        (Role::Bg, rgb(bg)),
        (Role::Hover, rgb(hover)),
        (Role::Line, rgb(0x69_69_69)),
        (Role::Text, rgb(0x00_00_00)),
        (Role::TextBg, rgb(textbg)),
        (Role::Off, rgb(off)),
        (Role::On, rgb(on)),
    ])
}

/// Registry of named palettes with one active entry
#[derive(Debug, Clone)]
pub struct ColorSchemas {
    schemas: Vec<(String, Palette)>,
    active: usize,
}

impl Default for ColorSchemas {
    fn default() -> Self {
        Self {
            schemas: vec![
                (
                    SCHEMA_BLUE.to_string(),
                    builtin(0x9A_B6_E6, 0x75_A6_FA, 0xD2_DE_FF, 0x6A_96_C6, 0x90_EE_90),
                ),
                (
                    SCHEMA_RED.to_string(),
                    builtin(0xE6_B4_AB, 0xFC_9B_89, 0xF0_F0_F0, 0xC6_94_8B, 0x90_EE_90),
                ),
                (
                    SCHEMA_GREEN.to_string(),
                    builtin(0xD9_E6_D8, 0xBD_FF_BF, 0xF0_F0_F0, 0xA9_C6_DA, 0x22_80_22),
                ),
                (
                    SCHEMA_YELLOW.to_string(),
                    builtin(0xE6_E6_D8, 0xFD_FF_BD, 0xF0_F0_F0, 0xC6_C6_A8, 0x90_EE_90),
                ),
            ],
            active: 0,
        }
    }
}

impl ColorSchemas {
    /// Registry holding the four built-in schemas, blue active
    pub fn new() -> Self {
        Self::default()
    }

    /// Active palette's color for `role`, white when the palette lacks it
    pub fn color(&self, role: Role) -> Rgb<u8> {
        self.schemas[self.active].1.get(role).unwrap_or(FALLBACK_COLOR)
    }

    /// Name of the active schema
    pub fn active(&self) -> &str {
        &self.schemas[self.active].0
    }

    /// Activate the schema called `name`
    ///
    /// # Errors
    /// [`GuiError::UnknownSchema`] if no schema has that name; the active
    /// schema is left unchanged.
    pub fn set_active(&mut self, name: &str) -> Result<(), GuiError> {
        let index = self
            .position(name)
            .ok_or_else(|| GuiError::UnknownSchema(name.to_string()))?;
        self.active = index;
        Ok(())
    }

    /// Names of all registered schemas in registration order
    pub fn names(&self) -> Vec<String> {
        self.schemas.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Whether a schema called `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Add a schema, replacing any existing one with the same name
    pub fn register(&mut self, name: impl Into<String>, palette: Palette) {
        let name = name.into();
        match self.position(&name) {
            Some(index) => {
                log::debug!("Replacing color schema '{name}'");
                self.schemas[index].1 = palette;
            }
            None => {
                log::debug!("Registering color schema '{name}'");
                self.schemas.push((name, palette));
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.schemas.iter().position(|(existing, _)| existing == name)
    }
}
