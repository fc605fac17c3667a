//! Font collection for the raster backend
//!
//! Loads TrueType/OpenType faces with `fontdue`. Face `0` always exists; a
//! widget asking for a face that was never loaded gets face `0`.

use std::path::Path;

use fontdue::{Font, FontSettings};

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to read a font file
    #[error("Failed to read font file '{path}': {source}")]
    Io {
        /// Font file path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse font data
    #[error("Failed to load font: {0}")]
    LoadError(String),

    /// No font paths were given
    #[error("At least one font is required")]
    Empty,
}

/// Ordered set of font faces
pub struct FontBook {
    faces: Vec<Font>,
}

impl FontBook {
    /// Create a font book with `data` as face `0`
    ///
    /// # Errors
    /// [`FontError::LoadError`] if `data` is not a usable font.
    pub fn from_bytes(data: &[u8]) -> FontResult<Self> {
        Ok(Self {
            faces: vec![parse(data)?],
        })
    }

    /// Load font files in order; the first becomes face `0`
    ///
    /// # Errors
    /// Fails if `paths` is empty or any file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> FontResult<Self> {
        let mut faces = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let data = std::fs::read(path).map_err(|source| FontError::Io {
                path: path.display().to_string(),
                source,
            })?;
            faces.push(parse(&data)?);
            log::debug!("Loaded font face {} from {}", faces.len() - 1, path.display());
        }

        if faces.is_empty() {
            return Err(FontError::Empty);
        }
        Ok(Self { faces })
    }

    /// Append a face, returning its index
    ///
    /// # Errors
    /// [`FontError::LoadError`] if `data` is not a usable font.
    pub fn push_bytes(&mut self, data: &[u8]) -> FontResult<usize> {
        self.faces.push(parse(data)?);
        Ok(self.faces.len() - 1)
    }

    /// Face `id`, or face `0` when `id` is out of range
    pub fn face(&self, id: usize) -> &Font {
        self.faces.get(id).unwrap_or(&self.faces[0])
    }

    /// Number of loaded faces
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always false; a font book holds at least one face
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

fn parse(data: &[u8]) -> FontResult<Font> {
    Font::from_bytes(data, FontSettings::default()).map_err(|e| FontError::LoadError(e.to_string()))
}
