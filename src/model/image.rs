use std::fmt;
use std::path::{Path, PathBuf};

/// Natural size of a decoded bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

/// Handle to a caller-owned source image.
///
/// Layout output only ever borrows these; nothing in the engine reads the
/// image data itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    /// Display name (file name for images loaded from disk)
    pub name: String,
    pub path: PathBuf,
    /// Natural pixel dimensions, when the caller has decoded the image
    pub pixel_size: Option<PixelSize>,
}

impl ImageRef {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            pixel_size: None,
        }
    }

    /// Create a handle named after the file component of `path`
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, path)
    }

    pub fn with_pixel_size(mut self, width: u32, height: u32) -> Self {
        self.pixel_size = Some(PixelSize { width, height });
        self
    }

    /// Width divided by height, if the pixel size is known
    pub fn aspect_ratio(&self) -> Option<f32> {
        self.pixel_size
            .filter(|s| s.height > 0)
            .map(|s| s.width as f32 / s.height as f32)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
