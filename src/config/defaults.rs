/// US Letter paper in inches (width, height)
pub const LETTER_SIZE: (f32, f32) = (8.5, 11.0);

/// A4 paper in inches (210mm x 297mm)
pub const A4_SIZE: (f32, f32) = (8.27, 11.69);

/// US Legal paper in inches
pub const LEGAL_SIZE: (f32, f32) = (8.5, 14.0);

/// Tabloid paper in inches
pub const TABLOID_SIZE: (f32, f32) = (11.0, 17.0);

/// US business card in inches
pub const US_BUSINESS_CARD: (f32, f32) = (3.5, 2.0);

/// EU business card in inches (85mm x 55mm)
pub const EU_BUSINESS_CARD: (f32, f32) = (3.346, 2.165);

/// Bridge playing card in inches
pub const BRIDGE_CARD: (f32, f32) = (2.25, 3.5);

/// Poker playing card in inches
pub const POKER_CARD: (f32, f32) = (2.5, 3.5);

/// Default grid rows (5 US business cards fill a letter page vertically)
pub const DEFAULT_GRID_ROWS: usize = 5;

/// Default grid columns
pub const DEFAULT_GRID_COLS: usize = 2;

/// File extensions treated as images when expanding directories
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];
