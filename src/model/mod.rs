pub mod geometry;
pub mod image;
pub mod page;

pub use geometry::{LineSegment, Margins, Slot};
pub use image::{ImageRef, PixelSize};
pub use page::{Page, PlacedImage, Side, SlotContent};
