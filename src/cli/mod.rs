pub mod args;
pub mod inputs;

pub use args::{Args, CardPreset, LayoutMode, Orientation, OutputFormat, PaperSize};
pub use inputs::collect_images;
