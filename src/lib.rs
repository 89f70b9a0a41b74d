pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod output;

pub use cli::{CardPreset, LayoutMode, Orientation, OutputFormat, PaperSize};
pub use config::{Settings, Unit};
pub use error::{ConfigError, InputError, LayoutError};
pub use layout::{
    compute_margins, cut_line_segments, generate_slots, layout_pages, plan_layout, LayoutPlan,
};
pub use model::{ImageRef, LineSegment, Margins, Page, PlacedImage, Side, Slot, SlotContent};

/// High-level API for laying out card images.
///
/// This is the recommended entry point for library consumers. It validates
/// the settings, lays out the pages, and returns the plan serialized in the
/// requested format.
///
/// # Arguments
///
/// * `front` - Front images in print order
/// * `back` - Back images; a single image is reused behind every front
/// * `settings` - Paper, card, and grid configuration
/// * `format` - JSON plan or text summary
///
/// # Example
///
/// ```no_run
/// use card_templater::{layout_cards, ImageRef, LayoutMode, OutputFormat, Settings};
///
/// let front = vec![ImageRef::new("logo", "front.png")];
/// let back = vec![ImageRef::new("back", "back.png")];
/// let settings = Settings::default().with_mode(LayoutMode::FullPage);
///
/// let json = layout_cards(&front, &back, &settings, OutputFormat::Json).unwrap();
/// std::fs::write("layout.json", json).unwrap();
/// ```
pub fn layout_cards(
    front: &[ImageRef],
    back: &[ImageRef],
    settings: &Settings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    settings.validate(false)?;
    let plan = plan_layout(front, back, settings)?;
    Ok(output::render_plan(&plan, settings, format, 1.0)?)
}
