//! Serialized descriptions of a layout plan

pub mod json;
pub mod summary;

pub use json::{to_json, PlanDocument};
pub use summary::render_summary;

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::layout::LayoutPlan;
use crate::model::ImageRef;

/// Render a plan in the requested format
pub fn render_plan(
    plan: &LayoutPlan<'_, ImageRef>,
    settings: &Settings,
    format: OutputFormat,
    scale: f32,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => to_json(plan, scale).map(|mut json| {
            json.push('\n');
            json
        }),
        OutputFormat::Summary => Ok(render_summary(plan, settings)),
    }
}
