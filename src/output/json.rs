//! JSON form of a layout plan
//!
//! Coordinates are in inches multiplied by `scale`, so a consumer that works in
//! pixels can pass its pixels-per-inch and use the values directly.

use serde::Serialize;
use std::borrow::Cow;

use crate::layout::LayoutPlan;
use crate::model::{ImageRef, LineSegment, Margins, Page, PlacedImage, Side};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument<'a> {
    pub paper_width: f32,
    pub paper_height: f32,
    /// Multiplier applied to every coordinate (1.0 = inches)
    pub scale: f32,
    pub margins: Margins,
    pub cut_lines: Vec<LineSegment>,
    pub pages: Vec<PageDocument<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument<'a> {
    pub label: &'a str,
    pub side: &'static str,
    pub number: usize,
    pub placements: Vec<PlacementDocument<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDocument<'a> {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// None for an empty slot
    pub image: Option<ImageDocument<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDocument<'a> {
    pub name: &'a str,
    pub path: Cow<'a, str>,
    pub source_index: usize,
}

impl<'a> PlanDocument<'a> {
    pub fn new(plan: &'a LayoutPlan<'_, ImageRef>, scale: f32) -> Self {
        Self {
            paper_width: plan.paper_width * scale,
            paper_height: plan.paper_height * scale,
            scale,
            margins: Margins {
                top_margin: plan.margins.top_margin * scale,
                side_margin: plan.margins.side_margin * scale,
            },
            cut_lines: plan.cut_lines.iter().map(|s| s.scaled(scale)).collect(),
            pages: plan.pages.iter().map(|p| page_document(p, scale)).collect(),
        }
    }
}

fn page_document<'a>(page: &'a Page<'_, ImageRef>, scale: f32) -> PageDocument<'a> {
    PageDocument {
        label: &page.label,
        side: match page.side {
            Side::Front => "front",
            Side::Back => "back",
        },
        number: page.number,
        placements: page
            .placements
            .iter()
            .map(|p| placement_document(p, scale))
            .collect(),
    }
}

fn placement_document<'a>(placed: &PlacedImage<'a, ImageRef>, scale: f32) -> PlacementDocument<'a> {
    let slot = placed.slot.scaled(scale);
    let image = placed
        .content
        .image()
        .zip(placed.content.source_index())
        .map(|(image, source_index)| ImageDocument {
            name: &image.name,
            path: image.path.to_string_lossy(),
            source_index,
        });

    PlacementDocument {
        row: slot.row,
        col: slot.col,
        x: slot.x,
        y: slot.y,
        width: slot.width,
        height: slot.height,
        image,
    }
}

/// Serialize a plan as pretty-printed JSON
pub fn to_json(plan: &LayoutPlan<'_, ImageRef>, scale: f32) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PlanDocument::new(plan, scale))
}
