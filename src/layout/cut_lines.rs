//! Cut-line tick marks
//!
//! Ticks sit in the margins at every grid boundary and never cross the card
//! area: horizontal ticks run in from the left and right paper edges for half
//! the side margin, vertical ticks run in from the top and bottom edges for
//! half the top margin.

use crate::config::Settings;
use crate::model::{LineSegment, Margins};

/// Number of segments `cut_line_segments` returns for a grid
pub fn cut_line_count(grid_rows: usize, grid_cols: usize) -> usize {
    2 * (grid_rows + 1) + 2 * (grid_cols + 1)
}

/// Compute the cut-line segments for one page.
///
/// Every page of a run gets the same set. Horizontal ticks come first (left
/// then right for each row boundary, top to bottom), followed by vertical
/// ticks (top then bottom for each column boundary, left to right).
/// Zero or negative margins produce zero-length or inverted ticks.
pub fn cut_line_segments(settings: &Settings, margins: Margins) -> Vec<LineSegment> {
    let paper_width = settings.paper_width;
    let paper_height = settings.paper_height;
    let h_len = margins.side_margin / 2.0;
    let v_len = margins.top_margin / 2.0;

    let mut segments = Vec::with_capacity(cut_line_count(settings.grid_rows, settings.grid_cols));

    for r in 0..=settings.grid_rows {
        let y = margins.top_margin + r as f32 * settings.card_height;
        segments.push(LineSegment::new(0.0, y, h_len, y));
        segments.push(LineSegment::new(paper_width - h_len, y, paper_width, y));
    }

    for c in 0..=settings.grid_cols {
        let x = margins.side_margin + c as f32 * settings.card_width;
        segments.push(LineSegment::new(x, 0.0, x, v_len));
        segments.push(LineSegment::new(x, paper_height - v_len, x, paper_height));
    }

    segments
}
