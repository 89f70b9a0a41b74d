//! Page layout engine
//!
//! Pure functions from settings and image lists to page descriptions. Nothing
//! here performs I/O or keeps state between calls.

pub mod cut_lines;
pub mod geometry;
pub mod paginate;
pub mod plan;

pub use cut_lines::{cut_line_count, cut_line_segments};
pub use geometry::{compute_margins, generate_slots};
pub use paginate::{layout_pages, unplaced_back_images};
pub use plan::{plan_layout, LayoutPlan};
