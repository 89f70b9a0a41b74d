use crate::config::Settings;
use crate::error::LayoutError;
use crate::model::{LineSegment, Margins, Page};

use super::cut_lines::cut_line_segments;
use super::paginate::layout_pages;

/// Everything a renderer or exporter needs to draw a layout run
#[derive(Debug, Clone)]
pub struct LayoutPlan<'a, I> {
    pub paper_width: f32,
    pub paper_height: f32,
    pub margins: Margins,
    /// Cut-line ticks drawn on every page; empty when cut lines are off
    pub cut_lines: Vec<LineSegment>,
    pub pages: Vec<Page<'a, I>>,
}

impl<I> LayoutPlan<'_, I> {
    pub fn front_page_count(&self) -> usize {
        self.pages.iter().filter(|p| p.side.is_front()).count()
    }

    pub fn back_page_count(&self) -> usize {
        self.pages.len() - self.front_page_count()
    }
}

/// Compute margins, cut lines and pages for one run
pub fn plan_layout<'a, I>(
    front: &'a [I],
    back: &'a [I],
    settings: &Settings,
) -> Result<LayoutPlan<'a, I>, LayoutError> {
    let margins = settings.margins();
    if margins.is_negative() {
        log::warn!(
            "Grid overflows the paper (top margin {:.3}, side margin {:.3})",
            margins.top_margin,
            margins.side_margin
        );
    }

    let pages = layout_pages(front, back, settings)?;

    let cut_lines = if settings.show_cut_lines {
        cut_line_segments(settings, margins)
    } else {
        Vec::new()
    };

    Ok(LayoutPlan {
        paper_width: settings.paper_width,
        paper_height: settings.paper_height,
        margins,
        cut_lines,
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LayoutMode;

    #[test]
    fn test_plan_with_cut_lines() {
        let front = vec!["a", "b"];
        let back = vec!["back"];
        let settings = Settings::default();

        let plan = plan_layout(&front, &back, &settings).unwrap();
        assert_eq!((plan.paper_width, plan.paper_height), (8.5, 11.0));
        assert_eq!(plan.margins, settings.margins());
        assert_eq!(plan.cut_lines.len(), 18);
        assert_eq!(plan.front_page_count(), 2);
        assert_eq!(plan.back_page_count(), 2);
    }

    #[test]
    fn test_plan_without_cut_lines() {
        let front = vec!["a"; 11];
        let settings = Settings::default()
            .with_mode(LayoutMode::Ordered)
            .with_cut_lines(false);

        let plan = plan_layout(&front, &[], &settings).unwrap();
        assert!(plan.cut_lines.is_empty());
        assert_eq!(plan.pages.len(), 2);
        assert_eq!(plan.back_page_count(), 0);
    }

    #[test]
    fn test_plan_propagates_grid_error() {
        let settings = Settings::new(8.5, 11.0, 3.5, 2.0, 5, 0);
        assert!(plan_layout(&["a"], &[], &settings).is_err());
    }
}
