//! Human-readable description of a layout plan

use clap::ValueEnum;
use std::fmt::Display;

use crate::config::Settings;
use crate::layout::LayoutPlan;
use crate::model::Page;

/// Format a plan as a header block followed by one line per page.
///
/// Lengths are shown in the settings' display unit.
pub fn render_summary<I: Display>(plan: &LayoutPlan<'_, I>, settings: &Settings) -> String {
    let unit = settings.display_unit;
    let len = |inches: f32| format!("{:.2}", unit.express(inches));
    let suffix = unit.suffix();

    let paper_name = match settings.paper_size {
        Some(paper) => format!("{}, {}", value_name(&paper), value_name(&settings.orientation)),
        None => "custom".to_string(),
    };

    let mut lines = vec![
        format!(
            "Paper: {} x {} {} ({})",
            len(plan.paper_width),
            len(plan.paper_height),
            suffix,
            paper_name
        ),
        format!(
            "Card: {} x {} {} ({})",
            len(settings.card_width),
            len(settings.card_height),
            suffix,
            value_name(&settings.card_preset)
        ),
        format!(
            "Grid: {} rows x {} columns ({} per page)",
            settings.grid_rows,
            settings.grid_cols,
            settings.cards_per_page()
        ),
        format!(
            "Margins: top {} {}, side {} {}",
            len(plan.margins.top_margin),
            suffix,
            len(plan.margins.side_margin),
            suffix
        ),
        format!("Mode: {}", value_name(&settings.mode)),
        if settings.show_cut_lines {
            format!("Cut lines: {} segments per page", plan.cut_lines.len())
        } else {
            "Cut lines: off".to_string()
        },
        format!(
            "Pages: {} ({} front, {} back)",
            plan.pages.len(),
            plan.front_page_count(),
            plan.back_page_count()
        ),
        String::new(),
    ];

    lines.extend(
        plan.pages
            .iter()
            .enumerate()
            .map(|(index, page)| page_line(page, index)),
    );

    let mut summary = lines.join("\n");
    summary.push('\n');
    summary
}

fn page_line<I: Display>(page: &Page<'_, I>, index: usize) -> String {
    // Distinct image names in first-appearance order
    let mut names: Vec<String> = Vec::new();
    for image in page.placements.iter().filter_map(|p| p.content.image()) {
        let name = image.to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let mut line = format!(
        "{}: {}/{} slots filled",
        page.display_label(index),
        page.filled_count(),
        page.placements.len()
    );
    if !names.is_empty() {
        line.push_str(&format!(" [{}]", names.join(", ")));
    }
    line
}

/// The command-line spelling of an enum value, e.g. "us-business"
fn value_name<T: ValueEnum>(value: &T) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}
