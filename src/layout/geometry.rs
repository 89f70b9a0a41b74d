//! Grid centering and slot positions

use crate::model::{Margins, Slot};

/// Compute the margins that center a `grid_rows` x `grid_cols` grid of cards
/// on the paper.
///
/// Margins are not clamped: a grid larger than the paper yields negative values.
pub fn compute_margins(
    paper_width: f32,
    paper_height: f32,
    card_width: f32,
    card_height: f32,
    grid_rows: usize,
    grid_cols: usize,
) -> Margins {
    let total_card_width = grid_cols as f32 * card_width;
    let total_card_height = grid_rows as f32 * card_height;

    Margins {
        top_margin: (paper_height - total_card_height) / 2.0,
        side_margin: (paper_width - total_card_width) / 2.0,
    }
}

/// Generate every slot of the grid in row-major order.
///
/// This order is the fill order for pagination; slot `k` on a page is at
/// row `k / grid_cols`, column `k % grid_cols`.
pub fn generate_slots(
    margins: Margins,
    card_width: f32,
    card_height: f32,
    grid_rows: usize,
    grid_cols: usize,
) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(grid_rows.checked_mul(grid_cols).unwrap_or(0));

    for row in 0..grid_rows {
        for col in 0..grid_cols {
            slots.push(Slot {
                x: margins.side_margin + col as f32 * card_width,
                y: margins.top_margin + row as f32 * card_height,
                width: card_width,
                height: card_height,
                row,
                col,
            });
        }
    }

    slots
}
