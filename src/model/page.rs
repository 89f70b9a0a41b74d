use std::fmt;

use super::geometry::Slot;

/// Which face of the card a page prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    pub fn is_front(&self) -> bool {
        matches!(self, Side::Front)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Front => "Front",
            Side::Back => "Back",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What occupies a slot
#[derive(Debug, PartialEq)]
pub enum SlotContent<'a, I> {
    /// An image borrowed from the caller's list, with its position in that list
    Filled { image: &'a I, source_index: usize },
    /// No image; the slot is left blank
    Empty,
}

// Derived impls would demand `I: Clone`; only the reference is copied.
impl<I> Clone for SlotContent<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for SlotContent<'_, I> {}

impl<'a, I> SlotContent<'a, I> {
    pub fn image(&self) -> Option<&'a I> {
        match self {
            SlotContent::Filled { image, .. } => Some(*image),
            SlotContent::Empty => None,
        }
    }

    pub fn source_index(&self) -> Option<usize> {
        match self {
            SlotContent::Filled { source_index, .. } => Some(*source_index),
            SlotContent::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SlotContent::Empty)
    }
}

/// A slot together with what is drawn in it
#[derive(Debug, PartialEq)]
pub struct PlacedImage<'a, I> {
    pub slot: Slot,
    pub content: SlotContent<'a, I>,
    pub side: Side,
}

impl<I> Clone for PlacedImage<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for PlacedImage<'_, I> {}

impl<I> PlacedImage<'_, I> {
    pub fn is_front(&self) -> bool {
        self.side.is_front()
    }
}

/// One printable page: every grid slot in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, I> {
    pub side: Side,
    /// 1-based number within this side ("Front 3" has number 3)
    pub number: usize,
    pub label: String,
    pub placements: Vec<PlacedImage<'a, I>>,
}

impl<'a, I> Page<'a, I> {
    pub fn new(side: Side, number: usize, placements: Vec<PlacedImage<'a, I>>) -> Self {
        Self {
            side,
            number,
            label: format!("{} {}", side, number),
            placements,
        }
    }

    /// Caption shown under a page in a preview, e.g. "Page 2 - Back 1"
    pub fn display_label(&self, page_index: usize) -> String {
        format!("Page {} - {}", page_index + 1, self.label)
    }

    /// Number of slots holding an image
    pub fn filled_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| !p.content.is_empty())
            .count()
    }

    /// Source indices in slot order, None for empty slots
    pub fn source_indices(&self) -> Vec<Option<usize>> {
        self.placements
            .iter()
            .map(|p| p.content.source_index())
            .collect()
    }
}
