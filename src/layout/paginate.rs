//! Pagination: assigning front and back images to page slots
//!
//! Two modes, selected by [`LayoutMode`]:
//!
//! - **Full page**: each front image fills every slot of its own page. A single
//!   back image gets one matching page per front page; otherwise each back
//!   image gets its own page after all the fronts.
//! - **Ordered**: images fill slots in row-major order, `rows * cols` per page.
//!   Each front page is immediately followed by its back page (when there are
//!   back images), so duplex printing lines the two sides up.

use crate::cli::LayoutMode;
use crate::config::Settings;
use crate::error::LayoutError;
use crate::model::{Page, PlacedImage, Side, Slot, SlotContent};

use super::geometry::generate_slots;

/// Lay out front and back images into pages.
///
/// The image slices are only borrowed; every placement refers back into them.
/// An empty `front` list yields no front pages rather than an error.
pub fn layout_pages<'a, I>(
    front: &'a [I],
    back: &'a [I],
    settings: &Settings,
) -> Result<Vec<Page<'a, I>>, LayoutError> {
    match settings.grid_rows.checked_mul(settings.grid_cols) {
        Some(0) => {
            return Err(LayoutError::InvalidConfiguration(format!(
                "grid has no slots ({} rows x {} columns)",
                settings.grid_rows, settings.grid_cols
            )))
        }
        None => {
            return Err(LayoutError::InvalidConfiguration(format!(
                "grid of {} rows x {} columns is too large",
                settings.grid_rows, settings.grid_cols
            )))
        }
        Some(_) => {}
    }

    let margins = settings.margins();
    log::debug!(
        "Margins: top {:.3}, side {:.3}",
        margins.top_margin,
        margins.side_margin
    );

    let slots = generate_slots(
        margins,
        settings.card_width,
        settings.card_height,
        settings.grid_rows,
        settings.grid_cols,
    );

    let pages = match settings.mode {
        LayoutMode::FullPage => full_page_layout(front, back, &slots),
        LayoutMode::Ordered => ordered_layout(front, back, &slots),
    };

    log::debug!(
        "Laid out {} front and {} back images on {} pages",
        front.len(),
        back.len(),
        pages.len()
    );

    Ok(pages)
}

/// Number of back images ordered mode never places.
///
/// With two or more back images, back pages are only emitted alongside front
/// pages, so backs past `front_pages * cards_per_page` are dropped.
pub fn unplaced_back_images(front_count: usize, back_count: usize, cards_per_page: usize) -> usize {
    if back_count < 2 || cards_per_page == 0 {
        return 0;
    }
    let capacity = front_count.div_ceil(cards_per_page) * cards_per_page;
    back_count.saturating_sub(capacity)
}

fn full_page_layout<'a, I>(front: &'a [I], back: &'a [I], slots: &[Slot]) -> Vec<Page<'a, I>> {
    let mut pages = Vec::new();

    for (i, image) in front.iter().enumerate() {
        pages.push(uniform_page(Side::Front, i + 1, slots, image, i));
    }

    match back {
        // One shared card back, printed behind every front page
        [single] => {
            for i in 0..front.len() {
                pages.push(uniform_page(Side::Back, i + 1, slots, single, 0));
            }
        }
        _ => {
            for (i, image) in back.iter().enumerate() {
                pages.push(uniform_page(Side::Back, i + 1, slots, image, i));
            }
        }
    }

    pages
}

fn ordered_layout<'a, I>(front: &'a [I], back: &'a [I], slots: &[Slot]) -> Vec<Page<'a, I>> {
    let cards_per_page = slots.len();
    let num_front_pages = front.len().div_ceil(cards_per_page);
    let mut pages = Vec::with_capacity(num_front_pages * 2);

    for page_num in 0..num_front_pages {
        let base = page_num * cards_per_page;

        pages.push(fill_page(Side::Front, page_num + 1, slots, |k| {
            indexed(front, base + k)
        }));

        match back {
            [] => {}
            // The single back goes wherever this page has a front image
            [single] => pages.push(fill_page(Side::Back, page_num + 1, slots, |k| {
                if base + k < front.len() {
                    SlotContent::Filled {
                        image: single,
                        source_index: 0,
                    }
                } else {
                    SlotContent::Empty
                }
            })),
            _ => pages.push(fill_page(Side::Back, page_num + 1, slots, |k| {
                indexed(back, base + k)
            })),
        }
    }

    let unplaced = unplaced_back_images(front.len(), back.len(), cards_per_page);
    if unplaced > 0 {
        log::warn!(
            "{} back image(s) exceed the {} front page(s) and will not be placed",
            unplaced,
            num_front_pages
        );
    }

    pages
}

/// A page with the same image in every slot
fn uniform_page<'a, I>(
    side: Side,
    number: usize,
    slots: &[Slot],
    image: &'a I,
    source_index: usize,
) -> Page<'a, I> {
    fill_page(side, number, slots, |_| SlotContent::Filled {
        image,
        source_index,
    })
}

/// Build a page by asking `content` for slot `k` of each slot in order
fn fill_page<'a, I>(
    side: Side,
    number: usize,
    slots: &[Slot],
    content: impl Fn(usize) -> SlotContent<'a, I>,
) -> Page<'a, I> {
    let placements = slots
        .iter()
        .enumerate()
        .map(|(k, slot)| PlacedImage {
            slot: *slot,
            content: content(k),
            side,
        })
        .collect();

    Page::new(side, number, placements)
}

fn indexed<I>(images: &[I], index: usize) -> SlotContent<'_, I> {
    match images.get(index) {
        Some(image) => SlotContent::Filled {
            image,
            source_index: index,
        },
        None => SlotContent::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{}{}", prefix, i)).collect()
    }

    fn business_cards(mode: LayoutMode) -> Settings {
        Settings::new(8.5, 11.0, 3.5, 2.0, 5, 2).with_mode(mode)
    }

    fn count_side<I>(pages: &[Page<'_, I>], side: Side) -> usize {
        pages.iter().filter(|p| p.side == side).count()
    }

    fn labels<'p, I>(pages: &'p [Page<'_, I>]) -> Vec<&'p str> {
        pages.iter().map(|p| p.label.as_str()).collect()
    }

    #[test]
    fn test_ordered_partial_page() {
        let front = names("f", 3);
        let pages = layout_pages(&front, &[], &business_cards(LayoutMode::Ordered)).unwrap();

        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        assert_eq!(page.label, "Front 1");
        assert_eq!(page.placements.len(), 10);
        assert_eq!(
            page.source_indices(),
            vec![Some(0), Some(1), Some(2), None, None, None, None, None, None, None]
        );
        assert_eq!(page.placements[2].content.image(), Some(&front[2]));
        assert!(page.placements.iter().all(|p| p.is_front()));
    }

    #[test]
    fn test_full_page_single_back_is_aligned() {
        let front = names("f", 2);
        let back = names("b", 1);
        let pages = layout_pages(&front, &back, &business_cards(LayoutMode::FullPage)).unwrap();

        assert_eq!(labels(&pages), vec!["Front 1", "Front 2", "Back 1", "Back 2"]);

        for (i, page) in pages[..2].iter().enumerate() {
            assert_eq!(page.filled_count(), 10);
            assert!(page
                .placements
                .iter()
                .all(|p| p.content.source_index() == Some(i) && p.is_front()));
            assert!(page
                .placements
                .iter()
                .all(|p| std::ptr::eq(p.content.image().unwrap(), &front[i])));
        }

        for page in &pages[2..] {
            assert_eq!(page.side, Side::Back);
            assert!(page.placements.iter().all(|p| {
                p.content.source_index() == Some(0)
                    && std::ptr::eq(p.content.image().unwrap(), &back[0])
                    && !p.is_front()
            }));
        }
    }

    #[test]
    fn test_full_page_multiple_backs_are_independent() {
        let front = names("f", 2);
        let back = names("b", 3);
        let pages = layout_pages(&front, &back, &business_cards(LayoutMode::FullPage)).unwrap();

        assert_eq!(
            labels(&pages),
            vec!["Front 1", "Front 2", "Back 1", "Back 2", "Back 3"]
        );
        assert_eq!(pages[4].placements[7].content.source_index(), Some(2));
    }

    #[test]
    fn test_full_page_without_backs() {
        let front = names("f", 4);
        let pages = layout_pages(&front, &[], &business_cards(LayoutMode::FullPage)).unwrap();
        assert_eq!(pages.len(), 4);
        assert_eq!(count_side(&pages, Side::Back), 0);
    }

    #[test]
    fn test_ordered_spills_onto_second_page() {
        let front = names("f", 12);
        let pages = layout_pages(&front, &[], &business_cards(LayoutMode::Ordered)).unwrap();

        assert_eq!(labels(&pages), vec!["Front 1", "Front 2"]);
        assert_eq!(pages[0].filled_count(), 10);
        assert_eq!(pages[1].filled_count(), 2);
        assert_eq!(pages[1].placements[0].content.source_index(), Some(10));
        assert_eq!(pages[1].placements[1].content.source_index(), Some(11));
        assert!(pages[1].placements[2..].iter().all(|p| p.content.is_empty()));
    }

    #[test]
    fn test_ordered_interleaves_front_and_back() {
        let front = names("f", 12);
        let back = names("b", 12);
        let pages = layout_pages(&front, &back, &business_cards(LayoutMode::Ordered)).unwrap();

        assert_eq!(labels(&pages), vec!["Front 1", "Back 1", "Front 2", "Back 2"]);
        assert_eq!(pages[3].source_indices()[..3], [Some(10), Some(11), None]);
    }

    #[test]
    fn test_ordered_single_back_follows_fronts() {
        let front = names("f", 13);
        let back = names("b", 1);
        let pages = layout_pages(&front, &back, &business_cards(LayoutMode::Ordered)).unwrap();

        assert_eq!(pages.len(), 4);
        assert_eq!(pages[1].filled_count(), 10);

        // Second back page only has backs behind the three remaining fronts
        let last_back = &pages[3];
        assert_eq!(last_back.label, "Back 2");
        assert_eq!(last_back.filled_count(), 3);
        assert_eq!(
            last_back.source_indices()[..4],
            [Some(0), Some(0), Some(0), None]
        );
    }

    #[test]
    fn test_ordered_backs_run_out_independently() {
        let front = names("f", 10);
        let back = names("b", 4);
        let pages = layout_pages(&front, &back, &business_cards(LayoutMode::Ordered)).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].filled_count(), 10);
        assert_eq!(pages[1].filled_count(), 4);
    }

    #[test]
    fn test_ordered_truncates_extra_backs() {
        // 3 fronts fit on one page, so only the first 10 of 25 backs are placed
        let front = names("f", 3);
        let back = names("b", 25);
        let settings = business_cards(LayoutMode::Ordered);
        let pages = layout_pages(&front, &back, &settings).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(count_side(&pages, Side::Back), 1);
        assert_eq!(pages[1].filled_count(), 10);

        let placed_backs: usize = pages
            .iter()
            .filter(|p| p.side == Side::Back)
            .map(|p| p.filled_count())
            .sum();
        assert_eq!(back.len() - placed_backs, 15);
        assert_eq!(unplaced_back_images(front.len(), back.len(), 10), 15);
    }

    #[test]
    fn test_unplaced_back_images() {
        assert_eq!(unplaced_back_images(3, 25, 10), 15);
        assert_eq!(unplaced_back_images(12, 20, 10), 0);
        assert_eq!(unplaced_back_images(12, 21, 10), 1);
        // A single shared back is never "unplaced"
        assert_eq!(unplaced_back_images(0, 1, 10), 0);
        assert_eq!(unplaced_back_images(0, 5, 10), 5);
        assert_eq!(unplaced_back_images(5, 5, 0), 0);
    }

    #[test]
    fn test_page_count_properties() {
        for mode in [LayoutMode::FullPage, LayoutMode::Ordered] {
            for (rows, cols) in [(1, 1), (5, 2), (3, 3)] {
                let settings = Settings::new(8.5, 11.0, 1.0, 1.0, rows, cols).with_mode(mode);
                let per_page = rows * cols;

                for front_count in 0..=20 {
                    for back_count in [0, 1, 2, 7, 30] {
                        let front = names("f", front_count);
                        let back = names("b", back_count);
                        let pages = layout_pages(&front, &back, &settings).unwrap();

                        let fronts = count_side(&pages, Side::Front);
                        let backs = count_side(&pages, Side::Back);

                        match mode {
                            LayoutMode::FullPage => {
                                assert_eq!(fronts, front_count);
                                let expected = if back_count == 1 {
                                    front_count
                                } else {
                                    back_count
                                };
                                assert_eq!(backs, expected);
                            }
                            LayoutMode::Ordered => {
                                assert_eq!(fronts, front_count.div_ceil(per_page));
                                let expected = if back_count > 0 { fronts } else { 0 };
                                assert_eq!(backs, expected);
                            }
                        }

                        assert!(pages.iter().all(|p| p.placements.len() == per_page));
                    }
                }
            }
        }
    }

    #[test]
    fn test_slot_positions_are_row_major_in_every_mode() {
        let front = names("f", 7);
        let back = names("b", 2);

        for mode in [LayoutMode::FullPage, LayoutMode::Ordered] {
            let settings = Settings::new(8.5, 11.0, 2.5, 3.5, 3, 3).with_mode(mode);
            let margins = settings.margins();

            for page in layout_pages(&front, &back, &settings).unwrap() {
                for (k, placed) in page.placements.iter().enumerate() {
                    let slot = placed.slot;
                    assert_eq!((slot.row, slot.col), (k / 3, k % 3));
                    assert_eq!(slot.x, margins.side_margin + slot.col as f32 * 2.5);
                    assert_eq!(slot.y, margins.top_margin + slot.row as f32 * 3.5);
                    assert_eq!(placed.side, page.side);
                }
            }
        }
    }

    #[test]
    fn test_empty_front_list() {
        let front: Vec<String> = Vec::new();
        let back = names("b", 1);
        for mode in [LayoutMode::FullPage, LayoutMode::Ordered] {
            let pages = layout_pages(&front, &back, &business_cards(mode)).unwrap();
            assert!(pages.is_empty());
        }
    }

    #[test]
    fn test_zero_grid_is_invalid() {
        let front = names("f", 3);
        for (rows, cols) in [(0, 2), (5, 0), (0, 0)] {
            let settings = Settings::new(8.5, 11.0, 3.5, 2.0, rows, cols);
            let err = layout_pages(&front, &[], &settings).unwrap_err();
            assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_grid_too_large_is_invalid() {
        let front = names("f", 1);
        let settings = Settings::new(8.5, 11.0, 1.0, 1.0, 1 << 32, 1 << 32);
        let err = layout_pages(&front, &[], &settings).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_overflowing_grid_is_laid_out() {
        let front = names("f", 1);
        let settings = Settings::new(8.5, 11.0, 3.5, 2.0, 6, 3);
        let pages = layout_pages(&front, &[], &settings).unwrap();

        assert_eq!(pages[0].placements.len(), 18);
        assert_eq!(pages[0].placements[0].slot.x, -1.0);
        assert_eq!(pages[0].placements[0].slot.y, -0.5);
    }
}
