//! List scrolling
//!
//! Keeps the selected row inside the viewport by moving the scroll offset
//! one item at a time. Rows scroll in whole-item steps, so the offset is
//! always a difference of item positions. Payload rows span the whole
//! `i32` range, so offsets are kept as `i64`.

use aircube_protocol::wire::SCREEN_HEIGHT;

use crate::error::DisplayError;
use crate::font::GLYPH_SIZE;
use crate::list::ListItem;

/// Height of a text row
pub const LINE_HEIGHT: i32 = GLYPH_SIZE as i32;

/// Height of the title band when a title is shown
pub const TITLE_BAND: i32 = 24;

/// Row of the rule under the title
pub const TITLE_RULE_Y: i32 = 20;

/// Where the title text starts
pub const TITLE_ORIGIN: (i32, i32) = (8, 8);

/// Gap between an icon and its label
pub const ICON_TEXT_GAP: i32 = 4;

/// Scroll position of one list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollState {
    /// Pixels of list scrolled above the viewport
    pub top_pixel_offset: i64,
    /// First item the offset was measured from
    pub top_item_index: usize,
}

impl ScrollState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What a scroll recompute did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollOutcome {
    /// Selection already visible
    Unchanged,
    /// Moved forward by `shift` items, `delta` pixels
    Down { shift: usize, delta: i64 },
    /// Moved back by `shift` items, `delta` pixels
    Up { shift: usize, delta: i64 },
    /// Neither walk reached the selection; it was made the top item
    Placed { top_pixel_offset: i64 },
}

/// Scroll computation for one screen's geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayoutEngine {
    title_band: i32,
}

impl ListLayoutEngine {
    /// Create an engine for a list with or without a title band
    pub const fn new(has_title: bool) -> Self {
        Self {
            title_band: if has_title { TITLE_BAND } else { 0 },
        }
    }

    /// First screen row below the title band
    pub const fn title_band(&self) -> i32 {
        self.title_band
    }

    /// Rows available to list items
    pub const fn viewport_height(&self) -> i32 {
        SCREEN_HEIGHT as i32 - self.title_band
    }

    /// Move `scroll` so that `items[selected]` is visible
    ///
    /// The walks move the offset by differences of item positions from
    /// `top_item_index`. When neither walk can bring the row into view the
    /// selection becomes the top item and is placed at the first visible
    /// row. On error `scroll` is left as it was.
    pub fn scroll_to(
        &self,
        items: &[ListItem],
        selected: usize,
        scroll: &mut ScrollState,
    ) -> Result<ScrollOutcome, DisplayError> {
        let count = items.len();
        if selected >= count {
            return Err(DisplayError::SelectionOutOfRange { selected, count });
        }

        let viewport = i64::from(self.viewport_height());
        let line = i64::from(LINE_HEIGHT);
        let y = |index: usize| i64::from(items[index].y);
        let fits = |row: i64| row >= 0 && row + line < viewport;
        let top = scroll.top_item_index.min(count - 1);
        let sel_y = y(selected).saturating_sub(scroll.top_pixel_offset);

        if sel_y.saturating_add(line) >= viewport {
            for shift in 1..count - top {
                let delta = y(top + shift) - y(top);
                if delta < 0 {
                    return Err(DisplayError::InvalidListOrdering { index: top + shift });
                }
                let moved = sel_y.saturating_sub(delta);
                if moved.saturating_add(line) < viewport {
                    if !fits(moved) {
                        break;
                    }
                    scroll.top_item_index = top + shift;
                    scroll.top_pixel_offset = scroll.top_pixel_offset.saturating_add(delta);
                    log::debug!("Scroll down {} items ({}px)", shift, delta);
                    return Ok(ScrollOutcome::Down { shift, delta });
                }
            }
            return Ok(self.place(items, selected, scroll));
        }

        if sel_y < 0 {
            for shift in 1..=top {
                let delta = y(top) - y(top - shift);
                if delta < 0 {
                    return Err(DisplayError::InvalidListOrdering { index: top });
                }
                let moved = sel_y.saturating_add(delta);
                if moved >= 0 {
                    if !fits(moved) {
                        break;
                    }
                    scroll.top_item_index = top - shift;
                    scroll.top_pixel_offset = scroll.top_pixel_offset.saturating_sub(delta);
                    log::debug!("Scroll up {} items ({}px)", shift, delta);
                    return Ok(ScrollOutcome::Up { shift, delta });
                }
            }
            return Ok(self.place(items, selected, scroll));
        }

        Ok(ScrollOutcome::Unchanged)
    }

    /// Make `selected` the top item, at the row the list starts on
    ///
    /// A list starting outside the viewport is pulled to its nearest edge.
    fn place(
        &self,
        items: &[ListItem],
        selected: usize,
        scroll: &mut ScrollState,
    ) -> ScrollOutcome {
        let anchor = items[0].y.clamp(0, self.viewport_height() - LINE_HEIGHT - 1);
        let top_pixel_offset = i64::from(items[selected].y) - i64::from(anchor);
        log::debug!(
            "Placed item {} at row {} (offset {})",
            selected,
            anchor,
            top_pixel_offset
        );
        *scroll = ScrollState {
            top_pixel_offset,
            top_item_index: selected,
        };
        ScrollOutcome::Placed { top_pixel_offset }
    }
}
