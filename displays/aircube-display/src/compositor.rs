//! Screen compositor
//!
//! Owns the four screens and repaints them from their retained content:
//! a wire image, a list, or nothing. List screens go through the
//! [`ListLayoutEngine`] before anything is drawn, so a pass that cannot
//! place the selection leaves the previous frame on screen.

use alloc::string::String;
use alloc::vec::Vec;

use aircube_protocol::list::ListPayload;
use aircube_protocol::wire::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use aircube_protocol::{WireImage, SCREEN_COUNT};

use crate::buffer::{Canvas, Orientation, PixelBuffer};
use crate::codepage;
use crate::color::Rgb;
use crate::error::DisplayError;
use crate::font::{GlyphFont, GLYPH_SIZE};
use crate::layout::{
    ListLayoutEngine, ScrollState, ICON_TEXT_GAP, LINE_HEIGHT, TITLE_ORIGIN, TITLE_RULE_Y,
};
use crate::list::{check_ordering, Icon, ListContent, ListItem};
use crate::pairing::{draw_border, draw_digit, pin_digits, BORDER_COLORS, BORDER_WIDTH};
use crate::session::{DisplaySession, ScreenId};

/// Color of the title, its rule and the selection outline
pub const CHROME_COLOR: Rgb = Rgb::WHITE;

/// Per-screen list bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub is_list_mode: bool,
    pub is_navigable: bool,
    /// Item count seen by the last render pass
    pub item_count: usize,
    pub selected_index: usize,
    pub scroll: ScrollState,
    pub title: Option<String>,
}

/// One physical screen: its pixels and the content they are drawn from
#[derive(Debug, Clone, Default)]
pub struct Screen {
    buffer: PixelBuffer,
    state: ScreenState,
    items: Vec<ListItem>,
    image: Option<WireImage>,
}

impl Screen {
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn image(&self) -> Option<&WireImage> {
        self.image.as_ref()
    }
}

/// Renders the four screens
#[derive(Debug, Clone, Default)]
pub struct ScreenCompositor {
    screens: [Screen; SCREEN_COUNT],
    font: Option<GlyphFont>,
}

impl ScreenCompositor {
    /// Create a compositor with blank screens
    ///
    /// Without a font, list screens are laid out and outlined but their
    /// text is skipped.
    pub fn new(font: Option<GlyphFont>) -> Self {
        Self {
            screens: Default::default(),
            font,
        }
    }

    pub fn set_font(&mut self, font: GlyphFont) {
        self.font = Some(font);
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn screen(&self, id: ScreenId) -> &Screen {
        &self.screens[id.index()]
    }

    pub fn buffer(&self, id: ScreenId) -> &PixelBuffer {
        &self.screens[id.index()].buffer
    }

    /// Redraw one screen from its retained content
    pub fn repaint(&mut self, session: &DisplaySession, id: ScreenId) -> Result<(), DisplayError> {
        let font = self.font.as_ref();
        let screen = &mut self.screens[id.index()];

        if !session.power_on {
            screen.buffer.clear();
            return Ok(());
        }

        if screen.state.is_list_mode {
            let outline = session.is_active(id) && screen.state.is_navigable;
            return render_list(screen, font, session, outline);
        }

        let mut canvas = screen.buffer.canvas(session.orientation);
        canvas.clear();
        match &screen.image {
            Some(image) => canvas.blit_wire_image(image.as_bytes()),
            None => Ok(()),
        }
    }

    /// Redraw every screen, logging failures
    pub fn repaint_all(&mut self, session: &DisplaySession) {
        for id in ScreenId::ALL {
            if let Err(e) = self.repaint(session, id) {
                log::warn!("Repaint of {} failed: {}", id, e);
            }
        }
    }

    /// Install a list and repaint
    ///
    /// The list replaces the old one and the scroll position resets in the
    /// same call. The selected index is kept; if it no longer fits the new
    /// list the repaint reports `SelectionOutOfRange` and the old frame
    /// stays until the selection moves.
    pub fn set_list(
        &mut self,
        session: &DisplaySession,
        id: ScreenId,
        items: Vec<ListItem>,
        title: Option<String>,
        navigable: bool,
    ) -> Result<(), DisplayError> {
        check_ordering(&items)?;

        let screen = &mut self.screens[id.index()];
        screen.state.item_count = items.len();
        screen.state.title = title;
        screen.state.is_navigable = navigable;
        screen.state.is_list_mode = true;
        screen.state.scroll.reset();
        screen.items = items;
        screen.image = None;

        log::debug!("{}: list of {} items", id, screen.items.len());
        self.repaint(session, id)
    }

    /// Decode and install a list payload
    pub fn set_list_payload(
        &mut self,
        session: &DisplaySession,
        id: ScreenId,
        payload: &ListPayload,
    ) -> Result<(), DisplayError> {
        let content = ListContent::try_from(payload)?;
        self.set_list(session, id, content.items, content.title, content.navigable)
    }

    /// Install a full-screen wire image and repaint
    ///
    /// Images arriving while the power is off are dropped.
    pub fn set_image(
        &mut self,
        session: &DisplaySession,
        id: ScreenId,
        bytes: Vec<u8>,
    ) -> Result<(), DisplayError> {
        let image = WireImage::from_bytes(bytes)?;
        if !session.power_on {
            log::debug!("{}: image dropped while powered off", id);
            return Ok(());
        }

        let screen = &mut self.screens[id.index()];
        screen.state.is_list_mode = false;
        screen.image = Some(image);
        self.repaint(session, id)
    }

    /// Move the selection on a list screen and repaint it
    pub fn set_selection(
        &mut self,
        session: &DisplaySession,
        id: ScreenId,
        selected: usize,
    ) -> Result<(), DisplayError> {
        self.screens[id.index()].state.selected_index = selected;
        self.repaint(session, id)
    }

    /// Make `id` the active screen, optionally moving its selection
    ///
    /// Without a position a navigable screen starts over at its first item.
    /// Both the previously active screen and the new one are repainted so
    /// the outline follows.
    pub fn select(
        &mut self,
        session: &mut DisplaySession,
        id: ScreenId,
        position: Option<usize>,
    ) -> Result<(), DisplayError> {
        let previous = session.active;
        session.active = id;

        let state = &mut self.screens[id.index()].state;
        match position {
            Some(position) => state.selected_index = position,
            None if state.is_navigable => state.selected_index = 0,
            None => {}
        }

        if previous != id {
            if let Err(e) = self.repaint(session, previous) {
                log::warn!("Repaint of {} failed: {}", previous, e);
            }
        }
        self.repaint(session, id)
    }

    /// Switch orientation for every screen
    ///
    /// A half-turn rotation of a finished frame is exactly the frame that a
    /// repaint with the new orientation would produce, so the buffers are
    /// rotated in place. This also keeps screens that have no retained
    /// content, such as the pairing digits.
    pub fn set_orientation(&mut self, session: &mut DisplaySession, flipped: bool) {
        let orientation = Orientation::from_flipped(flipped);
        if session.orientation == orientation {
            return;
        }
        session.orientation = orientation;
        for screen in &mut self.screens {
            screen.buffer.rotate_half_turn();
        }
    }

    /// Switch power; going off blanks every screen
    pub fn set_power(&mut self, session: &mut DisplaySession, on: bool) {
        session.power_on = on;
        if on {
            self.repaint_all(session);
        } else {
            self.clear_all();
        }
    }

    /// Numeric id of the selected item on a navigable list screen
    pub fn activation_id(&self, id: ScreenId) -> Option<i64> {
        let screen = &self.screens[id.index()];
        if !screen.state.is_list_mode || !screen.state.is_navigable {
            return None;
        }
        screen
            .items
            .get(screen.state.selected_index)
            .map(|item| item.numeric_id)
    }

    /// Black out every screen
    pub fn clear_all(&mut self) {
        for screen in &mut self.screens {
            screen.buffer.clear();
        }
    }

    /// Forget all content and blank the screens
    pub fn reset(&mut self) {
        for screen in &mut self.screens {
            *screen = Screen::default();
        }
    }

    /// Show the pairing PIN, one digit per screen
    pub fn show_pairing_pin(&mut self, session: &DisplaySession, pin: u16) {
        let digits = pin_digits(pin);
        for (i, screen) in self.screens.iter_mut().enumerate() {
            screen.state = ScreenState::default();
            screen.items.clear();
            screen.image = None;

            let mut canvas = screen.buffer.canvas(session.orientation);
            draw_digit(&mut canvas, digits[i]);
            draw_border(&mut canvas, BORDER_WIDTH, BORDER_COLORS[i]);
        }
    }
}

fn render_list(
    screen: &mut Screen,
    font: Option<&GlyphFont>,
    session: &DisplaySession,
    outline: bool,
) -> Result<(), DisplayError> {
    let state = &mut screen.state;
    let items = &screen.items;
    let engine = ListLayoutEngine::new(state.title.is_some());
    let base = engine.title_band();
    state.item_count = items.len();

    // Place the selection before touching any pixel
    if !items.is_empty() {
        if let Err(e) = engine.scroll_to(items, state.selected_index, &mut state.scroll) {
            log::warn!("List render aborted: {}", e);
            return Err(e);
        }
    }

    let mut canvas = screen.buffer.canvas(session.orientation);
    canvas.clear();

    if font.is_none() {
        log::warn!("No font loaded, list text skipped");
    }

    if let Some(title) = state.title.as_deref() {
        if let Some(font) = font {
            let (x, y) = TITLE_ORIGIN;
            font.render_text(&mut canvas, &codepage::encode(title), x, y, 0, CHROME_COLOR);
        }
        canvas.hline(0, SCREEN_WIDTH as i32 - 1, TITLE_RULE_Y, CHROME_COLOR);
    }

    let offset = state.scroll.top_pixel_offset;
    for (i, item) in items.iter().enumerate() {
        let y = screen_row(item.y, offset, base);
        let mut text_x = item.x;
        let mut text_y = y;

        if let Some(icon) = &item.icon {
            blit_icon(&mut canvas, icon, item.x, y, base);
            text_x = text_x.saturating_add(icon.width as i32 + ICON_TEXT_GAP);
            text_y = text_y.saturating_add((item.line_height() - LINE_HEIGHT) / 2);
        }

        if let Some(font) = font {
            font.render_text(&mut canvas, &item.text, text_x, text_y, base, item.color);
        }

        if outline && i == state.selected_index {
            draw_outline(&mut canvas, item, y, base);
        }
    }

    Ok(())
}

/// Screen row of a list row scrolled by `offset`
fn screen_row(y: i32, offset: i64, base: i32) -> i32 {
    let row = i64::from(y).saturating_sub(offset).saturating_add(i64::from(base));
    row.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Icon pixels at `(x, y)`, clipped to the viewport below `base`
fn blit_icon(canvas: &mut Canvas<'_>, icon: &Icon, x: i32, y: i32, base: i32) {
    let width = icon.width as i32;
    for iy in 0..icon.height as i32 {
        let sy = y.saturating_add(iy);
        if sy < base || sy >= SCREEN_HEIGHT as i32 {
            continue;
        }
        for ix in 0..width {
            let sx = x.saturating_add(ix);
            if sx < 0 || sx >= SCREEN_WIDTH as i32 {
                continue;
            }
            if let Some(word) = wire::read_word(&icon.pixels, (iy * width + ix) as usize) {
                canvas.put_wire_pixel(sy as usize * SCREEN_WIDTH + sx as usize, word);
            }
        }
    }
}

/// Selection rectangle around an item whose row starts at screen row `y`
fn draw_outline(canvas: &mut Canvas<'_>, item: &ListItem, y: i32, base: i32) {
    let text_width = item.text.len().saturating_mul(GLYPH_SIZE) as i32;
    let left = item.x.saturating_sub(2);
    let right = item
        .x
        .saturating_add(text_width)
        .saturating_add(item.icon_width() + ICON_TEXT_GAP);
    let top = y.saturating_sub(4);
    let bottom = y.saturating_add(item.line_height() + 2);
    let visible = |row: i32| row >= base && row < SCREEN_HEIGHT as i32;

    if visible(top) {
        canvas.hline(left, right, top, CHROME_COLOR);
    }
    if visible(bottom) {
        canvas.hline(left, right, bottom, CHROME_COLOR);
    }
    for row in top.max(base)..=bottom.min(SCREEN_HEIGHT as i32 - 1) {
        canvas.set_pixel(left, row, CHROME_COLOR);
        canvas.set_pixel(right, row, CHROME_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::tests::test_font;
    use crate::layout::TITLE_BAND;
    use alloc::vec;
    use proptest::prelude::*;

    const WHITE: Option<[u8; 4]> = Some([255, 255, 255, 255]);
    const BLACK: Option<[u8; 4]> = Some([0, 0, 0, 255]);

    fn powered() -> DisplaySession {
        DisplaySession {
            power_on: true,
            ..DisplaySession::new()
        }
    }

    fn screen(i: usize) -> ScreenId {
        ScreenId::ALL[i]
    }

    fn rows(count: usize, step: i32, text: &str) -> Vec<ListItem> {
        (0..count)
            .map(|i| ListItem::new(8, i as i32 * step, text, 100 + i as i64))
            .collect()
    }

    fn compositor() -> ScreenCompositor {
        ScreenCompositor::new(Some(test_font()))
    }

    #[test]
    fn test_image_screen_blits() {
        let session = powered();
        let mut comp = compositor();
        comp.set_image(&session, screen(1), WireImage::solid(0xF800).as_bytes().to_vec())
            .unwrap();
        assert_eq!(comp.buffer(screen(1)).pixel(0, 0), Some([248, 0, 0, 255]));
        assert_eq!(comp.buffer(screen(0)).pixel(0, 0), BLACK);
        assert!(!comp.screen(screen(1)).state().is_list_mode);
    }

    #[test]
    fn test_image_with_wrong_length() {
        let session = powered();
        let mut comp = compositor();
        assert_eq!(
            comp.set_image(&session, screen(0), vec![0u8; 10]),
            Err(DisplayError::MalformedPayload {
                expected: aircube_protocol::WIRE_IMAGE_LEN,
                actual: 10
            })
        );
        assert!(comp.screen(screen(0)).image().is_none());
    }

    #[test]
    fn test_image_dropped_while_off() {
        let session = DisplaySession::new();
        let mut comp = compositor();
        comp.set_image(&session, screen(2), WireImage::solid(0xFFFF).as_bytes().to_vec())
            .unwrap();
        assert!(comp.screen(screen(2)).image().is_none());
        assert_eq!(comp.buffer(screen(2)).pixel(5, 5), BLACK);
    }

    #[test]
    fn test_title_and_rule() {
        let session = powered();
        let mut comp = compositor();
        comp.set_list(&session, screen(0), rows(3, 16, "A"), Some("AA".into()), false)
            .unwrap();
        let buffer = comp.buffer(screen(0));
        for x in [0, 80, 159] {
            assert_eq!(buffer.pixel(x, TITLE_RULE_Y as usize), WHITE);
        }
        // Last row of glyph A has only bit 0 set: x = 8 + 7
        assert_eq!(buffer.pixel(15, 15), WHITE);
        // First item row starts under the title band: A at (8, 24)
        assert_eq!(buffer.pixel(15, 31), WHITE);
        assert_eq!(buffer.pixel(15, 7), BLACK);
    }

    #[test]
    fn test_outline_only_on_active_navigable_screen() {
        let session = powered();
        let mut comp = compositor();
        comp.set_list(&session, screen(0), rows(3, 16, "AB"), None, true)
            .unwrap();
        comp.set_list(&session, screen(1), rows(3, 16, "AB"), None, true)
            .unwrap();

        // Item 0 at (8, 0): left = 6, right = 8 + 16 + 4 = 28, rows -4..=10
        let active = comp.buffer(screen(0));
        assert_eq!(active.pixel(6, 5), WHITE);
        assert_eq!(active.pixel(28, 5), WHITE);
        assert_eq!(active.pixel(20, 10), WHITE);
        assert_eq!(active.pixel(6, 11), BLACK);

        let inactive = comp.buffer(screen(1));
        assert_eq!(inactive.pixel(6, 5), BLACK);
        assert_eq!(inactive.pixel(20, 10), BLACK);
    }

    #[test]
    fn test_outline_respects_title_band() {
        let mut session = powered();
        let mut comp = compositor();
        comp.set_list(&session, screen(0), rows(8, 16, "A"), Some("T".into()), true)
            .unwrap();
        // Item 6 sits at y = 96, past the 96px viewport: scroll one row
        comp.select(&mut session, screen(0), Some(6)).unwrap();
        let state = comp.screen(screen(0)).state().clone();
        assert_eq!(state.scroll.top_pixel_offset, 16);
        let top = (6 * 16 - 16 + TITLE_BAND - 4) as usize;
        assert_eq!(comp.buffer(screen(0)).pixel(10, top), WHITE);
        // Nothing above the rule row except the title itself
        assert_eq!(comp.buffer(screen(0)).pixel(6, 22), BLACK);
    }

    #[test]
    fn test_icon_and_text_position() {
        let session = powered();
        let mut comp = compositor();
        let icon = Icon {
            width: 4,
            height: 12,
            pixels: WireImage::solid(0x07E0).as_bytes()[..4 * 12 * 2].to_vec(),
        };
        let item = ListItem::new(10, 0, "A", 1).with_icon(icon);
        comp.set_list(&session, screen(0), vec![item], None, false)
            .unwrap();
        let buffer = comp.buffer(screen(0));
        assert_eq!(buffer.pixel(10, 0), Some([0, 252, 0, 255]));
        assert_eq!(buffer.pixel(13, 11), Some([0, 252, 0, 255]));
        assert_eq!(buffer.pixel(14, 0), BLACK);
        // Text at x = 10 + 4 + 4, shifted down by (12 - 8) / 2
        assert_eq!(buffer.pixel(18 + 7, 2 + 7), WHITE);
    }

    #[test]
    fn test_stale_selection_keeps_previous_frame() {
        let mut session = powered();
        let mut comp = compositor();
        comp.set_list(&session, screen(0), rows(10, 16, "A"), None, true)
            .unwrap();
        comp.select(&mut session, screen(0), Some(8)).unwrap();
        let before = comp.buffer(screen(0)).clone();

        let result = comp.set_list(&session, screen(0), rows(3, 16, "B"), None, true);
        assert_eq!(
            result,
            Err(DisplayError::SelectionOutOfRange {
                selected: 8,
                count: 3
            })
        );
        assert!(*comp.buffer(screen(0)) == before);
        assert_eq!(comp.screen(screen(0)).state().item_count, 3);
    }

    #[test]
    fn test_descending_list_is_rejected() {
        let session = powered();
        let mut comp = compositor();
        let mut items = rows(3, 16, "A");
        items[2].y = 0;
        assert_eq!(
            comp.set_list(&session, screen(0), items, None, true),
            Err(DisplayError::InvalidListOrdering { index: 2 })
        );
        assert!(!comp.screen(screen(0)).state().is_list_mode);
    }

    #[test]
    fn test_extreme_positions_render() {
        let session = powered();
        let mut comp = compositor();
        let items = vec![ListItem::new(0, i32::MAX - 2, "A", 1)];
        comp.set_list(&session, screen(0), items, None, true).unwrap();

        // Pulled up to the last full row: text at y = 111, outline top at 107
        let buffer = comp.buffer(screen(0));
        assert_eq!(buffer.pixel(7, 118), WHITE);
        assert_eq!(buffer.pixel(0, 107), WHITE);
        assert_eq!(buffer.pixel(12, 107), WHITE);

        let items = vec![
            ListItem::new(i32::MIN, i32::MIN + 1, "AB", 1),
            ListItem::new(i32::MAX - 1, i32::MAX, "AB", 2),
        ];
        comp.set_list(&session, screen(1), items, Some("T".into()), true)
            .unwrap();
        assert_eq!(comp.set_selection(&session, screen(1), 1), Ok(()));
    }

    #[test]
    fn test_new_list_resets_scroll() {
        let mut session = powered();
        let mut comp = compositor();
        comp.set_list(&session, screen(0), rows(20, 16, "A"), None, true)
            .unwrap();
        comp.select(&mut session, screen(0), Some(12)).unwrap();
        assert!(comp.screen(screen(0)).state().scroll.top_pixel_offset > 0);

        comp.set_selection(&session, screen(0), 0).unwrap();
        comp.set_list(&session, screen(0), rows(20, 16, "B"), None, true)
            .unwrap();
        assert_eq!(comp.screen(screen(0)).state().scroll, ScrollState::default());
    }

    #[test]
    fn test_missing_font_still_draws_chrome() {
        let session = powered();
        let mut comp = ScreenCompositor::new(None);
        comp.set_list(&session, screen(0), rows(2, 16, "A"), Some("T".into()), true)
            .unwrap();
        let buffer = comp.buffer(screen(0));
        assert_eq!(buffer.pixel(0, TITLE_RULE_Y as usize), WHITE);
        // Outline present, glyph absent
        assert_eq!(buffer.pixel(6, 30), WHITE);
        assert_eq!(buffer.pixel(15, 31), BLACK);
    }

    #[test]
    fn test_activation_id() {
        let mut session = powered();
        let mut comp = compositor();
        assert_eq!(comp.activation_id(screen(0)), None);
        comp.set_list(&session, screen(0), rows(4, 16, "A"), None, true)
            .unwrap();
        comp.select(&mut session, screen(0), Some(2)).unwrap();
        assert_eq!(comp.activation_id(screen(0)), Some(102));

        comp.set_list(&session, screen(1), rows(4, 16, "A"), None, false)
            .unwrap();
        assert_eq!(comp.activation_id(screen(1)), None);
    }

    #[test]
    fn test_select_moves_outline_between_screens() {
        let mut session = powered();
        let mut comp = compositor();
        for i in 0..2 {
            comp.set_list(&session, screen(i), rows(3, 16, "A"), None, true)
                .unwrap();
        }
        assert_eq!(comp.buffer(screen(0)).pixel(6, 5), WHITE);

        comp.select(&mut session, screen(1), None).unwrap();
        assert_eq!(session.active, screen(1));
        assert_eq!(comp.buffer(screen(0)).pixel(6, 5), BLACK);
        assert_eq!(comp.buffer(screen(1)).pixel(6, 5), WHITE);
    }

    #[test]
    fn test_power_off_blanks_and_on_restores() {
        let mut session = powered();
        let mut comp = compositor();
        comp.set_image(&session, screen(3), WireImage::solid(0xFFFF).as_bytes().to_vec())
            .unwrap();
        comp.set_power(&mut session, false);
        assert_eq!(comp.buffer(screen(3)).pixel(0, 0), BLACK);

        comp.set_power(&mut session, true);
        assert_eq!(comp.buffer(screen(3)).pixel(0, 0), Some([248, 252, 248, 255]));
    }

    #[test]
    fn test_pairing_pin_screens() {
        let session = powered();
        let mut comp = compositor();
        comp.show_pairing_pin(&session, 1234);
        for (i, color) in BORDER_COLORS.iter().enumerate() {
            assert_eq!(
                comp.buffer(screen(i)).pixel(0, 0),
                Some([color.r, color.g, color.b, 255])
            );
        }
    }

    #[test]
    fn test_flip_twice_restores_frame() {
        let mut session = powered();
        let mut comp = compositor();
        comp.set_list(&session, screen(0), rows(12, 16, "AB"), Some("A".into()), true)
            .unwrap();
        comp.select(&mut session, screen(0), Some(9)).unwrap();
        let original = comp.buffer(screen(0)).clone();

        comp.set_orientation(&mut session, true);
        assert!(*comp.buffer(screen(0)) != original);
        comp.set_orientation(&mut session, false);
        assert!(*comp.buffer(screen(0)) == original);
    }

    #[test]
    fn test_flip_equals_flipped_repaint() {
        let mut session = powered();
        let mut comp = compositor();
        comp.set_list(&session, screen(0), rows(12, 16, "AB"), Some("A".into()), true)
            .unwrap();
        comp.set_orientation(&mut session, true);
        let rotated = comp.buffer(screen(0)).clone();

        comp.repaint(&session, screen(0)).unwrap();
        assert!(*comp.buffer(screen(0)) == rotated);
        assert_eq!(session.orientation, Orientation::Flipped);
    }

    proptest! {
        #[test]
        fn prop_out_of_range_selection_never_draws(
            count in 1usize..12,
            extra in 0usize..5,
        ) {
            let mut session = powered();
            let mut comp = compositor();
            comp.set_list(&session, screen(0), rows(count, 16, "A"), None, true).unwrap();
            let before = comp.buffer(screen(0)).clone();
            let result = comp.select(&mut session, screen(0), Some(count + extra));
            prop_assert!(result.is_err());
            prop_assert!(*comp.buffer(screen(0)) == before);
        }
    }
}
