//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and the same layout
//! math that places the grid also resolves mouse clicks back to cell indices.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Mark, Outcome, BOARD_SIDE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame and the text lines land for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub board_x: u16,
    pub board_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub title_y: u16,
    pub status_y: u16,
    pub hint_y: u16,
}

/// A lightweight terminal renderer for the tic-tac-toe screen.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps the cells roughly square under typical glyph aspect
        // ratios and leaves room for a centered mark.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    fn stride_x(&self) -> u16 {
        self.cell_w + 1
    }

    fn stride_y(&self) -> u16 {
        self.cell_h + 1
    }

    /// Compute the screen layout for a viewport.
    ///
    /// The board frame is centered; title and status sit above it, the key
    /// hint below. Cramped viewports push everything toward the top-left.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let side = BOARD_SIDE as u16;
        let frame_w = side * self.cell_w + side + 1;
        let frame_h = side * self.cell_h + side + 1;

        // Title, blank, status, blank above; blank, hint below.
        let block_h = frame_h + 6;
        let block_y = viewport.height.saturating_sub(block_h) / 2;
        let board_x = viewport.width.saturating_sub(frame_w) / 2;
        let board_y = block_y + 4;

        BoardLayout {
            board_x,
            board_y,
            frame_w,
            frame_h,
            title_y: block_y,
            status_y: block_y + 2,
            hint_y: board_y + frame_h + 1,
        }
    }

    /// Resolve a screen coordinate to a board cell index.
    ///
    /// Returns `None` for grid lines and anything outside the board frame.
    pub fn cell_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<u8> {
        if x >= viewport.width || y >= viewport.height {
            return None;
        }
        let layout = self.layout(viewport);

        let dx = x.checked_sub(layout.board_x)?;
        let dy = y.checked_sub(layout.board_y)?;
        if dx % self.stride_x() == 0 || dy % self.stride_y() == 0 {
            return None;
        }

        let col = dx / self.stride_x();
        let row = dy / self.stride_y();
        if col >= BOARD_SIDE as u16 || row >= BOARD_SIDE as u16 {
            return None;
        }

        Some((row * BOARD_SIDE as u16 + col) as u8)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);

        self.draw_title(fb, &layout);
        self.draw_status(fb, snap, &layout);
        self.draw_grid(fb, &layout);
        self.draw_marks(fb, snap, &layout);
        self.draw_hint(fb, snap, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let style = CellStyle {
            fg: Rgb::new(97, 218, 251),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        self.put_centered(fb, layout, layout.title_y, "TIC-TAC-TOE", style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let mut buf = [0u8; 16];
        let (text, style): (&str, CellStyle) = match snap.outcome {
            Outcome::InProgress => (
                status_with_mark(&mut buf, "NEXT: ", snap.turn),
                CellStyle {
                    fg: Rgb::new(160, 160, 160),
                    bg: Rgb::new(0, 0, 0),
                    bold: false,
                    dim: false,
                },
            ),
            Outcome::Win(mark) => (
                status_with_mark(&mut buf, "WINNER: ", mark),
                CellStyle {
                    fg: mark_color(mark),
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                    dim: false,
                },
            ),
            Outcome::Draw => (
                "DRAW",
                CellStyle {
                    fg: Rgb::new(220, 220, 220),
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                    dim: false,
                },
            ),
        };
        self.put_centered(fb, layout, layout.status_y, text, style);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let side = BOARD_SIDE as u16;
        let x0 = layout.board_x;
        let y0 = layout.board_y;

        // Horizontal lines (including junctions), then vertical fills.
        for j in 0..=side {
            let y = y0 + j * self.stride_y();
            for i in 0..=side {
                let x = x0 + i * self.stride_x();
                fb.put_char(x, y, junction_char(i, j, side), style);
            }
            for dx in 1..layout.frame_w - 1 {
                let x = x0 + dx;
                if dx % self.stride_x() != 0 {
                    fb.put_char(x, y, '─', style);
                }
            }
        }
        for i in 0..=side {
            let x = x0 + i * self.stride_x();
            for dy in 1..layout.frame_h - 1 {
                if dy % self.stride_y() != 0 {
                    fb.put_char(x, y0 + dy, '│', style);
                }
            }
        }
    }

    fn draw_marks(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let side = BOARD_SIDE as u16;
        for row in 0..side {
            for col in 0..side {
                let pos = (row * side + col) as usize;
                let cx = layout.board_x + 1 + col * self.stride_x() + self.cell_w / 2;
                let cy = layout.board_y + 1 + row * self.stride_y() + self.cell_h / 2;

                match Mark::from_u8(snap.board[pos]) {
                    Some(mark) => {
                        let style = CellStyle {
                            fg: mark_color(mark),
                            bg: Rgb::new(0, 0, 0),
                            bold: true,
                            dim: false,
                        };
                        fb.put_char(cx, cy, mark.as_char(), style);
                    }
                    None => {
                        let style = CellStyle {
                            fg: Rgb::new(90, 90, 100),
                            bg: Rgb::new(0, 0, 0),
                            bold: false,
                            dim: true,
                        };
                        fb.put_char(cx, cy, '·', style);
                    }
                }
            }
        }
    }

    fn draw_hint(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        // Mirrors the original screen: the restart affordance only appears
        // once the game has ended.
        let text = if snap.outcome.is_terminal() {
            "r: new game   q: quit"
        } else {
            "click a cell or press 1-9   q: quit"
        };
        let style = CellStyle {
            fg: Rgb::new(130, 130, 130),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        self.put_centered(fb, layout, layout.hint_y, text, style);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let center = layout.board_x + layout.frame_w / 2;
        let x = center.saturating_sub(text_w / 2);
        fb.put_str(x, y, text, style);
    }
}

fn mark_color(mark: Mark) -> Rgb {
    match mark {
        Mark::X => Rgb::new(97, 218, 251),
        Mark::O => Rgb::new(240, 220, 80),
    }
}

fn junction_char(i: u16, j: u16, side: u16) -> char {
    match (i, j) {
        (0, 0) => '┌',
        (x, 0) if x == side => '┐',
        (0, y) if y == side => '└',
        (x, y) if x == side && y == side => '┘',
        (_, 0) => '┬',
        (_, y) if y == side => '┴',
        (0, _) => '├',
        (x, _) if x == side => '┤',
        _ => '┼',
    }
}

/// Format "PREFIX" + mark glyph into a stack buffer, no allocation.
fn status_with_mark<'a>(buf: &'a mut [u8; 16], prefix: &'a str, mark: Mark) -> &'a str {
    let len = prefix.len() + 1;
    debug_assert!(len <= buf.len());
    buf[..prefix.len()].copy_from_slice(prefix.as_bytes());
    buf[prefix.len()] = mark.as_char() as u8;
    // Prefix and glyph are ASCII.
    std::str::from_utf8(&buf[..len]).unwrap_or(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_formatting_without_allocation() {
        let mut buf = [0u8; 16];
        assert_eq!(status_with_mark(&mut buf, "NEXT: ", Mark::X), "NEXT: X");
        let mut buf = [0u8; 16];
        assert_eq!(status_with_mark(&mut buf, "WINNER: ", Mark::O), "WINNER: O");
    }

    #[test]
    fn junction_chars_form_a_grid() {
        assert_eq!(junction_char(0, 0, 3), '┌');
        assert_eq!(junction_char(3, 0, 3), '┐');
        assert_eq!(junction_char(0, 3, 3), '└');
        assert_eq!(junction_char(3, 3, 3), '┘');
        assert_eq!(junction_char(1, 0, 3), '┬');
        assert_eq!(junction_char(1, 3, 3), '┴');
        assert_eq!(junction_char(0, 1, 3), '├');
        assert_eq!(junction_char(3, 2, 3), '┤');
        assert_eq!(junction_char(2, 2, 3), '┼');
    }
}
