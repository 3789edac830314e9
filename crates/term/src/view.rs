//! Lays a [`GameSnapshot`] out into a [`Frame`].
//!
//! The board is drawn two characters per cell inside a box border, with a side
//! panel for level and line counts to its right. The whole block is centered in
//! the viewport; anything that does not fit is clipped.

use blockfall_core::GameSnapshot;
use blockfall_types::{PieceKind, SimStatus, COLS, ROWS};

use crate::frame::{Frame, Glyph, Rgb};

/// Terminal columns per board cell
pub const CELL_W: u16 = 2;
/// Side panel width, including its gap from the board
pub const PANEL_W: u16 = 16;

const BOARD_W: u16 = COLS as u16 * CELL_W + 2;
const BOARD_H: u16 = ROWS as u16 + 2;

const BG: Rgb = Rgb::new(0, 0, 0);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const EMPTY_FG: Rgb = Rgb::new(60, 60, 60);
const LABEL: Rgb = Rgb::new(150, 150, 150);
const VALUE: Rgb = Rgb::new(240, 240, 240);
const ALERT: Rgb = Rgb::new(255, 80, 80);

/// Fill color per cell value `1..=7` (I, T, Z, S, O, L, J).
pub const PALETTE: [Rgb; 7] = [
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0xFF, 0x45, 0x00),
    Rgb::new(0xFF, 0x63, 0x47),
    Rgb::new(0xFF, 0x7F, 0x50),
    Rgb::new(0xFF, 0x8C, 0x00),
    Rgb::new(0xFF, 0xA5, 0x00),
    Rgb::new(0xFF, 0xB6, 0xC1),
];

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Stateless board/panel layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView;

impl BoardView {
    pub fn new() -> Self {
        Self
    }

    /// Top-left corner of the board border inside `viewport`.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let total_w = BOARD_W + PANEL_W;
        (
            viewport.width.saturating_sub(total_w) / 2,
            viewport.height.saturating_sub(BOARD_H) / 2,
        )
    }

    /// Redraw `frame` from scratch for `snapshot`.
    pub fn render_into(&self, snapshot: &GameSnapshot, viewport: Viewport, frame: &mut Frame) {
        frame.reset(viewport.width, viewport.height);
        let (x0, y0) = self.origin(viewport);

        draw_border(frame, x0, y0, BOARD_W, BOARD_H);
        for row in 0..ROWS as i16 {
            for col in 0..COLS as i16 {
                let value = snapshot.composited(row, col);
                let x = x0 + 1 + col as u16 * CELL_W;
                let y = y0 + 1 + row as u16;
                draw_cell(frame, x, y, value);
            }
        }

        self.draw_panel(snapshot, frame, x0 + BOARD_W + 2, y0 + 1);
        self.draw_status(snapshot, frame, x0, y0);
    }

    fn draw_panel(&self, snapshot: &GameSnapshot, frame: &mut Frame, x: u16, y: u16) {
        let label = Glyph::new(' ', LABEL, BG);
        let value = Glyph::new(' ', VALUE, BG).bold();

        frame.put_str(x, y, "LEVEL", label);
        frame.put_str(x, y + 1, &snapshot.level.to_string(), value);
        frame.put_str(x, y + 3, "LINES", label);
        frame.put_str(x, y + 4, &snapshot.lines_cleared.to_string(), value);
        frame.put_str(x, y + 6, "SPEED", label);
        frame.put_str(x, y + 7, &format!("{}ms", snapshot.drop_interval_ms), value);

        let help = [
            "SPACE start",
            "\u{2190} \u{2192}  move",
            "\u{2191}/x rotate",
            "\u{2193}  drop",
            "r  restart",
            "q  quit",
        ];
        for (i, line) in help.iter().enumerate() {
            frame.put_str(x, y + 10 + i as u16, line, label);
        }
    }

    fn draw_status(&self, snapshot: &GameSnapshot, frame: &mut Frame, x0: u16, y0: u16) {
        let (text, color) = match snapshot.status {
            SimStatus::NotStarted => ("Press SPACE to start", VALUE),
            SimStatus::GameOver => ("GAME OVER", ALERT),
            SimStatus::Running => return,
        };
        let inner = BOARD_W - 2;
        let len = text.chars().count() as u16;
        let x = x0 + 1 + inner.saturating_sub(len) / 2;
        let y = y0 + BOARD_H / 2;
        frame.put_str(x, y, text, Glyph::new(' ', color, BG).bold());
    }
}

/// Palette color of a piece kind
pub fn kind_color(kind: PieceKind) -> Rgb {
    PALETTE[usize::from(kind.cell() - 1)]
}

/// Map a cell value to its palette color; `None` for empty or unknown values.
pub fn cell_color(value: u8) -> Option<Rgb> {
    PieceKind::from_cell(value).map(kind_color)
}

fn draw_cell(frame: &mut Frame, x: u16, y: u16, value: u8) {
    match cell_color(value) {
        Some(color) => {
            let block = Glyph::new('█', color, BG);
            frame.put(x, y, block);
            frame.put(x + 1, y, block);
        }
        None => {
            frame.put(x, y, Glyph::new(' ', EMPTY_FG, BG));
            frame.put(x + 1, y, Glyph::new('·', EMPTY_FG, BG));
        }
    }
}

fn draw_border(frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
    let style = Glyph::new(' ', BORDER, BG);
    let right = x + w - 1;
    let bottom = y + h - 1;
    for cx in x + 1..right {
        frame.put(cx, y, Glyph { ch: '─', ..style });
        frame.put(cx, bottom, Glyph { ch: '─', ..style });
    }
    for cy in y + 1..bottom {
        frame.put(x, cy, Glyph { ch: '│', ..style });
        frame.put(right, cy, Glyph { ch: '│', ..style });
    }
    frame.put(x, y, Glyph { ch: '┌', ..style });
    frame.put(right, y, Glyph { ch: '┐', ..style });
    frame.put(x, bottom, Glyph { ch: '└', ..style });
    frame.put(right, bottom, Glyph { ch: '┘', ..style });
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::types::Command;
    use blockfall_core::{ScriptedPieces, SimConfig, Simulation};

    const VIEW: Viewport = Viewport::new(80, 24);

    fn render(snapshot: &GameSnapshot) -> Frame {
        let mut frame = Frame::new(0, 0);
        BoardView::new().render_into(snapshot, VIEW, &mut frame);
        frame
    }

    fn board_glyph(frame: &Frame, row: u16, col: u16) -> Glyph {
        let (x0, y0) = BoardView::new().origin(VIEW);
        frame
            .get(x0 + 1 + col * CELL_W, y0 + 1 + row)
            .unwrap()
    }

    #[test]
    fn palette_covers_every_kind() {
        for kind in PieceKind::ALL {
            assert!(cell_color(kind.cell()).is_some(), "{kind:?}");
        }
        assert_eq!(cell_color(0), None);
        assert_eq!(cell_color(8), None);
        assert_eq!(cell_color(1), Rgb::from_hex("#FF0000"));
        assert_eq!(Some(kind_color(PieceKind::J)), Rgb::from_hex("#FFB6C1"));
    }

    #[test]
    fn idle_board_shows_start_prompt() {
        let frame = render(&GameSnapshot::default());
        let (x0, y0) = BoardView::new().origin(VIEW);
        assert_eq!(frame.get(x0, y0).unwrap().ch, '┌');
        assert_eq!(frame.get(x0 + BOARD_W - 1, y0 + BOARD_H - 1).unwrap().ch, '┘');
        let prompt_row = frame.row_text(y0 + BOARD_H / 2);
        assert!(prompt_row.contains("Press SPACE to start"), "{prompt_row}");
    }

    #[test]
    fn active_piece_is_drawn_over_board() {
        let mut sim =
            Simulation::with_source(SimConfig::default(), ScriptedPieces::repeat(PieceKind::O));
        sim.apply_command(Command::Start).unwrap();
        let frame = render(&sim.snapshot());

        let o = board_glyph(&frame, 0, 4);
        assert_eq!(o.ch, '█');
        assert_eq!(Some(o.fg), cell_color(PieceKind::O.cell()));
        assert_eq!(board_glyph(&frame, 0, 3).ch, ' ');
    }

    #[test]
    fn panel_and_game_over_text() {
        let mut snapshot = GameSnapshot::default();
        snapshot.status = SimStatus::GameOver;
        snapshot.level = 3;
        snapshot.lines_cleared = 17;
        let frame = render(&snapshot);
        let text: String = (0..frame.height())
            .map(|y| frame.row_text(y))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("LEVEL"));
        assert!(text.contains("17"));
    }

    #[test]
    fn tiny_viewport_clips_without_panicking() {
        let mut frame = Frame::new(0, 0);
        BoardView::new().render_into(&GameSnapshot::default(), Viewport::new(5, 3), &mut frame);
        assert_eq!(frame.row_text(0).chars().next(), Some('┌'));
    }
}
