//! GameView: maps a `core::Round` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Round;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::results::{format_elapsed, outcome, standings, Outcome};
use crate::types::{Card, Visibility};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the card grid.
pub struct GameView {
    /// Card width in terminal columns, border included.
    card_w: u16,
    /// Card height in terminal rows, border included.
    card_h: u16,
    /// Blank columns between neighbouring cards.
    col_gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps a 6x6 board inside an 80x24 terminal.
        Self {
            card_w: 6,
            card_h: 3,
            col_gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

const BG: Rgb = Rgb::new(0, 0, 0);
const TABLE_BG: Rgb = Rgb::new(30, 30, 40);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
const HINT: CellStyle = CellStyle::new(Rgb::new(140, 140, 150), BG).dim();

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(3),
            card_h: card_h.max(3),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the round into an existing framebuffer.
    ///
    /// `focus` is the board position holding keyboard focus, if any. Callers
    /// can reuse a framebuffer across frames and only resize when the terminal
    /// size changes.
    pub fn render_into(
        &self,
        round: &Round,
        focus: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let side = round.grid_size().side() as u16;
        let board_w = side * self.card_w + side.saturating_sub(1) * self.col_gap;
        let board_h = side * self.card_h;
        // One column of padding inside the border on each side.
        let frame_w = board_w + 4;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(TABLE_BG, TABLE_BG),
        );
        fb.draw_box(start_x, start_y, frame_w, frame_h, BORDER);

        let side = side as usize;
        for (i, card) in round.cards().iter().enumerate() {
            let col = (i % side) as u16;
            let row = (i / side) as u16;
            let x = start_x + 2 + col * (self.card_w + self.col_gap);
            let y = start_y + 1 + row * self.card_h;
            self.draw_card(fb, x, y, card, focus == Some(i));
        }

        self.draw_side_panel(fb, round, viewport, start_x, start_y, frame_w);

        if let Some(result) = outcome(round) {
            self.draw_result(fb, &result, round, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, round: &Round, focus: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(round, focus, viewport, &mut fb);
        fb
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &Card, focused: bool) {
        let (border, face) = match card.visibility {
            Visibility::FaceDown => (
                CellStyle::new(Rgb::new(110, 120, 160), TABLE_BG),
                CellStyle::new(Rgb::new(70, 90, 150), TABLE_BG),
            ),
            Visibility::FaceUp => (
                CellStyle::new(Rgb::new(240, 240, 240), TABLE_BG),
                CellStyle::new(Rgb::new(250, 220, 120), TABLE_BG).bold(),
            ),
            Visibility::Matched => (
                CellStyle::new(Rgb::new(90, 90, 100), TABLE_BG).dim(),
                CellStyle::new(Rgb::new(120, 160, 120), TABLE_BG).dim(),
            ),
        };
        let border = if focused {
            CellStyle::new(Rgb::new(255, 200, 0), TABLE_BG).bold()
        } else {
            border
        };

        fb.draw_box(x, y, self.card_w, self.card_h, border);

        let inner_w = self.card_w - 2;
        let inner_h = self.card_h - 2;
        match card.visibility {
            Visibility::FaceDown => fb.fill_rect(x + 1, y + 1, inner_w, inner_h, '░', face),
            Visibility::FaceUp | Visibility::Matched => {
                let mid_y = y + 1 + inner_h / 2;
                fb.put_str_centered(x + 1, inner_w, mid_y, &card.value.to_string(), face);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        round: &Round,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        if round.is_multiplayer() {
            fb.put_str(panel_x, y, "PLAYERS", LABEL);
            y = y.saturating_add(1);
            for (player, score) in round.scores().iter().enumerate() {
                let current = player == round.current_player() && !round.is_complete();
                let style = if current { LABEL } else { VALUE };
                let marker = if current { '▶' } else { ' ' };
                fb.put_char(panel_x, y, marker, style);
                fb.put_str(panel_x + 2, y, &format!("P{}", player + 1), style);
                fb.put_str(panel_x + 6, y, &score.to_string(), style);
                y = y.saturating_add(1);
            }
        } else {
            fb.put_str(panel_x, y, "TIME", LABEL);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, &format_elapsed(round.elapsed_ms()), VALUE);
            y = y.saturating_add(2);

            fb.put_str(panel_x, y, "MOVES", LABEL);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, &round.move_count().to_string(), VALUE);
        }

        y = y.saturating_add(2);
        for hint in ["arrows  move", "enter   reveal", "r       restart", "q       quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, HINT);
            y = y.saturating_add(1);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_result(
        &self,
        fb: &mut FrameBuffer,
        result: &Outcome,
        round: &Round,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mut lines = Vec::new();
        match result {
            Outcome::Solo { moves, elapsed_ms } => {
                lines.push(format!("Time   {}", format_elapsed(*elapsed_ms)));
                lines.push(format!("Moves  {moves}"));
            }
            Outcome::Winner { .. } | Outcome::Draw { .. } => {
                for (player, score) in standings(round.scores()) {
                    lines.push(format!("P{}  {} pairs", player + 1, score));
                }
            }
        }

        let box_w = frame_w.saturating_sub(4).min(24);
        let box_h = lines.len() as u16 + 6;
        let x = start_x + (frame_w.saturating_sub(box_w)) / 2;
        let y = start_y + (frame_h.saturating_sub(box_h)) / 2;

        fb.fill_rect(x, y, box_w, box_h, ' ', VALUE);
        fb.draw_box(x, y, box_w, box_h, BORDER);

        let headline = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        fb.put_str_centered(x, box_w, y + 1, &result.headline(), headline);
        for (row, line) in lines.iter().enumerate() {
            fb.put_str_centered(x, box_w, y + 3 + row as u16, line, VALUE);
        }
        fb.put_str_centered(x, box_w, y + box_h - 2, "r: new game", HINT);
    }
}
