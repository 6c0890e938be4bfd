//! Board rendering for the Caro GUI

use crate::{Board, Mark, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area (inside the margin)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

/// Per-frame inputs for [`BoardView::show`]
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub palette: Palette,
    pub last_move: Option<Pos>,
    pub hint: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Clicks are reported only when the human may move
    pub interactive: bool,
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        painter.rect_filled(response.rect, CornerRadius::same(8), frame.palette.board_bg);
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        // Cell highlights go under the grid lines
        if let Some(pos) = frame.hint {
            self.fill_cell(&painter, pos, frame.palette.hint_bg);
        }
        if let Some(pos) = frame.last_move {
            self.fill_cell(&painter, pos, frame.palette.last_move_bg);
        }
        if let Some(line) = frame.winning_line {
            for &pos in line {
                self.fill_cell(&painter, pos, frame.palette.win_bg);
            }
        }

        self.draw_grid(&painter, frame.palette);
        self.draw_marks(&painter, frame.board, frame.winning_line);

        let mut clicked_pos = None;

        if frame.interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if frame.board.is_empty(board_pos) {
                        self.fill_cell(&painter, board_pos, frame.palette.hover());

                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 15x15 cell grid
    fn draw_grid(&self, painter: &Painter, palette: Palette) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, palette.grid_line);
        let min = self.grid_rect.min;
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, span)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(span, offset)],
                stroke,
            );
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board, winning_line: Option<&[Pos]>) {
        for (pos, mark) in board.occupied() {
            let winning = winning_line.is_some_and(|line| line.contains(&pos));
            self.draw_mark(painter, pos, mark, winning);
        }
    }

    /// Draw a single X or O
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, winning: bool) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * MARK_SIZE_RATIO;
        let width = (self.cell_size * MARK_STROKE_RATIO).max(1.5);

        match mark {
            Mark::X => {
                let stroke = Stroke::new(width, if winning { WIN_MARK } else { X_MARK });
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
                    stroke,
                );
            }
            Mark::O => {
                let stroke = Stroke::new(width, if winning { WIN_MARK } else { O_MARK });
                painter.circle_stroke(center, half, stroke);
            }
            Mark::Empty => {}
        }
    }

    fn fill_cell(&self, painter: &Painter, pos: Pos, color: egui::Color32) {
        let rect = Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size));
        painter.rect_filled(rect, CornerRadius::ZERO, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.grid_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.grid_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
