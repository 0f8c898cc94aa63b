//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Cell, Line, Mark, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 4x4 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Mark,
        winning_line: Option<Line>,
        accepts_input: bool,
    ) -> Option<Cell> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(cell) = board.last_move() {
            self.draw_last_move_marker(&painter, cell);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(cell) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(cell);
                    self.draw_hover_preview(&painter, cell, to_move, is_valid);

                    if response.clicked() && is_valid {
                        clicked = Some(cell);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the three inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (cell, mark) in board.history() {
            self.draw_mark(painter, cell, mark, 255);
        }
    }

    /// X as two strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, cell: Cell, mark: Mark, alpha: u8) {
        let rect = self.cell_rect(cell).shrink(self.cell_size * MARK_INSET_RATIO);
        let color = mark_color(mark).gamma_multiply(alpha as f32 / 255.0);
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, color);

        match mark {
            Mark::X => {
                painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
                painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
            }
            Mark::O => {
                painter.circle_stroke(rect.center(), rect.width() * 0.5, stroke);
            }
            Mark::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, cell: Cell) {
        let corner = self.cell_rect(cell).right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &Line) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[3]).center();
        painter.line_segment([start, end], stroke);
    }

    fn draw_hover_preview(&self, painter: &Painter, cell: Cell, to_move: Mark, is_valid: bool) {
        let rect = self.cell_rect(cell).shrink(2.0);
        if is_valid {
            painter.rect_filled(rect, CornerRadius::same(2), hover_valid());
            self.draw_mark(painter, cell, to_move, 90);
        } else {
            painter.rect_filled(rect, CornerRadius::same(2), hover_invalid());
        }
    }

    /// Convert screen coordinates to a cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Cell> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Cell::is_valid(col, row) {
            Some(Cell::new(col as u8, row as u8))
        } else {
            None
        }
    }

    /// Screen rectangle covered by `cell`
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + cell.col as f32 * self.cell_size,
                BOARD_MARGIN + cell.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}
