use ratatui::style::Color;

use super::surface::Surface;
use crate::game::{Position, Snake};

/// Gap left between neighbouring cells, in pixels
pub const CELL_GAP: u32 = 2;

pub const BACKGROUND: Color = Color::Black;
pub const SNAKE_COLOR: Color = Color::LightGreen;
pub const FOOD_COLOR: Color = Color::Red;

/// Paints the board onto a pixel surface. Read-only over the game state.
#[derive(Debug, Clone, Copy)]
pub struct BoardPainter {
    cell_size: u32,
}

impl BoardPainter {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    /// Clear the surface, then draw every snake segment and the food
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, snake: &Snake, food: Position) {
        surface.clear(BACKGROUND);

        for segment in snake.segments() {
            self.paint_cell(surface, *segment, SNAKE_COLOR);
        }

        self.paint_cell(surface, food, FOOD_COLOR);
    }

    fn paint_cell<S: Surface + ?Sized>(&self, surface: &mut S, cell: Position, color: Color) {
        // Cells outside the grid have nothing to paint
        if cell.x < 0 || cell.y < 0 {
            return;
        }

        let side = self.cell_size.saturating_sub(CELL_GAP);
        surface.fill_rect(
            cell.x as u32 * self.cell_size,
            cell.y as u32 * self.cell_size,
            side,
            side,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::FrameBuffer;

    #[test]
    fn test_paints_snake_and_food() {
        let mut fb = FrameBuffer::square(100);
        let painter = BoardPainter::new(10);
        let snake =
            Snake::from_segments(vec![Position::new(2, 1), Position::new(1, 1)]).unwrap();

        painter.paint(&mut fb, &snake, Position::new(5, 5));

        assert_eq!(fb.pixel(20, 10), Some(SNAKE_COLOR));
        assert_eq!(fb.pixel(27, 17), Some(SNAKE_COLOR));
        assert_eq!(fb.pixel(10, 10), Some(SNAKE_COLOR));
        assert_eq!(fb.pixel(50, 50), Some(FOOD_COLOR));
        assert_eq!(fb.pixel(0, 0), Some(BACKGROUND));
    }

    #[test]
    fn test_leaves_gap_between_cells() {
        let mut fb = FrameBuffer::square(100);
        let painter = BoardPainter::new(10);
        let snake = Snake::new(Position::new(0, 0));

        painter.paint(&mut fb, &snake, Position::new(9, 9));

        assert_eq!(fb.pixel(7, 7), Some(SNAKE_COLOR));
        assert_eq!(fb.pixel(8, 0), Some(BACKGROUND));
        assert_eq!(fb.pixel(0, 9), Some(BACKGROUND));
    }

    #[test]
    fn test_repaint_clears_previous_frame() {
        let mut fb = FrameBuffer::square(100);
        let painter = BoardPainter::new(10);

        painter.paint(&mut fb, &Snake::new(Position::new(3, 3)), Position::new(0, 0));
        painter.paint(&mut fb, &Snake::new(Position::new(4, 3)), Position::new(0, 0));

        assert_eq!(fb.pixel(30, 30), Some(BACKGROUND));
        assert_eq!(fb.pixel(40, 30), Some(SNAKE_COLOR));
    }
}
