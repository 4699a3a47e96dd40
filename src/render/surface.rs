use ratatui::style::Color;

/// A 2D drawing target addressed in pixels
pub trait Surface {
    /// Fill the whole surface with one colour
    fn clear(&mut self, color: Color);

    /// Fill an axis-aligned rectangle, clipped to the surface
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color);
}

/// In-memory pixel buffer; each pixel holds a terminal colour
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::Black; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Square buffer, as used for the game board
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }
}

impl Surface for FrameBuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for row in y.min(y_end)..y_end {
            let start = self.index(x.min(x_end), row);
            let end = self.index(x_end, row);
            self.pixels[start..end].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_black() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!((fb.width(), fb.height()), (4, 3));
        assert_eq!(fb.pixel(0, 0), Some(Color::Black));
        assert_eq!(fb.pixel(3, 2), Some(Color::Black));
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = FrameBuffer::square(6);
        fb.fill_rect(1, 2, 3, 2, Color::Red);

        assert_eq!(fb.pixel(1, 2), Some(Color::Red));
        assert_eq!(fb.pixel(3, 3), Some(Color::Red));
        assert_eq!(fb.pixel(4, 2), Some(Color::Black));
        assert_eq!(fb.pixel(1, 4), Some(Color::Black));
        assert_eq!(fb.pixel(0, 2), Some(Color::Black));
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut fb = FrameBuffer::square(4);
        fb.fill_rect(3, 3, 10, 10, Color::Green);
        fb.fill_rect(9, 9, 2, 2, Color::Red);

        assert_eq!(fb.pixel(3, 3), Some(Color::Green));
        assert_eq!(fb.pixel(2, 2), Some(Color::Black));
    }

    #[test]
    fn test_wide_buffer_indexes_last_pixel() {
        let mut fb = FrameBuffer::new(70_000, 1);
        fb.fill_rect(69_999, 0, 1, 1, Color::Red);

        assert_eq!(fb.pixel(69_999, 0), Some(Color::Red));
        assert_eq!(fb.pixel(69_998, 0), Some(Color::Black));
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::square(3);
        fb.fill_rect(0, 0, 3, 3, Color::Red);
        fb.clear(Color::Black);
        assert_eq!(fb.pixel(1, 1), Some(Color::Black));
    }
}
