use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::surface::FrameBuffer;

const UPPER_HALF_BLOCK: &str = "▀";

/// Shows a `FrameBuffer` in the terminal.
///
/// Every terminal cell carries two vertically stacked samples of the frame:
/// the upper half block is drawn in the top sample's colour over a background
/// of the bottom sample's colour.
pub struct FrameView<'a> {
    frame: &'a FrameBuffer,
}

impl<'a> FrameView<'a> {
    pub fn new(frame: &'a FrameBuffer) -> Self {
        Self { frame }
    }

    /// Terminal size (columns, rows) that shows each tile as a square-ish block
    pub fn preferred_size(tile_count: usize) -> (u16, u16) {
        let tiles = tile_count.min(u16::MAX as usize / 2) as u16;
        (tiles * 2, tiles)
    }
}

/// Centre of slot `index` when `len` pixels are split into `slots` slots
fn sample(index: u16, slots: u32, len: u32) -> u32 {
    ((2 * u64::from(index) + 1) * u64::from(len) / (2 * u64::from(slots))) as u32
}

impl Widget for FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.frame.width() == 0 || self.frame.height() == 0 {
            return;
        }

        let columns = u32::from(area.width);
        let half_rows = u32::from(area.height) * 2;

        for row in 0..area.height {
            let top_y = sample(row * 2, half_rows, self.frame.height());
            let bottom_y = sample(row * 2 + 1, half_rows, self.frame.height());

            for col in 0..area.width {
                let x = sample(col, columns, self.frame.width());
                let (Some(top), Some(bottom)) =
                    (self.frame.pixel(x, top_y), self.frame.pixel(x, bottom_y))
                else {
                    continue;
                };

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}
