use ratatui::prelude::*;

/// Logical play-area size in terminal cells. Spawn ranges and movement all
/// work in these coordinates; the terminal simply clips what it cannot fit.
pub const SCREEN_W: f32 = 96.0;
pub const SCREEN_H: f32 = 30.0;

const BG: Color = Color::Rgb(5, 5, 15);

/// Cell-grid render target. Every game object draws into this during its
/// `tick`, in scene insertion order, so insertion order is the z-order.
pub struct Canvas {
    width: usize,
    height: usize,
    grid: Vec<Vec<(char, Style)>>,
}

impl Canvas {
    pub fn new() -> Self {
        let width = SCREEN_W as usize;
        let height = SCREEN_H as usize;
        Self {
            width,
            height,
            grid: vec![vec![(' ', Style::default().bg(BG)); width]; height],
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.grid {
            for cell in row {
                *cell = (' ', Style::default().bg(BG));
            }
        }
    }

    /// Put a single glyph, silently dropping anything out of bounds.
    pub fn put(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.grid[y][x] = (ch, style.bg(BG));
        }
    }

    /// Print a string left-to-right starting at (x, y).
    pub fn print(&mut self, x: i32, y: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, style);
        }
    }

    pub fn to_lines(&self) -> Vec<Line<'static>> {
        self.grid
            .iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|&(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    #[cfg(test)]
    pub fn glyph_at(&self, x: usize, y: usize) -> char {
        self.grid[y][x].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_print_land_in_grid() {
        let mut canvas = Canvas::new();
        canvas.put(3, 2, '@', Style::default());
        canvas.print(0, 0, "hi", Style::default());
        assert_eq!(canvas.glyph_at(3, 2), '@');
        assert_eq!(canvas.glyph_at(0, 0), 'h');
        assert_eq!(canvas.glyph_at(1, 0), 'i');
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new();
        canvas.put(-1, 0, 'x', Style::default());
        canvas.put(0, -5, 'x', Style::default());
        canvas.put(SCREEN_W as i32 + 10, 0, 'x', Style::default());
        // print running off the right edge clips instead of wrapping
        canvas.print(SCREEN_W as i32 - 1, 0, "ab", Style::default());
        assert_eq!(canvas.glyph_at(SCREEN_W as usize - 1, 0), 'a');
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut canvas = Canvas::new();
        canvas.put(5, 5, '#', Style::default());
        canvas.clear();
        assert_eq!(canvas.glyph_at(5, 5), ' ');
    }
}
