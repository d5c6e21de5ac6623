use ratatui::prelude::*;

use crate::canvas::Canvas;
use crate::clock::FPS;

#[derive(Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Center,
    Right,
}

fn anchor_x(x: i32, width: usize, align: Align) -> i32 {
    match align {
        Align::Left => x,
        Align::Center => x - width as i32 / 2,
        Align::Right => x - width as i32,
    }
}

/// A fixed line of text drawn into the canvas each tick.
pub struct StaticText {
    text: String,
    x: i32,
    y: i32,
    align: Align,
    style: Style,
}

impl StaticText {
    pub fn new(text: &str, x: i32, y: i32, align: Align, style: Style) -> Self {
        Self {
            text: text.to_string(),
            x,
            y,
            align,
            style,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn tick(&self, canvas: &mut Canvas) {
        let x = anchor_x(self.x, self.text.chars().count(), self.align);
        canvas.print(x, self.y, &self.text, self.style);
    }
}

/// Teleprinter-style dialogue: one more letter every `FPS / speed` ticks,
/// word-wrapped at a fixed width. The reveal is tied to the draw call so the
/// typing animation stays in step with the simulation.
pub struct TypedText {
    full: String,
    shown: usize,
    frame_counter: u32,
    break_point: u32,
    width: usize,
    x: i32,
    y: i32,
    style: Style,
}

impl TypedText {
    /// `speed` is letters per second.
    pub fn new(text: &str, x: i32, y: i32, width: usize, speed: u32, style: Style) -> Self {
        Self {
            full: text.to_string(),
            shown: 0,
            frame_counter: 0,
            break_point: (FPS / speed.max(1)).max(1),
            width: width.max(8),
            x,
            y,
            style,
        }
    }

    pub fn restart_with(&mut self, text: &str) {
        self.full = text.to_string();
        self.shown = 0;
        self.frame_counter = 0;
    }

    pub fn skip(&mut self) {
        self.shown = self.full.chars().count();
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.full.chars().count()
    }

    pub fn tick(&mut self, canvas: &mut Canvas) {
        if !self.is_done() {
            self.frame_counter += 1;
            if self.frame_counter % self.break_point == 0 {
                self.frame_counter = 0;
                self.shown += 1;
            }
        }
        let prefix: String = self.full.chars().take(self.shown).collect();
        for (row, line) in wrap(&prefix, self.width).into_iter().enumerate() {
            canvas.print(self.x, self.y + row as i32, &line, self.style);
        }
    }

    #[cfg(test)]
    pub fn shown(&self) -> usize {
        self.shown
    }
}

/// Credits row that slides up the screen; callers feed the per-tick speed so
/// a boost key can accelerate the whole roll at once.
pub struct ScrollText {
    text: String,
    x: i32,
    pub y: f32,
    home_y: f32,
    align: Align,
    style: Style,
}

impl ScrollText {
    pub fn new(text: &str, x: i32, y: f32, align: Align, style: Style) -> Self {
        Self {
            text: text.to_string(),
            x,
            y,
            home_y: y,
            align,
            style,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn tick(&mut self, canvas: &mut Canvas, speed: f32) {
        let x = anchor_x(self.x, self.text.chars().count(), self.align);
        canvas.print(x, self.y as i32, &self.text, self.style);
        self.y -= speed;
    }

    pub fn is_offscreen_top(&self) -> bool {
        self.y < -1.0
    }

    pub fn rewind(&mut self) {
        self.y = self.home_y;
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_text_reveals_at_the_configured_pace() {
        let mut canvas = Canvas::new();
        // 20 letters per second at 60fps: one letter every 3 ticks
        let mut typed = TypedText::new("hello", 0, 0, 40, 20, Style::default());
        for _ in 0..3 {
            typed.tick(&mut canvas);
        }
        assert_eq!(typed.shown(), 1);
        for _ in 0..12 {
            typed.tick(&mut canvas);
        }
        assert!(typed.is_done());
    }

    #[test]
    fn skip_completes_instantly() {
        let mut typed = TypedText::new("a longer line of text", 0, 0, 40, 1, Style::default());
        assert!(!typed.is_done());
        typed.skip();
        assert!(typed.is_done());
    }

    #[test]
    fn restart_resets_the_reveal() {
        let mut canvas = Canvas::new();
        let mut typed = TypedText::new("first", 0, 0, 40, 60, Style::default());
        typed.skip();
        typed.restart_with("second");
        assert!(!typed.is_done());
        typed.tick(&mut canvas);
        assert_eq!(typed.shown(), 1);
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn scroll_text_exits_top() {
        let mut canvas = Canvas::new();
        let mut row = ScrollText::new("credits", 10, 2.0, Align::Left, Style::default());
        for _ in 0..5 {
            row.tick(&mut canvas, 1.0);
        }
        assert!(row.is_offscreen_top());
        row.rewind();
        assert!(!row.is_offscreen_top());
    }
}
