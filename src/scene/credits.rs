use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::canvas::{Canvas, SCREEN_H, SCREEN_W};
use crate::entity::Star;
use crate::field::Field;
use crate::input::Keys;
use crate::scene::{framed, help_line, starfield, Scene, SceneId, Stage, STAR_BOOST};
use crate::text::{Align, ScrollText};

const CREDIT_SPEED: f32 = 0.12;
const CREDIT_BOOST: f32 = 5.0;

struct Row {
    key: Option<&'static str>,
    literal: &'static str,
    gap: f32,
    heading: bool,
}

const fn heading(key: &'static str, gap: f32) -> Row {
    Row { key: Some(key), literal: "", gap, heading: true }
}

const fn line(literal: &'static str, gap: f32) -> Row {
    Row { key: None, literal, gap, heading: false }
}

// gaps are the distance from the previous row, the first row starts below
// the bottom edge
const ROWS: [Row; 10] = [
    line("S T O N E   D O D G E R", 2.0),
    heading("CREDITS001", 5.0),
    line("the stonedodger crew", 2.0),
    heading("CREDITS002", 5.0),
    line("one ship, three glyphs and a lot of dots", 2.0),
    heading("CREDITS003", 5.0),
    line("your terminal's box-drawing block", 2.0),
    heading("CREDITS004", 5.0),
    line("imagined, mostly", 2.0),
    heading("CREDITS005", 8.0),
];

pub struct CreditsScene {
    canvas: Canvas,
    stars: Field<Star>,
    rows: Vec<ScrollText>,
}

impl CreditsScene {
    pub fn new() -> Self {
        let mid = (SCREEN_W / 2.0) as i32;
        let mut y = SCREEN_H;
        let rows = ROWS
            .iter()
            .map(|row| {
                y += row.gap;
                let style = if row.heading {
                    Style::default()
                        .fg(Color::Rgb(255, 220, 80))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ScrollText::new(row.literal, mid, y, Align::Center, style)
            })
            .collect();

        Self {
            canvas: Canvas::new(),
            stars: starfield(15),
            rows,
        }
    }
}

impl Scene for CreditsScene {
    fn handle_key(&mut self, key: KeyEvent, stage: &mut Stage) {
        if matches!(key.code, KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc) {
            stage.quit_to(SceneId::Menu);
        }
    }

    fn update(&mut self, keys: &Keys, stage: &mut Stage) {
        self.canvas.clear();

        let boost = if keys.boost { CREDIT_BOOST } else { 1.0 };
        let star_mod = if keys.boost { STAR_BOOST } else { 1.0 };
        self.stars.tick(&mut self.canvas, star_mod, |_| {});

        // headings are localized on the fly so a language change in the
        // options screen shows up here too
        for (row, entry) in self.rows.iter_mut().zip(ROWS.iter()) {
            if let Some(key) = entry.key {
                row.set_text(&format!("- {} -", stage.text(key).to_uppercase()));
            }
            row.tick(&mut self.canvas, CREDIT_SPEED * boost);
        }

        // the roll is over once the last row leaves the top of the screen
        if self.rows.last().is_some_and(ScrollText::is_offscreen_top) {
            for row in &mut self.rows {
                row.rewind();
            }
            stage.quit_to(SceneId::Menu);
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = framed("Credits");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(Paragraph::new(self.canvas.to_lines()), chunks[0]);
        frame.render_widget(
            Paragraph::new(help_line(&[("Space", "fast-forward"), ("M", "menu")])),
            chunks[1],
        );
    }

    fn reset(&mut self) {
        *self = CreditsScene::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn roll_ends_back_at_the_menu() {
        let mut stage = Stage::new(Settings::default());
        let mut scene = CreditsScene::new();
        let boosted = Keys { boost: true, ..Keys::default() };
        let mut exited = false;
        for _ in 0..20_000 {
            scene.update(&boosted, &mut stage);
            if let Some(id) = stage.take_exit() {
                assert_eq!(id, SceneId::Menu);
                exited = true;
                break;
            }
        }
        assert!(exited);
        // rows rewound, ready for the next visit
        assert!(!scene.rows.last().unwrap().is_offscreen_top());
    }
}
