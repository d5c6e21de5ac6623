use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::canvas::{Canvas, SCREEN_H, SCREEN_W};
use crate::input::Keys;
use crate::scene::{framed, help_line, Scene, SceneId, Stage};
use crate::text::{Align, StaticText};

pub struct LosingScene {
    canvas: Canvas,
    title: StaticText,
    help: [(&'static str, &'static str); 2],
}

impl LosingScene {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            title: StaticText::new(
                "",
                (SCREEN_W / 2.0) as i32,
                (SCREEN_H / 2.0) as i32,
                Align::Center,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            help: [("M", ""), ("P", "")],
        }
    }
}

impl Scene for LosingScene {
    fn handle_key(&mut self, key: KeyEvent, stage: &mut Stage) {
        match key.code {
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                stage.quit_to(SceneId::Menu)
            }
            KeyCode::Char('p') | KeyCode::Char('P') => stage.quit_to(SceneId::Level),
            _ => {}
        }
    }

    fn update(&mut self, _keys: &Keys, stage: &mut Stage) {
        self.canvas.clear();
        self.title.set_text(stage.text("LOSE001"));
        self.help = [("M", stage.text("LOSE002")), ("P", stage.text("LOSE003"))];
        self.title.tick(&mut self.canvas);
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = framed("Lost");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(Paragraph::new(self.canvas.to_lines()), chunks[0]);
        frame.render_widget(Paragraph::new(help_line(&self.help)), chunks[1]);
    }

    fn reset(&mut self) {
        *self = LosingScene::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::strings::Language;

    #[test]
    fn help_row_follows_the_language_setting() {
        let mut stage = Stage::new(Settings {
            language: Language::Italian,
            ..Settings::default()
        });
        let mut scene = LosingScene::new();
        scene.update(&Keys::default(), &mut stage);
        assert_eq!(scene.help, [("M", "torna al menu"), ("P", "riprova")]);
    }
}
