use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::canvas::{Canvas, SCREEN_H, SCREEN_W};
use crate::entity::Star;
use crate::field::Field;
use crate::input::Keys;
use crate::player::Player;
use crate::scene::{framed, help_line, starfield, Scene, SceneId, Stage, STAR_BOOST};
use crate::text::{Align, StaticText};

const MENU_STARS: usize = 15;

pub struct MenuScene {
    canvas: Canvas,
    stars: Field<Star>,
    player: Player,
    title: StaticText,
    subtitle: StaticText,
    help: [(&'static str, &'static str); 5],
}

impl MenuScene {
    pub fn new() -> Self {
        let mid_x = (SCREEN_W / 2.0) as i32;
        Self {
            canvas: Canvas::new(),
            stars: starfield(MENU_STARS),
            player: Player::new(SCREEN_W / 2.0 - 1.0, SCREEN_H / 2.0 + 4.0),
            title: StaticText::new(
                "S T O N E   D O D G E R",
                mid_x,
                (SCREEN_H * 0.25) as i32,
                Align::Center,
                Style::default()
                    .fg(Color::Rgb(255, 220, 80))
                    .add_modifier(Modifier::BOLD),
            ),
            subtitle: StaticText::new(
                "",
                mid_x,
                (SCREEN_H * 0.25) as i32 + 2,
                Align::Center,
                Style::default().fg(Color::Rgb(120, 120, 140)),
            ),
            help: [("P", ""), ("T", ""), ("O", ""), ("C", ""), ("Q", "")],
        }
    }
}

impl Scene for MenuScene {
    fn handle_key(&mut self, key: KeyEvent, stage: &mut Stage) {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => stage.quit_to(SceneId::Level),
            KeyCode::Char('t') | KeyCode::Char('T') => stage.quit_to(SceneId::Tutorial),
            KeyCode::Char('o') | KeyCode::Char('O') => stage.quit_to(SceneId::Options),
            KeyCode::Char('c') | KeyCode::Char('C') => stage.quit_to(SceneId::Credits),
            KeyCode::Char('q') | KeyCode::Char('Q') => stage.quit_app(),
            _ => {}
        }
    }

    fn update(&mut self, keys: &Keys, stage: &mut Stage) {
        self.canvas.clear();
        self.subtitle.set_text(stage.text("MENU001"));
        self.help = [
            ("P", stage.text("MENU002")),
            ("T", stage.text("MENU003")),
            ("O", stage.text("MENU004")),
            ("C", stage.text("MENU005")),
            ("Q", stage.text("MENU006")),
        ];

        let star_mod = if keys.boost { STAR_BOOST } else { 1.0 };
        self.stars.tick(&mut self.canvas, star_mod, |_| {});
        self.player.handle_input(keys);
        self.player.tick(&mut self.canvas);
        self.title.tick(&mut self.canvas);
        self.subtitle.tick(&mut self.canvas);
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = framed("Menu");
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
        *self = MenuScene::new();
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
        let mut scene = MenuScene::new();
        scene.update(&Keys::default(), &mut stage);
        assert_eq!(scene.help[0], ("P", "Gioca"));
        assert_eq!(scene.help[4], ("Q", "Esci"));
    }
}
