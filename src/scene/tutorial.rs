use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::canvas::{Canvas, SCREEN_H};
use crate::entity::{Asteroid, Drifter, PowerUp, Star};
use crate::field::Field;
use crate::input::Keys;
use crate::player::{lifebar, Player};
use crate::scene::{framed, help_line, starfield, Scene, SceneId, Stage, STAR_BOOST};
use crate::text::TypedText;

const TUTORIAL_STARS: usize = 15;
const LABEL_COL: i32 = 14;
const LABEL_SPEED: u32 = 30;

/// Static showcase of the mission pieces: one of everything, frozen in
/// place, with a typed label next to each.
pub struct TutorialScene {
    canvas: Canvas,
    stars: Field<Star>,
    player: Player,
    asteroid: Asteroid,
    powerup: PowerUp,
    labels: Vec<TypedText>,
    hull_note: &'static str,
    help: [(&'static str, &'static str); 2],
}

impl TutorialScene {
    pub fn new() -> Self {
        let row = |n: f32| (SCREEN_H / 4.0 * n) as i32;
        let label_style = Style::default().fg(Color::Rgb(180, 220, 255));
        let mut labels: Vec<TypedText> = (1..=3)
            .map(|n| TypedText::new("", LABEL_COL, row(n as f32), 60, LABEL_SPEED, label_style))
            .collect();
        // the tutorial shows its copy instantly, the animation is skipped
        for label in &mut labels {
            label.skip();
        }

        Self {
            canvas: Canvas::new(),
            stars: starfield(TUTORIAL_STARS),
            player: Player::new(6.0, SCREEN_H / 4.0),
            asteroid: Asteroid::spawn(6.0, SCREEN_H / 4.0 * 2.0, 0.0),
            powerup: PowerUp::spawn(6.0, SCREEN_H / 4.0 * 3.0, 0.0),
            labels,
            hull_note: "",
            help: [("M", ""), ("P", "")],
        }
    }
}

impl Scene for TutorialScene {
    fn handle_key(&mut self, key: KeyEvent, stage: &mut Stage) {
        match key.code {
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                stage.quit_to(SceneId::Menu)
            }
            KeyCode::Char('p') | KeyCode::Char('P') => stage.quit_to(SceneId::Level),
            _ => {}
        }
    }

    fn update(&mut self, keys: &Keys, stage: &mut Stage) {
        self.canvas.clear();
        for (label, key) in self
            .labels
            .iter_mut()
            .zip(["TUTORIAL001", "TUTORIAL002", "TUTORIAL003"])
        {
            label.restart_with(stage.text(key));
            label.skip();
        }
        self.hull_note = stage.text("TUTORIAL004");
        self.help = [
            ("M", stage.text("TUTORIAL005")),
            ("P", stage.text("TUTORIAL006")),
        ];

        let star_mod = if keys.boost { STAR_BOOST } else { 1.0 };
        self.stars.tick(&mut self.canvas, star_mod, |_| {});

        self.player.handle_input(keys);
        self.player.tick(&mut self.canvas);
        // zero speed keeps the specimens pinned in place
        self.asteroid.tick(&mut self.canvas, 1.0);
        self.powerup.tick(&mut self.canvas, 1.0);

        for label in &mut self.labels {
            label.tick(&mut self.canvas);
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = framed("Tutorial");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(inner);

        let mut status = lifebar(&self.player);
        status.spans.push(Span::styled(
            format!("  {}", self.hull_note),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(status), chunks[0]);
        frame.render_widget(Paragraph::new(self.canvas.to_lines()), chunks[1]);
        frame.render_widget(Paragraph::new(help_line(&self.help)), chunks[2]);
    }

    fn reset(&mut self) {
        *self = TutorialScene::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::strings::Language;

    #[test]
    fn captions_and_help_follow_the_language_setting() {
        let mut stage = Stage::new(Settings {
            language: Language::Italian,
            ..Settings::default()
        });
        let mut scene = TutorialScene::new();
        scene.update(&Keys::default(), &mut stage);
        assert_eq!(scene.hull_note, "Il tuo scafo. Si ripara da solo, lentamente.");
        assert_eq!(scene.help[1], ("P", "inizia la missione"));
    }
}
