use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::audio::Sfx;
use crate::canvas::{Canvas, SCREEN_H, SCREEN_W};
use crate::input::Keys;
use crate::scene::{framed, help_line, Scene, SceneId, Stage};
use crate::settings::Settings;
use crate::text::{Align, StaticText};

/// Volume and language knobs. Every change is applied to the mixer right
/// away and persisted, and a test blip confirms the new sfx level.
pub struct OptionsScene {
    canvas: Canvas,
    rows: Vec<StaticText>,
}

impl OptionsScene {
    pub fn new() -> Self {
        let mid = (SCREEN_W / 2.0) as i32;
        let first = (SCREEN_H / 4.0) as i32;
        let third = (SCREEN_H / 4.0 * 3.0) as i32;
        let heading = Style::default()
            .fg(Color::Rgb(255, 220, 80))
            .add_modifier(Modifier::BOLD);
        let value = Style::default().fg(Color::White);

        Self {
            canvas: Canvas::new(),
            rows: vec![
                StaticText::new("", mid, first - 3, Align::Center, heading),
                StaticText::new("", mid, first, Align::Center, value),
                StaticText::new("", mid, first + 2, Align::Center, value),
                StaticText::new("", mid, third - 3, Align::Center, heading),
                StaticText::new("", mid, third, Align::Center, value),
            ],
        }
    }

    fn refresh_rows(&mut self, stage: &Stage) {
        let sfx = Settings::notch(stage.settings.sfx_volume);
        let music = Settings::notch(stage.settings.music_volume);
        self.rows[0].set_text(stage.text("OPTIONS003"));
        self.rows[1].set_text(&format!("[Q] ◄ {}: {} ► [E]", stage.text("OPTIONS001"), sfx));
        self.rows[2].set_text(&format!("[A] ◄ {}: {} ► [D]", stage.text("OPTIONS002"), music));
        self.rows[3].set_text(stage.text("OPTIONS004"));
        self.rows[4].set_text(&format!("[L] {}", stage.settings.language.name()));
    }
}

impl Scene for OptionsScene {
    fn handle_key(&mut self, key: KeyEvent, stage: &mut Stage) {
        let mut touched = true;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                stage.settings.nudge_sfx(false);
                stage.mixer.set_sfx_volume(stage.settings.sfx_volume);
                stage.mixer.play(Sfx::Blip);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                stage.settings.nudge_sfx(true);
                stage.mixer.set_sfx_volume(stage.settings.sfx_volume);
                stage.mixer.play(Sfx::Blip);
            }
            KeyCode::Char('a') | KeyCode::Char('A') => stage.settings.nudge_music(false),
            KeyCode::Char('d') | KeyCode::Char('D') => stage.settings.nudge_music(true),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                stage.settings.language = stage.settings.language.next();
            }
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                stage.quit_to(SceneId::Menu);
                touched = false;
            }
            _ => touched = false,
        }
        if touched {
            stage.settings.save();
        }
    }

    fn update(&mut self, _keys: &Keys, stage: &mut Stage) {
        self.canvas.clear();
        self.refresh_rows(stage);
        for row in &self.rows {
            row.tick(&mut self.canvas);
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = framed("Options");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(Paragraph::new(self.canvas.to_lines()), chunks[0]);
        frame.render_widget(
            Paragraph::new(help_line(&[
                ("Q/E", "sounds"),
                ("A/D", "music"),
                ("L", "language"),
                ("M", "menu"),
            ])),
            chunks[1],
        );
    }

    fn reset(&mut self) {
        *self = OptionsScene::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::Language;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn volume_keys_drive_settings_and_mixer() {
        let mut stage = Stage::new(Settings::default());
        let mut scene = OptionsScene::new();
        let before = stage.settings.sfx_volume;
        scene.handle_key(press('e'), &mut stage);
        assert!(stage.settings.sfx_volume > before);
        assert_eq!(stage.mixer.last_sfx(), Some(Sfx::Blip));
    }

    #[test]
    fn language_key_cycles() {
        let mut stage = Stage::new(Settings::default());
        let mut scene = OptionsScene::new();
        scene.handle_key(press('l'), &mut stage);
        assert_eq!(stage.settings.language, Language::Italian);
        scene.handle_key(press('l'), &mut stage);
        assert_eq!(stage.settings.language, Language::English);
    }

    #[test]
    fn m_returns_to_menu() {
        let mut stage = Stage::new(Settings::default());
        let mut scene = OptionsScene::new();
        scene.handle_key(press('m'), &mut stage);
        assert_eq!(stage.take_exit(), Some(SceneId::Menu));
    }
}
