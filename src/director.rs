use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use crate::audio::Song;
use crate::input::Keys;
use crate::scene::credits::CreditsScene;
use crate::scene::level::LevelScene;
use crate::scene::losing::LosingScene;
use crate::scene::menu::MenuScene;
use crate::scene::options::OptionsScene;
use crate::scene::tutorial::TutorialScene;
use crate::scene::{Scene, SceneId, Stage};
use crate::settings::Settings;

/// Owns every scene, pre-instantiated, plus the cursor saying which one is
/// live. Scenes request transitions through the stage; the director applies
/// them at the next tick boundary and resets the entering scene so replays
/// start from scratch.
pub struct Director {
    pub stage: Stage,
    current: SceneId,
    menu: MenuScene,
    tutorial: TutorialScene,
    level: LevelScene,
    losing: LosingScene,
    options: OptionsScene,
    credits: CreditsScene,
}

impl Director {
    pub fn new(settings: Settings) -> Self {
        let mut stage = Stage::new(settings);
        stage.mixer.play_song(Song::Menu);
        Self {
            stage,
            current: SceneId::Menu,
            menu: MenuScene::new(),
            tutorial: TutorialScene::new(),
            level: LevelScene::new(),
            losing: LosingScene::new(),
            options: OptionsScene::new(),
            credits: CreditsScene::new(),
        }
    }

    fn active(&mut self) -> &mut dyn Scene {
        match self.current {
            SceneId::Menu => &mut self.menu,
            SceneId::Tutorial => &mut self.tutorial,
            SceneId::Level => &mut self.level,
            SceneId::Losing => &mut self.losing,
            SceneId::Options => &mut self.options,
            SceneId::Credits => &mut self.credits,
        }
    }

    pub fn current(&self) -> SceneId {
        self.current
    }

    pub fn should_quit(&self) -> bool {
        self.stage.should_quit()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // the global quit signal outranks every scene
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.stage.quit_app();
            return;
        }
        let stage = &mut self.stage;
        match self.current {
            SceneId::Menu => self.menu.handle_key(key, stage),
            SceneId::Tutorial => self.tutorial.handle_key(key, stage),
            SceneId::Level => self.level.handle_key(key, stage),
            SceneId::Losing => self.losing.handle_key(key, stage),
            SceneId::Options => self.options.handle_key(key, stage),
            SceneId::Credits => self.credits.handle_key(key, stage),
        }
    }

    /// One fixed simulation tick: apply any pending transition, drain the
    /// event bus, update the scene, then run the repeating timer.
    pub fn on_tick(&mut self, keys: &Keys) {
        if let Some(next) = self.stage.take_exit() {
            self.switch_to(next);
        }

        let stage = &mut self.stage;
        match self.current {
            SceneId::Menu => drive(&mut self.menu, keys, stage),
            SceneId::Tutorial => drive(&mut self.tutorial, keys, stage),
            SceneId::Level => drive(&mut self.level, keys, stage),
            SceneId::Losing => drive(&mut self.losing, keys, stage),
            SceneId::Options => drive(&mut self.options, keys, stage),
            SceneId::Credits => drive(&mut self.credits, keys, stage),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match self.current {
            SceneId::Menu => self.menu.render(frame, area),
            SceneId::Tutorial => self.tutorial.render(frame, area),
            SceneId::Level => self.level.render(frame, area),
            SceneId::Losing => self.losing.render(frame, area),
            SceneId::Options => self.options.render(frame, area),
            SceneId::Credits => self.credits.render(frame, area),
        }
    }

    fn switch_to(&mut self, next: SceneId) {
        self.current = next;
        self.stage.begin_scene();
        self.active().reset();
        self.stage.mixer.play_song(match next {
            SceneId::Level => Song::Level,
            SceneId::Losing => Song::Losing,
            _ => Song::Menu,
        });
    }
}

/// Events, then update, then the repeating timer. Every scene gets the same
/// sequencing so periodic duties observe a fully updated world.
fn drive(scene: &mut dyn Scene, keys: &Keys, stage: &mut Stage) {
    while let Some(event) = stage.events.pop() {
        scene.on_event(event, stage);
    }
    scene.update(keys, stage);
    if stage.advance_timer() {
        scene.on_second(stage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn starts_on_the_menu() {
        let director = Director::new(Settings::default());
        assert_eq!(director.current(), SceneId::Menu);
    }

    #[test]
    fn menu_key_routes_to_the_level_on_the_next_tick() {
        let mut director = Director::new(Settings::default());
        director.on_key(press('p'));
        // the transition is cooperative: applied at the tick boundary
        assert_eq!(director.current(), SceneId::Menu);
        director.on_tick(&Keys::default());
        assert_eq!(director.current(), SceneId::Level);
    }

    #[test]
    fn replaying_the_level_starts_fresh() {
        let mut director = Director::new(Settings::default());
        director.on_key(press('p'));
        director.on_tick(&Keys::default());
        for _ in 0..200 {
            director.on_tick(&Keys::default());
        }
        // bail to the menu and come back in
        director.stage.quit_to(SceneId::Menu);
        director.on_tick(&Keys::default());
        director.on_key(press('p'));
        director.on_tick(&Keys::default());
        assert_eq!(director.current(), SceneId::Level);
        assert_eq!(director.stage.seconds(), 0);
    }

    #[test]
    fn ctrl_c_quits_from_any_scene() {
        let mut director = Director::new(Settings::default());
        director.on_key(press('c'));
        assert!(!director.should_quit());
        director.on_key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(director.should_quit());
    }

    #[test]
    fn menu_q_quits_the_app() {
        let mut director = Director::new(Settings::default());
        director.on_key(press('q'));
        assert!(director.should_quit());
    }
}
