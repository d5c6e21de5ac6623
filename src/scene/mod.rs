pub mod credits;
pub mod level;
pub mod losing;
pub mod menu;
pub mod options;
pub mod tutorial;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;

use crate::audio::Mixer;
use crate::canvas::{SCREEN_H, SCREEN_W};
use crate::clock::FPS;
use crate::entity::Star;
use crate::events::{EventQueue, GameEvent};
use crate::field::{Field, SpawnParams};
use crate::input::Keys;
use crate::settings::Settings;
use crate::strings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneId {
    Menu,
    Tutorial,
    Level,
    Losing,
    Options,
    Credits,
}

/// Context shared with the active scene on every callback: the scene-local
/// repeating timer, the event bus, exit requests and the ambient services
/// (audio, settings, localized text).
pub struct Stage {
    ticks: u64,
    timer_step: u32,
    timer_count: u32,
    seconds: u64,
    next_scene: Option<SceneId>,
    quit: bool,
    pub events: EventQueue,
    pub mixer: Mixer,
    pub settings: Settings,
}

impl Stage {
    pub fn new(settings: Settings) -> Self {
        Self {
            ticks: 0,
            timer_step: FPS,
            timer_count: 0,
            seconds: 0,
            next_scene: None,
            quit: false,
            events: EventQueue::default(),
            mixer: Mixer::new(settings.sfx_volume),
            settings,
        }
    }

    /// Reset the per-scene counters when a new scene takes over.
    pub fn begin_scene(&mut self) {
        self.ticks = 0;
        self.timer_step = FPS;
        self.timer_count = 0;
        self.seconds = 0;
        self.next_scene = None;
        self.events.clear();
    }

    /// Repeating timer interval in whole seconds (default one second).
    pub fn set_timer_step(&mut self, seconds: u32) {
        self.timer_step = seconds.max(1) * FPS;
        self.timer_count = 0;
    }

    /// Advance one tick; true when the repeating timer fires.
    pub fn advance_timer(&mut self) -> bool {
        self.ticks += 1;
        self.timer_count += 1;
        if self.timer_count >= self.timer_step {
            self.timer_count = 0;
            self.seconds += 1;
            return true;
        }
        false
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Break out of the current scene and hand control to `next`.
    pub fn quit_to(&mut self, next: SceneId) {
        self.next_scene = Some(next);
    }

    pub fn quit_app(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn take_exit(&mut self) -> Option<SceneId> {
        self.next_scene.take()
    }

    pub fn text(&self, key: &'static str) -> &'static str {
        strings::text(self.settings.language, key)
    }
}

/// One self-contained game state. The director supplies the sequencing
/// (events, then update, then the repeating timer) so scenes just provide
/// this capability set instead of overriding a deep base class.
pub trait Scene {
    fn handle_key(&mut self, key: KeyEvent, stage: &mut Stage);

    /// One fixed simulation tick; owned objects update and draw into the
    /// scene canvas in insertion order, which is also the z-order.
    fn update(&mut self, keys: &Keys, stage: &mut Stage);

    fn on_event(&mut self, event: GameEvent, stage: &mut Stage) {
        let _ = (event, stage);
    }

    /// Periodic duty, fired by the stage timer (once per second).
    fn on_second(&mut self, stage: &mut Stage) {
        let _ = stage;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Rebuild to a fresh state so replays never carry stale entities.
    fn reset(&mut self);
}

pub const STAR_SPEED: f32 = 0.15;
pub const STAR_BOOST: f32 = 4.0;

/// Background starfield shared by most scenes. The first spawn covers the
/// whole screen so it does not start empty, then the spawn window moves off
/// the right edge like every other field.
pub fn starfield(count: usize) -> Field<Star> {
    let mut field = Field::new(
        count,
        SpawnParams {
            x_from: 0.0,
            x_to: SCREEN_W * 2.0,
            y_from: 0.0,
            y_to: SCREEN_H - 1.0,
            min_speed: STAR_SPEED,
            max_speed: STAR_SPEED,
        },
    );
    let mut params = field.params().clone();
    params.x_from = SCREEN_W;
    field.set_params(params);
    field
}

/// Shared chrome: rounded border with the game title plus the scene name.
pub fn framed(scene_name: &str) -> ratatui::widgets::Block<'static> {
    use ratatui::widgets::{Block, BorderType, Borders};
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(format!(" ☄ Stone Dodger — {scene_name} "))
        .title_style(
            Style::default()
                .fg(Color::Rgb(130, 220, 255))
                .add_modifier(Modifier::BOLD),
        )
}

pub fn help_line(entries: &[(&str, &str)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (i, (key, what)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))));
        }
        spans.push(Span::styled(
            format!("{key} "),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{what} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
