use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::audio::Sfx;
use crate::canvas::{Canvas, SCREEN_H, SCREEN_W};
use crate::entity::{circles_touch, Asteroid, Drifter, PowerUp, Star};
use crate::events::GameEvent;
use crate::field::{Field, SpawnParams};
use crate::input::Keys;
use crate::player::{lifebar, Player};
use crate::scene::{framed, help_line, starfield, Scene, SceneId, Stage, STAR_BOOST};
use crate::text::TypedText;
use crate::timeline::Timeline;

const LEVEL_STARS: usize = 24;
const ROCK_MIN_SPEED: f32 = 0.3;
const ROCK_MAX_SPEED: f32 = 0.8;
// steering the ship left or right leans on the whole field's drift
const FIELD_DECEL: f32 = 0.6;
const FIELD_ACCEL: f32 = 1.5;
const DIALOGUE_SPEED: u32 = 20;
const LETTERBOX_ROWS: f32 = 3.0;
const LETTERBOX_STEP: f32 = 0.05;

/// Everything the level timeline can schedule. The whole multi-minute arc
/// (briefing, ramps, swarms, calm stretches, outro) is these cues and
/// nothing else; the update method carries no per-phase conditionals.
#[derive(Clone, Copy)]
enum LevelCue {
    Dialogue(&'static str),
    Asteroids(usize),
    PowerUps(usize),
    MissionStart,
    Outro,
    TheEnd,
}

fn level_script() -> Timeline<LevelCue> {
    use LevelCue::*;
    Timeline::new(vec![
        // briefing, ship flies in on autopilot, no rocks yet
        (2, Dialogue("LEVEL001")),
        (10, Dialogue("LEVEL002")),
        (18, Dialogue("LEVEL003")),
        (27, Dialogue("LEVEL004")),
        (34, Dialogue("LEVEL005")),
        (36, MissionStart),
        // density ramp
        (50, Asteroids(6)),
        (62, PowerUps(2)),
        (75, Asteroids(9)),
        // first swarm spike, then a tracked calm
        (90, Dialogue("LEVEL007")),
        (92, Asteroids(16)),
        (104, Dialogue("LEVEL006")),
        (105, Asteroids(7)),
        (120, Asteroids(11)),
        // second swarm, wind down
        (132, Asteroids(18)),
        (144, Asteroids(8)),
        // scripted fly-off and back to the menu
        (158, Dialogue("LEVEL008")),
        (160, Outro),
        (168, TheEnd),
    ])
}

// entities spawn only on rows the canvas can show, an off-row entity would
// still carry a live hit circle while being clipped invisible
fn drift_params() -> SpawnParams {
    SpawnParams {
        x_from: SCREEN_W,
        x_to: SCREEN_W * 2.0,
        y_from: 0.0,
        y_to: SCREEN_H - 1.0,
        min_speed: ROCK_MIN_SPEED,
        max_speed: ROCK_MAX_SPEED,
    }
}

pub struct LevelScene {
    canvas: Canvas,
    stars: Field<Star>,
    asteroids: Field<Asteroid>,
    powerups: Field<PowerUp>,
    player: Player,
    player_alive: bool,
    input_locked: bool,
    score: u32,
    score_label: &'static str,
    dodged_baseline: u64,
    dialogue: TypedText,
    timeline: Timeline<LevelCue>,
    band: f32,
}

impl LevelScene {
    pub fn new() -> Self {
        // cinematic entrance: the ship drifts in from off-screen left while
        // Navigator talks, input stays locked until MissionStart
        let mut player = Player::new(-4.0, SCREEN_H / 2.0);
        player.set_autopilot(Some((8.0, SCREEN_H / 2.0)));

        Self {
            canvas: Canvas::new(),
            stars: starfield(LEVEL_STARS),
            asteroids: Field::new(0, drift_params()),
            powerups: Field::new(0, drift_params()),
            player,
            player_alive: true,
            input_locked: true,
            score: 0,
            score_label: "",
            dodged_baseline: 0,
            dialogue: TypedText::new(
                "",
                4,
                (SCREEN_H - 6.0) as i32,
                SCREEN_W as usize - 8,
                DIALOGUE_SPEED,
                Style::default().fg(Color::Rgb(180, 220, 255)),
            ),
            timeline: level_script(),
            band: LETTERBOX_ROWS,
        }
    }

    /// Cinematic crop: black bands slide over the top and bottom rows while
    /// the script is flying the ship, and retract when control comes back.
    fn letterbox(&mut self) {
        let target = if self.input_locked { LETTERBOX_ROWS } else { 0.0 };
        if self.band < target {
            self.band = (self.band + LETTERBOX_STEP).min(target);
        } else {
            self.band = (self.band - LETTERBOX_STEP).max(target);
        }
        let style = Style::default().fg(Color::Black);
        for y in 0..self.band as i32 {
            for x in 0..SCREEN_W as i32 {
                self.canvas.put(x, y, '█', style);
                self.canvas.put(x, SCREEN_H as i32 - 1 - y, '█', style);
            }
        }
    }

    fn apply_cue(&mut self, cue: LevelCue, stage: &mut Stage) {
        match cue {
            LevelCue::Dialogue(key) => self.dialogue.restart_with(stage.text(key)),
            LevelCue::Asteroids(count) => self.asteroids.resize(count),
            LevelCue::PowerUps(count) => self.powerups.resize(count),
            LevelCue::MissionStart => {
                self.player.set_autopilot(None);
                self.input_locked = false;
                self.dialogue.restart_with("");
                self.asteroids.resize(4);
                self.powerups.resize(1);
                self.dodged_baseline = self.asteroids.passed();
            }
            LevelCue::Outro => {
                // hand the ship back to the script for the fly-off
                self.input_locked = true;
                self.player.set_god_mode(true);
                self.player
                    .set_autopilot(Some((SCREEN_W + 6.0, SCREEN_H / 2.0)));
                self.asteroids.resize(0);
                self.powerups.resize(0);
            }
            LevelCue::TheEnd => stage.quit_to(SceneId::Menu),
        }
    }
}

impl Scene for LevelScene {
    fn handle_key(&mut self, key: KeyEvent, stage: &mut Stage) {
        // movement comes from the held-key snapshot; only the bail-out key
        // is discrete, and cutscenes ignore it
        if key.code == crossterm::event::KeyCode::Esc && !self.input_locked {
            stage.quit_to(SceneId::Menu);
        }
    }

    fn update(&mut self, keys: &Keys, stage: &mut Stage) {
        self.canvas.clear();
        self.score_label = stage.text("LEVEL_SCORE");

        let idle = Keys::default();
        let keys = if self.input_locked { &idle } else { keys };
        self.player.handle_input(keys);

        // steering input leans on the asteroid/scrap drift, boost on stars
        let field_mod = if keys.left {
            FIELD_DECEL
        } else if keys.right {
            FIELD_ACCEL
        } else {
            1.0
        };
        let star_mod = if keys.boost { STAR_BOOST } else { 1.0 };

        self.stars.tick(&mut self.canvas, star_mod, |_| {});

        if self.player_alive {
            self.player.tick(&mut self.canvas);
        }

        // the collision hooks must see the position the ship occupies this
        // frame, including the autopilot step that just ran
        let ship = self.player.hit_circle();
        let alive = self.player_alive;
        let events = &mut stage.events;
        self.powerups.tick(&mut self.canvas, field_mod, |scrap| {
            if alive {
                if let Some(circle) = scrap.hit_circle() {
                    if circles_touch(circle, ship) {
                        events.post(GameEvent::PowerUpCollected);
                        // consumed: park it past the left edge so the field
                        // recycles it on its next pass
                        scrap.relocate(-8.0, circle.1, 0.0);
                    }
                }
            }
        });

        let events = &mut stage.events;
        self.asteroids.tick(&mut self.canvas, field_mod, |rock| {
            if alive {
                if let Some(circle) = rock.hit_circle() {
                    if circles_touch(circle, ship) {
                        events.post(GameEvent::PlayerHit);
                    }
                }
            }
        });

        self.dialogue.tick(&mut self.canvas);
        self.letterbox();
    }

    fn on_event(&mut self, event: GameEvent, stage: &mut Stage) {
        match event {
            GameEvent::PlayerHit => {
                if self.player_alive {
                    if !self.player.is_invulnerable() {
                        stage.mixer.play(Sfx::Hit);
                    }
                    self.player.got_hit(&mut stage.events);
                }
            }
            GameEvent::PlayerDead => {
                // drop the player from the update list so nothing can post
                // a second death for this life
                self.player_alive = false;
                stage.mixer.play(Sfx::Death);
                stage.quit_to(SceneId::Losing);
            }
            GameEvent::PowerUpCollected => {
                self.score += 1;
                stage.mixer.play(Sfx::Pickup);
            }
        }
    }

    fn on_second(&mut self, stage: &mut Stage) {
        if let Some(cue) = self.timeline.due(stage.seconds()) {
            self.apply_cue(cue, stage);
        }
        // every asteroid that slid past since last second is a dodge point
        let passed = self.asteroids.passed();
        self.score += (passed - self.dodged_baseline) as u32;
        self.dodged_baseline = passed;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = framed("Mission");
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

        let mut status = vec![Span::styled(
            format!(" {}: {} ", self.score_label, self.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];
        status.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        status.extend(lifebar(&self.player).spans);
        frame.render_widget(Paragraph::new(Line::from(status)), chunks[0]);

        frame.render_widget(Paragraph::new(self.canvas.to_lines()), chunks[1]);

        frame.render_widget(
            Paragraph::new(help_line(&[
                ("←↑↓→", "steer"),
                ("Space", "boost"),
                ("Esc", "menu"),
            ])),
            chunks[2],
        );
    }

    fn reset(&mut self) {
        *self = LevelScene::new();
    }
}

impl LevelScene {
    #[cfg(test)]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    #[cfg(test)]
    pub fn asteroid_target(&self) -> usize {
        self.asteroids.target()
    }
}
