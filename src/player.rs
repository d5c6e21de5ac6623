use ratatui::prelude::*;

use crate::canvas::{Canvas, SCREEN_H, SCREEN_W};
use crate::clock::FPS;
use crate::events::{EventQueue, GameEvent};
use crate::input::Keys;

pub const MAX_HEALTH: u32 = 3;
const SHIP_SPEED: f32 = 0.6;
const SHIP_W: f32 = 2.0;
const SHIP_H: f32 = 1.0;
const SHIP_RADIUS: f32 = 1.0;
const INVULN_TICKS: u32 = 3 * FPS;
const REPAIR_TICKS: u32 = 5 * FPS;

/// The user-controlled ship. Its orthogonal modes (invulnerable after a hit,
/// passive auto-repair, scripted autopilot, god mode) are all plain countdown
/// timers and flags mutated only here.
pub struct Player {
    pub x: f32,
    pub y: f32,
    health: u32,
    invuln_timer: u32,
    repair_timer: u32,
    autopilot: Option<(f32, f32)>,
    god_mode: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            health: MAX_HEALTH,
            invuln_timer: 0,
            repair_timer: REPAIR_TICKS,
            autopilot: None,
            god_mode: false,
        }
    }

    /// Move by the held directions, clamped fully on-screen. Ignored while
    /// the autopilot is flying the ship.
    pub fn handle_input(&mut self, keys: &Keys) {
        if self.autopilot.is_some() {
            return;
        }
        if keys.left && self.x - SHIP_SPEED > 0.0 {
            self.x -= SHIP_SPEED;
        }
        if keys.right && self.x + SHIP_SPEED + SHIP_W < SCREEN_W {
            self.x += SHIP_SPEED;
        }
        if keys.up && self.y - SHIP_SPEED > 0.0 {
            self.y -= SHIP_SPEED;
        }
        if keys.down && self.y + SHIP_SPEED + SHIP_H < SCREEN_H {
            self.y += SHIP_SPEED;
        }
    }

    /// Take one hit. A no-op inside the invulnerability window or in god
    /// mode; reaching zero health posts `PlayerDead` exactly once, because
    /// the window opens on the killing hit as well.
    pub fn got_hit(&mut self, events: &mut EventQueue) {
        if self.invuln_timer > 0 || self.god_mode || self.health == 0 {
            return;
        }
        self.health -= 1;
        if self.health == 0 {
            events.post(GameEvent::PlayerDead);
        }
        self.invuln_timer = INVULN_TICKS;
        self.repair_timer = REPAIR_TICKS;
    }

    /// Fused update+draw: the flicker must reflect this tick's timer value.
    pub fn tick(&mut self, canvas: &mut Canvas) {
        if let Some((tx, ty)) = self.autopilot {
            // per-axis stepping: diagonal runs both axes at once and the
            // nearer axis settles first
            self.x = step_toward(self.x, tx, SHIP_SPEED);
            self.y = step_toward(self.y, ty, SHIP_SPEED);
        }

        let style = if self.invuln_timer > 0 {
            self.invuln_timer -= 1;
            Style::default().fg(Color::Rgb(60, 110, 120))
        } else {
            self.repair();
            Style::default()
                .fg(Color::Rgb(80, 255, 140))
                .add_modifier(Modifier::BOLD)
        };
        canvas.put(self.x as i32, self.y as i32, '=', style);
        canvas.put(self.x as i32 + 1, self.y as i32, '▶', style);
    }

    fn repair(&mut self) {
        if self.health >= MAX_HEALTH {
            return;
        }
        if self.repair_timer == 0 {
            self.health += 1;
            self.repair_timer = REPAIR_TICKS;
        } else {
            self.repair_timer -= 1;
        }
    }

    /// Percentage of the way to the next auto-repaired heart.
    pub fn repair_progress(&self) -> u32 {
        100 - (100 * self.repair_timer) / REPAIR_TICKS
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_timer > 0
    }

    pub fn set_autopilot(&mut self, target: Option<(f32, f32)>) {
        self.autopilot = target;
    }

    pub fn autopilot_done(&self) -> bool {
        match self.autopilot {
            Some((tx, ty)) => self.x == tx && self.y == ty,
            None => true,
        }
    }

    pub fn set_god_mode(&mut self, enabled: bool) {
        self.god_mode = enabled;
    }

    pub fn hit_circle(&self) -> (f32, f32, f32) {
        (self.x + 1.0, self.y, SHIP_RADIUS)
    }
}

/// Heart row for the HUD: full hearts, plus the repair progress of the next
/// heart shown as a dim partial glyph.
pub fn lifebar(player: &Player) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for _ in 0..player.health() {
        spans.push(Span::styled(
            "♥ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    if player.health() < MAX_HEALTH {
        let glyph = match player.repair_progress() {
            0..=33 => "░",
            34..=66 => "▒",
            _ => "▓",
        };
        spans.push(Span::styled(glyph, Style::default().fg(Color::Rgb(150, 60, 60))));
    }
    Line::from(spans)
}

fn step_toward(from: f32, to: f32, speed: f32) -> f32 {
    let delta = to - from;
    if delta.abs() <= speed {
        to
    } else {
        from + speed * delta.signum()
    }
}
