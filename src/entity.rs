use rand::Rng;
use ratatui::prelude::*;

use crate::canvas::Canvas;

/// Everything a spawning field recycles: asteroids, power-ups, stars.
/// The per-kind speed modifier is threaded in by the caller each tick, so
/// entities carry no shared state and never know who else is on screen.
pub trait Drifter {
    fn spawn(x: f32, y: f32, speed: f32) -> Self;

    /// Move the entity to a fresh spawn point without recreating it.
    fn relocate(&mut self, x: f32, y: f32, speed: f32);

    /// Fused update+draw: advance by speed × modifier, then render.
    fn tick(&mut self, canvas: &mut Canvas, modifier: f32);

    fn is_offscreen_left(&self) -> bool;

    /// Collision circle, or None for purely decorative entities.
    fn hit_circle(&self) -> Option<(f32, f32, f32)>;
}

/// Circle-circle test used by field collision hooks.
pub fn circles_touch(a: (f32, f32, f32), b: (f32, f32, f32)) -> bool {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    let reach = a.2 + b.2;
    dx * dx + dy * dy < reach * reach
}

// ── Asteroid ───────────────────────────────────────────────────────────

const ASTEROID_W: f32 = 2.0;
const ASTEROID_RADIUS: f32 = 1.0;

pub struct Asteroid {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    shade: u8,
}

impl Drifter for Asteroid {
    fn spawn(x: f32, y: f32, speed: f32) -> Self {
        let shade = rand::thread_rng().gen_range(0..3);
        Self { x, y, speed, shade }
    }

    fn relocate(&mut self, x: f32, y: f32, speed: f32) {
        self.x = x;
        self.y = y;
        self.speed = speed;
    }

    fn tick(&mut self, canvas: &mut Canvas, modifier: f32) {
        self.x -= self.speed * modifier;
        let color = match self.shade {
            0 => Color::Rgb(170, 150, 120),
            1 => Color::Rgb(150, 140, 110),
            _ => Color::Rgb(185, 168, 138),
        };
        canvas.put(self.x as i32, self.y as i32, '@', Style::default().fg(color));
        canvas.put(
            self.x as i32 + 1,
            self.y as i32,
            ')',
            Style::default().fg(color),
        );
    }

    fn is_offscreen_left(&self) -> bool {
        self.x < -ASTEROID_W
    }

    fn hit_circle(&self) -> Option<(f32, f32, f32)> {
        Some((self.x + 1.0, self.y, ASTEROID_RADIUS))
    }
}

// ── Power-up (scrap metal) ─────────────────────────────────────────────

const POWERUP_W: f32 = 1.0;
const POWERUP_RADIUS: f32 = 1.0;

pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Drifter for PowerUp {
    fn spawn(x: f32, y: f32, speed: f32) -> Self {
        Self { x, y, speed }
    }

    fn relocate(&mut self, x: f32, y: f32, speed: f32) {
        self.x = x;
        self.y = y;
        self.speed = speed;
    }

    fn tick(&mut self, canvas: &mut Canvas, modifier: f32) {
        self.x -= self.speed * modifier;
        let style = Style::default()
            .fg(Color::Rgb(255, 220, 80))
            .add_modifier(Modifier::BOLD);
        canvas.put(self.x as i32, self.y as i32, '✦', style);
    }

    fn is_offscreen_left(&self) -> bool {
        self.x < -POWERUP_W
    }

    fn hit_circle(&self) -> Option<(f32, f32, f32)> {
        Some((self.x, self.y, POWERUP_RADIUS))
    }
}

// ── Background star ────────────────────────────────────────────────────

pub struct Star {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    gray: u8,
}

impl Drifter for Star {
    fn spawn(x: f32, y: f32, speed: f32) -> Self {
        // random gray shade fakes the stars sitting at different distances
        let gray = rand::thread_rng().gen_range(50..=125);
        Self { x, y, speed, gray }
    }

    fn relocate(&mut self, x: f32, y: f32, speed: f32) {
        self.x = x;
        self.y = y;
        self.speed = speed;
    }

    fn tick(&mut self, canvas: &mut Canvas, modifier: f32) {
        self.x -= self.speed * modifier;
        let style = Style::default().fg(Color::Rgb(self.gray, self.gray, self.gray + 8));
        if modifier > 1.0 {
            // boosting stretches the dot into a streak
            canvas.print(self.x as i32, self.y as i32, "───", style);
        } else {
            canvas.put(self.x as i32, self.y as i32, '·', style);
        }
    }

    fn is_offscreen_left(&self) -> bool {
        self.x < -1.0
    }

    fn hit_circle(&self) -> Option<(f32, f32, f32)> {
        None
    }
}
