use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::entity::Drifter;

/// Where and how fast a field spawns its entities. `x_from` sits at or past
/// the right screen edge so new entities enter from off-screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnParams {
    pub x_from: f32,
    pub x_to: f32,
    pub y_from: f32,
    pub y_to: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl SpawnParams {
    fn random_point(&self) -> (f32, f32, f32) {
        let mut rng = rand::thread_rng();
        (
            rng.gen_range(self.x_from..=self.x_to),
            rng.gen_range(self.y_from..=self.y_to),
            rng.gen_range(self.min_speed..=self.max_speed),
        )
    }
}

/// Generic manager of a resizable pool of recyclable drifting entities.
///
/// Growing appends fresh spawns immediately; shrinking is lazy: surplus
/// entities are only culled when they drift off the left edge on their own,
/// so nothing ever pops off mid-screen.
pub struct Field<E: Drifter> {
    elements: Vec<E>,
    params: SpawnParams,
    target: usize,
    pending_removal: usize,
    passed: u64,
}

impl<E: Drifter> Field<E> {
    pub fn new(count: usize, params: SpawnParams) -> Self {
        let elements = (0..count)
            .map(|_| {
                let (x, y, speed) = params.random_point();
                E::spawn(x, y, speed)
            })
            .collect();
        Self {
            elements,
            params,
            target: count,
            pending_removal: 0,
            passed: 0,
        }
    }

    /// Change the steady-state size. The pending-removal count is recomputed
    /// from the current live length on every call, so stacked resizes both
    /// forgive earlier pending removals (upward) and extend the cull target
    /// (downward) rather than accumulating blindly.
    pub fn resize(&mut self, new_target: usize) {
        self.target = new_target;
        self.pending_removal = self.elements.len().saturating_sub(new_target);
        while self.elements.len() < new_target {
            let (x, y, speed) = self.params.random_point();
            self.elements.push(E::spawn(x, y, speed));
        }
    }

    /// Advance and draw every entity. Per element: exit-check, then cull or
    /// relocate, then the fused move/draw, then the caller's hook (used by
    /// scenes for collision checks against the player; the hook may relocate
    /// a consumed entity off-screen so the field recycles it next tick).
    pub fn tick<F: FnMut(&mut E)>(&mut self, canvas: &mut Canvas, modifier: f32, mut on_each: F) {
        let mut i = 0;
        while i < self.elements.len() {
            if self.elements[i].is_offscreen_left() {
                self.passed += 1;
                if self.pending_removal > 0 {
                    self.elements.remove(i);
                    self.pending_removal -= 1;
                    continue;
                }
                let (x, y, speed) = self.params.random_point();
                self.elements[i].relocate(x, y, speed);
            }
            self.elements[i].tick(canvas, modifier);
            on_each(&mut self.elements[i]);
            i += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn pending_removal(&self) -> usize {
        self.pending_removal
    }

    /// How many entities have exited left since the field was created.
    /// Monotone; scenes use deltas of this for pacing and dodge scoring.
    pub fn passed(&self) -> u64 {
        self.passed
    }

    pub fn params(&self) -> &SpawnParams {
        &self.params
    }

    /// Swap the spawn window, e.g. after an initial whole-screen fill.
    pub fn set_params(&mut self, params: SpawnParams) {
        self.params = params;
    }

    #[cfg(test)]
    pub fn elements_mut(&mut self) -> &mut [E] {
        &mut self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Asteroid;

    // every spawn lands at x=100 and drifts 50/tick, exiting within 3 ticks
    fn fast_exit_params() -> SpawnParams {
        SpawnParams {
            x_from: 100.0,
            x_to: 100.0,
            y_from: 0.0,
            y_to: 20.0,
            min_speed: 50.0,
            max_speed: 50.0,
        }
    }

    fn drain(field: &mut Field<Asteroid>, canvas: &mut Canvas, ticks: usize) {
        for _ in 0..ticks {
            field.tick(canvas, 1.0, |_| {});
        }
    }

    #[test]
    fn starts_at_requested_size() {
        let field: Field<Asteroid> = Field::new(5, fast_exit_params());
        assert_eq!(field.len(), 5);
        assert_eq!(field.target(), 5);
        assert_eq!(field.pending_removal(), 0);
    }

    #[test]
    fn grow_is_immediate() {
        let mut field: Field<Asteroid> = Field::new(2, fast_exit_params());
        field.resize(6);
        assert_eq!(field.len(), 6);
        assert_eq!(field.pending_removal(), 0);
    }

    #[test]
    fn shrink_is_lazy_until_natural_exit() {
        let mut canvas = Canvas::new();
        let mut field: Field<Asteroid> = Field::new(5, fast_exit_params());
        field.resize(2);
        // nothing removed yet, the surplus is only marked
        assert_eq!(field.len(), 5);
        assert_eq!(field.pending_removal(), 3);

        drain(&mut field, &mut canvas, 20);
        assert_eq!(field.len(), 2);
        assert_eq!(field.pending_removal(), 0);
    }

    #[test]
    fn steady_state_matches_target_after_any_resize_sequence() {
        let mut canvas = Canvas::new();
        let mut field: Field<Asteroid> = Field::new(4, fast_exit_params());
        for &target in &[9, 1, 6, 0, 3] {
            field.resize(target);
            drain(&mut field, &mut canvas, 40);
            assert_eq!(field.len(), target);
            assert_eq!(field.pending_removal(), 0);
        }
    }

    #[test]
    fn resize_to_zero_never_removes_mid_screen() {
        let mut canvas = Canvas::new();
        let mut field: Field<Asteroid> = Field::new(3, fast_exit_params());
        field.resize(0);
        assert_eq!(field.len(), 3);
        // one tick is not enough for a fresh spawn at x=100 to exit
        field.tick(&mut canvas, 1.0, |_| {});
        assert_eq!(field.len(), 3);
        drain(&mut field, &mut canvas, 20);
        assert_eq!(field.len(), 0);
    }

    #[test]
    fn stacked_resizes_recompute_from_live_length() {
        let mut field: Field<Asteroid> = Field::new(10, fast_exit_params());
        field.resize(4);
        assert_eq!(field.pending_removal(), 6);
        // resizing upward before the shrink completes forgives pending culls
        field.resize(8);
        assert_eq!(field.len(), 10);
        assert_eq!(field.pending_removal(), 2);
        // and a second downward resize extends the cull target again
        field.resize(1);
        assert_eq!(field.pending_removal(), 9);
    }

    #[test]
    fn passed_counter_is_monotone() {
        let mut canvas = Canvas::new();
        let mut field: Field<Asteroid> = Field::new(3, fast_exit_params());
        let mut last = field.passed();
        for _ in 0..30 {
            field.tick(&mut canvas, 1.0, |_| {});
            assert!(field.passed() >= last);
            last = field.passed();
        }
        // recycled entities keep counting every exit
        assert!(last >= 6);
    }

    #[test]
    fn hook_runs_for_every_live_element() {
        let mut canvas = Canvas::new();
        let mut field: Field<Asteroid> = Field::new(4, fast_exit_params());
        let mut seen = 0;
        field.tick(&mut canvas, 1.0, |_| seen += 1);
        assert_eq!(seen, 4);
    }

    #[test]
    fn spawn_params_round_trip_through_json() {
        let params = SpawnParams {
            x_from: 96.0,
            x_to: 192.0,
            y_from: -1.0,
            y_to: 29.0,
            min_speed: 0.3,
            max_speed: 0.8,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: SpawnParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
        // a field rebuilt from the round-tripped params behaves the same
        let field: Field<Asteroid> = Field::new(7, back);
        assert_eq!(field.len(), 7);
    }
}
