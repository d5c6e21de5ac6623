use std::collections::VecDeque;

/// The discrete signals producers post during a tick. The active scene
/// drains them, FIFO, at the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayerHit,
    PlayerDead,
    PowerUpCollected,
}

#[derive(Default)]
pub struct EventQueue {
    queue: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn post(&mut self, event: GameEvent) {
        self.queue.push_back(event);
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.queue.pop_front()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_within_a_tick() {
        let mut bus = EventQueue::default();
        bus.post(GameEvent::PlayerHit);
        bus.post(GameEvent::PowerUpCollected);
        assert_eq!(bus.pop(), Some(GameEvent::PlayerHit));
        assert_eq!(bus.pop(), Some(GameEvent::PowerUpCollected));
        assert_eq!(bus.pop(), None);
    }
}
