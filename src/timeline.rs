/// Sparse one-shot schedule of (second, cue) pairs with an explicit cursor.
///
/// Scenes poll it once per elapsed second; each entry fires at most once and
/// entries the clock has already jumped past are discarded unfired rather
/// than delivered late, so skipping forward stays well defined.
pub struct Timeline<C> {
    entries: Vec<(u64, C)>,
    cursor: usize,
}

impl<C: Clone> Timeline<C> {
    pub fn new(mut entries: Vec<(u64, C)>) -> Self {
        entries.sort_by_key(|&(at, _)| at);
        Self { entries, cursor: 0 }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Cue scheduled for exactly `now`, if any. At most one entry fires per
    /// elapsed unit; overdue entries advance the cursor without firing.
    pub fn due(&mut self, now: u64) -> Option<C> {
        while self.cursor < self.entries.len() && self.entries[self.cursor].0 < now {
            self.cursor += 1;
        }
        if self.cursor < self.entries.len() && self.entries[self.cursor].0 == now {
            let cue = self.entries[self.cursor].1.clone();
            self.cursor += 1;
            return Some(cue);
        }
        None
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_order_and_exactly_once() {
        let mut tl = Timeline::new(vec![(5, 'b'), (2, 'a')]);
        let mut fired = Vec::new();
        for now in 0..=10 {
            if let Some(cue) = tl.due(now) {
                fired.push((now, cue));
            }
        }
        assert_eq!(fired, vec![(2, 'a'), (5, 'b')]);
        assert!(tl.is_finished());
    }

    #[test]
    fn overdue_entries_are_skipped_not_deferred() {
        let mut tl = Timeline::new(vec![(2, 'a'), (5, 'b'), (8, 'c')]);
        // the clock jumps straight to 8: a and b are discarded unfired
        assert_eq!(tl.due(8), Some('c'));
        assert!(tl.is_finished());
    }

    #[test]
    fn at_most_one_cue_per_elapsed_unit() {
        let mut tl = Timeline::new(vec![(3, 'a'), (3, 'b')]);
        assert_eq!(tl.due(3), Some('a'));
        // the duplicate key is now overdue and gets dropped on the next poll
        assert_eq!(tl.due(4), None);
        assert!(tl.is_finished());
    }

    #[test]
    fn empty_schedule_is_a_noop() {
        let mut tl: Timeline<char> = Timeline::empty();
        assert_eq!(tl.due(0), None);
        assert!(tl.is_finished());
    }
}
