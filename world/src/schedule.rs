//! Tick-scheduled deferred actions.
//!
//! Replaces ad hoc wall-clock timer callbacks with a queue keyed by the
//! remaining delay and drained once per tick. Pause toggles occupy a single
//! slot with last-write-wins replacement.

use std::time::Duration;

/// Action executed once its scheduled delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeferredAction {
    /// Applies the requested pause state to the game state machine.
    SetPaused(bool),
}

#[derive(Clone, Copy, Debug)]
struct Deferred {
    remaining: Duration,
    action: DeferredAction,
}

/// Queue of deferred actions advanced by the simulation clock.
#[derive(Clone, Debug, Default)]
pub(crate) struct DeferredActions {
    entries: Vec<Deferred>,
}

impl DeferredActions {
    /// Schedules a pause-state change, replacing any pending one.
    pub(crate) fn schedule_pause(&mut self, delay: Duration, paused: bool) {
        self.entries
            .retain(|entry| !matches!(entry.action, DeferredAction::SetPaused(_)));
        self.entries.push(Deferred {
            remaining: delay,
            action: DeferredAction::SetPaused(paused),
        });
    }

    /// Pause state a pending toggle will apply, if one is queued.
    pub(crate) fn pending_pause(&self) -> Option<bool> {
        self.entries.iter().find_map(|entry| match entry.action {
            DeferredAction::SetPaused(paused) => Some(paused),
        })
    }

    /// Advances all delays by `dt` and collects the actions that came due,
    /// in scheduling order.
    pub(crate) fn advance(&mut self, dt: Duration, due: &mut Vec<DeferredAction>) {
        let mut index = 0;
        while index < self.entries.len() {
            let entry = &mut self.entries[index];
            if entry.remaining <= dt {
                due.push(entry.action);
                let _ = self.entries.remove(index);
            } else {
                entry.remaining -= dt;
                index += 1;
            }
        }
    }

    /// Discards every pending action.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_fire_only_after_their_delay() {
        let mut schedule = DeferredActions::default();
        schedule.schedule_pause(Duration::from_millis(100), true);

        let mut due = Vec::new();
        schedule.advance(Duration::from_millis(50), &mut due);
        assert!(due.is_empty());

        schedule.advance(Duration::from_millis(50), &mut due);
        assert_eq!(due, vec![DeferredAction::SetPaused(true)]);
    }

    #[test]
    fn pause_slot_is_last_write_wins() {
        let mut schedule = DeferredActions::default();
        schedule.schedule_pause(Duration::from_millis(100), true);
        schedule.schedule_pause(Duration::from_millis(100), false);

        assert_eq!(schedule.pending_pause(), Some(false));

        let mut due = Vec::new();
        schedule.advance(Duration::from_millis(100), &mut due);
        assert_eq!(due, vec![DeferredAction::SetPaused(false)]);
    }

    #[test]
    fn clear_discards_pending_actions() {
        let mut schedule = DeferredActions::default();
        schedule.schedule_pause(Duration::from_millis(100), true);
        schedule.clear();

        let mut due = Vec::new();
        schedule.advance(Duration::from_secs(1), &mut due);
        assert!(due.is_empty());
        assert_eq!(schedule.pending_pause(), None);
    }
}
