use std::time::Duration;

use log::debug;

/// Work the controller can defer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledAction {
    HideSignupHelper,
}

pub trait Scheduler {
    /// Runs `action` once `delay` has elapsed. Scheduling an action that is
    /// already pending moves its deadline instead of queueing a second one.
    fn after(&mut self, delay: Duration, action: ScheduledAction);

    /// Moves time forward and returns the actions that came due, oldest deadline first.
    fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledAction>;
}

/// A scheduler driven entirely by [`Scheduler::advance`], with no wall clock.
#[derive(Debug, Default, Clone)]
pub struct TimerQueue {
    now: Duration,
    pending: Vec<(Duration, ScheduledAction)>,
}

impl TimerQueue {
    pub fn deadline(&self, action: ScheduledAction) -> Option<Duration> {
        self.pending
            .iter()
            .find(|(_, pending)| *pending == action)
            .map(|(deadline, _)| *deadline)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn after(&mut self, delay: Duration, action: ScheduledAction) {
        let deadline = self.now + delay;
        self.pending.retain(|(_, pending)| *pending != action);
        self.pending.push((deadline, action));
        debug!("scheduled {:?} at {:?}", action, deadline);
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledAction> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|(deadline, _)| *deadline <= now);
        self.pending = pending;
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, action)| action).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_at_deadline() {
        let mut queue = TimerQueue::default();
        queue.after(Duration::from_millis(4000), ScheduledAction::HideSignupHelper);
        assert!(queue.advance(Duration::from_millis(3999)).is_empty());
        assert_eq!(
            queue.advance(Duration::from_millis(1)),
            vec![ScheduledAction::HideSignupHelper]
        );
        assert!(queue.is_idle());
        assert!(queue.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_rescheduling_moves_deadline() {
        let mut queue = TimerQueue::default();
        queue.after(Duration::from_millis(4000), ScheduledAction::HideSignupHelper);
        queue.advance(Duration::from_millis(3000));
        queue.after(Duration::from_millis(4000), ScheduledAction::HideSignupHelper);
        assert_eq!(
            queue.deadline(ScheduledAction::HideSignupHelper),
            Some(Duration::from_millis(7000))
        );
        assert!(queue.advance(Duration::from_millis(3000)).is_empty());
        assert_eq!(queue.advance(Duration::from_millis(1000)).len(), 1);
    }
}
