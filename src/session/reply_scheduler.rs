//! Deferred automated reply.
//!
//! The session schedules one reply `delay` in the future, tagged with the
//! game generation it was scheduled for. The session checks that tag (and
//! the side to move) before letting the reply play.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub due_at: Instant,
    pub game_generation: u64,
}

#[derive(Debug, Clone)]
pub struct ReplyScheduler {
    delay: Duration,
    pending: Option<PendingReply>,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Schedule a reply, replacing any reply still pending.
    pub fn schedule(&mut self, now: Instant, game_generation: u64) -> PendingReply {
        let pending = PendingReply {
            due_at: now + self.delay,
            game_generation,
        };
        self.pending = Some(pending);
        pending
    }

    pub fn cancel(&mut self) -> Option<PendingReply> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<PendingReply> {
        self.pending
    }

    /// Remove and return the pending reply if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingReply> {
        match self.pending {
            Some(p) if p.due_at <= now => self.pending.take(),
            _ => None,
        }
    }

    /// Time left until the pending reply is due, zero if already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.due_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_held_until_due() {
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(300));
        let now = Instant::now();
        scheduler.schedule(now, 4);

        assert!(scheduler.take_due(now).is_none());
        assert_eq!(
            scheduler.time_until_due(now),
            Some(Duration::from_millis(300))
        );

        let later = now + Duration::from_millis(300);
        let fired = scheduler.take_due(later).expect("reply should be due");
        assert_eq!(fired.game_generation, 4);
        assert!(scheduler.pending().is_none());
        assert!(scheduler.take_due(later).is_none());
    }

    #[test]
    fn rescheduling_replaces_and_cancel_clears() {
        let mut scheduler = ReplyScheduler::new(Duration::ZERO);
        let now = Instant::now();
        scheduler.schedule(now, 1);
        scheduler.schedule(now, 2);
        assert_eq!(scheduler.pending().map(|p| p.game_generation), Some(2));

        assert!(scheduler.cancel().is_some());
        assert!(scheduler.take_due(now).is_none());
        assert_eq!(scheduler.time_until_due(now), None);
    }
}
