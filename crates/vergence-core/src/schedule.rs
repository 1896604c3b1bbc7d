//! Repeating per-direction ticks in caller-supplied time.
//!
//! The host owns the real clock (`performance.now()` in the browser) and
//! polls [`TickSchedule::due`] from its frame loop. Keeping the schedule as
//! plain data makes the Idle/Active bookkeeping and its cancellation
//! observable from tests without timers.

use crate::constants::MAX_CATCH_UP_TICKS;
use crate::motion::Direction;

#[derive(Clone, Debug)]
pub struct TickSchedule {
    period_ms: f64,
    next_due: [Option<f64>; 4],
}

impl TickSchedule {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms: period_ms.max(1.0),
            next_due: [None; 4],
        }
    }

    #[inline]
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Begin ticking `direction`, first tick one period after `now_ms`.
    /// Returns false if it was already running; the existing cadence is kept.
    pub fn start(&mut self, direction: Direction, now_ms: f64) -> bool {
        let slot = &mut self.next_due[direction.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(now_ms + self.period_ms);
        true
    }

    /// Returns true if a running tick was cancelled.
    pub fn cancel(&mut self, direction: Direction) -> bool {
        self.next_due[direction.index()].take().is_some()
    }

    pub fn cancel_all(&mut self) {
        self.next_due = [None; 4];
    }

    #[inline]
    pub fn is_running(&self, direction: Direction) -> bool {
        self.next_due[direction.index()].is_some()
    }

    pub fn running_count(&self) -> usize {
        self.next_due.iter().filter(|d| d.is_some()).count()
    }

    /// Collect every tick that fell due at or before `now_ms`, in time order,
    /// as `(direction, scheduled_at)`. A direction that fell more than
    /// `MAX_CATCH_UP_TICKS` behind (e.g. a backgrounded tab) is resynchronized
    /// to `now_ms` instead of replaying the backlog.
    pub fn due(&mut self, now_ms: f64) -> Vec<(Direction, f64)> {
        let mut fired = Vec::new();
        for direction in Direction::ALL {
            let slot = &mut self.next_due[direction.index()];
            let Some(mut at) = *slot else {
                continue;
            };
            let mut count = 0;
            while at <= now_ms && count < MAX_CATCH_UP_TICKS {
                fired.push((direction, at));
                at += self.period_ms;
                count += 1;
            }
            if at <= now_ms {
                log::debug!("[ticks] {:?} fell behind; resyncing", direction);
                at = now_ms + self.period_ms;
            }
            *slot = Some(at);
        }
        fired.sort_by(|a, b| a.1.total_cmp(&b.1));
        fired
    }
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new(crate::constants::TICK_PERIOD_MS)
    }
}
