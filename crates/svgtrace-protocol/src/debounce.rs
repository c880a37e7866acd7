//! Debounce bookkeeping for parameter updates.
//!
//! Each parameter change calls [`Debouncer::schedule`], sleeps for the
//! configured delay, then calls [`Debouncer::fire`] with its ticket.
//! Only the most recently issued ticket fires, and only once, so a burst
//! of changes produces a single request after the input goes quiet.
//!
//! The timer itself lives in the I/O layer; this type only decides
//! whether a woken timer is still the one that counts.

/// Handle returned by [`Debouncer::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter that lets only the newest scheduled update fire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
}

impl Debouncer {
    /// Supersede any scheduled update and schedule a new one.
    pub const fn schedule(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Ticket(self.generation)
    }

    /// Whether `ticket` is the newest one and has not fired yet.
    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        self.pending && ticket.0 == self.generation
    }

    /// Claim the right to send the update for `ticket`.
    ///
    /// Returns `true` exactly once for the newest ticket. Superseded or
    /// already-fired tickets return `false`.
    pub const fn fire(&mut self, ticket: Ticket) -> bool {
        if self.is_current(ticket) {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_change_fires_once() {
        let mut d = Debouncer::default();
        let t = d.schedule();
        assert!(d.is_current(t));
        assert!(d.fire(t));
        assert!(!d.fire(t));
        assert!(!d.is_current(t));
    }

    #[test]
    fn burst_fires_only_last() {
        let mut d = Debouncer::default();
        let tickets: Vec<_> = (0..5).map(|_| d.schedule()).collect();

        // Timers wake in scheduling order once the burst is over.
        let fired = tickets.iter().filter(|&&t| d.fire(t)).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn superseded_timer_waking_mid_burst_does_not_fire() {
        let mut d = Debouncer::default();
        let first = d.schedule();
        let second = d.schedule();
        assert!(!d.fire(first));
        assert!(d.is_current(second));
        assert!(d.fire(second));
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let mut d = Debouncer::default();
        let a = d.schedule();
        assert!(d.fire(a));
        let b = d.schedule();
        let c = d.schedule();
        assert!(!d.fire(b));
        assert!(d.fire(c));
    }
}
