use std::time::{Duration, Instant};

/// Single pending deadline: armed by `schedule`, disarmed by `fire` or
/// `cancel`. Never holds more than one deadline at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneShot {
    due: Option<Instant>,
}

impl OneShot {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_the_deadline() {
        let t0 = Instant::now();
        let mut timer = OneShot::default();

        timer.schedule(t0, Duration::from_millis(10));

        assert!(!timer.fire(t0));
        assert!(!timer.fire(t0 + Duration::from_millis(9)));
        assert!(timer.fire(t0 + Duration::from_millis(10)));
        assert!(!timer.fire(t0 + Duration::from_millis(20)));
    }

    #[test]
    fn cancel_disarms_and_is_idempotent() {
        let t0 = Instant::now();
        let mut timer = OneShot::default();

        timer.schedule(t0, Duration::from_millis(5));
        timer.cancel();
        timer.cancel();

        assert!(timer.due().is_none());
        assert!(!timer.fire(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn reschedule_replaces_the_deadline() {
        let t0 = Instant::now();
        let mut timer = OneShot::default();

        timer.schedule(t0, Duration::from_millis(5));
        timer.schedule(t0, Duration::from_millis(50));

        assert!(!timer.fire(t0 + Duration::from_millis(5)));
        assert!(timer.fire(t0 + Duration::from_millis(50)));
    }
}
