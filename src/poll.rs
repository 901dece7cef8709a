use std::time::Duration;
use tokio::time::sleep;

/// Paces polling cycles with a fixed pause after each one
///
/// The pause starts when a cycle finishes, so a slow cycle never leads
/// straight into the next one.
#[derive(Debug)]
pub struct Schedule {
    pause: Duration,
    max_cycles: Option<usize>,
    started: usize,
}

impl Schedule {
    pub fn new(pause: Duration) -> Self {
        Self {
            pause,
            max_cycles: None,
            started: 0,
        }
    }

    /// Stop after this many cycles
    pub fn with_max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    /// Wait for the next cycle; `false` once the cycle limit is reached
    pub async fn next_cycle(&mut self) -> bool {
        if self.max_cycles.is_some_and(|max| self.started >= max) {
            return false;
        }
        if self.started > 0 {
            sleep(self.pause).await;
        }
        self.started += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_slow_cycles_still_get_the_full_pause() {
        let mut schedule = Schedule::new(Duration::from_millis(100)).with_max_cycles(4);
        let origin = Instant::now();
        let mut starts = Vec::new();

        while schedule.next_cycle().await {
            starts.push(origin.elapsed().as_millis());
            sleep(Duration::from_millis(250)).await;
        }

        assert_eq!(starts, vec![0, 350, 700, 1050]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_cycle_starts_immediately() {
        let mut schedule = Schedule::new(Duration::from_secs(60)).with_max_cycles(1);
        let origin = Instant::now();

        assert!(schedule.next_cycle().await);
        assert_eq!(origin.elapsed(), Duration::ZERO);
        assert!(!schedule.next_cycle().await);
    }
}
