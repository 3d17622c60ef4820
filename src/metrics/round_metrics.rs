use std::time::{Duration, Instant};

use crate::game::CollisionType;

/// Per-session numbers shown in the header. Nothing here outlives the process.
pub struct RoundMetrics {
    pub round_start: Instant,
    pub elapsed_time: Duration,
    pub rounds_played: u32,
    pub last_round: Option<RoundSummary>,
}

/// How the previous round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub collision: CollisionType,
    pub length: usize,
    pub ticks: u32,
}

impl RoundMetrics {
    pub fn new() -> Self {
        Self {
            round_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            rounds_played: 0,
            last_round: None,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.round_start.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.round_start = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, summary: RoundSummary) {
        self.rounds_played += 1;
        self.last_round = Some(summary);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for RoundMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = RoundMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_round_counting() {
        let mut metrics = RoundMetrics::new();
        let summary = RoundSummary {
            collision: CollisionType::Wall,
            length: 4,
            ticks: 30,
        };

        metrics.on_round_over(summary);
        metrics.on_round_over(RoundSummary {
            collision: CollisionType::SelfCollision,
            ..summary
        });

        assert_eq!(metrics.rounds_played, 2);
        assert_eq!(
            metrics.last_round.map(|r| r.collision),
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_round_start_resets_time() {
        let mut metrics = RoundMetrics::new();
        metrics.round_start -= Duration::from_secs(5);
        metrics.update();
        assert!(metrics.elapsed_time >= Duration::from_secs(5));

        metrics.on_round_start();
        metrics.update();
        assert!(metrics.elapsed_time < Duration::from_secs(5));
    }
}
