pub mod round_metrics;

pub use round_metrics::{RoundMetrics, RoundSummary};
