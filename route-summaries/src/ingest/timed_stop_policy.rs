use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how schedule-checkpoint ("timed") stops are detected. the two derivations
/// are independent and can disagree on real data, so the choice is explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TimedStopPolicy {
    /// a stop is timed when the topology source highlights its street cell
    #[default]
    TopologyFlag,
    /// a stop is timed when any observation supplies an arrival time for it
    ArrivalTime,
}
