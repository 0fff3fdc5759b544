use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// what to do when the running passenger load drops below zero during load
/// propagation. either way a warning is logged naming the route, direction,
/// departure and stop; reporting reads the stored loads, so the reports
/// always agree with whichever policy ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NegativeLoadPolicy {
    /// record the negative value as computed
    #[default]
    Record,
    /// floor the running load at zero before recording
    ClampToZero,
}

impl NegativeLoadPolicy {
    pub fn apply(&self, load: i64) -> i64 {
        match self {
            NegativeLoadPolicy::Record => load,
            NegativeLoadPolicy::ClampToZero => load.max(0),
        }
    }
}
