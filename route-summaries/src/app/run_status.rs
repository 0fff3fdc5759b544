use std::fmt::{self, Display};

/// terminal status of one summary generation run. row-level anomalies land in
/// the event log and never escalate past `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// reports were generated, possibly with logged anomalies
    Ok,
    /// an input workbook could not be opened; a log-only output was attempted
    MajorError,
    /// the output could not be persisted
    WriteFailure,
}

impl RunStatus {
    /// process exit code for this status.
    pub fn code(&self) -> i32 {
        match self {
            RunStatus::Ok => 0,
            RunStatus::MajorError => 1,
            RunStatus::WriteFailure => 2,
        }
    }
}

impl Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunStatus::Ok => "ok",
            RunStatus::MajorError => "major error",
            RunStatus::WriteFailure => "write failure",
        };
        write!(f, "{}", label)
    }
}
