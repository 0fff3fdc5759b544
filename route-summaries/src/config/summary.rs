use serde::{Deserialize, Serialize};

use crate::app::SummaryError;
use crate::ingest::TimedStopPolicy;
use crate::model::NegativeLoadPolicy;

/// defines behaviors for one summary generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryConfiguration {
    #[serde(default)]
    pub negative_load_policy: NegativeLoadPolicy,
    #[serde(default)]
    pub timed_stop_policy: TimedStopPolicy,
}

impl TryFrom<&String> for SummaryConfiguration {
    type Error = SummaryError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                SummaryError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                SummaryError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                SummaryError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                SummaryError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(SummaryError::ConfigurationError(format!(
                "unknown configuration file format for {f}, expected .toml or .json"
            )))
        }
    }
}
