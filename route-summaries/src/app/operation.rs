use clap::Subcommand;

use super::{summary_ops, template_ops, RunStatus, SummaryError};
use crate::config::SummaryConfiguration;
use crate::event_log::EventLog;

#[derive(Debug, Clone, Subcommand)]
pub enum SummaryOperation {
    /// generate the summary report tables from ride-check and route-info workbooks
    Generate {
        /// path to the ride checks workbook
        #[arg(long)]
        ride_checks_file: String,
        /// path to the route info workbook
        #[arg(long)]
        route_info_file: String,
        /// directory where the report tables are written
        #[arg(long)]
        output_directory: String,
        /// path to file with summary run parameters
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// write an empty ride-checks workbook with the expected column headers
    RideChecksTemplate {
        #[arg(long)]
        output_file: String,
    },
    /// write a skeleton route-info workbook with one example route block
    RouteInfoTemplate {
        #[arg(long)]
        output_file: String,
    },
}

impl SummaryOperation {
    pub fn run(&self) -> Result<RunStatus, SummaryError> {
        match self {
            SummaryOperation::Generate {
                ride_checks_file,
                route_info_file,
                output_directory,
                configuration_file,
            } => {
                let config = match configuration_file {
                    None => Ok(SummaryConfiguration::default()),
                    Some(f) => {
                        log::info!("reading summary configuration from {f}");
                        SummaryConfiguration::try_from(f)
                    }
                }?;
                let mut log = EventLog::new();
                let status = summary_ops::generate_summary(
                    ride_checks_file,
                    route_info_file,
                    output_directory,
                    &config,
                    &mut log,
                );
                Ok(status)
            }
            SummaryOperation::RideChecksTemplate { output_file } => {
                template_ops::write_ride_checks_template(output_file)?;
                Ok(RunStatus::Ok)
            }
            SummaryOperation::RouteInfoTemplate { output_file } => {
                template_ops::write_route_info_template(output_file)?;
                Ok(RunStatus::Ok)
            }
        }
    }
}
