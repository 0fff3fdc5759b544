use super::SummaryOperation;
use clap::Parser;

/// command line tool for aggregating bus ride-check observations into
/// ridership summary report tables
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SummaryApp {
    #[command(subcommand)]
    pub op: SummaryOperation,
}
