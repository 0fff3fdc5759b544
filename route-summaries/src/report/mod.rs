pub mod detail_report;
pub mod log_table;
pub mod max_load;
pub mod on_time_detail;
mod report_sink;
pub mod route_totals;
pub mod totals_by_stop;

pub use report_sink::{CellStyle, CsvReportSink, ReportError, ReportSink, ReportTable};
