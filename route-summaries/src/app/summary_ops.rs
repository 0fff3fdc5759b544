use super::RunStatus;
use crate::config::SummaryConfiguration;
use crate::event_log::EventLog;
use crate::ingest::{ride_check_ops, topology_ops, CsvWorkbookSource, WorkbookSource};
use crate::model::RidershipCatalog;
use crate::report::{
    detail_report, log_table, max_load, on_time_detail, route_totals, totals_by_stop,
    CsvReportSink, ReportSink,
};

/// opens both input workbooks, runs the summary pipeline, and persists the
/// output tables. a workbook that fails to open aborts the run but still
/// attempts a log-only output so the failure reason reaches the reader.
pub fn generate_summary(
    ride_checks_file: &str,
    route_info_file: &str,
    output_directory: &str,
    config: &SummaryConfiguration,
    log: &mut EventLog,
) -> RunStatus {
    let mut sink = CsvReportSink::new(output_directory);

    log.general("Loading ride checks workbook");
    let ride_checks = match CsvWorkbookSource::open(ride_checks_file) {
        Ok(source) => source,
        Err(e) => {
            log.error(format!("Could not open the ride checks workbook: {e}"));
            return abort_with_log(&mut sink, log);
        }
    };

    log.general("Loading route info workbook");
    let route_info = match CsvWorkbookSource::open(route_info_file) {
        Ok(source) => source,
        Err(e) => {
            log.error(format!("Could not open the route info workbook: {e}"));
            return abort_with_log(&mut sink, log);
        }
    };

    run_summary(&route_info, &ride_checks, &mut sink, config, log);

    log_table::build_log_table(log, &mut sink);
    match sink.save() {
        Ok(()) => RunStatus::Ok,
        Err(e) => {
            log.failure(e.to_string());
            RunStatus::WriteFailure
        }
    }
}

/// the summary pipeline against already-open sources: topology scan, ride
/// check scan, load propagation, then the five report projections.
pub fn run_summary(
    route_info: &dyn WorkbookSource,
    ride_checks: &dyn WorkbookSource,
    sink: &mut dyn ReportSink,
    config: &SummaryConfiguration,
    log: &mut EventLog,
) {
    let mut catalog = RidershipCatalog::new();
    topology_ops::scan_route_info(route_info, &mut catalog, config.timed_stop_policy, log);
    ride_check_ops::scan_ride_checks(ride_checks, &mut catalog, config.timed_stop_policy, log);

    log.general("Building load data");
    catalog.build_loads(config.negative_load_policy, log);

    log.general("Generating route totals");
    route_totals::build_route_totals(&catalog, sink);
    log.general("Generating max load table");
    max_load::build_max_load(&catalog, sink);
    log.general("Generating route totals per stop");
    totals_by_stop::build_totals_by_stop(&catalog, sink);
    log.general("Generating on-time detail");
    on_time_detail::build_on_time_detail(&catalog, sink);
    log.general("Generating detail report");
    detail_report::build_detail_report(&catalog, sink);
    log.general("Generation complete");
}

/// writes a log-only output after a failed run. opening the sink can itself
/// fail, which escalates the status from major error to write failure.
fn abort_with_log(sink: &mut CsvReportSink, log: &mut EventLog) -> RunStatus {
    log_table::build_log_table(log, sink);
    match sink.save() {
        Ok(()) => RunStatus::MajorError,
        Err(_) => RunStatus::WriteFailure,
    }
}
