use crate::event_log::EventLog;
use crate::ingest::ride_check_row::columns;
use crate::ingest::{RideCheckRow, TimedStopPolicy, WorkbookSource};
use crate::model::RidershipCatalog;

/// scans the ride-checks workbook and folds every accepted observation into
/// the catalog. the scan starts below the header row and ends at the first
/// row with an empty sequence column. rejected rows never stop the scan.
pub fn scan_ride_checks(
    source: &dyn WorkbookSource,
    catalog: &mut RidershipCatalog,
    policy: TimedStopPolicy,
    log: &mut EventLog,
) {
    log.general("Parsing ride checks workbook");

    let mut prev_sequence: i64 = 0;
    let mut total_ons: i64 = 0;
    let mut total_offs: i64 = 0;

    let mut row = 2;
    while row <= source.row_count() && !source.cell(row, columns::SEQUENCE).is_empty() {
        if let Some(check) = RideCheckRow::validate(source, row, &mut prev_sequence, log) {
            let recorded = catalog.add_observation(
                check.route,
                check.direction,
                check.stop_number,
                check.departure,
                check.run.clone(),
                check.arrival,
                check.schedule,
                check.offs,
                check.ons,
                check.onboard,
                log,
            );
            if !recorded {
                log.error(format!("Row {}: observation was not recorded.", row));
            } else if policy == TimedStopPolicy::ArrivalTime && check.arrival.is_some() {
                catalog.mark_timed_stop(check.route, check.direction, check.stop_number);
            }

            if let Some(ons) = check.ons {
                total_ons += ons;
            }
            if let Some(offs) = check.offs {
                total_offs += offs;
            }
        }
        row += 1;
    }

    // every boarding should eventually alight somewhere in the data set
    if total_ons != total_offs {
        log.warning(format!(
            "Total ons and offs are not equal ({} ons, {} offs). Check for bad data",
            total_ons, total_offs
        ));
    }
}
