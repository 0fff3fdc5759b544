use itertools::Itertools;

use crate::ingest::CellValue;
use crate::model::{RidershipCatalog, Route};
use crate::report::{ReportSink, ReportTable};

/// one row per distinct scheduled start time per route. departures sharing a
/// clock time across different observation dates are one scheduled run
/// sampled on several days, so they merge into a single row: summed ons and
/// offs, and the maximum load seen at any stop on any of those days.
pub fn build_max_load(catalog: &RidershipCatalog, sink: &mut dyn ReportSink) {
    const TABLE: ReportTable = ReportTable::MaxLoad;

    sink.set_text(TABLE, 1, 1, "Route #");
    sink.set_text(TABLE, 1, 3, "Route");
    sink.set_text(TABLE, 1, 4, "Start Time");
    sink.set_text(TABLE, 1, 5, "Ons");
    sink.set_text(TABLE, 1, 6, "Offs");
    sink.set_text(TABLE, 1, 7, "Max Load");

    let mut current_row = 2;
    for route in catalog.routes() {
        current_row = build_route_rows(route, sink, current_row);
    }
}

fn build_route_rows(route: &Route, sink: &mut dyn ReportSink, mut current_row: usize) -> usize {
    const TABLE: ReportTable = ReportTable::MaxLoad;

    // departures are already sorted by (time-of-day, date), so grouping
    // consecutive equal times collects every date sharing a scheduled run
    for (time, group) in &route.departures().iter().chunk_by(|d| d.time()) {
        let mut ons: i64 = 0;
        let mut offs: i64 = 0;
        let mut max_load: i64 = 0;
        for departure in group {
            for stop in route.stops() {
                let (stop_offs, stop_ons, load) = stop.offs_ons_load(departure);
                offs += i64::from(stop_offs);
                ons += i64::from(stop_ons);
                if load > max_load {
                    max_load = load;
                }
            }
        }

        sink.set_integer(TABLE, current_row, 1, i64::from(route.route_number()));
        sink.set_text(TABLE, current_row, 3, &route.descriptor_direction_trunc(29));
        sink.set_cell(TABLE, current_row, 4, CellValue::Time(time));
        sink.set_integer(TABLE, current_row, 5, ons);
        sink.set_integer(TABLE, current_row, 6, offs);
        sink.set_integer(TABLE, current_row, 7, max_load);
        current_row += 1;
    }
    current_row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::EventLog;
    use crate::model::{Direction, NegativeLoadPolicy};
    use crate::report::CsvReportSink;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn dep(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn catalog_with_observations() -> RidershipCatalog {
        let mut log = EventLog::new();
        let mut catalog = RidershipCatalog::new();
        catalog.add_stop(5, Direction::Northbound, 100, None, None, false, &mut log);

        // same 08:00 run observed on two different dates
        catalog.add_observation(
            5,
            Direction::Northbound,
            100,
            dep(1, 8),
            None,
            None,
            None,
            Some(1),
            Some(4),
            None,
            &mut log,
        );
        catalog.add_observation(
            5,
            Direction::Northbound,
            100,
            dep(8, 8),
            None,
            None,
            None,
            Some(0),
            Some(2),
            None,
            &mut log,
        );
        // a different scheduled run
        catalog.add_observation(
            5,
            Direction::Northbound,
            100,
            dep(1, 9),
            None,
            None,
            None,
            Some(0),
            Some(1),
            None,
            &mut log,
        );
        catalog.build_loads(NegativeLoadPolicy::Record, &mut log);
        catalog
    }

    #[test]
    fn departures_sharing_a_clock_time_merge_into_one_row() {
        let catalog = catalog_with_observations();
        let mut sink = CsvReportSink::new("unused");
        build_max_load(&catalog, &mut sink);

        // 08:00 group: ons 4+2, offs 1+0, max load max(3, 2)
        assert_eq!(
            sink.cell(ReportTable::MaxLoad, 2, 4),
            Some(&CellValue::Time(NaiveTime::from_hms_opt(8, 0, 0).unwrap()))
        );
        assert_eq!(
            sink.cell(ReportTable::MaxLoad, 2, 5),
            Some(&CellValue::Integer(6))
        );
        assert_eq!(
            sink.cell(ReportTable::MaxLoad, 2, 6),
            Some(&CellValue::Integer(1))
        );
        assert_eq!(
            sink.cell(ReportTable::MaxLoad, 2, 7),
            Some(&CellValue::Integer(3))
        );

        // the 09:00 run is its own row
        assert_eq!(
            sink.cell(ReportTable::MaxLoad, 3, 4),
            Some(&CellValue::Time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()))
        );
        assert_eq!(sink.cell(ReportTable::MaxLoad, 4, 1), None);
    }

    #[test]
    fn negative_loads_never_become_the_max() {
        let mut log = EventLog::new();
        let mut catalog = RidershipCatalog::new();
        catalog.add_stop(5, Direction::Northbound, 100, None, None, false, &mut log);
        catalog.add_observation(
            5,
            Direction::Northbound,
            100,
            dep(1, 8),
            None,
            None,
            None,
            Some(3),
            Some(0),
            None,
            &mut log,
        );
        catalog.build_loads(NegativeLoadPolicy::Record, &mut log);

        let mut sink = CsvReportSink::new("unused");
        build_max_load(&catalog, &mut sink);

        assert_eq!(
            sink.cell(ReportTable::MaxLoad, 2, 7),
            Some(&CellValue::Integer(0))
        );
    }
}
