use crate::model::RidershipCatalog;
use crate::report::{ReportSink, ReportTable};

/// one row per route: total ons, total offs, and their sum.
pub fn build_route_totals(catalog: &RidershipCatalog, sink: &mut dyn ReportSink) {
    const TABLE: ReportTable = ReportTable::RouteTotals;

    sink.set_text(TABLE, 1, 1, "Route #");
    sink.set_text(TABLE, 1, 3, "Route");
    sink.set_text(TABLE, 1, 4, "Ons");
    sink.set_text(TABLE, 1, 5, "Offs");
    sink.set_text(TABLE, 1, 6, "Total");

    let mut current_row = 2;
    for route in catalog.routes() {
        let (offs, ons, total) = route.total_offs_ons();
        sink.set_integer(TABLE, current_row, 1, i64::from(route.route_number()));
        sink.set_text(TABLE, current_row, 3, &route.descriptor_direction_trunc(29));
        sink.set_integer(TABLE, current_row, 4, ons as i64);
        sink.set_integer(TABLE, current_row, 5, offs as i64);
        sink.set_integer(TABLE, current_row, 6, total as i64);
        current_row += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::EventLog;
    use crate::ingest::CellValue;
    use crate::model::{Direction, NegativeLoadPolicy};
    use crate::report::CsvReportSink;
    use chrono::NaiveDate;

    #[test]
    fn totals_row_matches_worked_example() {
        let mut log = EventLog::new();
        let mut catalog = RidershipCatalog::new();
        catalog.add_stop(5, Direction::Northbound, 100, None, None, false, &mut log);
        catalog.add_stop(5, Direction::Northbound, 200, None, None, false, &mut log);
        catalog.set_route_metadata(5, Direction::Northbound, "University");
        let dep = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        catalog.add_observation(
            5,
            Direction::Northbound,
            100,
            dep,
            None,
            None,
            None,
            Some(0),
            Some(3),
            Some(2),
            &mut log,
        );
        catalog.add_observation(
            5,
            Direction::Northbound,
            200,
            dep,
            None,
            None,
            None,
            Some(5),
            Some(0),
            None,
            &mut log,
        );
        catalog.build_loads(NegativeLoadPolicy::Record, &mut log);

        let mut sink = CsvReportSink::new("unused");
        build_route_totals(&catalog, &mut sink);

        assert_eq!(
            sink.cell(ReportTable::RouteTotals, 2, 1),
            Some(&CellValue::Integer(5))
        );
        assert_eq!(
            sink.cell(ReportTable::RouteTotals, 2, 3),
            Some(&CellValue::Text(String::from("University NB")))
        );
        assert_eq!(
            sink.cell(ReportTable::RouteTotals, 2, 4),
            Some(&CellValue::Integer(3))
        );
        assert_eq!(
            sink.cell(ReportTable::RouteTotals, 2, 5),
            Some(&CellValue::Integer(5))
        );
        assert_eq!(
            sink.cell(ReportTable::RouteTotals, 2, 6),
            Some(&CellValue::Integer(8))
        );
    }

    #[test]
    fn routes_emit_in_ascending_key_order() {
        let mut log = EventLog::new();
        let mut catalog = RidershipCatalog::new();
        catalog.add_stop(12, Direction::Inbound, 1, None, None, false, &mut log);
        catalog.add_stop(5, Direction::Southbound, 1, None, None, false, &mut log);

        let mut sink = CsvReportSink::new("unused");
        build_route_totals(&catalog, &mut sink);

        assert_eq!(
            sink.cell(ReportTable::RouteTotals, 2, 1),
            Some(&CellValue::Integer(5))
        );
        assert_eq!(
            sink.cell(ReportTable::RouteTotals, 3, 1),
            Some(&CellValue::Integer(12))
        );
    }
}
