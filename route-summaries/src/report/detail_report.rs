use crate::ingest::CellValue;
use crate::model::{RidershipCatalog, Route};
use crate::report::{ReportSink, ReportTable};

/// the full data dump: one block per route, one column triple (On, Off, OB)
/// per departure, one row per stop, with an onboard seed row and a trailing
/// totals row. routes with no observed departures are skipped.
pub fn build_detail_report(catalog: &RidershipCatalog, sink: &mut dyn ReportSink) {
    let mut current_row = 1;
    for route in catalog.routes() {
        current_row = build_route_block(route, sink, current_row);
    }
}

fn build_route_block(route: &Route, sink: &mut dyn ReportSink, current_row: usize) -> usize {
    const TABLE: ReportTable = ReportTable::DetailReport;

    if route.departures().is_empty() {
        return current_row;
    }

    sink.set_text(TABLE, current_row, 3, route.city_name());
    sink.set_text(
        TABLE,
        current_row + 1,
        3,
        &format!("Route #{}", route.route_number()),
    );
    sink.set_text(TABLE, current_row + 1, 4, &route.descriptor_direction());
    sink.set_text(TABLE, current_row + 3, 3, "Stop Location");
    sink.set_text(TABLE, current_row + 4, 4, "Onboard");

    // ons, offs, load running totals per departure column triple. the load
    // total starts from the onboard carry for its departure.
    let mut column_totals: Vec<[i64; 3]> = Vec::with_capacity(route.departures().len());

    for (i, departure) in route.departures().iter().enumerate() {
        let col = 5 + 3 * i;
        sink.set_cell(TABLE, current_row + 2, col, CellValue::Date(departure.date()));
        sink.set_cell(
            TABLE,
            current_row + 2,
            col + 1,
            CellValue::Time(departure.time()),
        );
        sink.set_text(TABLE, current_row + 3, col, "On");
        sink.set_text(TABLE, current_row + 3, col + 1, "Off");
        sink.set_text(TABLE, current_row + 3, col + 2, "OB");

        let onboard = route.onboard_value(departure).unwrap_or(0);
        sink.set_integer(TABLE, current_row + 4, col + 2, onboard);
        column_totals.push([0, 0, onboard]);
    }

    let mut stop_row = current_row + 5;
    for stop in route.stops() {
        sink.set_integer(TABLE, stop_row, 2, i64::from(stop.stop_number()));
        if let Some(street) = stop.street_trunc(10) {
            sink.set_text(TABLE, stop_row, 3, &street);
        }
        if let Some(cross) = stop.cross_street_trunc(10) {
            sink.set_text(TABLE, stop_row, 4, &cross);
        }

        for (i, departure) in route.departures().iter().enumerate() {
            let col = 5 + 3 * i;
            let (offs, ons, load) = stop.offs_ons_load(departure);
            sink.set_integer(TABLE, stop_row, col, i64::from(ons));
            sink.set_integer(TABLE, stop_row, col + 1, i64::from(offs));
            sink.set_integer(TABLE, stop_row, col + 2, load);

            column_totals[i][0] += i64::from(ons);
            column_totals[i][1] += i64::from(offs);
            column_totals[i][2] += load;
        }
        stop_row += 1;
    }

    sink.set_text(TABLE, stop_row, 4, "Totals");
    for (i, totals) in column_totals.iter().enumerate() {
        let col = 5 + 3 * i;
        sink.set_integer(TABLE, stop_row, col, totals[0]);
        sink.set_integer(TABLE, stop_row, col + 1, totals[1]);
        sink.set_integer(TABLE, stop_row, col + 2, totals[2]);
    }

    stop_row + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::EventLog;
    use crate::model::{Direction, NegativeLoadPolicy};
    use crate::report::CsvReportSink;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn catalog() -> RidershipCatalog {
        let mut log = EventLog::new();
        let mut catalog = RidershipCatalog::new();
        catalog.add_stop(
            5,
            Direction::Northbound,
            100,
            Some(String::from("Main St")),
            Some(String::from("1st Ave")),
            false,
            &mut log,
        );
        catalog.add_stop(5, Direction::Northbound, 200, None, None, false, &mut log);
        catalog.set_route_metadata(5, Direction::Northbound, "University");
        catalog.set_city_name("Springfield");
        catalog.add_observation(
            5,
            Direction::Northbound,
            100,
            dt(1, 8),
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
            dt(1, 8),
            None,
            None,
            None,
            Some(5),
            Some(0),
            None,
            &mut log,
        );
        catalog.add_observation(
            5,
            Direction::Northbound,
            100,
            dt(1, 9),
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
    fn route_block_layout_and_totals() {
        let catalog = catalog();
        let mut sink = CsvReportSink::new("unused");
        build_detail_report(&catalog, &mut sink);

        const TABLE: ReportTable = ReportTable::DetailReport;
        assert_eq!(
            sink.cell(TABLE, 1, 3),
            Some(&CellValue::Text(String::from("Springfield")))
        );
        assert_eq!(
            sink.cell(TABLE, 2, 3),
            Some(&CellValue::Text(String::from("Route #5")))
        );
        assert_eq!(
            sink.cell(TABLE, 2, 4),
            Some(&CellValue::Text(String::from("University NB")))
        );
        // 08:00 triple at columns 5..7, 09:00 triple at 8..10
        assert_eq!(
            sink.cell(TABLE, 3, 5),
            Some(&CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
        );
        assert_eq!(sink.cell(TABLE, 4, 5), Some(&CellValue::Text(String::from("On"))));
        assert_eq!(sink.cell(TABLE, 4, 10), Some(&CellValue::Text(String::from("OB"))));
        // onboard seed row: 2 for 08:00, 0 for 09:00
        assert_eq!(sink.cell(TABLE, 5, 4), Some(&CellValue::Text(String::from("Onboard"))));
        assert_eq!(sink.cell(TABLE, 5, 7), Some(&CellValue::Integer(2)));
        assert_eq!(sink.cell(TABLE, 5, 10), Some(&CellValue::Integer(0)));
        // stop 100 row: ons 3, offs 0, load 5 for the 08:00 departure
        assert_eq!(sink.cell(TABLE, 6, 2), Some(&CellValue::Integer(100)));
        assert_eq!(sink.cell(TABLE, 6, 5), Some(&CellValue::Integer(3)));
        assert_eq!(sink.cell(TABLE, 6, 6), Some(&CellValue::Integer(0)));
        assert_eq!(sink.cell(TABLE, 6, 7), Some(&CellValue::Integer(5)));
        // totals row: 08:00 ons 3, offs 5, loads 5 + 0 + onboard 2
        assert_eq!(sink.cell(TABLE, 8, 4), Some(&CellValue::Text(String::from("Totals"))));
        assert_eq!(sink.cell(TABLE, 8, 5), Some(&CellValue::Integer(3)));
        assert_eq!(sink.cell(TABLE, 8, 6), Some(&CellValue::Integer(5)));
        assert_eq!(sink.cell(TABLE, 8, 7), Some(&CellValue::Integer(7)));
        // 09:00 ons 1, offs 0, loads 1 (stop 100) + 1 (carried to stop 200)
        assert_eq!(sink.cell(TABLE, 8, 8), Some(&CellValue::Integer(1)));
        assert_eq!(sink.cell(TABLE, 8, 10), Some(&CellValue::Integer(2)));
    }

    #[test]
    fn routes_without_departures_are_skipped() {
        let mut log = EventLog::new();
        let mut catalog = RidershipCatalog::new();
        catalog.add_stop(7, Direction::Eastbound, 100, None, None, false, &mut log);

        let mut sink = CsvReportSink::new("unused");
        build_detail_report(&catalog, &mut sink);
        assert_eq!(sink.cell(ReportTable::DetailReport, 1, 3), None);
    }
}
