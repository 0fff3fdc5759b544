use crate::ingest::CellValue;
use crate::model::{RidershipCatalog, Route};
use crate::report::{ReportSink, ReportTable};

/// sentinel for a timed stop with no usable arrival/schedule pair.
const NOT_AVAILABLE: &str = "NA";

/// schedule adherence at each timed stop, one row per departure. routes with
/// no timed stops are skipped entirely.
pub fn build_on_time_detail(catalog: &RidershipCatalog, sink: &mut dyn ReportSink) {
    const TABLE: ReportTable = ReportTable::OnTimeDetail;

    sink.set_text(TABLE, 1, 1, "Route #");
    sink.set_text(TABLE, 1, 3, "Route Name");
    sink.set_text(TABLE, 1, 4, "Date");
    sink.set_text(TABLE, 1, 5, "Time");
    sink.set_text(TABLE, 1, 6, "Run");

    let mut current_row = 2;
    for route in catalog.routes() {
        current_row = build_route_rows(route, sink, current_row);
    }
}

fn build_route_rows(route: &Route, sink: &mut dyn ReportSink, mut current_row: usize) -> usize {
    const TABLE: ReportTable = ReportTable::OnTimeDetail;

    if route.timed_stops().is_empty() {
        return current_row;
    }

    // two header rows: street over cross street, one column per timed stop
    for (i, stop_number) in route.timed_stops().iter().enumerate() {
        let Some(stop) = route.stop(*stop_number) else {
            continue;
        };
        if let Some(street) = stop.street_trunc(7) {
            sink.set_text(TABLE, current_row, 7 + i, &street);
        }
        if let Some(cross) = stop.cross_street_trunc(7) {
            sink.set_text(TABLE, current_row + 1, 7 + i, &cross);
        }
    }
    current_row += 2;

    let first_timed = route.stop(route.timed_stops()[0]);
    for departure in route.departures() {
        sink.set_integer(TABLE, current_row, 1, i64::from(route.route_number()));
        sink.set_text(TABLE, current_row, 3, &route.descriptor_direction_trunc(10));
        sink.set_cell(TABLE, current_row, 4, CellValue::Date(departure.date()));
        sink.set_cell(TABLE, current_row, 5, CellValue::Time(departure.time()));
        if let Some(run) = first_timed.and_then(|s| s.run(departure)) {
            sink.set_text(TABLE, current_row, 6, run);
        }

        for (i, stop_number) in route.timed_stops().iter().enumerate() {
            let minutes_late = route
                .stop(*stop_number)
                .and_then(|s| s.minutes_late(departure));
            match minutes_late {
                Some(minutes) => sink.set_integer(TABLE, current_row, 7 + i, minutes),
                None => sink.set_text(TABLE, current_row, 7 + i, NOT_AVAILABLE),
            }
        }
        current_row += 1;
    }

    // blank separator row between routes
    current_row + 1
}
