use crate::model::{RidershipCatalog, Route};
use crate::report::{CellStyle, ReportSink, ReportTable};

/// per-route blocks of per-stop totals: ons, offs, their sum, and the summed
/// load across every departure, with an onboard carry row on top and running
/// grand totals at the bottom. timed stops carry a highlight hint.
pub fn build_totals_by_stop(catalog: &RidershipCatalog, sink: &mut dyn ReportSink) {
    let mut current_row = 0;
    for route in catalog.routes() {
        current_row += 1;
        build_header(sink, current_row);
        current_row = build_route_block(route, sink, current_row + 1);
    }
}

fn build_header(sink: &mut dyn ReportSink, row: usize) {
    const TABLE: ReportTable = ReportTable::TotalsByStop;
    sink.set_text(TABLE, row, 1, "Route #");
    sink.set_text(TABLE, row, 3, "Route");
    sink.set_text(TABLE, row, 4, "Stop");
    sink.set_text(TABLE, row, 6, "Street");
    sink.set_text(TABLE, row, 7, "Cross Street");
    sink.set_text(TABLE, row, 8, "Ons");
    sink.set_text(TABLE, row, 9, "Offs");
    sink.set_text(TABLE, row, 10, "Total");
    sink.set_text(TABLE, row, 11, "Load");
}

fn build_route_block(route: &Route, sink: &mut dyn ReportSink, mut current_row: usize) -> usize {
    const TABLE: ReportTable = ReportTable::TotalsByStop;

    let onboard_total = route.onboard_total();
    sink.set_text(TABLE, current_row, 7, "Onboard");
    sink.set_integer(TABLE, current_row, 11, onboard_total);
    current_row += 1;

    // the load column's grand total starts from the carried-over passengers
    let mut running_totals: [i64; 4] = [0, 0, 0, onboard_total];

    for stop in route.stops() {
        if route.timed_stops().contains(&stop.stop_number()) {
            for col in 4..=11 {
                sink.set_style(TABLE, current_row, col, CellStyle::Highlight);
            }
        }

        let (offs, ons) = stop.total_offs_ons();
        let total = offs + ons;
        let load = stop.total_load();

        sink.set_integer(TABLE, current_row, 1, i64::from(route.route_number()));
        sink.set_text(TABLE, current_row, 3, &stop.descriptor_direction_trunc(19));
        sink.set_integer(TABLE, current_row, 4, i64::from(stop.stop_number()));
        if let Some(street) = stop.street_trunc(14) {
            sink.set_text(TABLE, current_row, 6, &street);
        }
        if let Some(cross) = stop.cross_street_trunc(14) {
            sink.set_text(TABLE, current_row, 7, &cross);
        }
        sink.set_integer(TABLE, current_row, 8, ons as i64);
        sink.set_integer(TABLE, current_row, 9, offs as i64);
        sink.set_integer(TABLE, current_row, 10, total as i64);
        sink.set_integer(TABLE, current_row, 11, load);

        running_totals[0] += ons as i64;
        running_totals[1] += offs as i64;
        running_totals[2] += total as i64;
        running_totals[3] += load;
        current_row += 1;
    }

    sink.set_text(TABLE, current_row, 7, "Totals");
    sink.set_integer(TABLE, current_row, 8, running_totals[0]);
    sink.set_integer(TABLE, current_row, 9, running_totals[1]);
    sink.set_integer(TABLE, current_row, 10, running_totals[2]);
    sink.set_integer(TABLE, current_row, 11, running_totals[3]);

    current_row + 1
}
