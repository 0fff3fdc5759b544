use crate::event_log::EventLog;
use crate::ingest::{CellValue, TimedStopPolicy, WorkbookSource};
use crate::model::{Direction, RidershipCatalog};

/// marker text that opens a new route block in the topology source.
const ROUTE_MARKER: &str = "ROUTE";

/// 1-based column positions in the topology ("route info") workbook. the
/// route number and direction sit in the marker column pair: the number on
/// the marker row, the direction code on the row beneath it.
mod columns {
    pub const CITY_NAME: usize = 3;
    pub const STREET: usize = 3;
    pub const CROSS_STREET: usize = 4;
    pub const ROUTE_NAME: usize = 4;
    pub const STOP_NUMBER: usize = 5;
    pub const MARKER: usize = 8;
    pub const ROUTE_NUMBER: usize = 10;
    pub const DIRECTION: usize = 10;
}

fn text_of(value: CellValue) -> Option<String> {
    match value.normalized() {
        CellValue::Empty => None,
        other => Some(other.to_string()),
    }
}

/// scans the topology workbook: each "ROUTE" marker row opens a route block
/// whose following rows with an integer stop-number column append stops to
/// that route, until the next marker. the city name is pulled from above the
/// first marker and broadcast to every route at the end of the scan.
pub fn scan_route_info(
    source: &dyn WorkbookSource,
    catalog: &mut RidershipCatalog,
    policy: TimedStopPolicy,
    log: &mut EventLog,
) {
    log.general("Parsing route info workbook");

    let mut current: Option<(u32, Direction)> = None;
    let mut city: Option<String> = None;

    for row in 1..=source.row_count() {
        if source.cell(row, columns::MARKER).as_text() == Some(ROUTE_MARKER) {
            let number_cell = source.cell(row, columns::ROUTE_NUMBER);
            let number = number_cell.as_integer().and_then(|v| u32::try_from(v).ok());
            let Some(number) = number else {
                log.error(format!(
                    "Row {}: route header '{}' is not a route number. Skipping block.",
                    row, number_cell
                ));
                current = None;
                continue;
            };

            let direction = source
                .cell(row + 1, columns::DIRECTION)
                .as_text()
                .map(Direction::from_code)
                .unwrap_or(Direction::Unknown);
            current = Some((number, direction));

            if let Some(name) = text_of(source.cell(row, columns::ROUTE_NAME)) {
                catalog.set_route_metadata(number, direction, &name);
            }

            if city.is_none() && row > 2 {
                city = text_of(source.cell(row - 2, columns::CITY_NAME));
            }
        }

        let Some((number, direction)) = current else {
            continue;
        };

        let stop_cell = source.cell(row, columns::STOP_NUMBER);
        if let Some(stop_number) = stop_cell.as_integer().and_then(|v| u32::try_from(v).ok()) {
            let street = text_of(source.cell(row, columns::STREET));
            let cross_street = text_of(source.cell(row, columns::CROSS_STREET));
            let is_timed = policy == TimedStopPolicy::TopologyFlag
                && source.is_highlighted(row, columns::STREET);
            catalog.add_stop(
                number,
                direction,
                stop_number,
                street,
                cross_street,
                is_timed,
                log,
            );
        }
    }

    if let Some(city) = city {
        catalog.set_city_name(&city);
    }
}
