use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::event_log::EventLog;
use crate::ingest::{CellValue, WorkbookSource};
use crate::model::Direction;

/// 1-based column positions of the fourteen ride-check fields. the last two
/// (LOADS, TIME CHECK) are collected in the field but not consumed here.
pub mod columns {
    pub const SEQUENCE: usize = 1;
    pub const DATE: usize = 2;
    pub const ROUTE: usize = 3;
    pub const DIRECTION: usize = 4;
    pub const RUN: usize = 5;
    pub const START_TIME: usize = 6;
    pub const ONBOARD: usize = 7;
    pub const STOP_NUMBER: usize = 8;
    pub const ARRIVAL_TIME: usize = 9;
    pub const SCHEDULE_TIME: usize = 10;
    pub const OFFS: usize = 11;
    pub const ONS: usize = 12;
    pub const LOADS: usize = 13;
    pub const TIME_CHECK: usize = 14;
    pub const COUNT: usize = 14;
}

/// one validated, normalized ride-check observation row. the row's times are
/// already combined with its date into full datetimes.
#[derive(Debug, Clone, PartialEq)]
pub struct RideCheckRow {
    pub sequence: i64,
    pub route: u32,
    pub direction: Direction,
    pub run: Option<String>,
    pub stop_number: u32,
    pub departure: NaiveDateTime,
    pub arrival: Option<NaiveDateTime>,
    pub schedule: Option<NaiveDateTime>,
    pub offs: Option<i64>,
    pub ons: Option<i64>,
    pub onboard: Option<i64>,
}

fn reject(log: &mut EventLog, row: usize, field: &str, value: &CellValue, expected: &str) {
    log.error(format!(
        "Row {}: {} '{}' is not {}. Skipping row.",
        row, field, value, expected
    ));
}

/// an optional time cell: absent stays absent, a present cell must be a time.
fn optional_time(
    log: &mut EventLog,
    row: usize,
    field: &str,
    value: CellValue,
) -> Result<Option<NaiveTime>, ()> {
    match value.normalized() {
        CellValue::Empty => Ok(None),
        other => match other.as_time() {
            Some(t) => Ok(Some(t)),
            None => {
                reject(log, row, field, &other, "a time");
                Err(())
            }
        },
    }
}

/// an optional count cell: absent stays absent, a present cell must be an
/// integer. negative values pass through here; the stop coerces them to zero.
fn optional_integer(
    log: &mut EventLog,
    row: usize,
    field: &str,
    value: CellValue,
) -> Result<Option<i64>, ()> {
    match value.normalized() {
        CellValue::Empty => Ok(None),
        other => match other.as_integer() {
            Some(i) => Ok(Some(i)),
            None => {
                reject(log, row, field, &other, "an integer");
                Err(())
            }
        },
    }
}

fn combine(date: NaiveDate, time: Option<NaiveTime>) -> Option<NaiveDateTime> {
    time.map(|t| date.and_time(t))
}

impl RideCheckRow {
    /// validates one raw observation row. a `None` return means the row was
    /// rejected and logged; the caller moves on to the next row. `prev_sequence`
    /// carries the advisory sequence check across rows, including rejected ones.
    pub fn validate(
        source: &dyn WorkbookSource,
        row: usize,
        prev_sequence: &mut i64,
        log: &mut EventLog,
    ) -> Option<RideCheckRow> {
        let sequence_cell = source.cell(row, columns::SEQUENCE).normalized();
        let Some(sequence) = sequence_cell.as_integer() else {
            reject(log, row, "Sequence", &sequence_cell, "an integer");
            return None;
        };
        // advisory only: gaps and reordering are reported, never rejected
        if sequence - 1 != *prev_sequence {
            log.warning(format!("Out-of-order sequence number: Row {}", row));
        }
        *prev_sequence = sequence;

        let date_cell = source.cell(row, columns::DATE).normalized();
        let Some(date) = date_cell.as_date() else {
            reject(log, row, "Date", &date_cell, "a date");
            return None;
        };

        let route_cell = source.cell(row, columns::ROUTE).normalized();
        let Some(route) = route_cell.as_integer().and_then(|v| u32::try_from(v).ok()) else {
            reject(log, row, "Route", &route_cell, "a route number");
            return None;
        };

        let direction_cell = source.cell(row, columns::DIRECTION).normalized();
        let direction = direction_cell
            .as_text()
            .map(Direction::from_code)
            .unwrap_or(Direction::Unknown);
        if direction == Direction::Unknown {
            reject(log, row, "Direction", &direction_cell, "a valid direction");
            return None;
        }

        let start_cell = source.cell(row, columns::START_TIME).normalized();
        let Some(start_time) = start_cell.as_time() else {
            reject(log, row, "Start time", &start_cell, "a time");
            return None;
        };

        let stop_cell = source.cell(row, columns::STOP_NUMBER).normalized();
        let Some(stop_number) = stop_cell.as_integer().and_then(|v| u32::try_from(v).ok()) else {
            reject(log, row, "Stop number", &stop_cell, "a stop number");
            return None;
        };

        let run = match source.cell(row, columns::RUN).normalized() {
            CellValue::Empty => None,
            other => Some(other.to_string()),
        };

        let onboard =
            optional_integer(log, row, "Onboard", source.cell(row, columns::ONBOARD)).ok()?;
        let arrival_time =
            optional_time(log, row, "Arrival time", source.cell(row, columns::ARRIVAL_TIME))
                .ok()?;
        let schedule_time = optional_time(
            log,
            row,
            "Scheduled time",
            source.cell(row, columns::SCHEDULE_TIME),
        )
        .ok()?;
        let offs = optional_integer(log, row, "Offs value", source.cell(row, columns::OFFS)).ok()?;
        let ons = optional_integer(log, row, "Ons value", source.cell(row, columns::ONS)).ok()?;

        Some(RideCheckRow {
            sequence,
            route,
            direction,
            run,
            stop_number,
            departure: date.and_time(start_time),
            arrival: combine(date, arrival_time),
            schedule: combine(date, schedule_time),
            offs,
            ons,
            onboard,
        })
    }
}
