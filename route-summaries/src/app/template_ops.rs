use super::SummaryError;
use crate::report::ReportError;

/// column headers of a blank ride-checks workbook, in column order.
pub const RIDE_CHECK_HEADERS: [&str; 14] = [
    "SEQUENCE",
    "DATE",
    "ROUTE",
    "DIRECTION",
    "RUN",
    "START TIME",
    "ONBOARD",
    "STOP NUMBER",
    "ARRIVAL TIME",
    "SCHEDULE TIME",
    "OFFS",
    "ONS",
    "LOADS",
    "TIME CHECK",
];

fn sink_unavailable(path: &str, message: String) -> SummaryError {
    SummaryError::ReportError(ReportError::SinkUnavailable {
        path: path.to_string(),
        message,
    })
}

/// writes an empty ride-checks workbook holding only the header row.
pub fn write_ride_checks_template(path: &str) -> Result<(), SummaryError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| sink_unavailable(path, e.to_string()))?;
    writer
        .write_record(RIDE_CHECK_HEADERS)
        .map_err(|e| sink_unavailable(path, e.to_string()))?;
    writer
        .flush()
        .map_err(|e| sink_unavailable(path, e.to_string()))?;
    Ok(())
}

/// writes a skeleton route-info workbook: city name, one example route block
/// with a direction row and two example stops in the expected columns.
pub fn write_route_info_template(path: &str) -> Result<(), SummaryError> {
    let rows: [[&str; 10]; 6] = [
        ["", "", "CITY NAME", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", "", "", ""],
        ["", "", "", "ROUTE NAME", "", "", "", "ROUTE", "", "1"],
        ["", "", "", "", "", "", "", "", "", "NB"],
        ["", "", "EXAMPLE ST", "FIRST CROSS ST", "1", "", "", "", "", ""],
        ["", "", "EXAMPLE ST", "SECOND CROSS ST", "2", "", "", "", "", ""],
    ];

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| sink_unavailable(path, e.to_string()))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| sink_unavailable(path, e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| sink_unavailable(path, e.to_string()))?;
    Ok(())
}
