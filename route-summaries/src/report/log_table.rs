use crate::event_log::EventLog;
use crate::report::{ReportSink, ReportTable};

/// dumps the run's event log into the output so anomalies travel with the
/// reports they affected.
pub fn build_log_table(log: &EventLog, sink: &mut dyn ReportSink) {
    const TABLE: ReportTable = ReportTable::Log;

    sink.set_text(TABLE, 1, 1, "Severity");
    sink.set_text(TABLE, 1, 2, "Message");

    for (i, entry) in log.entries().iter().enumerate() {
        sink.set_text(TABLE, 2 + i, 1, &entry.severity.to_string());
        sink.set_text(TABLE, 2 + i, 2, &entry.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::CellValue;
    use crate::report::CsvReportSink;

    #[test]
    fn entries_emit_in_arrival_order() {
        let mut log = EventLog::new();
        log.general("Parsing ride checks workbook");
        log.error("Row 4: observation was not recorded.");

        let mut sink = CsvReportSink::new("unused");
        build_log_table(&log, &mut sink);

        assert_eq!(
            sink.cell(ReportTable::Log, 2, 1),
            Some(&CellValue::Text(String::from("General")))
        );
        assert_eq!(
            sink.cell(ReportTable::Log, 3, 1),
            Some(&CellValue::Text(String::from("Error")))
        );
        assert_eq!(
            sink.cell(ReportTable::Log, 3, 2),
            Some(&CellValue::Text(String::from(
                "Row 4: observation was not recorded."
            )))
        );
    }
}
