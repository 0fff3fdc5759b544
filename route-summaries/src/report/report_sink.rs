use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::ingest::CellValue;

/// the named output regions of one summary run: the five report tables plus
/// the notes area and the run log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportTable {
    RouteTotals,
    MaxLoad,
    TotalsByStop,
    OnTimeDetail,
    DetailReport,
    Notes,
    Log,
}

impl ReportTable {
    pub const ALL: [ReportTable; 7] = [
        ReportTable::RouteTotals,
        ReportTable::MaxLoad,
        ReportTable::TotalsByStop,
        ReportTable::OnTimeDetail,
        ReportTable::DetailReport,
        ReportTable::Notes,
        ReportTable::Log,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportTable::RouteTotals => "Rte Totals",
            ReportTable::MaxLoad => "Max Load",
            ReportTable::TotalsByStop => "Ons Offs Tot & Ld",
            ReportTable::OnTimeDetail => "On Time Detail",
            ReportTable::DetailReport => "Detail Report",
            ReportTable::Notes => "Notes",
            ReportTable::Log => "Log",
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportTable::RouteTotals => "rte_totals",
            ReportTable::MaxLoad => "max_load",
            ReportTable::TotalsByStop => "ons_offs_total_load",
            ReportTable::OnTimeDetail => "on_time_detail",
            ReportTable::DetailReport => "detail_report",
            ReportTable::Notes => "notes",
            ReportTable::Log => "log",
        }
    }
}

/// presentation hint attached to a cell. hints are advisory: a sink that has
/// no styling concept may drop them without changing any data value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Highlight,
}

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("could not save report output to '{path}': {message}")]
    SinkUnavailable { path: String, message: String },
}

/// write side of the tabular-sink collaborator: cell writes addressed by
/// 1-based (row, column) within a named table, persisted on `save`.
pub trait ReportSink {
    fn set_cell(&mut self, table: ReportTable, row: usize, col: usize, value: CellValue);
    fn set_style(&mut self, table: ReportTable, row: usize, col: usize, style: CellStyle);
    fn save(&mut self) -> Result<(), ReportError>;

    fn set_text(&mut self, table: ReportTable, row: usize, col: usize, text: &str) {
        self.set_cell(table, row, col, CellValue::Text(text.to_string()));
    }

    fn set_integer(&mut self, table: ReportTable, row: usize, col: usize, value: i64) {
        self.set_cell(table, row, col, CellValue::Integer(value));
    }
}

#[derive(Debug, Default)]
struct TableBuffer {
    cells: BTreeMap<(usize, usize), CellValue>,
    styles: BTreeMap<(usize, usize), CellStyle>,
}

/// CSV-backed report sink. cells are buffered per table and persisted on
/// `save` as one CSV file per table under the output directory. style hints
/// are accepted but have no CSV representation.
#[derive(Debug)]
pub struct CsvReportSink {
    output_dir: PathBuf,
    tables: BTreeMap<ReportTable, TableBuffer>,
}

impl CsvReportSink {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            tables: BTreeMap::new(),
        }
    }

    /// buffered value at (row, col), readable before and after `save`.
    pub fn cell(&self, table: ReportTable, row: usize, col: usize) -> Option<&CellValue> {
        self.tables.get(&table)?.cells.get(&(row, col))
    }

    pub fn style(&self, table: ReportTable, row: usize, col: usize) -> Option<CellStyle> {
        self.tables.get(&table)?.styles.get(&(row, col)).copied()
    }

    fn write_table(&self, table: ReportTable) -> Result<(), ReportError> {
        let path = self.output_dir.join(format!("{}.csv", table.file_stem()));
        let unavailable = |message: String| ReportError::SinkUnavailable {
            path: path.display().to_string(),
            message,
        };

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(|e| unavailable(e.to_string()))?;

        if let Some(buffer) = self.tables.get(&table) {
            let max_row = buffer.cells.keys().map(|(r, _)| *r).max().unwrap_or(0);
            for row in 1..=max_row {
                let max_col = buffer
                    .cells
                    .range((row, 0)..(row + 1, 0))
                    .map(|((_, c), _)| *c)
                    .max()
                    .unwrap_or(1);
                let record: Vec<String> = (1..=max_col)
                    .map(|col| {
                        buffer
                            .cells
                            .get(&(row, col))
                            .map(|v| v.to_string())
                            .unwrap_or_default()
                    })
                    .collect();
                writer
                    .write_record(&record)
                    .map_err(|e| unavailable(e.to_string()))?;
            }
        }

        writer.flush().map_err(|e| unavailable(e.to_string()))
    }
}

impl ReportSink for CsvReportSink {
    fn set_cell(&mut self, table: ReportTable, row: usize, col: usize, value: CellValue) {
        self.tables
            .entry(table)
            .or_default()
            .cells
            .insert((row, col), value);
    }

    fn set_style(&mut self, table: ReportTable, row: usize, col: usize, style: CellStyle) {
        self.tables
            .entry(table)
            .or_default()
            .styles
            .insert((row, col), style);
    }

    fn save(&mut self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| ReportError::SinkUnavailable {
            path: self.output_dir.display().to_string(),
            message: e.to_string(),
        })?;
        for table in ReportTable::ALL {
            self.write_table(table)?;
        }
        Ok(())
    }
}
