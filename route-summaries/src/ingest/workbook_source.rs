use std::collections::HashSet;
use std::path::Path;

use crate::ingest::{CellValue, IngestError};

/// read side of the tabular-source collaborator: typed cells addressed by
/// 1-based (row, column), plus the styling flag the topology scan uses for
/// timed-stop detection. reads outside the populated area are [`CellValue::Empty`].
pub trait WorkbookSource {
    fn cell(&self, row: usize, col: usize) -> CellValue;
    fn row_count(&self) -> usize;
    fn is_highlighted(&self, row: usize, col: usize) -> bool;
}

/// CSV-backed workbook source. cell types are inferred from the text
/// (integer, ISO date, HH:MM[:SS] time, otherwise text); a trailing `*`
/// marks a cell as highlighted, standing in for spreadsheet fill styling,
/// and is stripped from the value.
#[derive(Debug)]
pub struct CsvWorkbookSource {
    rows: Vec<Vec<String>>,
}

impl CsvWorkbookSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IngestError> {
        let path_display = path.as_ref().display().to_string();
        let unavailable = |message: String| IngestError::SourceUnavailable {
            path: path_display.clone(),
            message,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path.as_ref())
            .map_err(|e| unavailable(e.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| unavailable(e.to_string()))?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }
        Ok(Self { rows })
    }

    fn raw(&self, row: usize, col: usize) -> Option<&str> {
        if row == 0 || col == 0 {
            return None;
        }
        self.rows.get(row - 1)?.get(col - 1).map(|s| s.as_str())
    }
}

impl WorkbookSource for CsvWorkbookSource {
    fn cell(&self, row: usize, col: usize) -> CellValue {
        match self.raw(row, col) {
            Some(raw) => {
                let trimmed = raw.trim();
                let value = trimmed.strip_suffix('*').unwrap_or(trimmed);
                CellValue::infer(value)
            }
            None => CellValue::Empty,
        }
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.raw(row, col)
            .map(|raw| raw.trim().ends_with('*'))
            .unwrap_or(false)
    }
}

/// in-process workbook source, used by tests and template round-trips.
#[derive(Debug, Default)]
pub struct MemoryWorkbookSource {
    rows: Vec<Vec<CellValue>>,
    highlights: HashSet<(usize, usize)>,
}

impl MemoryWorkbookSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            rows,
            highlights: HashSet::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn highlight(&mut self, row: usize, col: usize) {
        self.highlights.insert((row, col));
    }
}

impl WorkbookSource for MemoryWorkbookSource {
    fn cell(&self, row: usize, col: usize) -> CellValue {
        if row == 0 || col == 0 {
            return CellValue::Empty;
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.highlights.contains(&(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    #[test]
    fn csv_source_infers_cell_types() {
        let mut path = std::env::temp_dir();
        path.push("route_summaries_source_test.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "1,2024-01-01,5,NB,12,08:00").unwrap();
        writeln!(file, "2,,,,,").unwrap();
        drop(file);

        let source = CsvWorkbookSource::open(&path).unwrap();
        assert_eq!(source.row_count(), 2);
        assert_eq!(source.cell(1, 1), CellValue::Integer(1));
        assert_eq!(
            source.cell(1, 2),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(source.cell(1, 4), CellValue::Text(String::from("NB")));
        assert_eq!(source.cell(2, 2), CellValue::Empty);
        assert_eq!(source.cell(3, 1), CellValue::Empty);
        assert_eq!(source.cell(1, 99), CellValue::Empty);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn csv_source_reads_highlight_markers() {
        let mut path = std::env::temp_dir();
        path.push("route_summaries_highlight_test.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Main St*,1st Ave,100").unwrap();
        drop(file);

        let source = CsvWorkbookSource::open(&path).unwrap();
        assert!(source.is_highlighted(1, 1));
        assert!(!source.is_highlighted(1, 2));
        assert_eq!(source.cell(1, 1), CellValue::Text(String::from("Main St")));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_surfaces_as_source_unavailable() {
        let result = CsvWorkbookSource::open("/nonexistent/nowhere.csv");
        assert!(matches!(
            result,
            Err(IngestError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn memory_source_round_trips() {
        let mut source = MemoryWorkbookSource::from_rows(vec![vec![
            CellValue::from(1),
            CellValue::from("ROUTE"),
        ]]);
        source.highlight(1, 2);
        assert_eq!(source.cell(1, 1), CellValue::Integer(1));
        assert!(source.is_highlighted(1, 2));
        assert!(!source.is_highlighted(2, 2));
        assert_eq!(source.cell(9, 9), CellValue::Empty);
    }
}
