pub mod cell_value;
mod ingest_error;
pub mod ride_check_ops;
pub mod ride_check_row;
mod timed_stop_policy;
pub mod topology_ops;
pub mod workbook_source;

pub use cell_value::CellValue;
pub use ingest_error::IngestError;
pub use ride_check_row::RideCheckRow;
pub use timed_stop_policy::TimedStopPolicy;
pub use workbook_source::{CsvWorkbookSource, MemoryWorkbookSource, WorkbookSource};
