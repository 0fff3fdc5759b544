mod operation;
mod run_status;
mod summary_app;
mod summary_error;
pub mod summary_ops;
pub mod template_ops;

pub use operation::SummaryOperation;
pub use run_status::RunStatus;
pub use summary_app::SummaryApp;
pub use summary_error::SummaryError;
