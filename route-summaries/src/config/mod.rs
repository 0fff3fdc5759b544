mod summary;

pub use summary::SummaryConfiguration;
