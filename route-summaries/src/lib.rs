pub mod app;
pub mod config;
pub mod event_log;
pub mod ingest;
pub mod model;
pub mod report;
