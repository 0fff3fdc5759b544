use std::fmt::{self, Display};

/// severity of one logged event, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    General,
    Warning,
    Error,
    Failure,
}

impl Severity {
    pub fn code(&self) -> &'static str {
        match self {
            Severity::General => "G",
            Severity::Warning => "W",
            Severity::Error => "E",
            Severity::Failure => "F",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::General => "General",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Failure => "Failure",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// message sink for one summary run. anomalies found during ingestion and
/// load propagation are absorbed here rather than raised to the caller;
/// entries are also forwarded to the `log` facade as they arrive, and the
/// whole collection can be dumped into the output workbook at the end of
/// the run.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::General => log::info!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Error | Severity::Failure => log::error!("{}", message),
        }
        self.entries.push(LogEntry { severity, message });
    }

    pub fn general(&mut self, message: impl Into<String>) {
        self.push(Severity::General, message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }

    pub fn failure(&mut self, message: impl Into<String>) {
        self.push(Severity::Failure, message.into());
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|e| e.severity == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_severity() {
        let mut log = EventLog::new();
        log.general("loaded");
        log.warning("odd but fine");
        log.error("dropped a row");
        log.error("dropped another");
        assert_eq!(log.count(Severity::General), 1);
        assert_eq!(log.warning_count(), 1);
        assert_eq!(log.error_count(), 2);
        assert_eq!(log.entries().len(), 4);
    }

    #[test]
    fn entry_display_includes_severity() {
        let entry = LogEntry {
            severity: Severity::Warning,
            message: String::from("check for bad data"),
        };
        assert_eq!(format!("{}", entry), "[Warning] check for bad data");
    }
}
