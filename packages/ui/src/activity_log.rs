use chrono::Local;
use identity::ErrorReporter;
use tracing::error;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Messages shown to the user in the activity panel. Errors reported by the
/// identity cache and the review sync land here.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn log(&mut self, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(|e| e.level == LogLevel::Error)
    }
}

impl ErrorReporter for ActivityLog {
    fn report_error(&mut self, message: &str) {
        error!("{message}");
        self.log(LogLevel::Error, message);
        // Errors pop the panel open.
        self.visible = true;
    }
}

fn current_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
