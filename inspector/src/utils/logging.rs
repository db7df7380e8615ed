pub use crate::{logging_console, logging_critical, logging_debug, logging_emergency, logging_entry, logging_error, logging_information, logging_warning};
pub use common::utils::log_entry::inspection::InspectionEntry;
pub use common::utils::log_entry::io::IOEntry;
pub use common::utils::log_entry::system::SystemEntry;
pub use common::utils::logging::*;

use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use std::collections::{HashMap, VecDeque};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

const DEFAULT_REQUEST_LOG_CAPACITY: usize = 1024;

lazy_static! {
    static ref LOGGER: RwLock<Logger> = RwLock::new(Logger::new());
}

pub struct Logger {
    system_log: Vec<LogEntry>,
    request_log: HashMap<Uuid, Vec<LogEntry>>,
    request_order: VecDeque<Uuid>,
    request_log_capacity: usize,
}

impl Logger {
    fn new() -> Self {
        let mut system_log = Vec::new();
        let log_entry = LogEntry::new(LogLevel::Information, "Logger", "Online now", "");
        system_log.push(log_entry);
        Self {
            system_log,
            request_log: HashMap::new(),
            request_order: VecDeque::new(),
            request_log_capacity: DEFAULT_REQUEST_LOG_CAPACITY,
        }
    }

    pub async fn instance() -> RwLockReadGuard<'static, Logger> {
        LOGGER.read().await
    }

    pub async fn instance_mut() -> RwLockWriteGuard<'static, Logger> {
        LOGGER.write().await
    }

    pub async fn add_system_log<T: Into<String>, U: Into<String>, V: Into<String>>(level: LogLevel, position: T, message: U, debug_info: V) {
        let log_entry = LogEntry::new(level, position, message, debug_info);
        Self::add_system_log_entry(log_entry).await;
    }

    pub async fn add_request_log<T: Into<String>, U: Into<String>, V: Into<String>>(request_id: Uuid, level: LogLevel, position: T, message: U, debug_info: V) {
        let log_entry = LogEntry::new(level, position, message, debug_info);
        Self::add_request_log_entry(request_id, log_entry).await;
    }

    pub async fn add_system_log_entry(log_entry: LogEntry) {
        Self::logging_console(log_entry.clone());
        let mut logger = Self::instance_mut().await;
        logger.system_log.push(log_entry);
    }

    pub async fn add_request_log_entry(request_id: Uuid, log_entry: LogEntry) {
        Self::logging_console(log_entry.clone());
        let mut logger = Self::instance_mut().await;
        logger.push_request_log(request_id, log_entry);
    }

    /// Only the most recent requests keep their logs; older ones are dropped first.
    pub async fn set_request_log_capacity(capacity: usize) {
        let mut logger = Self::instance_mut().await;
        logger.request_log_capacity = capacity.max(1);
        logger.evict_request_logs();
    }

    fn push_request_log(&mut self, request_id: Uuid, log_entry: LogEntry) {
        match self.request_log.get_mut(&request_id) {
            Some(logs) => logs.push(log_entry),
            None => {
                self.request_log.insert(request_id, vec![log_entry]);
                self.request_order.push_back(request_id);
                self.evict_request_logs();
            }
        }
    }

    fn evict_request_logs(&mut self) {
        while self.request_order.len() > self.request_log_capacity {
            if let Some(oldest) = self.request_order.pop_front() {
                self.request_log.remove(&oldest);
            }
        }
    }

    pub fn logging_console(log_entry: LogEntry) {
        println!("{}", log_entry.to_colored_string());
    }

    pub async fn get_system_logs() -> Vec<LogEntry> {
        Self::instance().await.system_log.clone()
    }

    pub async fn get_request_logs(request_id: Uuid) -> Option<Vec<LogEntry>> {
        let logger = Self::instance().await;
        logger.request_log.get(&request_id).cloned()
    }

    pub async fn get_system_logs_since(time: DateTime<Local>) -> Vec<LogEntry> {
        let logger = Self::instance().await;
        Self::since(&logger.system_log, time)
    }

    pub async fn get_request_logs_since(request_id: Uuid, time: DateTime<Local>) -> Option<Vec<LogEntry>> {
        let logger = Self::instance().await;
        let logs = logger.request_log.get(&request_id)?;
        Some(Self::since(logs, time))
    }

    pub fn format_logs(logs: &[LogEntry]) -> String {
        logs.iter().map(LogEntry::to_string).collect::<Vec<_>>().join("\n")
    }

    fn since(logs: &[LogEntry], time: DateTime<Local>) -> Vec<LogEntry> {
        let index = logs.binary_search_by(|entry| entry.timestamp.cmp(&time)).unwrap_or_else(|x| x);
        logs[index..].to_vec()
    }
}

#[macro_export]
macro_rules! logging_debug {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Debug, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Debug, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
    ($uuid:expr, $message:expr, $debug_info:expr) => {
        Logger::add_request_log($uuid, LogLevel::Debug, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_information {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Information, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Information, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
    ($uuid:expr, $message:expr, $debug_info:expr) => {
        Logger::add_request_log($uuid, LogLevel::Information, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_warning {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
    ($uuid:expr, $message:expr, $debug_info:expr) => {
        Logger::add_request_log($uuid, LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_error {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Error, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Error, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
    ($uuid:expr, $message:expr, $debug_info:expr) => {
        Logger::add_request_log($uuid, LogLevel::Error, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_critical {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Critical, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Critical, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_emergency {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Emergency, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Emergency, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_entry {
    ($entry:expr) => {
        Logger::add_system_log_entry($entry).await
    };
    ($uuid:expr, $entry:expr) => {
        Logger::add_request_log_entry($uuid, $entry).await
    };
}

#[macro_export]
macro_rules! logging_console {
    ($entry:expr) => {
        Logger::logging_console($entry)
    };
}
