pub mod log_entry;
pub mod logging;
pub mod static_files;
