use std::io::Error as IoError;
use thiserror::Error;
use toml::de::Error as TomlError;

#[derive(Error, Debug)]
pub enum IOEntry {
    #[error("Failed to read file {0}: {1}")]
    ReadFileError(String, IoError),
    #[error("Invalid font file {0}")]
    InvalidFontError(String),
    #[error("Failed to parse TOML: {0}")]
    TomlDeserializeError(TomlError),
}

impl From<IOEntry> for String {
    #[inline(always)]
    fn from(value: IOEntry) -> Self {
        value.to_string()
    }
}
