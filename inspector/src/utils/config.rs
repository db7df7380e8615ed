use crate::utils::logging::*;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use tokio::sync::RwLock;

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::new());
}

#[derive(Debug, Deserialize)]
struct ConfigTable {
    #[serde(rename = "Config")]
    config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub http_server_bind_port: u16, //port
    pub bind_retry_duration: u64, //seconds
    pub endpoint: String, //url
    pub endpoint_path: String, //path
    pub jpeg_quality: u8, //1-100
    pub font_path: String, //path
    pub font_size: f32, //pixels
    pub border_width: u32, //pixels
    pub text_color: [u8; 3], //RGB
    pub request_log_capacity: usize, //requests
}

impl Config {
    pub fn new() -> Self {
        //Seriously, the program must be terminated.
        let toml_string = match fs::read_to_string("./inspector.toml") {
            Ok(toml_string) => toml_string,
            Err(err) => {
                logging_console!(emergency_entry!(SystemEntry::ConfigNotFound, format!("Err: {err}")));
                panic!("{}", SystemEntry::ConfigNotFound);
            }
        };
        match Self::from_toml(&toml_string) {
            Ok(config) if Self::validate(&config) => config,
            Ok(_) => {
                logging_console!(emergency_entry!(SystemEntry::InvalidConfig));
                panic!("{}", SystemEntry::InvalidConfig);
            }
            Err(entry) => {
                logging_console!(emergency_entry!(SystemEntry::InvalidConfig, entry));
                panic!("{}", SystemEntry::InvalidConfig);
            }
        }
    }

    pub fn from_toml(toml_string: &str) -> Result<Self, IOEntry> {
        toml::from_str::<ConfigTable>(toml_string)
            .map(|config_table| config_table.config)
            .map_err(IOEntry::TomlDeserializeError)
    }

    pub async fn now() -> Config {
        CONFIG.read().await.clone()
    }

    pub async fn update(config: Config) {
        *CONFIG.write().await = config
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), self.endpoint_path)
    }

    pub fn validate(config: &Config) -> bool {
        Config::validate_port(config.http_server_bind_port)
            && Config::validate_second(config.bind_retry_duration)
            && Config::validate_endpoint(&config.endpoint)
            && Config::validate_endpoint_path(&config.endpoint_path)
            && Config::validate_jpeg_quality(config.jpeg_quality)
            && Config::validate_font_size(config.font_size)
            && Config::validate_border_width(config.border_width)
            && Config::validate_request_log_capacity(config.request_log_capacity)
    }

    fn validate_port(port: u16) -> bool {
        port > 0
    }

    fn validate_second(second: u64) -> bool {
        second <= 3600
    }

    fn validate_endpoint(endpoint: &str) -> bool {
        endpoint.starts_with("http://") || endpoint.starts_with("https://")
    }

    fn validate_endpoint_path(path: &str) -> bool {
        path.starts_with('/')
    }

    fn validate_jpeg_quality(quality: u8) -> bool {
        (1..=100).contains(&quality)
    }

    fn validate_font_size(size: f32) -> bool {
        size > 0_f32 && size <= 512_f32
    }

    fn validate_border_width(width: u32) -> bool {
        (1..=64).contains(&width)
    }

    fn validate_request_log_capacity(capacity: usize) -> bool {
        capacity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [Config]
        http_server_bind_port = 8080
        bind_retry_duration = 10
        endpoint = "https://detector.local/"
        endpoint_path = "/api/test"
        jpeg_quality = 95
        font_path = "./font.ttf"
        font_size = 22.0
        border_width = 3
        text_color = [255, 255, 255]
        request_log_capacity = 1024
    "#;

    #[test]
    fn parses_config_table() {
        let config = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(config.http_server_bind_port, 8080);
        assert_eq!(config.jpeg_quality, 95);
        assert_eq!(config.text_color, [255, 255, 255]);
        assert!(Config::validate(&config));
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let config = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(config.endpoint_url(), "https://detector.local/api/test");
    }

    #[test]
    fn missing_table_is_rejected() {
        assert!(matches!(Config::from_toml("port = 1"), Err(IOEntry::TomlDeserializeError(_))));
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        let config = Config::from_toml(SAMPLE).unwrap();
        assert!(!Config::validate(&Config { jpeg_quality: 0, ..config.clone() }));
        assert!(!Config::validate(&Config { jpeg_quality: 101, ..config.clone() }));
        assert!(!Config::validate(&Config { border_width: 0, ..config.clone() }));
        assert!(!Config::validate(&Config { border_width: 4_000_000_000, ..config.clone() }));
        assert!(!Config::validate(&Config { border_width: 65, ..config.clone() }));
        assert!(Config::validate(&Config { border_width: 64, ..config.clone() }));
        assert!(!Config::validate(&Config { font_size: 0.0, ..config.clone() }));
        assert!(!Config::validate(&Config { font_size: 1.0e6, ..config.clone() }));
        assert!(!Config::validate(&Config { request_log_capacity: 0, ..config.clone() }));
        assert!(!Config::validate(&Config { endpoint: "ftp://detector".to_string(), ..config.clone() }));
        assert!(!Config::validate(&Config { endpoint_path: "api/test".to_string(), ..config.clone() }));
        assert!(!Config::validate(&Config { bind_retry_duration: 3601, ..config }));
    }
}
