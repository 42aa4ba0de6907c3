pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod server_config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config.missing_variable.{0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_value.{name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
