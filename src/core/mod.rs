//! Process-wide configuration

pub mod config;

pub use config::AwsSettings;
