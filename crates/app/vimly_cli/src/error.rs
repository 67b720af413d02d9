use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Config::{}", .0)]
    Config(#[from] vimly_core::ConfigError),

    #[error("Submit::{}", .0)]
    Submit(#[from] vimly_core::SubmitError),

    #[error("Payload::{}", .0)]
    Payload(#[from] vimly_core::payload::PayloadError),
}
