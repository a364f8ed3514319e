use std::path::PathBuf;
use thiserror::Error;

pub type LoggerResult<T> = std::result::Result<T, LoggerError>;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("failed to open log file '{}': {source}", path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
