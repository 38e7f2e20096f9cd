use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DpendError {
    #[error("step count must be at least 2, got {0}")]
    InvalidStepCount(usize),
    #[error("no parameter record found in {0:?}")]
    MissingParameters(PathBuf),
    #[error("extended output is only available in csv format")]
    ExtendedTextOutput,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
