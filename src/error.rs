use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems that prevent a quiz from being loaded. Always fatal.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("could not open problem file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse problem file")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected 2 fields (question, answer) but found {found}")]
    FieldCount { line: u64, found: usize },
}

/// Input failures once the quiz is running. These end the session early but never crash it.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not read answer")]
    Io(#[from] io::Error),
    #[error("answer collector stopped without reporting")]
    CollectorLost,
}
