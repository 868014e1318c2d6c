use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read HAR file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a valid HAR document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No entry at index {0} in the session")]
    EntryNotFound(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
