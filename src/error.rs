use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::PersonId;

pub type Result<T> = std::result::Result<T, DegreesError>;

#[derive(Debug, Error)]
pub enum DegreesError {
    #[error("unknown person id: {0}")]
    UnknownEntity(PersonId),
    #[error("remove called on an empty frontier")]
    EmptyFrontier,
    #[error("csv error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("prompt I/O error: {0}")]
    Prompt(#[from] io::Error),
}
