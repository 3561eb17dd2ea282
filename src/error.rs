use std::{io, num::ParseIntError, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal conditions of a benchmark run. Searching and sorting themselves cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no input file given; pass INPUT or --generate")]
    NoInput,
    #[error("cannot open input file {path:?}: {source}")]
    InputUnavailable { path: PathBuf, source: io::Error },
    #[error("input is empty, expected a header line `<data size> <query size>`")]
    MissingHeader,
    #[error("line {line}: malformed header, expected `<data size> <query size>`")]
    MalformedHeader { line: usize },
    #[error("line {line}: input ended before all values were read")]
    MissingValue { line: usize },
    #[error("line {line}: invalid integer {value:?}: {source}")]
    InvalidValue {
        line: usize,
        value: String,
        source: ParseIntError,
    },
    #[error("cannot create output file {path:?}: {source}")]
    SinkUnavailable { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}
