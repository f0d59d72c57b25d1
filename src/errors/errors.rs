use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceRead { .. } => "SourceRead",
            ErrorImpl::Io(_) => "Io",
            ErrorImpl::IllegalCharacters { .. } => "IllegalCharacters",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceRead { path, .. } => ErrorTip::Suggestion(format!(
                "Could not read `{}`, does the file exist and contain UTF-8 text?",
                path.display()
            )),
            ErrorImpl::Io(_) => ErrorTip::None,
            ErrorImpl::IllegalCharacters { count, first } => ErrorTip::Suggestion(format!(
                "Found {} illegal character(s), the first being `{}`",
                count, first
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.internal_error)
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::new(ErrorImpl::Io(error))
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("failed to read source file {path:?}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{count} illegal character(s) in source")]
    IllegalCharacters { count: usize, first: String },
}
