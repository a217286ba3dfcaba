// src/error.rs

use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Io(std::io::Error),
    Msg(String),
    InternalStateLockFailed,
    StateLockPoisoned,

    // --------------------------------------------------
    // submission
    // --------------------------------------------------
    SubmissionInFlight,

    // --------------------------------------------------
    // csv file
    // --------------------------------------------------
    NoCsvFileLoaded,
    CsvPathNotFile,
    CsvReadFailed(String),
    CsvNotUtf8(String),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            // generic
            Io(_) => "File operation failed.",
            Msg(_) => "Operation failed.",
            InternalStateLockFailed | StateLockPoisoned => "Internal state lock failed.",

            // submission
            SubmissionInFlight => "A submission is already in progress.",

            // csv file
            NoCsvFileLoaded => "Please select a CSV file first.",
            CsvPathNotFile => "Path does not point to a file.",
            CsvReadFailed(_) => "Failed to read CSV file.",
            CsvNotUtf8(_) => "CSV file is not valid UTF-8 text.",
        };

        UserMsg { kind, short, detail }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Io(e) => write!(f, "io error: {e}"),
            Msg(s) => write!(f, "{s}"),
            InternalStateLockFailed => write!(f, "internal state lock failed"),
            StateLockPoisoned => write!(f, "state lock poisoned"),

            SubmissionInFlight => write!(f, "submission already in progress"),

            NoCsvFileLoaded => write!(f, "no csv file loaded"),
            CsvPathNotFile => write!(f, "path is not a file"),
            CsvReadFailed(s) => write!(f, "csv read failed: {s}"),
            CsvNotUtf8(s) => write!(f, "csv not utf-8: {s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
