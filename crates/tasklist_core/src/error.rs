use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    OutOfRange { index: i64, len: usize },
    Parse(String),
    Io(String),
    BlankInput(String),
    InvalidInput(String),
    InvalidData(String),
}

impl AppError {
    pub fn out_of_range(index: i64, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub fn parse<M: Into<String>>(message: M) -> Self {
        Self::Parse(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn blank_input<M: Into<String>>(message: M) -> Self {
        Self::BlankInput(message.into())
    }

    /// Command-line usage errors that never reach the task list.
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "out_of_range",
            Self::Parse(_) => "parse_error",
            Self::Io(_) => "io_error",
            Self::BlankInput(_) => "blank_input",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidData(_) => "invalid_data",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::OutOfRange { index, len: 0 } => {
                format!("invalid task number {index}: the list is empty")
            }
            Self::OutOfRange { index, len } => {
                format!("invalid task number {index}: select a number between 1 and {len}")
            }
            Self::Parse(message)
            | Self::Io(message)
            | Self::BlankInput(message)
            | Self::InvalidInput(message)
            | Self::InvalidData(message) => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}
